//! # Element Relation Engine
//!
//! Classifies the relation between two Wu Xing elements using the fixed
//! generating and overcoming cycles on [`Element`]. Pure function of its
//! two inputs — no randomness, no external state.
//!
//! Direction matters: `relate(a, b)` asks what *a* does to *b*, so
//! `relate(a, b)` and `relate(b, a)` generally differ. Callers that need a
//! symmetric view compute both.

use serde::Serialize;

use crate::model::Element;

/// Categorical relation between two elements, from the first to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// `a` produces `b` in the generating cycle.
    Generates,
    /// `a` suppresses `b` in the overcoming cycle.
    Overcomes,
    /// Identical elements.
    Same,
    /// Neither cycle connects `a` to `b` in this direction.
    Unrelated,
}

/// Classify what element `a` does to element `b`.
///
/// Decision ladder: identity, then the generating cycle, then the
/// overcoming cycle, else unrelated. `Unrelated` covers the reversed
/// directions (`b` generating or overcoming `a`).
pub const fn relate(a: Element, b: Element) -> Relation {
    if a as u8 == b as u8 {
        Relation::Same
    } else if a.generates() as u8 == b as u8 {
        Relation::Generates
    } else if a.overcomes() as u8 == b as u8 {
        Relation::Overcomes
    } else {
        Relation::Unrelated
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Relation::Generates => "generates",
            Relation::Overcomes => "overcomes",
            Relation::Same => "same",
            Relation::Unrelated => "unrelated",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element::{Earth, Fire, Metal, Water, Wood};

    #[test]
    fn test_generating_neighbors() {
        assert_eq!(relate(Wood, Fire), Relation::Generates);
        assert_eq!(relate(Metal, Water), Relation::Generates);
        // The reverse direction is not a relation of its own.
        assert_eq!(relate(Fire, Wood), Relation::Unrelated);
    }

    #[test]
    fn test_overcoming_neighbors() {
        assert_eq!(relate(Wood, Earth), Relation::Overcomes);
        assert_eq!(relate(Water, Fire), Relation::Overcomes);
        assert_eq!(relate(Earth, Wood), Relation::Unrelated);
    }

    #[test]
    fn test_same() {
        for e in crate::model::Element::ALL {
            assert_eq!(relate(e, e), Relation::Same);
        }
    }

    #[test]
    fn test_antisymmetry_of_active_relations() {
        // If a generates or overcomes b, the reverse pair never does.
        for a in crate::model::Element::ALL {
            for b in crate::model::Element::ALL {
                if a == b {
                    continue;
                }
                let forward = relate(a, b);
                let backward = relate(b, a);
                if forward == Relation::Generates {
                    assert_ne!(backward, Relation::Generates);
                }
                if forward == Relation::Overcomes {
                    assert_ne!(backward, Relation::Overcomes);
                }
            }
        }
    }

    #[test]
    fn test_every_ordered_pair_is_classified() {
        // Totality: each distinct ordered pair lands in exactly one of the
        // three non-Same buckets, and each element sees two of each among
        // the other four.
        for a in crate::model::Element::ALL {
            let mut generates = 0;
            let mut overcomes = 0;
            let mut unrelated = 0;
            for b in crate::model::Element::ALL {
                if a == b {
                    continue;
                }
                match relate(a, b) {
                    Relation::Generates => generates += 1,
                    Relation::Overcomes => overcomes += 1,
                    Relation::Unrelated => unrelated += 1,
                    Relation::Same => panic!("distinct elements classified Same"),
                }
            }
            assert_eq!((generates, overcomes, unrelated), (1, 1, 2));
        }
    }
}
