//! The five Wu Xing elements and their two fixed cycles.

use serde::{Deserialize, Serialize};

/// One of the five Wu Xing elements.
///
/// Two fixed cycles connect them:
///
/// | Cycle      | Order                                    |
/// |------------|------------------------------------------|
/// | generating | Wood → Fire → Earth → Metal → Water → Wood |
/// | overcoming | Wood → Earth → Water → Fire → Metal → Wood |
///
/// Both are exposed as `const fn` successors; [`crate::wuxing::relate`]
/// consumes them to classify the relation between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// The element this one produces in the generating cycle.
    pub const fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one suppresses in the overcoming cycle.
    pub const fn overcomes(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// Traditional Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// All five elements, in generating-cycle order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
