//! # Role Relation Composer
//!
//! Applies the element relation engine across an ordered trigram triple
//! (primary, auxiliary, base) and hands back two categorical labels. The
//! prose a host application builds from the labels is its own business —
//! nothing here weights, ranks, or interprets.

use serde::Serialize;

use crate::model::Trigram;
use crate::wuxing::{Relation, relate};

/// The two relation labels for a (primary, auxiliary, base) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoleRelations {
    /// What the auxiliary role's element does to the primary role's:
    /// does it feed or clash with it.
    pub primary_auxiliary: Relation,
    /// What the base role's element does to the primary role's: does the
    /// foundation support or undermine it.
    pub base_primary: Relation,
}

/// Compose the two role relations for an ordered trigram triple.
///
/// Both labels point *toward* the primary role:
/// `primary_auxiliary = relate(auxiliary.element, primary.element)` and
/// `base_primary = relate(base.element, primary.element)`. The three
/// trigrams need not come from one hexagram.
pub const fn compose(primary: Trigram, auxiliary: Trigram, base: Trigram) -> RoleRelations {
    RoleRelations {
        primary_auxiliary: relate(auxiliary.element, primary.element),
        base_primary: relate(base.element, primary.element),
    }
}
