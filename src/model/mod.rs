//! # Divination Model
//!
//! Clean DTOs for the divination core. These types cross every boundary:
//! codec ↔ resolver ↔ relation engine ↔ caller.
//!
//! Design rule: NO I/O, NO state, NO async here. This module is pure data;
//! every value is constructed fresh per evaluation and never mutated
//! afterwards. Equality is structural — there is no object identity.

pub mod element;
pub mod hexagram;
pub mod line;
pub mod polarity;
pub mod reading;
pub mod trigram;

pub use element::Element;
pub use hexagram::Hexagram;
pub use line::Line;
pub use polarity::Polarity;
pub use reading::SixLineReading;
pub use trigram::Trigram;
