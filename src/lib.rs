//! # yijing-rs — Deterministic I Ching Core
//!
//! The rule-only heart of a divination service: six-line readings in,
//! King Wen hexagram identities and Wu Xing relation labels out. No
//! interpretation, no prose, no model calls — those belong to the host
//! application.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: every operation depends only on its inputs and
//!    fixed constant tables
//! 2. **Clean DTOs**: `Line`, `SixLineReading`, `Trigram`, `Hexagram`
//!    cross all boundaries
//! 3. **Parse, don't validate**: a `SixLineReading` that exists is well
//!    formed; everything downstream of its constructor is total
//! 4. **Tables are the contract**: the King Wen ordering is a historical
//!    artifact with no formula — the 64-entry grid is reproduced verbatim
//!    and locked by property tests
//!
//! ## Quick Start
//!
//! ```rust
//! use yijing_rs::{Line, Polarity, SixLineReading, resolve};
//!
//! # fn example() -> yijing_rs::Result<()> {
//! // Three Yang lines below three Yin lines, second line moving.
//! let reading = SixLineReading::from_lines([
//!     Line::new(1, Polarity::Yang),
//!     Line::new(2, Polarity::Yang).moving(),
//!     Line::new(3, Polarity::Yang),
//!     Line::new(4, Polarity::Yin),
//!     Line::new(5, Polarity::Yin),
//!     Line::new(6, Polarity::Yin),
//! ])?;
//!
//! let resolution = resolve(&reading);
//! assert_eq!(resolution.original.king_wen, 11); // 地天泰
//! assert_eq!(resolution.moving_positions.as_slice(), &[2]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous, stateless, and `Send + Sync`; arbitrarily
//! many resolutions may run in parallel with no coordination.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod codec;
pub mod kingwen;
pub mod resolver;
pub mod wuxing;
pub mod roles;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Element, Hexagram, Line, Polarity, SixLineReading, Trigram};

// ============================================================================
// Re-exports: Resolution
// ============================================================================

pub use resolver::{Resolution, resolve, resolve_lines};

// ============================================================================
// Re-exports: Element relations
// ============================================================================

pub use roles::{RoleRelations, compose};
pub use wuxing::{Relation, relate};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reading is not exactly six lines covering positions 1..=6.
    /// Each list names the offending positions; at least one is non-empty.
    #[error(
        "Malformed reading: missing positions {missing:?}, duplicated {duplicated:?}, out of range {out_of_range:?}"
    )]
    MalformedReading {
        missing: Vec<u8>,
        duplicated: Vec<u8>,
        out_of_range: Vec<u8>,
    },

    /// A polarity marker other than 阳/阴 (or yang/yin) reached the boundary.
    #[error("Invalid polarity marker: {marker:?}")]
    InvalidPolarity { marker: String },
}

pub type Result<T> = std::result::Result<T, Error>;
