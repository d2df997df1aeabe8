//! kdlc-util - Shared infrastructure for the KDL pipeline.
//!
//! This crate holds the pieces every other crate in the workspace needs:
//!
//! - [`Span`] - source location tracking (byte range + line/column)
//! - [`SyntaxError`] / [`SyntaxResult`] - the single error category of the
//!   pipeline; the first error aborts lexing or parsing
//! - fast hash map re-exports used by the parser's registration maps
//!
//! Positions are reported the way they are observed in source: lines are
//! 1-based, columns are 0-based character offsets from the line start.

mod error;
mod span;

pub use error::{SyntaxError, SyntaxResult};
pub use span::Span;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
