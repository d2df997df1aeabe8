//! kdlc-drv - Driver and public facade for the KDL pipeline.
//!
//! This crate wires the phases together (source text → lexer → parser →
//! document → canonical text) and re-exports the public surface so that
//! depending on `kdlc-drv` alone is enough for most clients:
//!
//! ```
//! use kdlc_drv::{parse, Value};
//!
//! let doc = parse("host localhost port=5432").unwrap();
//! assert_eq!(doc["host"].property("port"), Some(&Value::Int(5432)));
//! ```
//!
//! The `kdlc` binary in this crate reads a KDL file, parses it, and prints
//! the canonical form; see [`round_trip_file`].

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

pub use kdlc_doc::{
    AccessError, Document, Node, NodeCollection, NodeTransform, TypeMap, Value, ValueTransform,
};
pub use kdlc_lex::{tokenize, tokenize_with, LexerConfig};
pub use kdlc_par::{parse, parse_with, NodeConstructor, NodeMap, ParseOptions, Parser};
pub use kdlc_util::{Span, SyntaxError, SyntaxResult};

/// Reads a KDL file and returns its canonical text.
///
/// The output re-parses to a document equal to the one parsed from the
/// file. An empty document renders as a single blank line so the printed
/// output is never empty.
///
/// # Errors
///
/// Fails if the file cannot be read as UTF-8 or contains a syntax error;
/// the syntax error carries the 1-based line and 0-based column.
pub fn round_trip_file(path: &Path) -> anyhow::Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(bytes = source.len(), path = %path.display(), "read source file");

    let document = parse(&source)?;
    debug!(nodes = document.len(), "parsed document");

    let mut output = document.stringify(0);
    if document.is_empty() {
        output.push('\n');
    }
    Ok(output)
}
