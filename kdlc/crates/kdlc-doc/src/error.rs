//! Navigation error type for the document model.

use thiserror::Error;

/// Error returned by the fallible navigation accessors.
///
/// The panicking `Index` sugar exists alongside these for callers that
/// have already established presence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No child node with the requested name exists.
    #[error("No such node: {0}")]
    NoSuchNode(String),

    /// A node in a collection is missing the requested argument index.
    #[error("Node '{node}' has no argument at index {index}")]
    NoSuchArgument {
        /// Name of the offending node.
        node: String,
        /// Requested argument index.
        index: usize,
    },

    /// A node in a collection is missing the requested property.
    #[error("Node '{node}' has no property '{key}'")]
    NoSuchProperty {
        /// Name of the offending node.
        node: String,
        /// Requested property key.
        key: String,
    },
}
