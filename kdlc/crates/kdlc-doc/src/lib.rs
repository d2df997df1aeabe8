//! kdlc-doc - The KDL document model and canonical serializer.
//!
//! This crate holds the tree the parser produces and everything clients do
//! with it afterwards:
//!
//! - [`Value`] - tagged scalar union (string, integer, float, bool, null)
//! - [`Node`] - named record with positional arguments, keyed properties,
//!   per-value annotations, and a children [`Document`]
//! - [`Document`] - ordered list of nodes with navigation by name
//! - [`NodeCollection`] - ephemeral query results supporting further
//!   navigation, including one-step deep (recursive) selection
//! - [`TypeMap`] - annotation-keyed value/node transforms shared by the
//!   parser and the serializer
//!
//! The canonical serializer re-emits a document as KDL text that parses
//! back to an equal tree: arguments in source order, properties sorted by
//! key, children indented by four spaces, identifiers bare whenever legal.
//!
//! # Example
//!
//! ```
//! use kdlc_doc::{Document, Node, Value};
//!
//! let mut server = Node::new("server");
//! server.push_argument(Value::String("web".into()));
//! server.set_property("port", Value::Int(8080));
//! let mut doc = Document::new();
//! doc.push(server);
//!
//! assert_eq!(doc.stringify(0), "server web port=8080\n");
//! assert_eq!(doc["server"].property("port"), Some(&Value::Int(8080)));
//! ```

mod collection;
mod document;
mod error;
mod node;
mod type_map;
mod value;

pub use collection::NodeCollection;
pub use document::Document;
pub use error::AccessError;
pub use node::Node;
pub use type_map::{NodeTransform, TypeMap, ValueTransform};
pub use value::{identifier_to_string, value_to_string, Value};
