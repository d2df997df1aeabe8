//! Annotation-driven value and node transforms.
//!
//! A [`TypeMap`] is an explicit registration object: the client registers
//! `annotation → transform` entries and passes the map to `parse` (to
//! convert annotated values while building the document) or to `stringify`
//! (to convert them back to primitives before emission). The annotation
//! itself is always preserved on the stored value so documents keep
//! round-tripping.

use kdlc_util::FxHashMap;

use crate::node::Node;
use crate::value::Value;

/// Transform applied to an annotated argument or property value.
pub type ValueTransform = Box<dyn Fn(Value) -> Value>;

/// Transform applied to a whole node carrying a node-level annotation.
pub type NodeTransform = Box<dyn Fn(Node) -> Node>;

/// Registered transforms keyed by annotation identifier.
///
/// # Example
///
/// ```
/// use kdlc_doc::{TypeMap, Value};
///
/// let map = TypeMap::new().value("negated", |v| match v {
///     Value::Int(n) => Value::Int(-n),
///     other => other,
/// });
/// assert_eq!(
///     map.apply_value(Some("negated"), Value::Int(7)),
///     Value::Int(-7)
/// );
/// assert_eq!(map.apply_value(None, Value::Int(7)), Value::Int(7));
/// ```
#[derive(Default)]
pub struct TypeMap {
    values: FxHashMap<String, ValueTransform>,
    nodes: FxHashMap<String, NodeTransform>,
}

impl TypeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value transform for an annotation.
    pub fn value(
        mut self,
        annotation: impl Into<String>,
        transform: impl Fn(Value) -> Value + 'static,
    ) -> Self {
        self.values.insert(annotation.into(), Box::new(transform));
        self
    }

    /// Registers a node transform for a node-level annotation.
    pub fn node(
        mut self,
        annotation: impl Into<String>,
        transform: impl Fn(Node) -> Node + 'static,
    ) -> Self {
        self.nodes.insert(annotation.into(), Box::new(transform));
        self
    }

    /// Returns true if no transforms are registered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.nodes.is_empty()
    }

    /// Applies the registered value transform for `annotation`, if any.
    pub fn apply_value(&self, annotation: Option<&str>, value: Value) -> Value {
        if let Some(ann) = annotation {
            if let Some(transform) = self.values.get(ann) {
                return transform(value);
            }
        }
        value
    }

    /// Applies the registered node transform for `annotation`, if any.
    pub fn apply_node(&self, annotation: &str, node: Node) -> Node {
        if let Some(transform) = self.nodes.get(annotation) {
            return transform(node);
        }
        node
    }
}

impl std::fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut value_keys: Vec<_> = self.values.keys().collect();
        value_keys.sort();
        let mut node_keys: Vec<_> = self.nodes.keys().collect();
        node_keys.sort();
        f.debug_struct("TypeMap")
            .field("values", &value_keys)
            .field("nodes", &node_keys)
            .finish()
    }
}
