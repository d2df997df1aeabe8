//! KDL nodes.

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::AccessError;
use crate::type_map::TypeMap;
use crate::value::{identifier_to_string, value_to_string, Value};
use crate::NodeCollection;

/// A KDL node.
///
/// A node has a name, an optional type annotation, an ordered list of
/// positional arguments, keyed properties, and a children [`Document`]
/// (possibly empty). Annotations on arguments and properties are stored
/// alongside the values, index- and key-aligned respectively.
///
/// Properties keep their encounter order in memory but are always emitted
/// sorted by key.
///
/// # Example
///
/// ```
/// use kdlc_doc::{Node, Value};
///
/// let mut node = Node::new("server");
/// node.push_argument(Value::String("web".into()));
/// node.set_property("port", Value::Int(8080));
/// assert_eq!(node.stringify(0), "server web port=8080");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    /// Node name (an identifier, bare or quoted-string encoded).
    pub name: String,

    /// Optional node-level type annotation.
    pub annotation: Option<String>,

    /// Positional arguments in source order.
    pub arguments: Vec<Value>,

    /// Per-argument annotations, index-aligned with `arguments`.
    pub argument_annotations: Vec<Option<String>>,

    /// Properties in encounter order.
    pub properties: IndexMap<String, Value>,

    /// Per-property annotations, key-aligned with `properties`.
    pub property_annotations: IndexMap<String, Option<String>>,

    /// Child nodes, in source order.
    pub children: Document,
}

impl Node {
    /// Creates an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the node-level annotation, builder style.
    pub fn set_annotation(&mut self, annotation: impl Into<String>) -> &mut Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Appends a positional argument.
    pub fn push_argument(&mut self, value: impl Into<Value>) -> &mut Self {
        self.arguments.push(value.into());
        self.argument_annotations.push(None);
        self
    }

    /// Appends a positional argument carrying an annotation.
    pub fn push_argument_with(
        &mut self,
        value: impl Into<Value>,
        annotation: impl Into<String>,
    ) -> &mut Self {
        self.arguments.push(value.into());
        self.argument_annotations.push(Some(annotation.into()));
        self
    }

    /// Sets a property. An existing key keeps its position.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        self.properties.insert(key.clone(), value.into());
        self.property_annotations.insert(key, None);
        self
    }

    /// Sets a property carrying an annotation.
    pub fn set_property_with(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        annotation: impl Into<String>,
    ) -> &mut Self {
        let key = key.into();
        self.properties.insert(key.clone(), value.into());
        self.property_annotations
            .insert(key, Some(annotation.into()));
        self
    }

    /// Replaces the children document.
    pub fn set_children(&mut self, children: Document) -> &mut Self {
        self.children = children;
        self
    }

    /// Returns the argument at `index`, if present.
    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }

    /// Returns the property value for `key`, if present.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the first child node with the given name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Returns the first child node with the given name, or an error.
    pub fn first_named(&self, name: &str) -> Result<&Node, AccessError> {
        self.children.first_named(name)
    }

    /// Collects the direct children with the given name.
    pub fn children_named(&self, name: &str) -> NodeCollection<'_> {
        self.children.children_named(name)
    }

    /// Collects the direct children whose name is any of `names`.
    pub fn children_named_of(&self, names: &[&str]) -> NodeCollection<'_> {
        self.children.children_named_of(names)
    }

    /// Returns a deep collection over this node's children: the next
    /// navigation step recurses through all descendants.
    pub fn deep(&self) -> NodeCollection<'_> {
        self.children.deep()
    }

    /// Returns true if a direct child with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.children.contains(name)
    }

    /// Canonical KDL form of this node, without a trailing newline.
    ///
    /// `indent` is the column this node sits at; it only affects the
    /// layout of the children block.
    pub fn stringify(&self, indent: usize) -> String {
        self.stringify_with(indent, &TypeMap::default())
    }

    /// Canonical form, transforming annotated values back through
    /// `type_map` before emission.
    pub fn stringify_with(&self, indent: usize, type_map: &TypeMap) -> String {
        let mut ret = String::new();
        if let Some(annotation) = &self.annotation {
            ret.push('(');
            ret.push_str(&identifier_to_string(annotation));
            ret.push(')');
        }
        ret.push_str(&identifier_to_string(&self.name));

        for (index, argument) in self.arguments.iter().enumerate() {
            let annotation = self
                .argument_annotations
                .get(index)
                .and_then(|a| a.as_deref());
            ret.push(' ');
            if let Some(annotation) = annotation {
                ret.push('(');
                ret.push_str(&identifier_to_string(annotation));
                ret.push(')');
            }
            ret.push_str(&value_to_string(argument, annotation, type_map));
        }

        let mut keys: Vec<&String> = self.properties.keys().collect();
        keys.sort();
        for key in keys {
            let value = &self.properties[key];
            let annotation = self
                .property_annotations
                .get(key)
                .and_then(|a| a.as_deref());
            ret.push(' ');
            ret.push_str(&identifier_to_string(key));
            ret.push('=');
            if let Some(annotation) = annotation {
                ret.push('(');
                ret.push_str(&identifier_to_string(annotation));
                ret.push(')');
            }
            ret.push_str(&value_to_string(value, annotation, type_map));
        }

        if !self.children.is_empty() {
            ret.push_str(" {\n");
            ret.push_str(&self.children.stringify_with(indent + 4, type_map));
            ret.push_str(&" ".repeat(indent));
            ret.push('}');
        }
        ret
    }
}

impl std::ops::Index<usize> for Node {
    type Output = Value;

    /// Returns the argument at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the node has no argument at that index; use
    /// [`Node::argument`] for the fallible form.
    fn index(&self, index: usize) -> &Value {
        &self.arguments[index]
    }
}

impl std::ops::Index<&str> for Node {
    type Output = Value;

    /// Returns the property value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the property is absent; use [`Node::property`] for the
    /// fallible form.
    fn index(&self, key: &str) -> &Value {
        match self.properties.get(key) {
            Some(value) => value,
            None => panic!("node '{}' has no property '{}'", self.name, key),
        }
    }
}
