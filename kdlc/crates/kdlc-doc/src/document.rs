//! KDL documents.

use crate::error::AccessError;
use crate::node::Node;
use crate::type_map::TypeMap;
use crate::NodeCollection;

/// A KDL document: an ordered list of nodes.
///
/// # Example
///
/// ```
/// use kdlc_doc::{Document, Node, Value};
///
/// let mut doc = Document::new();
/// let mut node = Node::new("host");
/// node.push_argument(Value::String("localhost".into()));
/// doc.push(node);
///
/// assert_eq!(doc.stringify(0), "host localhost\n");
/// assert!(doc.contains("host"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Nodes in source order.
    pub nodes: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Returns the first node with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Returns the first node with the given name, or an error.
    pub fn first_named(&self, name: &str) -> Result<&Node, AccessError> {
        self.get(name)
            .ok_or_else(|| AccessError::NoSuchNode(name.to_string()))
    }

    /// Returns the first node whose name is any of `names`, or an error.
    pub fn first_named_of(&self, names: &[&str]) -> Result<&Node, AccessError> {
        self.nodes
            .iter()
            .find(|node| names.contains(&node.name.as_str()))
            .ok_or_else(|| AccessError::NoSuchNode(names.join("|")))
    }

    /// Collects the direct children with the given name.
    pub fn children_named(&self, name: &str) -> NodeCollection<'_> {
        NodeCollection::over(self.nodes.iter().filter(|n| n.name == name).collect())
    }

    /// Collects the direct children whose name is any of `names`.
    pub fn children_named_of(&self, names: &[&str]) -> NodeCollection<'_> {
        NodeCollection::over(
            self.nodes
                .iter()
                .filter(|n| names.contains(&n.name.as_str()))
                .collect(),
        )
    }

    /// Returns a deep collection over all top-level nodes: the next
    /// navigation step recurses through every descendant, in document
    /// order. The deep flag does not propagate past one step.
    pub fn deep(&self) -> NodeCollection<'_> {
        NodeCollection::deep_over(self.nodes.iter().collect())
    }

    /// Returns true if a top-level node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Canonical KDL text: each node at the given indent, one per line.
    ///
    /// The output re-parses to an equal document, with property order
    /// normalized to key order.
    pub fn stringify(&self, indent: usize) -> String {
        self.stringify_with(indent, &TypeMap::default())
    }

    /// Canonical text, transforming annotated values back through
    /// `type_map` before emission.
    pub fn stringify_with(&self, indent: usize, type_map: &TypeMap) -> String {
        let indent_str = " ".repeat(indent);
        let mut ret = String::new();
        for node in &self.nodes {
            ret.push_str(&indent_str);
            ret.push_str(&node.stringify_with(indent, type_map));
            ret.push('\n');
        }
        ret
    }
}

impl std::ops::Index<&str> for Document {
    type Output = Node;

    /// Returns the first node with the given name.
    ///
    /// # Panics
    ///
    /// Panics if no node has that name; use [`Document::get`] or
    /// [`Document::first_named`] for the fallible forms.
    fn index(&self, name: &str) -> &Node {
        match self.get(name) {
            Some(node) => node,
            None => panic!("no such node: {name}"),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
