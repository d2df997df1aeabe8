//! Transient query results over borrowed nodes.

use crate::error::AccessError;
use crate::node::Node;
use crate::value::Value;

/// An ordered collection of borrowed nodes produced by navigation.
///
/// Collections are ephemeral views tied to the lifetime of the root
/// [`crate::Document`]. A collection flagged *deep* makes its next
/// navigation step recurse through all descendants (subtree roots
/// included), in document order; the flag does not propagate to the
/// produced collection.
///
/// # Example
///
/// ```
/// use kdlc_doc::{Document, Node, Value};
///
/// let mut inner = Node::new("item");
/// inner.push_argument(Value::Int(2));
/// let mut outer = Node::new("item");
/// outer.push_argument(Value::Int(1));
/// outer.children.push(inner);
/// let mut doc = Document::new();
/// doc.push(outer);
///
/// // Every `item` at any depth, in document order.
/// let items = doc.deep().children_named("item");
/// assert_eq!(items.len(), 2);
/// assert_eq!(items.arguments_at(0).unwrap(), [&Value::Int(1), &Value::Int(2)]);
/// ```
#[derive(Clone, Debug)]
pub struct NodeCollection<'a> {
    nodes: Vec<&'a Node>,
    deep: bool,
}

impl<'a> NodeCollection<'a> {
    /// Creates a shallow collection over the given nodes.
    pub(crate) fn over(nodes: Vec<&'a Node>) -> Self {
        Self { nodes, deep: false }
    }

    /// Creates a deep-flagged collection over the given nodes.
    pub(crate) fn deep_over(nodes: Vec<&'a Node>) -> Self {
        Self { nodes, deep: true }
    }

    /// Number of nodes in the collection.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at `index` in the collection.
    pub fn get(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index).copied()
    }

    /// Iterates over the nodes in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns true if any node in the collection has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node.name == name)
    }

    /// Navigates one step by name.
    ///
    /// Shallow collections select matching direct children of each member.
    /// Deep collections select every match in the subtrees rooted at the
    /// members (roots included), in pre-order.
    pub fn children_named(&self, name: &str) -> NodeCollection<'a> {
        self.select(&|node| node.name == name)
    }

    /// Navigates one step matching any of `names`.
    pub fn children_named_of(&self, names: &[&str]) -> NodeCollection<'a> {
        self.select(&|node| names.contains(&node.name.as_str()))
    }

    fn select(&self, matches: &dyn Fn(&Node) -> bool) -> NodeCollection<'a> {
        let mut selected = Vec::new();
        if self.deep {
            for node in &self.nodes {
                collect_preorder(node, matches, &mut selected);
            }
        } else {
            for node in &self.nodes {
                for child in &node.children {
                    if matches(child) {
                        selected.push(child);
                    }
                }
            }
        }
        NodeCollection::over(selected)
    }

    /// Re-flags this collection deep: the next navigation step recurses.
    pub fn deep(&self) -> NodeCollection<'a> {
        NodeCollection::deep_over(self.nodes.clone())
    }

    /// Returns the first direct child (of any member) with the given name,
    /// or an error.
    pub fn first_named(&self, name: &str) -> Result<&'a Node, AccessError> {
        for node in &self.nodes {
            for child in &node.children {
                if child.name == name {
                    return Ok(child);
                }
            }
        }
        Err(AccessError::NoSuchNode(name.to_string()))
    }

    /// Concatenates two collections, preserving order. The result is
    /// shallow.
    pub fn concat(mut self, other: NodeCollection<'a>) -> NodeCollection<'a> {
        self.nodes.extend(other.nodes);
        NodeCollection::over(self.nodes)
    }

    /// Returns the argument at `index` from every node in the collection.
    ///
    /// Errors if any node lacks that argument.
    pub fn arguments_at(&self, index: usize) -> Result<Vec<&'a Value>, AccessError> {
        let mut values = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            match node.arguments.get(index) {
                Some(value) => values.push(value),
                None => {
                    return Err(AccessError::NoSuchArgument {
                        node: node.name.clone(),
                        index,
                    })
                }
            }
        }
        Ok(values)
    }

    /// Returns the property `key` from every node in the collection.
    ///
    /// Errors if any node lacks that property.
    pub fn properties_named(&self, key: &str) -> Result<Vec<&'a Value>, AccessError> {
        let mut values = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            match node.properties.get(key) {
                Some(value) => values.push(value),
                None => {
                    return Err(AccessError::NoSuchProperty {
                        node: node.name.clone(),
                        key: key.to_string(),
                    })
                }
            }
        }
        Ok(values)
    }
}

/// Pre-order walk of the subtree rooted at `node`, root included.
fn collect_preorder<'a>(
    node: &'a Node,
    matches: &dyn Fn(&Node) -> bool,
    out: &mut Vec<&'a Node>,
) {
    if matches(node) {
        out.push(node);
    }
    for child in &node.children {
        collect_preorder(child, matches, out);
    }
}

impl<'a> IntoIterator for &NodeCollection<'a> {
    type Item = &'a Node;
    type IntoIter = std::vec::IntoIter<&'a Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.clone().into_iter()
    }
}

impl<'a> IntoIterator for NodeCollection<'a> {
    type Item = &'a Node;
    type IntoIter = std::vec::IntoIter<&'a Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
