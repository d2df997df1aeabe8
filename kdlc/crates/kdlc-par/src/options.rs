//! Parser configuration: registration maps and the lexer flags.
//!
//! Instead of reflection, clients explicitly register what they want
//! customized: a [`kdlc_doc::TypeMap`] for annotation-driven value/node
//! transforms and a [`NodeMap`] for name-driven node construction.

use kdlc_doc::{Node, TypeMap};
use kdlc_lex::LexerConfig;
use kdlc_util::FxHashMap;

/// Constructor registered for a node name.
///
/// The constructor receives the fully assembled default node (children,
/// arguments, and properties all populated) and returns the node to store
/// in its place.
pub type NodeConstructor = Box<dyn Fn(Node) -> Node>;

/// Node-name-keyed constructors, invoked in place of the default node.
///
/// # Example
///
/// ```
/// use kdlc_doc::Value;
/// use kdlc_par::{parse_with, NodeMap, ParseOptions};
///
/// let node_map = NodeMap::new().insert("port", |mut node| {
///     node.set_property("checked", Value::Bool(true));
///     node
/// });
/// let options = ParseOptions::new().node_map(node_map);
/// let doc = parse_with("port 80", &options).unwrap();
/// assert_eq!(doc["port"].property("checked"), Some(&Value::Bool(true)));
/// ```
#[derive(Default)]
pub struct NodeMap {
    constructors: FxHashMap<String, NodeConstructor>,
}

impl NodeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for a node name.
    pub fn insert(
        mut self,
        name: impl Into<String>,
        constructor: impl Fn(Node) -> Node + 'static,
    ) -> Self {
        self.constructors.insert(name.into(), Box::new(constructor));
        self
    }

    /// Returns true if no constructors are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Runs the registered constructor for this node's name, if any.
    pub fn apply(&self, node: Node) -> Node {
        if let Some(constructor) = self.constructors.get(&node.name) {
            return constructor(node);
        }
        node
    }
}

impl std::fmt::Debug for NodeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.constructors.keys().collect();
        names.sort();
        f.debug_struct("NodeMap").field("names", &names).finish()
    }
}

/// Everything `parse_with` accepts beyond the source text.
#[derive(Debug, Default)]
pub struct ParseOptions {
    /// Annotation-keyed value and node transforms.
    pub type_map: TypeMap,
    /// Node-name-keyed constructors.
    pub node_map: NodeMap,
    /// Lexer flags (the experimental suffix annotations).
    pub lexer: LexerConfig,
}

impl ParseOptions {
    /// Creates default options: no maps, suffix annotations off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type map, builder style.
    pub fn type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    /// Sets the node map, builder style.
    pub fn node_map(mut self, node_map: NodeMap) -> Self {
        self.node_map = node_map;
        self
    }

    /// Sets the lexer configuration, builder style.
    pub fn lexer(mut self, lexer: LexerConfig) -> Self {
        self.lexer = lexer;
        self
    }
}
