//! Edge case tests for kdlc-par

use kdlc_doc::{Document, Value};

use crate::parse;

fn parse_ok(source: &str) -> Document {
    parse(source).expect("expected source to parse")
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_node_named_dash() {
    let doc = parse_ok("- 1");
    assert_eq!(doc.nodes[0].name, "-");
    assert_eq!(doc.nodes[0].arguments, [Value::Int(1)]);
}

#[test]
fn test_edge_quoted_node_name() {
    let doc = parse_ok("\"node with space\" 1");
    assert_eq!(doc.nodes[0].name, "node with space");
}

#[test]
fn test_edge_unicode_node_name() {
    let doc = parse_ok("設定 value=1");
    assert_eq!(doc.nodes[0].name, "設定");
}

#[test]
fn test_edge_empty_child_block() {
    let doc = parse_ok("node { }");
    assert!(doc["node"].children.is_empty());
    // An empty block is dropped at serialization time.
    assert_eq!(doc.stringify(0), "node\n");
}

#[test]
fn test_edge_semicolon_only_block() {
    let doc = parse_ok("node { ;;; }");
    assert!(doc["node"].children.is_empty());
}

#[test]
fn test_edge_deep_nesting() {
    let mut source = String::new();
    let depth = 64;
    for _ in 0..depth {
        source.push_str("n {\n");
    }
    source.push_str("leaf 1\n");
    for _ in 0..depth {
        source.push_str("}\n");
    }
    let doc = parse_ok(&source);
    let mut node = &doc.nodes[0];
    for _ in 1..depth {
        node = &node.children.nodes[0];
    }
    assert_eq!(node.children.nodes[0].name, "leaf");
}

#[test]
fn test_edge_many_siblings() {
    let source = (0..500)
        .map(|i| format!("item {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = parse_ok(&source);
    assert_eq!(doc.len(), 500);
    assert_eq!(doc.nodes[499].arguments, [Value::Int(499)]);
}

#[test]
fn test_edge_slashdash_before_nested_node_in_block() {
    let doc = parse_ok("parent {\n  /- dropped { deep }\n  kept\n}");
    let parent = &doc["parent"];
    assert_eq!(parent.children.len(), 1);
    assert_eq!(parent.children.nodes[0].name, "kept");
}

#[test]
fn test_edge_slashdash_all_children() {
    let doc = parse_ok("parent {\n  /- a\n  /- b\n}");
    assert!(doc["parent"].children.is_empty());
}

#[test]
fn test_edge_slashdash_at_document_start_with_newlines() {
    let doc = parse_ok("/-\n\ndropped 1\nkept");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.nodes[0].name, "kept");
}

#[test]
fn test_edge_block_comment_inside_node_head() {
    let doc = parse_ok("node /* gone */ 1");
    assert_eq!(doc["node"].arguments, [Value::Int(1)]);
}

#[test]
fn test_edge_argument_and_property_interleaving() {
    let doc = parse_ok("node 1 b=2 3 a=4 5");
    let node = &doc["node"];
    assert_eq!(node.arguments, [Value::Int(1), Value::Int(3), Value::Int(5)]);
    assert_eq!(node.properties.len(), 2);
    // Arguments keep source order, properties sort at emission.
    assert_eq!(doc.stringify(0), "node 1 3 5 a=4 b=2\n");
}

#[test]
fn test_edge_property_value_is_keyword() {
    let doc = parse_ok("node flag=#true missing=#null");
    assert_eq!(doc["node"].property("flag"), Some(&Value::Bool(true)));
    assert_eq!(doc["node"].property("missing"), Some(&Value::Null));
}

#[test]
fn test_edge_bare_identifier_argument_not_property() {
    // A bare identifier not followed by '=' is an ordinary string value.
    let doc = parse_ok("node width height");
    assert_eq!(
        doc["node"].arguments,
        [Value::String("width".into()), Value::String("height".into())]
    );
}

#[test]
fn test_edge_property_never_double_counted() {
    let doc = parse_ok("node k=1");
    assert!(doc["node"].arguments.is_empty());
    assert_eq!(doc["node"].properties.len(), 1);
}

#[test]
fn test_edge_children_on_own_line_belong_to_node() {
    // The block must open on the node's logical line; after a newline it
    // is a new (nameless, thus invalid) construct.
    assert!(parse("node\n{ child }").is_err());
    // With a line continuation it stays on the same logical line.
    let doc = parse_ok("node \\\n{ child }");
    assert_eq!(doc["node"].children.len(), 1);
}

#[test]
fn test_edge_semicolon_terminates_node_before_block() {
    // `;` ends the node; the orphaned block then fails to parse as a node.
    assert!(parse("node; { child }").is_err());
}

#[test]
fn test_edge_rbrace_terminates_inner_node() {
    let doc = parse_ok("a { b 1 }");
    assert_eq!(doc["a"].children.nodes[0].arguments, [Value::Int(1)]);
}

#[test]
fn test_edge_annotated_child() {
    let doc = parse_ok("parent { (t)child 1 }");
    let child = &doc["parent"].children.nodes[0];
    assert_eq!(child.annotation.as_deref(), Some("t"));
}

#[test]
fn test_edge_tag_on_keyword_value() {
    let doc = parse_ok("node (maybe)#null");
    let node = &doc["node"];
    assert_eq!(node.arguments, [Value::Null]);
    assert_eq!(node.argument_annotations[0].as_deref(), Some("maybe"));
}

#[test]
fn test_edge_whitespace_heavy_document() {
    let doc = parse_ok("   node   \t  1   \n\n\n   other  \t 2  ");
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_edge_windows_line_endings() {
    let doc = parse_ok("a 1\r\nb 2\r\n");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["b"].arguments, [Value::Int(2)]);
}

#[test]
fn test_edge_round_trip_preserves_everything_observable() {
    let source = "(cfg)server \"web\" port=8080 tls=#true {\n    (ep)endpoint \"/api\" {\n        limit (per-minute)600\n    }\n    /- disabled\n}\n";
    let doc = parse_ok(source);
    let text = doc.stringify(0);
    let reparsed = parse_ok(&text);
    assert_eq!(doc, reparsed);
    assert_eq!(text, reparsed.stringify(0));
}
