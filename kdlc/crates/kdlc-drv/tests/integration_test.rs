//! Library-level integration tests over representative documents.

use kdlc_drv::{parse, parse_with, LexerConfig, NodeMap, ParseOptions, TypeMap, Value};

#[test]
fn test_configuration_document() {
    let source = r#"
// application configuration
app "demo" version="1.2.3" {
    server {
        host localhost
        port 8080
        tls #true
    }
    limits {
        requests (per-minute)600
        burst 50
    }
    /- debugging {
        verbose #true
    }
}
"#;
    let doc = parse(source).unwrap();
    assert_eq!(doc.len(), 1);

    let app = &doc["app"];
    assert_eq!(app.argument(0), Some(&Value::String("demo".into())));
    assert_eq!(
        app.property("version"),
        Some(&Value::String("1.2.3".into()))
    );
    assert_eq!(app.children.len(), 2, "slashdashed block child is dropped");

    let port = app.get("server").and_then(|s| s.get("port")).unwrap();
    assert_eq!(port.argument(0), Some(&Value::Int(8080)));

    let requests = app.get("limits").and_then(|l| l.get("requests")).unwrap();
    assert_eq!(requests.argument_annotations[0].as_deref(), Some("per-minute"));
}

#[test]
fn test_deep_navigation_across_document() {
    let source = "zone a {\n    host h1\n    group {\n        host h2\n    }\n}\nzone b {\n    host h3\n}\n";
    let doc = parse(source).unwrap();
    let hosts = doc.deep().children_named("host");
    assert_eq!(hosts.len(), 3);
    let args = hosts.arguments_at(0).unwrap();
    assert_eq!(
        args,
        [
            &Value::String("h1".into()),
            &Value::String("h2".into()),
            &Value::String("h3".into()),
        ]
    );
}

#[test]
fn test_every_string_form_round_trips() {
    let source = concat!(
        "quoted \"a b\\tc\"\n",
        "multi \"\"\"\n    line one\n    line two\n    \"\"\"\n",
        "raw #\"keep \\n literal\"#\n",
        "rawmulti #\"\"\"\n    as-is\n    \"\"\"#\n",
    );
    let doc = parse(source).unwrap();
    assert_eq!(doc["quoted"].arguments, [Value::String("a b\tc".into())]);
    assert_eq!(
        doc["multi"].arguments,
        [Value::String("line one\nline two".into())]
    );
    assert_eq!(
        doc["raw"].arguments,
        [Value::String("keep \\n literal".into())]
    );
    assert_eq!(doc["rawmulti"].arguments, [Value::String("as-is".into())]);

    let text = doc.stringify(0);
    assert_eq!(parse(&text).unwrap(), doc);
}

#[test]
fn test_numbers_round_trip() {
    let source = "numbers 0 -7 1_000 0xFF 0o17 0b1101 1.25 -2.5e-3 #inf #-inf\n";
    let doc = parse(source).unwrap();
    let text = doc.stringify(0);
    assert_eq!(text, "numbers 0 -7 1000 255 15 13 1.25 -0.0025 #inf #-inf\n");
    assert_eq!(parse(&text).unwrap(), doc);
}

#[test]
fn test_maps_compose() {
    let type_map = TypeMap::new().value("seconds", |v| match v {
        Value::Int(n) => Value::Int(n * 1000),
        other => other,
    });
    let node_map = NodeMap::new().insert("timeout", |mut node| {
        node.set_property("unit", Value::String("ms".into()));
        node
    });
    let options = ParseOptions::new().type_map(type_map).node_map(node_map);

    let doc = parse_with("timeout (seconds)30", &options).unwrap();
    let timeout = &doc["timeout"];
    assert_eq!(timeout.arguments, [Value::Int(30_000)]);
    assert_eq!(timeout.property("unit"), Some(&Value::String("ms".into())));
    // The annotation survives for round-tripping.
    assert_eq!(timeout.argument_annotations[0].as_deref(), Some("seconds"));
}

#[test]
fn test_suffix_annotations_behind_flag() {
    assert!(parse("size 10px").is_err());

    let options = ParseOptions::new().lexer(LexerConfig {
        suffix_annotations: true,
    });
    let doc = parse_with("size 10px 5#em", &options).unwrap();
    let size = &doc["size"];
    assert_eq!(size.arguments, [Value::Int(10), Value::Int(5)]);
    assert_eq!(size.argument_annotations[0].as_deref(), Some("px"));
    assert_eq!(size.argument_annotations[1].as_deref(), Some("em"));
}

#[test]
fn test_error_positions_are_stable() {
    let source = "ok 1\nbroken \u{7f}\n";
    let first = parse(source).unwrap_err();
    let second = parse(source).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.line, 2);
    assert_eq!(first.column, 7);
}
