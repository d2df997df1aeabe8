//! Edge case tests for kdlc-lex

use crate::token::{Keyword, Number, TokenKind};
use crate::{tokenize, tokenize_with, LexerConfig};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .expect("expected source to lex")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_whitespace_only() {
    assert_eq!(kinds("   \t  "), [TokenKind::Newline]);
}

#[test]
fn test_edge_newlines_only() {
    let tokens = kinds("\n\n\n");
    assert_eq!(tokens.len(), 4); // three newlines + sentinel
    assert!(tokens.iter().all(|k| *k == TokenKind::Newline));
}

#[test]
fn test_edge_long_identifier() {
    let name = "x".repeat(10_000);
    let tokens = kinds(&name);
    assert_eq!(tokens[0], TokenKind::String(name));
}

#[test]
fn test_edge_unicode_identifier() {
    assert_eq!(kinds("日本語"), [TokenKind::String("日本語".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_emoji_identifier() {
    assert_eq!(kinds("🔥-node"), [TokenKind::String("🔥-node".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_single_hash_quote_empty() {
    assert_eq!(kinds("#\"\"#"), [TokenKind::String(String::new()), TokenKind::Newline]);
}

#[test]
fn test_edge_empty_quoted_string() {
    assert_eq!(kinds("\"\""), [TokenKind::String(String::new()), TokenKind::Newline]);
}

#[test]
fn test_edge_zero_forms() {
    assert_eq!(
        kinds("0 0.0 0x0 0o0 0b0"),
        [
            TokenKind::Number(Number::Integer(0)),
            TokenKind::Number(Number::Float(0.0)),
            TokenKind::Number(Number::Integer(0)),
            TokenKind::Number(Number::Integer(0)),
            TokenKind::Number(Number::Integer(0)),
            TokenKind::Newline,
        ]
    );
}

#[test]
fn test_edge_large_integers() {
    assert_eq!(
        kinds("170141183460469231731687303715884105727"),
        [TokenKind::Number(Number::Integer(i128::MAX)), TokenKind::Newline]
    );
    assert!(tokenize("170141183460469231731687303715884105728").is_err());
}

#[test]
fn test_edge_huge_exponent_is_infinite() {
    // Mirrors IEEE-754 conversion: the literal is legal, the value
    // saturates.
    let tokens = kinds("1e999");
    assert_eq!(tokens[0], TokenKind::Number(Number::Float(f64::INFINITY)));
}

#[test]
fn test_edge_number_like_identifiers_after_sign() {
    // A sign followed by a non-digit is an identifier, not a number.
    assert_eq!(kinds("-_1"), [TokenKind::String("-_1".into()), TokenKind::Newline]);
    assert_eq!(kinds("+.5x"), [TokenKind::String("+.5x".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_dot_identifier() {
    assert_eq!(kinds("."), [TokenKind::String(".".into()), TokenKind::Newline]);
    assert_eq!(kinds(".well-known"), [TokenKind::String(".well-known".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_trailing_dot_is_suffix_error() {
    // `5.` does not form a fraction; the dot scans as a suffix identifier
    // and is rejected before the experimental gate.
    let err = tokenize("5.").unwrap_err();
    assert!(err.message.contains("starts with '.'"), "{}", err);
}

#[test]
fn test_edge_keyword_prefix_stops_matching() {
    // `#inf` matches, the trailing characters then violate the post-value
    // rule.
    let err = tokenize("#infinity").unwrap_err();
    assert!(err.message.contains("Expected whitespace after value"), "{}", err);
}

#[test]
fn test_edge_hash_alone() {
    assert!(tokenize("#").is_err());
    assert!(tokenize("#apple").is_err());
}

#[test]
fn test_edge_deeply_nested_comment() {
    let mut source = String::from("a ");
    for _ in 0..64 {
        source.push_str("/*");
    }
    source.push_str("core");
    for _ in 0..64 {
        source.push_str("*/");
    }
    source.push_str(" b");
    assert_eq!(
        kinds(&source),
        [TokenKind::String("a".into()), TokenKind::String("b".into()), TokenKind::Newline]
    );
}

#[test]
fn test_edge_unterminated_block_comment_runs_to_eof() {
    assert_eq!(kinds("a /* never closed"), [TokenKind::String("a".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_comment_only_document() {
    assert_eq!(kinds("// nothing here"), [TokenKind::Newline]);
    assert_eq!(kinds("/* nothing here */"), [TokenKind::Newline]);
}

#[test]
fn test_edge_crlf_inside_multiline_string() {
    // Only LF splits lines inside a string; the CR stays in the content.
    let tokens = kinds("\"\"\"\na\r\n\"\"\"");
    assert_eq!(tokens[0], TokenKind::String("a\r".into()));
}

#[test]
fn test_edge_multiline_indent_is_tabs() {
    let tokens = kinds("\"\"\"\n\t\tx\n\t\t\"\"\"");
    assert_eq!(tokens[0], TokenKind::String("x".into()));
}

#[test]
fn test_edge_multiline_closing_line_longer_than_content() {
    let err = tokenize("\"\"\"\n  x\n      \"\"\"").unwrap_err();
    assert!(err.message.contains("Inconsistent indentation"), "{}", err);
}

#[test]
fn test_edge_escaped_newline_merges_string_lines() {
    let tokens = kinds("\"one \\\n     two\"");
    assert_eq!(tokens[0], TokenKind::String("one two".into()));
}

#[test]
fn test_edge_tag_with_whitespace_inside_parens() {
    let tokens = kinds("( u8 )1");
    assert_eq!(tokens[0], TokenKind::Tag("u8".into()));
}

#[test]
fn test_edge_tag_with_newline_inside_parens_not_collapsed() {
    // A newline between the parens breaks the collapse shape; the stray
    // paren surfaces for the parser to reject.
    let tokens = tokenize("(\nu8)1").unwrap();
    assert!(tokens.iter().any(|t| t.kind == TokenKind::RParen));
}

#[test]
fn test_edge_keyword_values_at_eof() {
    assert_eq!(
        kinds("#true"),
        [TokenKind::Keyword(Keyword::True), TokenKind::Newline]
    );
}

#[test]
fn test_edge_suffix_percent_sign() {
    let config = LexerConfig {
        suffix_annotations: true,
    };
    let tokens = tokenize_with("5%", &config).unwrap();
    assert_eq!(tokens[1].kind, TokenKind::SuffixTag("%".into()));
}

#[test]
fn test_edge_suffix_after_float() {
    let config = LexerConfig {
        suffix_annotations: true,
    };
    let tokens = tokenize_with("1.5px", &config).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number(Number::Float(1.5)));
    assert_eq!(tokens[1].kind, TokenKind::SuffixTag("px".into()));
}

#[test]
fn test_edge_double_semicolons() {
    assert_eq!(
        kinds("a;;b"),
        [
            TokenKind::String("a".into()),
            TokenKind::Semicolon,
            TokenKind::Semicolon,
            TokenKind::String("b".into()),
            TokenKind::Newline,
        ]
    );
}

#[test]
fn test_edge_backslash_at_eof() {
    assert_eq!(kinds("a \\"), [TokenKind::String("a".into()), TokenKind::Newline]);
}

#[test]
fn test_edge_nbsp_is_whitespace() {
    assert_eq!(
        kinds("a\u{A0}b"),
        [TokenKind::String("a".into()), TokenKind::String("b".into()), TokenKind::Newline]
    );
}

// ==================== PROPERTY TESTS ====================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decimal_integer_round_trip(n in any::<i64>()) {
            let tokens = tokenize(&n.to_string()).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(Number::Integer(n as i128)));
        }

        #[test]
        fn prop_hex_round_trip(n in 0u64..=u64::MAX) {
            let source = format!("0x{n:x}");
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(Number::Integer(n as i128)));
        }

        #[test]
        fn prop_octal_round_trip(n in 0u64..=u64::MAX) {
            let source = format!("0o{n:o}");
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(Number::Integer(n as i128)));
        }

        #[test]
        fn prop_binary_round_trip(n in 0u64..=u64::MAX) {
            let source = format!("0b{n:b}");
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(Number::Integer(n as i128)));
        }

        #[test]
        fn prop_ascii_identifiers_lex_as_strings(s in "[a-z][a-z0-9_-]{0,30}") {
            prop_assume!(!["true", "false", "null", "inf", "nan"].contains(&s.as_str()));
            let tokens = tokenize(&s).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::String(s));
        }

        #[test]
        fn prop_quoted_alphanumeric_content_survives(s in "[a-zA-Z0-9 ]{0,40}") {
            let source = format!("\"{s}\"");
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::String(s));
        }

        #[test]
        fn prop_underscored_integers(n in 1u32..=999_999u32) {
            // Insert a separator after the first digit; the value must not
            // change.
            let plain = n.to_string();
            if plain.len() > 1 {
                let source = format!("{}_{}", &plain[..1], &plain[1..]);
                let tokens = tokenize(&source).unwrap();
                prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(Number::Integer(n as i128)));
            }
        }
    }
}
