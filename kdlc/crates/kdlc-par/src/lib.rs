//! kdlc-par - Parser for KDL documents.
//!
//! The parser consumes the token list produced by [`kdlc_lex`] and emits a
//! [`kdlc_doc::Document`]. It interprets the structural tokens (braces,
//! newlines, semicolons, equals, slashdash, tags) and applies the optional
//! registration maps from [`ParseOptions`].
//!
//! Grammar, at design level:
//!
//! ```text
//! Document := (Terminator | Node)*
//! Node     := [Tag] Identifier (ValueOrProperty | Slashdash ValueOrProperty)*
//!             (ChildBlock | Slashdash ChildBlock)?
//!             NodeTerminator
//! ValueOrProperty := [Tag] Value            -- positional argument
//!                  | Identifier '=' [Tag] Value   -- property
//! Value    := String | Number [SuffixTag] | Keyword
//! ChildBlock := '{' (Terminator | Node)* '}'
//! NodeTerminator := Newline | Semicolon | lookahead '}'
//! ```
//!
//! A `/-` (slashdash) elides the next value-or-property, node, or child
//! block: the construct is fully parsed, then discarded.
//!
//! The first syntax error aborts; no partial document is returned.
//!
//! # Example
//!
//! ```
//! use kdlc_par::parse;
//! use kdlc_doc::Value;
//!
//! let doc = parse("server \"web\" port=8080 { tls #true }").unwrap();
//! let server = &doc["server"];
//! assert_eq!(server.argument(0), Some(&Value::String("web".into())));
//! assert_eq!(server.property("port"), Some(&Value::Int(8080)));
//! assert_eq!(server.get("tls").and_then(|n| n.argument(0)), Some(&Value::Bool(true)));
//! ```

mod options;

#[cfg(test)]
mod edge_cases;

pub use options::{NodeConstructor, NodeMap, ParseOptions};

use kdlc_doc::{Document, Node, Value};
use kdlc_lex::{tokenize_with, Keyword, Number, Token, TokenKind};
use kdlc_util::{Span, SyntaxError, SyntaxResult};

/// Parses KDL source into a document with default options.
pub fn parse(source: &str) -> SyntaxResult<Document> {
    parse_with(source, &ParseOptions::default())
}

/// Parses KDL source with explicit options (type map, node map, lexer
/// flags).
pub fn parse_with(source: &str, options: &ParseOptions) -> SyntaxResult<Document> {
    let tokens = tokenize_with(source, &options.lexer)?;
    Parser::new(tokens, options).parse_document()
}

/// Token-list parser.
///
/// Holds the materialized token list and a position index; every parse
/// method advances the index and propagates the first error.
pub struct Parser<'a> {
    /// Token stream from the lexer, ending in the newline sentinel.
    tokens: Vec<Token>,

    /// Current position in the token stream.
    position: usize,

    /// Registration maps and flags.
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a token list.
    pub fn new(tokens: Vec<Token>, options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            position: 0,
            options,
        }
    }

    /// Parses the whole token stream into a document.
    pub fn parse_document(&mut self) -> SyntaxResult<Document> {
        let mut document = Document::new();
        loop {
            let Some(kind) = self.peek_kind() else { break };
            if matches!(kind, TokenKind::Newline | TokenKind::Semicolon) {
                self.advance();
                continue;
            }
            let mut slashdashed = false;
            if matches!(kind, TokenKind::Slashdash) {
                slashdashed = true;
                self.advance();
                self.skip_newlines();
            }
            let node = self.parse_node()?;
            if !slashdashed {
                document.push(node);
            }
        }
        Ok(document)
    }

    // =========================================================================
    // NODES
    // =========================================================================

    /// Parses a single node, starting from its optional type annotation or
    /// its name.
    fn parse_node(&mut self) -> SyntaxResult<Node> {
        let node_annotation = self.take_tag();

        let (name, name_span) = match self.take_string() {
            Some(pair) => pair,
            None => {
                let (found, span) = self.current_description();
                return Err(SyntaxError::at(
                    format!("Expected node name, found {found}"),
                    span,
                ));
            }
        };

        let mut node = Node::new(name.as_str());
        node.annotation = node_annotation.clone();

        // Arguments and properties, with slashdash elision.
        let mut slashdashed = false;
        loop {
            let Some(kind) = self.peek_kind() else { break };
            if !kind.is_value() && !matches!(kind, TokenKind::Tag(_) | TokenKind::Slashdash) {
                break;
            }
            if matches!(kind, TokenKind::Slashdash) {
                slashdashed = true;
                self.advance();
                self.skip_newlines();
                if matches!(self.peek_kind(), Some(TokenKind::LBrace)) {
                    break;
                }
            }

            let (value, annotation) = self.parse_value()?;
            let is_property =
                matches!(self.peek_kind(), Some(TokenKind::Equals)) && annotation.is_none();
            match (is_property, value) {
                (true, Value::String(key)) => {
                    self.advance(); // '='
                    let (prop_value, prop_annotation) = self.parse_value()?;
                    if !slashdashed {
                        let prop_value = self
                            .options
                            .type_map
                            .apply_value(prop_annotation.as_deref(), prop_value);
                        node.properties.insert(key.clone(), prop_value);
                        node.property_annotations.insert(key, prop_annotation);
                    }
                }
                (_, value) => {
                    if !slashdashed {
                        let value = self
                            .options
                            .type_map
                            .apply_value(annotation.as_deref(), value);
                        node.arguments.push(value);
                        node.argument_annotations.push(annotation);
                    }
                }
            }
            slashdashed = false;
        }

        // Child blocks, with slashdash elision. At most one survives.
        let mut children: Option<Document> = None;
        loop {
            let at_slashdash = matches!(self.peek_kind(), Some(TokenKind::Slashdash));
            let at_lbrace = matches!(self.peek_kind(), Some(TokenKind::LBrace));
            if !at_slashdash && !at_lbrace {
                break;
            }
            if at_slashdash {
                slashdashed = true;
                self.advance();
            }
            self.skip_newlines();

            let mut block = Document::new();
            if matches!(self.peek_kind(), Some(TokenKind::LBrace)) {
                self.advance();
                self.skip_terminators();
                loop {
                    match self.peek_kind() {
                        None => {
                            return Err(SyntaxError::at(
                                "Expected '}' before end of input",
                                self.last_span(),
                            ));
                        }
                        Some(TokenKind::RBrace) => {
                            self.advance();
                            break;
                        }
                        Some(TokenKind::Slashdash) => {
                            self.advance();
                            self.skip_newlines();
                            let _ = self.parse_node()?;
                        }
                        Some(_) => {
                            let child = self.parse_node()?;
                            block.push(child);
                        }
                    }
                    if self.peek_kind().is_none() {
                        return Err(SyntaxError::at(
                            "Expected '}' before end of input",
                            self.last_span(),
                        ));
                    }
                    self.skip_terminators();
                }
            }

            if !slashdashed {
                if children.is_some() {
                    return Err(SyntaxError::at(
                        format!("Multiple child node blocks for node '{name}'"),
                        name_span,
                    ));
                }
                children = Some(block);
            }
            slashdashed = false;
        }
        node.children = children.unwrap_or_default();

        // The node must end at a terminator (or the closing brace of the
        // enclosing block).
        if let Some(token) = self.peek() {
            if !matches!(
                token.kind,
                TokenKind::Newline | TokenKind::Semicolon | TokenKind::RBrace
            ) {
                return Err(SyntaxError::at(
                    format!(
                        "Unexpected token after node '{name}': {}",
                        token.kind.describe()
                    ),
                    token.span,
                ));
            }
        }

        let mut node = self.options.node_map.apply(node);
        if let Some(annotation) = &node_annotation {
            node = self.options.type_map.apply_node(annotation, node);
        }
        Ok(node)
    }

    // =========================================================================
    // VALUES
    // =========================================================================

    /// Parses a single value, starting from its optional type annotation.
    ///
    /// Numbers may carry a suffix annotation instead; both at once is an
    /// error.
    fn parse_value(&mut self) -> SyntaxResult<(Value, Option<String>)> {
        let mut annotation = self.take_tag();

        let Some(token) = self.peek() else {
            return Err(SyntaxError::at(
                "Expected value, found end of input",
                self.last_span(),
            ));
        };
        let span = token.span;
        let kind = token.kind.clone();

        match kind {
            TokenKind::String(value) => {
                self.advance();
                Ok((Value::String(value), annotation))
            }
            TokenKind::Number(number) => {
                self.advance();
                let suffix = match self.peek() {
                    Some(Token {
                        kind: TokenKind::SuffixTag(suffix),
                        span,
                    }) => Some((suffix.clone(), *span)),
                    _ => None,
                };
                if let Some((suffix, suffix_span)) = suffix {
                    if annotation.is_some() {
                        return Err(SyntaxError::at(
                            "Multiple type annotations for value",
                            suffix_span,
                        ));
                    }
                    annotation = Some(suffix);
                    self.advance();
                }
                let value = match number {
                    Number::Integer(n) => Value::Int(n),
                    Number::Float(f) => Value::Float(f),
                };
                Ok((value, annotation))
            }
            TokenKind::Keyword(keyword) => {
                self.advance();
                let value = match keyword {
                    Keyword::True => Value::Bool(true),
                    Keyword::False => Value::Bool(false),
                    Keyword::Null => Value::Null,
                    Keyword::Inf => Value::Float(f64::INFINITY),
                    Keyword::NegInf => Value::Float(f64::NEG_INFINITY),
                    Keyword::Nan => Value::Float(f64::NAN),
                };
                Ok((value, annotation))
            }
            other => Err(SyntaxError::at(
                format!("Expected value, found {}", other.describe()),
                span,
            )),
        }
    }

    // =========================================================================
    // TOKEN CURSOR
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes and returns the current token if it is a String.
    fn take_string(&mut self) -> Option<(String, Span)> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::String(value),
                span,
            }) => {
                let pair = (value.clone(), *span);
                self.advance();
                Some(pair)
            }
            _ => None,
        }
    }

    /// Consumes and returns the current token's payload if it is a Tag.
    fn take_tag(&mut self) -> Option<String> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Tag(value),
                ..
            }) => {
                let value = value.clone();
                self.advance();
                Some(value)
            }
            _ => None,
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek_kind(), Some(TokenKind::Newline)) {
            self.advance();
        }
    }

    fn skip_terminators(&mut self) {
        while matches!(
            self.peek_kind(),
            Some(TokenKind::Newline | TokenKind::Semicolon)
        ) {
            self.advance();
        }
    }

    fn current_description(&self) -> (String, Span) {
        match self.peek() {
            Some(token) => (token.kind.describe().to_string(), token.span),
            None => ("end of input".to_string(), self.last_span()),
        }
    }

    fn last_span(&self) -> Span {
        self.tokens.last().map(|t| t.span).unwrap_or_default()
    }
}
