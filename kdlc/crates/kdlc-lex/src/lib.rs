//! kdlc-lex - Lexical analyzer for KDL documents.
//!
//! This crate transforms KDL source text into the ordered token list the
//! parser consumes. The lexer owns everything character-level:
//!
//! - character legality (control and directional-formatting codepoints,
//!   BOM placement)
//! - the eight line terminator forms, with CRLF collapsed
//! - the four string forms: quoted, multi-line quoted with indent
//!   stripping, raw with `#` markers, raw multi-line
//! - escape sequences including `\u{…}` and whitespace gobbling
//! - numbers in four radices with `_` digit separators, and the
//!   experimental suffix type annotations
//! - the six keyword values (`#true`, `#false`, `#null`, `#inf`, `#-inf`,
//!   `#nan`)
//! - comments (`//`, nestable `/* */`), line continuations, and `/-`
//! - collapsing `(identifier)` into a single Tag token
//!
//! The output always ends with a terminal newline sentinel. The first
//! illegal byte aborts with a [`kdlc_util::SyntaxError`].
//!
//! # Example
//!
//! ```
//! use kdlc_lex::{tokenize, Number, TokenKind};
//!
//! let tokens = tokenize("temp (celsius)21.5").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::String("temp".into()));
//! assert_eq!(tokens[1].kind, TokenKind::Tag("celsius".into()));
//! assert_eq!(tokens[2].kind, TokenKind::Number(Number::Float(21.5)));
//! ```

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use lexer::{tokenize, tokenize_with, Lexer, LexerConfig};
pub use token::{Keyword, Number, Token, TokenKind};

#[cfg(test)]
mod edge_cases;
