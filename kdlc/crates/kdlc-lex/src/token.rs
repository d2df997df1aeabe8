//! Token definitions for the KDL lexer.
//!
//! Tokens are a discriminated union of kinds with a shared source span.
//! The lexer materializes the whole token list before parsing begins and
//! appends a terminal [`TokenKind::Newline`] as the end-of-input sentinel.

use kdlc_util::Span;

/// A token in KDL source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is, with any payload.
    pub kind: TokenKind,
    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kinds of token the lexer produces.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // VALUE TOKENS
    // =========================================================================
    /// A string value: quoted, multi-line, raw, or a bare identifier.
    ///
    /// Escapes and multi-line indent stripping have already been applied;
    /// the payload is the final string content.
    String(String),

    /// A numeric value in any of the four radices.
    Number(Number),

    /// One of the six reserved keyword values (`#true`, `#false`, `#null`,
    /// `#inf`, `#-inf`, `#nan`).
    Keyword(Keyword),

    // =========================================================================
    // STRUCTURE
    // =========================================================================
    /// A line terminator. Also appended once at end of input.
    Newline,

    /// `;`
    Semicolon,

    /// `=`
    Equals,

    /// `{`
    LBrace,

    /// `}`
    RBrace,

    /// `(`
    ///
    /// Only transiently present: a well-formed annotation collapses into
    /// [`TokenKind::Tag`] when the closing paren is seen.
    LParen,

    /// `)` without a matching annotation shape; the parser rejects it.
    RParen,

    /// A resolved type annotation: the identifier between `(` and `)`.
    Tag(String),

    /// An experimental suffix type annotation on a number (`5#px`, `10px`).
    SuffixTag(String),

    /// `/-`
    Slashdash,
}

impl TokenKind {
    /// Returns true for tokens that carry a value (string, number,
    /// keyword). The post-value "ready" rule and the parser's head loop
    /// both key off this.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            TokenKind::String(_) | TokenKind::Number(_) | TokenKind::Keyword(_)
        )
    }

    /// Short human-readable description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Newline => "newline",
            TokenKind::Semicolon => "';'",
            TokenKind::Equals => "'='",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Tag(_) => "type annotation",
            TokenKind::SuffixTag(_) => "suffix type annotation",
            TokenKind::Slashdash => "'/-'",
        }
    }
}

/// A lexed numeric value.
///
/// A literal with neither fractional nor exponent part is an integer;
/// anything else is a float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integer value, any radix. Wide enough for every digit-separator
    /// heavy literal a configuration file plausibly contains.
    Integer(i128),
    /// Floating point value from a decimal literal with a fraction or
    /// exponent.
    Float(f64),
}

/// The six reserved keyword values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    /// `#true`
    True,
    /// `#false`
    False,
    /// `#null`
    Null,
    /// `#inf`
    Inf,
    /// `#-inf`
    NegInf,
    /// `#nan`
    Nan,
}

impl Keyword {
    /// All keyword spellings, longest-prefix first so `-inf` is tried
    /// before `inf` when matching after `#`.
    pub const SPELLINGS: &'static [(&'static str, Keyword)] = &[
        ("-inf", Keyword::NegInf),
        ("inf", Keyword::Inf),
        ("nan", Keyword::Nan),
        ("true", Keyword::True),
        ("false", Keyword::False),
        ("null", Keyword::Null),
    ];

    /// The source spelling of this keyword (without the leading `#`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Inf => "inf",
            Keyword::NegInf => "-inf",
            Keyword::Nan => "nan",
        }
    }

    /// Checks if an identifier spelling collides with a keyword value.
    ///
    /// # Example
    ///
    /// ```
    /// use kdlc_lex::token::Keyword;
    ///
    /// assert!(Keyword::is_spelling("true"));
    /// assert!(Keyword::is_spelling("-inf"));
    /// assert!(!Keyword::is_spelling("truthy"));
    /// ```
    pub fn is_spelling(value: &str) -> bool {
        Keyword::SPELLINGS.iter().any(|(s, _)| *s == value)
    }
}
