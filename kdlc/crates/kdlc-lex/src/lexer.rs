//! Main lexer implementation for KDL documents.
//!
//! The lexer transforms source text into the ordered token list the parser
//! consumes. It enforces character legality, recognizes every literal form
//! (four string forms, four numeric radices, the six keyword values),
//! discards comments, resolves multi-line string indentation, collapses
//! type annotations into single tokens, and appends a terminal newline as
//! the end-of-input sentinel.
//!
//! Lexing is a single pass that dispatches on the current character. The
//! first illegal byte aborts with a [`SyntaxError`] carrying the observed
//! line and column.
//!
//! # Example
//!
//! ```
//! use kdlc_lex::{tokenize, Number, TokenKind};
//!
//! let tokens = tokenize("node 1 #true").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::String("node".into()));
//! assert_eq!(tokens[1].kind, TokenKind::Number(Number::Integer(1)));
//! ```

use kdlc_util::{Span, SyntaxError, SyntaxResult};

use crate::cursor::Cursor;
use crate::token::{Keyword, Number, Token, TokenKind};
use crate::unicode::{
    codepoint_to_char, is_forbidden_control, is_forbidden_format, is_newline, is_reserved,
    is_valid_bare_identifier, parse_hex_codepoint,
};

/// Lexer configuration.
///
/// The only knob is the experimental suffix-type-annotation feature
/// (`5#px`, `10px`). It is off by default; when off, any input that would
/// produce a suffix annotation is a syntax error.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexerConfig {
    /// Permit `#identifier` / bare-identifier type suffixes on numbers.
    pub suffix_annotations: bool,
}

/// Tokenizes KDL source with the default configuration.
///
/// # Example
///
/// ```
/// use kdlc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a; b").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         &TokenKind::String("a".into()),
///         &TokenKind::Semicolon,
///         &TokenKind::String("b".into()),
///         &TokenKind::Newline,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> SyntaxResult<Vec<Token>> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenizes KDL source with an explicit configuration.
pub fn tokenize_with(source: &str, config: &LexerConfig) -> SyntaxResult<Vec<Token>> {
    Lexer::new(source, *config).run()
}

/// The KDL lexer.
///
/// Holds the character cursor, the token list built so far, and the
/// post-value "ready" state: after a value token only whitespace and a
/// small punctuation set may follow.
pub struct Lexer<'a> {
    /// Character cursor over the source.
    cursor: Cursor<'a>,

    /// Configuration flags.
    config: LexerConfig,

    /// Tokens produced so far.
    tokens: Vec<Token>,

    /// False directly after a value token; gates what may follow.
    ready: bool,
}

/// A (position, line, column) triple captured at token start.
type Start = (usize, u32, u32);

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source.
    pub fn new(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            tokens: Vec::new(),
            ready: true,
        }
    }

    /// Runs the lexer to completion, producing the full token list.
    pub fn run(mut self) -> SyntaxResult<Vec<Token>> {
        // A BOM is permitted only as the very first character.
        if self.cursor.current_char() == '\u{FEFF}' {
            self.cursor.advance();
        }

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();

            if !self.ready
                && !(c.is_whitespace()
                    || matches!(c, '\\' | '/' | ')' | '}' | ';' | '[' | ']' | '='))
            {
                return Err(self.error_here("Expected whitespace after value"));
            }

            self.validate(c)?;

            if is_newline(c) {
                let start = self.cursor.position();
                self.consume_newline();
                let span = Span::new(start, self.cursor.position(), self.cursor.line(), 0);
                self.tokens.push(Token::new(TokenKind::Newline, span));
                self.ready = true;
                continue;
            }

            match c {
                '\\' => self.lex_line_continuation()?,
                '\u{FEFF}' => return Err(self.error_here("Unexpected BOM character")),
                c if c.is_whitespace() => {
                    self.cursor.advance();
                    self.ready = true;
                }
                '{' => {
                    self.push_simple(TokenKind::LBrace);
                    self.ready = true;
                }
                '}' => {
                    self.push_simple(TokenKind::RBrace);
                    self.ready = false;
                }
                '=' => {
                    self.push_simple(TokenKind::Equals);
                    self.ready = true;
                }
                ';' => {
                    self.push_simple(TokenKind::Semicolon);
                    self.ready = true;
                }
                '(' => {
                    self.push_simple(TokenKind::LParen);
                    self.ready = true;
                }
                ')' => {
                    self.lex_rparen()?;
                    self.ready = true;
                }
                '#' => self.lex_hash()?,
                '/' => self.lex_slash()?,
                '"' => self.lex_string()?,
                _ => self.lex_number_or_identifier()?,
            }
        }

        // EOF sentinel
        let span = Span::point(self.cursor.line(), self.cursor.column());
        self.tokens.push(Token::new(TokenKind::Newline, span));
        Ok(self.tokens)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn start(&self) -> Start {
        (
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    fn span_from(&self, start: Start) -> Span {
        Span::new(start.0, self.cursor.position(), start.1, start.2)
    }

    fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.cursor.line(), self.cursor.column())
    }

    fn error_from(&self, message: impl Into<String>, start: Start) -> SyntaxError {
        SyntaxError::new(message, start.1, start.2)
    }

    /// Rejects disallowed control and directional formatting codepoints.
    fn validate(&self, c: char) -> SyntaxResult<()> {
        if is_forbidden_control(c) {
            return Err(self.error_here("Invalid control character"));
        }
        if is_forbidden_format(c) {
            return Err(self.error_here("Invalid formatting character"));
        }
        Ok(())
    }

    /// Consumes a line terminator at the cursor, collapsing CRLF, and
    /// records the new line. Returns false if the cursor is not on a
    /// terminator.
    fn consume_newline(&mut self) -> bool {
        if self.cursor.starts_with("\r\n") {
            self.cursor.advance_bytes(2);
        } else if is_newline(self.cursor.current_char()) {
            self.cursor.advance();
        } else {
            return false;
        }
        self.cursor.record_newline();
        true
    }

    fn push_simple(&mut self, kind: TokenKind) {
        let start = self.start();
        self.cursor.advance();
        let span = self.span_from(start);
        self.tokens.push(Token::new(kind, span));
    }

    fn push_token(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind, span));
    }

    // =========================================================================
    // STRUCTURAL FORMS
    // =========================================================================

    /// Collapses `( string )` into a Tag token when the closing paren
    /// arrives; bare `)` is kept for the parser to reject.
    fn lex_rparen(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance();
        let span = self.span_from(start);

        let n = self.tokens.len();
        if n >= 2 && matches!(self.tokens[n - 2].kind, TokenKind::LParen) {
            let name_token = self.tokens.pop();
            self.tokens.pop();
            match name_token {
                Some(Token {
                    kind: TokenKind::String(value),
                    ..
                }) => self.push_token(TokenKind::Tag(value), span),
                _ => return Err(SyntaxError::at("Invalid type annotation", span)),
            }
        } else if n >= 1 && matches!(self.tokens[n - 1].kind, TokenKind::LParen) {
            return Err(SyntaxError::at("Empty parentheses", span));
        } else {
            self.push_token(TokenKind::RParen, span);
        }
        Ok(())
    }

    /// A bare `\` continues the current logical line: following whitespace
    /// is consumed up through the next line terminator, tolerating an
    /// embedded `//` comment, and no Newline token is emitted.
    fn lex_line_continuation(&mut self) -> SyntaxResult<()> {
        self.cursor.advance();
        let mut in_comment = false;
        while !self.cursor.is_at_end() {
            if !in_comment && self.cursor.starts_with("//") {
                in_comment = true;
                self.cursor.advance_bytes(2);
                continue;
            }
            let c = self.cursor.current_char();
            if is_newline(c) {
                self.consume_newline();
                break;
            }
            if in_comment || c.is_whitespace() {
                self.validate(c)?;
                self.cursor.advance();
                continue;
            }
            break;
        }
        Ok(())
    }

    /// `//`, `/*` (nestable), or `/-`.
    fn lex_slash(&mut self) -> SyntaxResult<()> {
        if self.cursor.starts_with("//") {
            // Single-line comment; the terminator stays for the main loop.
            self.cursor.advance_bytes(2);
            while !self.cursor.is_at_end() {
                let c = self.cursor.current_char();
                if is_newline(c) {
                    break;
                }
                self.validate(c)?;
                self.cursor.advance();
            }
            self.ready = true;
            return Ok(());
        }

        if self.cursor.starts_with("/*") {
            self.cursor.advance_bytes(2);
            let mut depth: u32 = 1;
            while !self.cursor.is_at_end() {
                if self.cursor.starts_with("*/") {
                    self.cursor.advance_bytes(2);
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                } else if self.cursor.starts_with("/*") {
                    self.cursor.advance_bytes(2);
                    depth += 1;
                } else if !self.consume_newline() {
                    self.validate(self.cursor.current_char())?;
                    self.cursor.advance();
                }
            }
            // An unterminated block comment runs to end of input.
            return Ok(());
        }

        if self.cursor.starts_with("/-") {
            let start = self.start();
            self.cursor.advance_bytes(2);
            let span = self.span_from(start);
            self.push_token(TokenKind::Slashdash, span);
            self.ready = true;
            return Ok(());
        }

        Err(self.error_here("Unexpected character '/'"))
    }

    /// `#` introduces a keyword value or a raw string.
    fn lex_hash(&mut self) -> SyntaxResult<()> {
        let start = self.start();

        let after_hash = &self.cursor.remaining()[1..];
        for (spelling, keyword) in Keyword::SPELLINGS {
            if after_hash.starts_with(spelling) {
                self.cursor.advance_bytes(1 + spelling.len());
                let span = self.span_from(start);
                self.push_token(TokenKind::Keyword(*keyword), span);
                self.ready = false;
                return Ok(());
            }
        }

        let mut hashes = 0usize;
        while self.cursor.char_at(hashes) == '#' {
            hashes += 1;
        }
        if self.cursor.char_at(hashes) == '"' {
            return self.lex_raw_string(hashes);
        }

        Err(self.error_here("Unexpected character '#'"))
    }

    // =========================================================================
    // STRINGS
    // =========================================================================

    fn lex_string(&mut self) -> SyntaxResult<()> {
        if self.cursor.starts_with("\"\"\"") {
            self.lex_multiline_string()
        } else {
            self.lex_quoted_string()
        }
    }

    /// Single-line quoted string with escape processing.
    fn lex_quoted_string(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_from("Unterminated string starting", start));
            }
            let c = self.cursor.current_char();
            self.validate(c)?;
            match c {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\n' => return Err(self.error_from("Unterminated string starting", start)),
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(self.error_from("Unterminated string starting", start));
                    }
                    if let Some(escaped) = self.lex_escape()? {
                        value.push(escaped);
                    }
                }
                _ => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }

        let span = self.span_from(start);
        self.push_token(TokenKind::String(value), span);
        self.ready = false;
        Ok(())
    }

    /// Multi-line quoted string: `"""` + newline ... `"""`.
    ///
    /// The closing line's content is the indent prefix. The prefix check
    /// runs against the raw (pre-escape) text of every content line; the
    /// prefix is then stripped, by character count, from the processed
    /// lines.
    fn lex_multiline_string(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance_bytes(3);
        if !self.consume_newline() {
            return Err(self.error_here("Expected newline after opening triple-quote"));
        }

        let mut lines: Vec<String> = Vec::new();
        let mut raw_lines: Vec<String> = Vec::new();
        let mut line = String::new();
        let mut raw_line = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_from("Unterminated multi-line string starting", start));
            }
            if self.cursor.starts_with("\"\"\"") {
                self.cursor.advance_bytes(3);
                break;
            }
            let c = self.cursor.current_char();
            self.validate(c)?;
            if c == '\n' {
                self.cursor.advance();
                self.cursor.record_newline();
                lines.push(std::mem::take(&mut line));
                raw_lines.push(std::mem::take(&mut raw_line));
                continue;
            }
            if c == '\\' {
                raw_line.push('\\');
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(self.error_from("Unterminated multi-line string starting", start));
                }
                if let Some(escaped) = self.lex_escape()? {
                    line.push(escaped);
                }
                continue;
            }
            line.push(c);
            raw_line.push(c);
            self.cursor.advance();
        }

        // The text on the closing line is the indent prefix.
        let indent = line;
        for raw in &raw_lines {
            if !raw.starts_with(&indent) {
                return Err(self.error_from(
                    format!(
                        "Inconsistent indentation in multi-line string starting: expected indent {indent:?}"
                    ),
                    start,
                ));
            }
        }
        let indent_chars = indent.chars().count();
        let value = lines
            .iter()
            .map(|ln| ln.chars().skip(indent_chars).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        let span = self.span_from(start);
        self.push_token(TokenKind::String(value), span);
        self.ready = false;
        Ok(())
    }

    /// Raw string with `hashes` leading `#` markers; dispatches between the
    /// single-line and multi-line forms. No escape processing.
    fn lex_raw_string(&mut self, hashes: usize) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance_bytes(hashes);

        if self.cursor.starts_with("\"\"\"") {
            self.cursor.advance_bytes(3);
            if !self.consume_newline() {
                return Err(self.error_here("Expected newline after opening raw triple-quote"));
            }

            let content_start = self.cursor.position();
            let closer = format!("\"\"\"{}", "#".repeat(hashes));
            loop {
                if self.cursor.is_at_end() {
                    return Err(
                        self.error_from("Unterminated raw multi-line string starting", start)
                    );
                }
                if self.cursor.starts_with(&closer) {
                    break;
                }
                let c = self.cursor.current_char();
                self.validate(c)?;
                if c == '\n' {
                    self.cursor.advance();
                    self.cursor.record_newline();
                } else {
                    self.cursor.advance();
                }
            }
            let content = self.cursor.slice_from(content_start);
            let mut content_lines: Vec<&str> = content.split('\n').collect();
            let indent = content_lines.pop().unwrap_or("");
            for ln in &content_lines {
                if !ln.starts_with(indent) {
                    return Err(self.error_from(
                        format!(
                            "Inconsistent indentation in raw multi-line string starting: expected indent {indent:?}"
                        ),
                        start,
                    ));
                }
            }
            let value = content_lines
                .iter()
                .map(|ln| &ln[indent.len()..])
                .collect::<Vec<_>>()
                .join("\n");
            self.cursor.advance_bytes(closer.len());

            let span = self.span_from(start);
            self.push_token(TokenKind::String(value), span);
        } else {
            self.cursor.advance(); // opening quote
            let content_start = self.cursor.position();
            let closer = format!("\"{}", "#".repeat(hashes));
            loop {
                if self.cursor.is_at_end() {
                    return Err(self.error_from("Unterminated raw string starting", start));
                }
                if self.cursor.starts_with(&closer) {
                    break;
                }
                let c = self.cursor.current_char();
                self.validate(c)?;
                if c == '\n' {
                    return Err(self.error_from("Unterminated string starting", start));
                }
                self.cursor.advance();
            }
            let value = self.cursor.slice_from(content_start).to_string();
            self.cursor.advance_bytes(closer.len());

            let span = self.span_from(start);
            self.push_token(TokenKind::String(value), span);
        }

        self.ready = false;
        Ok(())
    }

    /// Handles the sequence after a backslash inside a quoted or
    /// multi-line string. Returns `None` for the whitespace escape, which
    /// produces nothing and gobbles all following whitespace (line breaks
    /// included).
    fn lex_escape(&mut self) -> SyntaxResult<Option<char>> {
        let c = self.cursor.current_char();

        if c.is_whitespace() {
            while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
                if !self.consume_newline() {
                    self.cursor.advance();
                }
            }
            return Ok(None);
        }

        let mapped = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\\' => '\\',
            '"' => '"',
            'b' => '\u{8}',
            'f' => '\u{c}',
            's' => ' ',
            'u' => return self.lex_unicode_escape().map(Some),
            _ => {
                return Err(self.error_here(format!("Invalid string escape sequence: \\{c}")));
            }
        };
        self.cursor.advance();
        Ok(Some(mapped))
    }

    /// Strict `\u{1–6 hex digits}` escape. The cursor is on the `u`.
    fn lex_unicode_escape(&mut self) -> SyntaxResult<char> {
        let start = self.start();
        self.cursor.advance();
        if !self.cursor.match_char('{') {
            return Err(self.error_from("Invalid Unicode escape sequence: expected '{' after \\u", start));
        }
        let digits_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_hexdigit() {
            self.cursor.advance();
        }
        let digits = self.cursor.slice_from(digits_start).to_string();
        if !self.cursor.match_char('}') {
            return Err(
                self.error_from(format!("Invalid Unicode escape sequence: \\u{{{digits}"), start)
            );
        }
        match parse_hex_codepoint(&digits).and_then(codepoint_to_char) {
            Some(c) => Ok(c),
            None => Err(self.error_from(
                format!("Invalid Unicode escape sequence: \\u{{{digits}}}"),
                start,
            )),
        }
    }

    // =========================================================================
    // NUMBERS AND IDENTIFIERS
    // =========================================================================

    fn lex_number_or_identifier(&mut self) -> SyntaxResult<()> {
        let c = self.cursor.current_char();

        if self.cursor.starts_with("0x") {
            return self.lex_radix_number(16, "hexadecimal");
        }
        if self.cursor.starts_with("0o") {
            return self.lex_radix_number(8, "octal");
        }
        if self.cursor.starts_with("0b") {
            return self.lex_radix_number(2, "binary");
        }
        if c.is_ascii_digit() || (matches!(c, '+' | '-') && self.cursor.char_at(1).is_ascii_digit())
        {
            return self.lex_decimal_number();
        }
        if c.is_numeric() {
            // Unicode digits have no literal form and may not open an
            // identifier.
            return Err(self.error_here("Unexpected digit"));
        }
        if !is_reserved(c) {
            return self.lex_identifier();
        }
        Err(self.error_here(format!("Unexpected character '{c}'")))
    }

    /// Hex, octal, or binary integer: prefix, optional sign, then digits
    /// with `_` separators.
    fn lex_radix_number(&mut self, radix: u32, radix_name: &str) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance_bytes(2);

        let digits_start = self.cursor.position();
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        if !self.cursor.current_char().is_digit(radix) {
            return Err(self.error_from(format!("Invalid {radix_name} number"), start));
        }
        while self.cursor.current_char().is_digit(radix) || self.cursor.current_char() == '_' {
            self.cursor.advance();
        }

        let text: String = self
            .cursor
            .slice_from(digits_start)
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let value = match i128::from_str_radix(&text, radix) {
            Ok(v) => v,
            Err(_) => return Err(self.error_from(format!("Invalid {radix_name} number"), start)),
        };

        let span = self.span_from(start);
        self.push_token(TokenKind::Number(Number::Integer(value)), span);
        self.after_number(false, false)?;
        self.ready = false;
        Ok(())
    }

    /// Decimal literal: optional sign, digits, optional fraction and
    /// exponent. Integer unless a fraction or exponent is present.
    fn lex_decimal_number(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        while self.cursor.current_char().is_ascii_digit() || self.cursor.current_char() == '_' {
            self.cursor.advance();
        }

        let mut is_float = false;
        let mut has_exponent = false;

        if self.cursor.current_char() == '.' && self.cursor.char_at(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() || self.cursor.current_char() == '_'
            {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let offset = if matches!(self.cursor.char_at(1), '+' | '-') {
                2
            } else {
                1
            };
            if self.cursor.char_at(offset).is_ascii_digit() {
                is_float = true;
                has_exponent = true;
                self.cursor.advance_bytes(offset);
                while self.cursor.current_char().is_ascii_digit()
                    || self.cursor.current_char() == '_'
                {
                    self.cursor.advance();
                }
            }
        }

        let text: String = self
            .cursor
            .slice_from(start.0)
            .chars()
            .filter(|&c| c != '_')
            .collect();
        let kind = if is_float {
            match text.parse::<f64>() {
                Ok(v) => TokenKind::Number(Number::Float(v)),
                Err(_) => return Err(self.error_from("Invalid decimal number", start)),
            }
        } else {
            match text.parse::<i128>() {
                Ok(v) => TokenKind::Number(Number::Integer(v)),
                Err(_) => return Err(self.error_from("Invalid decimal number", start)),
            }
        };

        let span = self.span_from(start);
        self.push_token(kind, span);
        self.after_number(has_exponent, true)?;
        self.ready = false;
        Ok(())
    }

    /// Enforces what may directly follow a number: whitespace, `;` `)` `}`,
    /// an explicit `#suffix`, or (decimal only) a bare suffix identifier.
    fn after_number(&mut self, has_exponent: bool, allow_bare_suffix: bool) -> SyntaxResult<()> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let c = self.cursor.current_char();
        if c == '#' {
            return self.lex_explicit_suffix();
        }
        if c.is_whitespace() || matches!(c, ';' | ')' | '}') {
            return Ok(());
        }
        if allow_bare_suffix && !is_reserved(c) {
            return self.lex_bare_suffix(has_exponent);
        }
        Err(self.error_here(format!("Unexpected character '{c}' after number")))
    }

    /// `#identifier` suffix type annotation directly after a number.
    fn lex_explicit_suffix(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        self.cursor.advance();

        if self.cursor.is_at_end() {
            return Err(self.error_from("Unexpected end of input after '#'", start));
        }
        let c = self.cursor.current_char();
        if c == '"' {
            return Err(self.error_from("Expected bare identifier after '#', got quoted string", start));
        }
        if c.is_whitespace()
            || matches!(c, '\\' | '/' | ')' | '{' | '}' | ';' | '[' | ']' | '=')
        {
            return Err(self.error_from("Expected type identifier after '#'", start));
        }

        let ident_start = self.cursor.position();
        while !self.cursor.is_at_end()
            && !self.cursor.current_char().is_whitespace()
            && !is_reserved(self.cursor.current_char())
        {
            self.validate(self.cursor.current_char())?;
            self.cursor.advance();
        }
        let identifier = self.cursor.slice_from(ident_start).to_string();
        if !is_valid_bare_identifier(&identifier) {
            return Err(self.error_from(
                format!("Invalid identifier in explicit suffix type annotation: '{identifier}'"),
                start,
            ));
        }
        let span = self.span_from(start);
        self.push_suffix_tag(identifier, span)
    }

    /// Bare suffix identifier after a decimal number (`10px`).
    fn lex_bare_suffix(&mut self, has_exponent: bool) -> SyntaxResult<()> {
        let start = self.start();
        let ident_start = self.cursor.position();
        while !self.cursor.is_at_end()
            && !self.cursor.current_char().is_whitespace()
            && !is_reserved(self.cursor.current_char())
        {
            self.validate(self.cursor.current_char())?;
            self.cursor.advance();
        }
        let identifier = self.cursor.slice_from(ident_start).to_string();

        if has_exponent {
            return Err(self.error_from(
                "Invalid suffix type annotation on number with exponential part",
                start,
            ));
        }
        if !is_valid_bare_identifier(&identifier) {
            return Err(self.error_from(
                format!("Invalid identifier in suffix type annotation: '{identifier}'"),
                start,
            ));
        }
        let mut chars = identifier.chars();
        let first = chars.next().unwrap_or('\0');
        if matches!(first, '.' | ',') {
            return Err(self.error_from(
                format!("Invalid identifier in suffix type annotation: '{identifier}' starts with '{first}'"),
                start,
            ));
        }
        if matches!(first, 'e' | 'E') {
            if let Some(second) = chars.next() {
                if second == '+' || second == '-' || second.is_ascii_digit() {
                    return Err(self.error_from(
                        format!(
                            "Invalid identifier in suffix type annotation: '{identifier}' starts with exponential marker"
                        ),
                        start,
                    ));
                }
            }
        }

        let span = self.span_from(start);
        self.push_suffix_tag(identifier, span)?;

        if !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if !c.is_whitespace() && !matches!(c, ';' | ')' | '}') {
                return Err(self.error_here(format!("Unexpected character '{c}' after type suffix")));
            }
        }
        Ok(())
    }

    /// Emits a SuffixTag, or rejects it when the experimental feature is
    /// disabled.
    fn push_suffix_tag(&mut self, identifier: String, span: Span) -> SyntaxResult<()> {
        if !self.config.suffix_annotations {
            return Err(SyntaxError::at(
                "Illegal use of experimental suffix type annotation feature",
                span,
            ));
        }
        self.push_token(TokenKind::SuffixTag(identifier), span);
        Ok(())
    }

    /// Bare identifier: scanned to the next whitespace or reserved
    /// character.
    fn lex_identifier(&mut self) -> SyntaxResult<()> {
        let start = self.start();
        while !self.cursor.is_at_end()
            && !self.cursor.current_char().is_whitespace()
            && !is_reserved(self.cursor.current_char())
        {
            self.validate(self.cursor.current_char())?;
            self.cursor.advance();
        }
        let identifier = self.cursor.slice_from(start.0).to_string();

        if Keyword::is_spelling(&identifier) {
            return Err(self.error_from(
                format!(
                    "Invalid identifier string '{identifier}'; use '#{identifier}' for keyword values or quote for string"
                ),
                start,
            ));
        }
        let mut chars = identifier.chars();
        if chars.next() == Some('.') {
            if let Some(second) = chars.next() {
                if second.is_ascii_digit() {
                    return Err(self.error_from(
                        format!(
                            "Invalid identifier string '{identifier}'; identifiers cannot start with a dot followed by a digit"
                        ),
                        start,
                    ));
                }
            }
        }

        let span = self.span_from(start);
        self.push_token(TokenKind::String(identifier), span);
        self.ready = false;
        Ok(())
    }
}
