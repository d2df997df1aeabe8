//! Character classification for the KDL lexer.
//!
//! This module decides which codepoints may appear in KDL source at all,
//! which ones terminate lines, which punctuation is reserved, and what
//! counts as a bare identifier. It also provides the helpers for `\u{…}`
//! escape decoding.

/// Checks if a codepoint is a disallowed control character.
///
/// Disallowed: U+0000–U+0007, U+000E–U+001F, U+007F. Note that U+0008
/// (BACKSPACE) is permitted; it is producible through the `\b` escape.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::is_forbidden_control;
///
/// assert!(is_forbidden_control('\u{0}'));
/// assert!(is_forbidden_control('\u{1f}'));
/// assert!(is_forbidden_control('\u{7f}'));
/// assert!(!is_forbidden_control('\u{8}'));
/// assert!(!is_forbidden_control('\t'));
/// ```
pub fn is_forbidden_control(c: char) -> bool {
    let cp = c as u32;
    cp < 0x08 || (0x0E..=0x1F).contains(&cp) || cp == 0x7F
}

/// Checks if a codepoint is a disallowed directional formatting character.
///
/// Disallowed: U+200E–U+200F, U+202A–U+202E, U+2066–U+2069.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::is_forbidden_format;
///
/// assert!(is_forbidden_format('\u{200e}'));
/// assert!(is_forbidden_format('\u{202a}'));
/// assert!(!is_forbidden_format('\u{2028}'));
/// ```
pub fn is_forbidden_format(c: char) -> bool {
    let cp = c as u32;
    (0x200E..=0x200F).contains(&cp)
        || (0x202A..=0x202E).contains(&cp)
        || (0x2066..=0x2069).contains(&cp)
}

/// Checks if a character is a line terminator outside string literals.
///
/// LF, CR, VT, FF, NEL (U+0085), LS (U+2028), PS (U+2029). CRLF is
/// collapsed to a single terminator by the lexer before this test applies.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::is_newline;
///
/// assert!(is_newline('\n'));
/// assert!(is_newline('\r'));
/// assert!(is_newline('\u{85}'));
/// assert!(is_newline('\u{2028}'));
/// assert!(!is_newline(' '));
/// ```
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Checks if a character is reserved punctuation that can never appear in
/// a bare identifier: `\ / ( ) { } ; [ ] " # =`.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::is_reserved;
///
/// assert!(is_reserved('{'));
/// assert!(is_reserved('"'));
/// assert!(is_reserved('='));
/// assert!(!is_reserved('-'));
/// assert!(!is_reserved('.'));
/// ```
pub fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '\\' | '/' | '(' | ')' | '{' | '}' | ';' | '[' | ']' | '"' | '#' | '='
    )
}

/// Checks if a character may appear in a bare identifier.
///
/// Bare identifier characters are everything that is not whitespace, not
/// reserved punctuation, not a disallowed codepoint, and not a BOM.
pub fn is_bare_identifier_char(c: char) -> bool {
    !c.is_whitespace()
        && c != '\u{FEFF}'
        && !is_reserved(c)
        && !is_forbidden_control(c)
        && !is_forbidden_format(c)
}

/// Identifier spellings that collide with keyword values and may therefore
/// never be written bare.
const RESERVED_IDENTIFIERS: &[&str] = &["nan", "inf", "-inf", "+inf", "true", "false", "null"];

/// Checks a full string for validity as a bare identifier.
///
/// This rules out empty strings, digit-led strings, sign-then-digit
/// strings, reserved keyword spellings, and any invalid character.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::is_valid_bare_identifier;
///
/// assert!(is_valid_bare_identifier("node-name"));
/// assert!(is_valid_bare_identifier("-"));
/// assert!(is_valid_bare_identifier("ノード"));
/// assert!(!is_valid_bare_identifier(""));
/// assert!(!is_valid_bare_identifier("10px"));
/// assert!(!is_valid_bare_identifier("-5"));
/// assert!(!is_valid_bare_identifier("true"));
/// assert!(!is_valid_bare_identifier("two words"));
/// ```
pub fn is_valid_bare_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if first.is_ascii_digit() {
        return false;
    }
    if matches!(first, '-' | '+') {
        if let Some(second) = chars.next() {
            if second.is_ascii_digit() {
                return false;
            }
        }
    }
    if RESERVED_IDENTIFIERS.contains(&value) {
        return false;
    }
    value.chars().all(is_bare_identifier_char)
}

/// Parses the hex digit payload of a `\u{…}` escape into a codepoint.
///
/// Accepts 1 to 6 hex digits and rejects anything above U+10FFFF.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::parse_hex_codepoint;
///
/// assert_eq!(parse_hex_codepoint("41"), Some(0x41));
/// assert_eq!(parse_hex_codepoint("10FFFF"), Some(0x10FFFF));
/// assert_eq!(parse_hex_codepoint(""), None);
/// assert_eq!(parse_hex_codepoint("110000"), None);
/// assert_eq!(parse_hex_codepoint("12345678"), None);
/// ```
pub fn parse_hex_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    let mut value: u32 = 0;
    for c in hex.chars() {
        let digit = c.to_digit(16)?;
        value = value.checked_mul(16)?.checked_add(digit)?;
    }
    if value > 0x10FFFF {
        return None;
    }
    Some(value)
}

/// Converts a codepoint to a char, rejecting surrogates.
///
/// # Example
///
/// ```
/// use kdlc_lex::unicode::codepoint_to_char;
///
/// assert_eq!(codepoint_to_char(0x41), Some('A'));
/// assert_eq!(codepoint_to_char(0xD800), None);
/// ```
pub fn codepoint_to_char(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint)
}
