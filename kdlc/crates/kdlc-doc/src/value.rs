//! Scalar values and their canonical KDL spelling.

use kdlc_lex::unicode::is_valid_bare_identifier;

use crate::type_map::TypeMap;

/// A KDL scalar value.
///
/// Keyword literals are never stored as strings: `#true`/`#false` become
/// [`Value::Bool`], `#null` becomes [`Value::Null`], and `#inf`/`#-inf`/
/// `#nan` become the corresponding [`Value::Float`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string, from any of the four string forms or a bare identifier.
    String(String),
    /// A signed integer from any radix.
    Int(i128),
    /// A 64-bit float, including the infinities and NaN.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// The null value.
    Null,
}

impl Value {
    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true for the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Canonical KDL spelling of this value.
    ///
    /// Strings are emitted bare when they are legal bare identifiers and
    /// quoted otherwise; keyword values use their `#` forms; floats use
    /// the shortest representation that re-parses to the same float.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdlc_doc::Value;
    ///
    /// assert_eq!(Value::String("name".into()).to_kdl(), "name");
    /// assert_eq!(Value::String("two words".into()).to_kdl(), "\"two words\"");
    /// assert_eq!(Value::Int(42).to_kdl(), "42");
    /// assert_eq!(Value::Float(100050.0).to_kdl(), "100050.0");
    /// assert_eq!(Value::Bool(true).to_kdl(), "#true");
    /// assert_eq!(Value::Null.to_kdl(), "#null");
    /// assert_eq!(Value::Float(f64::NEG_INFINITY).to_kdl(), "#-inf");
    /// ```
    pub fn to_kdl(&self) -> String {
        match self {
            Value::String(s) => identifier_to_string(s),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => float_to_string(*f),
            Value::Bool(true) => "#true".to_string(),
            Value::Bool(false) => "#false".to_string(),
            Value::Null => "#null".to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_kdl())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value as i128)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i128)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Emits a name (node name, property key, tag, or string value) in
/// canonical form: bare when legal, quoted with escapes otherwise.
///
/// Escaped characters are `\ " \n \t \r \b \f`; spaces are left as-is.
pub fn identifier_to_string(value: &str) -> String {
    if is_valid_bare_identifier(value) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Shortest float spelling that re-parses as the same float.
///
/// The debug formatting always includes a `.` or an exponent, so the
/// emitted literal can never be mistaken for an integer.
fn float_to_string(value: f64) -> String {
    if value == f64::INFINITY {
        "#inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "#-inf".to_string()
    } else if value.is_nan() {
        "#nan".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Emits a value, first mapping it back through the serialization
/// `type_map` when it carries a matching annotation.
pub fn value_to_string(value: &Value, annotation: Option<&str>, type_map: &TypeMap) -> String {
    type_map.apply_value(annotation, value.clone()).to_kdl()
}
