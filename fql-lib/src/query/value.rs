//! Values substituted into filter templates.

/// A dynamic value that can be rendered as an FQL literal.
///
/// # Example
///
/// ```
/// use fql_lib::query::Value;
///
/// assert_eq!(Value::from("O'Neil").to_fql(), r"'O\'Neil'");
/// assert_eq!(Value::from(vec![1i64, 2, 3]).to_fql(), "(1, 2, 3)");
/// assert_eq!(Value::raw("me()").to_fql(), "me()");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// Rendered as `1` or `0`.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Unsigned integer literal, for ids beyond `i64`.
    UInt(u64),
    /// Floating point literal. NaN and infinities render as `null`.
    Float(f64),
    /// Quoted string literal.
    String(String),
    /// Parenthesised list, for `IN` conditions.
    List(Vec<Value>),
    /// Copied verbatim (function calls, sub-selects).
    Raw(String),
}

impl Value {
    /// Creates a raw value that is copied into the statement as-is.
    pub fn raw(fragment: impl Into<String>) -> Self {
        Value::Raw(fragment.into())
    }

    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Renders this value as an FQL literal.
    pub fn to_fql(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Float(n) if n.is_finite() => n.to_string(),
            Value::Float(_) => "null".to_string(),
            Value::String(s) => quote(s),
            Value::List(items) => {
                let parts: Vec<_> = items.iter().map(Value::to_fql).collect();
                format!("({})", parts.join(", "))
            }
            Value::Raw(raw) => raw.clone(),
        }
    }
}

/// Quotes a string for FQL, backslash-escaping quotes and backslashes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
