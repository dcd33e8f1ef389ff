//! Raw values supplied for query parameters.

use chrono::{DateTime, Utc};

/// A raw parameter value, before any casting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL / absent
    Null,

    /// Boolean
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit float
    Float(f64),

    /// Text
    String(String),

    /// A point in time; collapses to its unix timestamp when cast
    DateTime(DateTime<Utc>),

    /// An ordered sequence, expanded element-wise by the `j` flag
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this is a NULL value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integer coercion. Strings parse by their leading numeric prefix
    /// (`"12ab"` is 12, `"x"` is 0); null and sequences coerce to 0.
    pub(crate) fn as_int(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Int(n) => *n,
            Value::Float(f) => *f as i64,
            Value::String(s) => leading_int(s),
            Value::DateTime(dt) => dt.timestamp(),
            Value::List(_) => 0,
        }
    }

    /// Float coercion, same leading-prefix rule as [`Value::as_int`].
    pub(crate) fn as_float(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::String(s) => leading_float(s),
            Value::DateTime(dt) => dt.timestamp() as f64,
            Value::List(_) => 0.0,
        }
    }

    /// Text coercion. `true` is `"1"`, `false` is `""`; null and sequences
    /// coerce to the empty string.
    pub(crate) fn as_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => (if *b { "1" } else { "" }).to_owned(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.timestamp().to_string(),
            Value::List(_) => String::new(),
        }
    }

    /// Truthiness for the boolean cast: null, `false`, `0`, `0.0`, `""`,
    /// `"0"` and empty sequences are falsey.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty() && s != "0",
            Value::DateTime(_) => true,
            Value::List(items) => !items.is_empty(),
        }
    }
}

/// Parse the leading integer prefix of a string, 0 when there is none.
fn leading_int(s: &str) -> i64 {
    let t = s.trim_start();
    let (sign, rest) = match t.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}

/// Parse the leading float prefix of a string, 0.0 when there is none.
fn leading_float(s: &str) -> f64 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // exponent only counts if at least one digit follows
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            i = j;
        }
    }
    t[..i].parse::<f64>().unwrap_or(0.0)
}

// Convenient From impls
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
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
        Value::String(v.to_owned())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}
