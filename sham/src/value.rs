// vim: tw=80
//! The closed variant type used for expected arguments and canned results.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CannedError;

/// A loosely-typed argument or result value.
///
/// Expectations store their arguments and canned results as `Value`s so that
/// one engine can verify calls of any shape.  Equality is deep and
/// structural: two `Seq`s or `Record`s with equal contents are equal, no
/// matter how they were built.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value.  In a result slot it means "no error".
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A canned error, stored by message.
    Error(String),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A keyed record of values.  Keys are ordered, so display output is
    /// deterministic.
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Create an error value from a message.
    ///
    /// # Examples
    /// ```
    /// # use sham::Value;
    /// let e = Value::error("xxxxx is not a digit");
    /// assert_eq!(e.to_error().unwrap().to_string(), "xxxxx is not a digit");
    /// ```
    pub fn error<S: Into<String>>(message: S) -> Self {
        Value::Error(message.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Reconstitute a canned result slot as an error.
    ///
    /// Canned results are stored as generic `Value`s, so an error slot must
    /// be converted back into an error type at the point of use.  `Nil`
    /// means "no error" and yields `None`.  An `Error` value carries its
    /// message verbatim; any other value is coerced using its display form.
    ///
    /// # Examples
    /// ```
    /// # use sham::Value;
    /// assert!(Value::Nil.to_error().is_none());
    /// assert_eq!(Value::error("boom").to_error().unwrap().to_string(),
    ///            "boom");
    /// ```
    pub fn to_error(&self) -> Option<CannedError> {
        match self {
            Value::Nil => None,
            Value::Error(message) => Some(CannedError(message.clone())),
            other => Some(CannedError(other.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Error(message) => f.write_str(message),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<CannedError> for Value {
    fn from(e: CannedError) -> Self {
        Value::Error(e.0)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Record(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

/// Build a `Vec<Value>` from a mixed list of literals.
///
/// Each element is converted with [`Value::from`], so anything with a
/// `From` conversion works directly.
///
/// # Examples
/// ```
/// # use sham::{values, Value};
/// let args = values![2, "two", true, Value::Nil];
/// assert_eq!(args[1], Value::Str("two".to_owned()));
/// ```
#[macro_export]
macro_rules! values {
    () => { ::std::vec::Vec::<$crate::Value>::new() };
    ($($v:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($v)),+]
    };
}
