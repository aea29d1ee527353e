use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A runtime-typed value, the element type of every container in this crate.
///
/// Values carry their own type tag, so a single container can hold integers,
/// text and nested lists side by side. Equality via `PartialEq` is
/// structural and type-sensitive: `Int(1)`, `Float(1.0)` and `Text("1")`
/// are three different values. The ordered containers compare elements this
/// way; the unordered containers use the content hash derived in
/// [`crate::ContentHash`], which draws the same distinctions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// The "no value" sentinel. Lookups and pops hand it back through
    /// `Option`, never as a stored stand-in; it has no canonical encoding
    /// and is rejected by every hashing path.
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true if this value is, or transitively contains, the absent
    /// sentinel and therefore has no canonical encoding.
    fn contains_absent(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::List(items) => items.iter().any(Value::contains_absent),
            _ => false,
        }
    }
}

/// Canonically encodes a value to deterministic CBOR bytes.
///
/// The encoding is byte-stable for a given value: enum variants serialize
/// externally tagged, struct-free, with no map whose ordering could drift.
/// Fails with [`Error::AbsentValue`] when the value is, or contains, the
/// absent sentinel, so that "no value" can never be hashed into a valid
/// entry.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>> {
    if value.contains_absent() {
        return Err(Error::AbsentValue);
    }
    let mut bytes = Vec::new();
    ciborium::into_writer(value, &mut bytes)?;
    Ok(bytes)
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
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

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "<absent>"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Bytes(v) => {
                write!(f, "0x")?;
                for byte in v {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
