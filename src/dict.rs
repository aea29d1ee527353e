use std::fmt;

use indexmap::IndexMap;

use crate::digest::ContentHash;
use crate::error::{Error, Result};
use crate::iter::{Drain, Iterable};
use crate::tuple::Tuple;
use crate::value::Value;

/// An unordered key/value mapping, indexed by the content hash of the key.
///
/// Internally two digest-keyed maps share the same hash space, one holding
/// the original keys and one the values; they are always mutated together.
/// Key identity follows [`ContentHash`], so keys of mixed types coexist.
/// Enumeration yields keys in arbitrary order.
#[derive(Debug, Default)]
pub struct Dict {
    keys: IndexMap<ContentHash, Value>,
    values: IndexMap<ContentHash, Value>,
}

impl Dict {
    /// Creates a new empty dict.
    pub fn new() -> Self {
        Dict::default()
    }

    /// Creates a dict from an alternating key/value sequence: even-indexed
    /// elements are keys, odd-indexed elements their values. A sequence of
    /// odd length fails with [`Error::ArityMismatch`].
    pub fn from_iterable<I: Iterable + ?Sized>(source: &I) -> Result<Self> {
        let len = source.length();
        if len % 2 != 0 {
            return Err(Error::ArityMismatch {
                keys: len / 2 + 1,
                values: len / 2,
            });
        }
        let mut dict = Dict::new();
        let mut drain = source.iterate();
        while let Some(key) = drain.next() {
            let value = drain.next().cloned().unwrap_or(Value::Absent);
            dict.set(key.clone(), value)?;
        }
        Ok(dict)
    }

    /// Creates a dict from explicit (key, value) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut dict = Dict::new();
        for (key, value) in pairs {
            dict.set(key, value)?;
        }
        Ok(dict)
    }

    /// Creates a dict pairing each key with the value at the same position.
    /// Mismatched counts fail with [`Error::ArityMismatch`].
    pub fn from_keys_values<K, V>(keys: Vec<K>, values: Vec<V>) -> Result<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        if keys.len() != values.len() {
            return Err(Error::ArityMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Dict::from_pairs(keys.into_iter().zip(values))
    }

    /// Returns the value stored under the key, or `None` if the key is
    /// absent. A missing key is an ordinary result, never an error.
    ///
    /// A stored `Value::Absent` comes back as `Some(&Value::Absent)`, so it
    /// remains distinguishable from a missing key.
    pub fn get<K: Into<Value>>(&self, key: K) -> Result<Option<&Value>> {
        let hash = ContentHash::derive(&key.into())?;
        Ok(self.values.get(&hash))
    }

    /// Stores the value under the key, overwriting any previous value.
    /// The key must be encodable; the absent sentinel is rejected.
    pub fn set<K: Into<Value>, V: Into<Value>>(&mut self, key: K, value: V) -> Result<()> {
        let key = key.into();
        let hash = ContentHash::derive(&key)?;
        self.keys.insert(hash, key);
        self.values.insert(hash, value.into());
        Ok(())
    }

    /// Removes the entry for the key, if any. An absent key is a silent
    /// no-op.
    pub fn remove<K: Into<Value>>(&mut self, key: K) -> Result<()> {
        let hash = ContentHash::derive(&key.into())?;
        self.keys.swap_remove(&hash);
        self.values.swap_remove(&hash);
        Ok(())
    }

    /// Tests whether the key is present.
    pub fn contains<K: Into<Value>>(&self, key: K) -> Result<bool> {
        let hash = ContentHash::derive(&key.into())?;
        Ok(self.keys.contains_key(&hash))
    }

    /// Updates the dict with every entry of the other dict. On shared keys
    /// the other dict's value wins.
    pub fn combine(&mut self, other: &Dict) -> Result<()> {
        for (hash, key) in &other.keys {
            let value = other.values.get(hash).cloned().unwrap_or(Value::Absent);
            self.set(key.clone(), value)?;
        }
        Ok(())
    }

    /// Removes an arbitrary entry and returns its key, or `None` if the
    /// dict is empty.
    pub fn pop_key(&mut self) -> Option<Value> {
        self.pop().map(|(key, _)| key)
    }

    /// Removes an arbitrary entry and returns its value, or `None` if the
    /// dict is empty.
    pub fn pop_value(&mut self) -> Option<Value> {
        self.pop().map(|(_, value)| value)
    }

    /// Removes and returns an arbitrary (key, value) entry, or `None` if
    /// the dict is empty. Which entry is popped is implementation-defined.
    pub fn pop(&mut self) -> Option<(Value, Value)> {
        let (hash, key) = self.keys.pop()?;
        let value = self.values.swap_remove(&hash).unwrap_or(Value::Absent);
        Some((key, value))
    }

    /// Returns true if both dicts hold the same keys mapped to equal
    /// values, independent of enumeration order.
    pub fn equals(&self, other: &Dict) -> bool {
        if self.length() != other.length() {
            return false;
        }
        other
            .keys
            .keys()
            .all(|hash| self.values.get(hash) == other.values.get(hash))
    }

    /// Returns a snapshot of the keys, in current enumeration order.
    pub fn keys(&self) -> Tuple {
        Tuple::from_values(self.keys.values().cloned())
    }

    /// Returns a snapshot of the values, in current enumeration order.
    pub fn values(&self) -> Tuple {
        Tuple::from_values(self.values.values().cloned())
    }

    /// Returns a snapshot of the entries as two-element `[key value]`
    /// lists, in current enumeration order.
    pub fn items(&self) -> Tuple {
        Tuple::from_values(self.keys.iter().map(|(hash, key)| {
            let value = self.values.get(hash).cloned().unwrap_or(Value::Absent);
            Value::List(vec![key.clone(), value])
        }))
    }

    /// Creates an independent copy with freshly derived hashes. Mutating
    /// the copy never affects the original.
    pub fn copy(&self) -> Result<Dict> {
        let mut out = Dict::new();
        out.combine(self)?;
        Ok(out)
    }

    /// Discards all entries, leaving an empty, reusable dict.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl Iterable for Dict {
    fn length(&self) -> usize {
        self.keys.len()
    }

    /// Walks the dict's keys.
    fn iterate(&self) -> Drain<'_> {
        Drain::new(self.keys.values())
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (hash, key)) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let value = self.values.get(hash).unwrap_or(&Value::Absent);
            write!(f, "({} {})", key, value)?;
        }
        write!(f, "}}")
    }
}
