use std::fmt;

use crate::error::{Error, Result};
use crate::iter::{Drain, Iterable};
use crate::value::Value;

/// An ordered, immutable sequence of values.
///
/// The read-only counterpart of [`crate::List`]: once built, a tuple's
/// contents never change, and every combining operation returns a new
/// tuple. Membership and equality are structural.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    /// Creates a new empty tuple.
    pub fn new() -> Self {
        Tuple::default()
    }

    /// Creates a tuple holding every element of the source, in order.
    pub fn from_iterable<I: Iterable + ?Sized>(source: &I) -> Self {
        Tuple {
            values: source.iterate().cloned().collect(),
        }
    }

    /// Creates a tuple from an explicit sequence of values.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Tuple {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the value at the index.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Returns a new tuple holding the values in `[start, end)`. Bounds
    /// beyond the tuple are clamped; an inverted range yields an empty
    /// tuple.
    pub fn range(&self, start: usize, end: usize) -> Tuple {
        let len = self.values.len();
        let start = start.min(len);
        let end = end.min(len);
        let values = if start < end {
            self.values[start..end].to_vec()
        } else {
            Vec::new()
        };
        Tuple { values }
    }

    /// Returns the index of the first occurrence of the value.
    pub fn index<T: Into<Value>>(&self, value: T) -> Option<usize> {
        let value = value.into();
        self.values.iter().position(|v| *v == value)
    }

    /// Returns how many times the value occurs.
    pub fn count<T: Into<Value>>(&self, value: T) -> usize {
        let value = value.into();
        self.values.iter().filter(|v| **v == value).count()
    }

    /// Tests for membership in the tuple.
    pub fn contains<T: Into<Value>>(&self, value: T) -> bool {
        self.values.contains(&value.into())
    }

    /// Returns true if both tuples hold equal values in the same order.
    pub fn equals(&self, other: &Tuple) -> bool {
        self.values == other.values
    }

    /// Returns the concatenation of the two tuples.
    pub fn concatenate(&self, other: &Tuple) -> Tuple {
        let mut values = self.values.clone();
        values.extend(other.values.iter().cloned());
        Tuple { values }
    }

    /// Returns the tuple repeated `n` times.
    pub fn multiply(&self, n: usize) -> Tuple {
        let mut values = Vec::with_capacity(self.values.len() * n);
        for _ in 0..n {
            values.extend(self.values.iter().cloned());
        }
        Tuple { values }
    }

    /// Returns the tuple in reverse order.
    pub fn reverse(&self) -> Tuple {
        let mut values = self.values.clone();
        values.reverse();
        Tuple { values }
    }

    /// Creates an independent copy.
    pub fn copy(&self) -> Tuple {
        self.clone()
    }
}

impl Iterable for Tuple {
    fn length(&self) -> usize {
        self.values.len()
    }

    fn iterate(&self) -> Drain<'_> {
        Drain::new(self.values.iter())
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
