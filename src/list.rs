use std::fmt;

use crate::error::{Error, Result};
use crate::iter::{Drain, Iterable};
use crate::value::Value;

/// An ordered, mutable sequence of values.
///
/// Elements keep their insertion order and may repeat; membership and
/// equality are structural (`PartialEq` on [`Value`]), with no hashing
/// involved. Enumeration order is deterministic and stable between calls
/// absent mutation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct List {
    values: Vec<Value>,
}

impl List {
    /// Creates a new empty list.
    pub fn new() -> Self {
        List::default()
    }

    /// Creates a list holding every element of the source, in order.
    pub fn from_iterable<I: Iterable + ?Sized>(source: &I) -> Self {
        List {
            values: source.iterate().cloned().collect(),
        }
    }

    /// Creates a list from an explicit sequence of values.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        List {
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

    /// Returns a new list holding the values in `[start, end)`. Bounds
    /// beyond the list are clamped; an inverted range yields an empty list.
    pub fn range(&self, start: usize, end: usize) -> List {
        let len = self.values.len();
        let start = start.min(len);
        let end = end.min(len);
        let values = if start < end {
            self.values[start..end].to_vec()
        } else {
            Vec::new()
        };
        List { values }
    }

    /// Replaces the value at the index.
    pub fn set<T: Into<Value>>(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Inserts the value at the index, shifting later elements right.
    /// `index == length` appends.
    pub fn insert<T: Into<Value>>(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value.into());
        Ok(())
    }

    /// Removes the value at the index, shifting later elements left.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.remove(index);
        Ok(())
    }

    /// Removes the values in `[start, end)`. Bounds beyond the list are
    /// clamped; an inverted range removes nothing.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let len = self.values.len();
        let start = start.min(len);
        let end = end.min(len);
        if start < end {
            self.values.drain(start..end);
        }
    }

    /// Appends the value to the end of the list.
    pub fn append<T: Into<Value>>(&mut self, value: T) {
        self.values.push(value.into());
    }

    /// Removes and returns the last value. Fails with [`Error::Empty`] on
    /// an empty list.
    pub fn pop(&mut self) -> Result<Value> {
        self.values.pop().ok_or(Error::Empty)
    }

    /// Removes the first occurrence of the value, if any. A missing value
    /// is a silent no-op.
    pub fn remove<T: Into<Value>>(&mut self, value: T) {
        let value = value.into();
        if let Some(index) = self.values.iter().position(|v| *v == value) {
            self.values.remove(index);
        }
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

    /// Tests for membership in the list.
    pub fn contains<T: Into<Value>>(&self, value: T) -> bool {
        self.values.contains(&value.into())
    }

    /// Returns true if both lists hold equal values in the same order.
    pub fn equals(&self, other: &List) -> bool {
        self.values == other.values
    }

    /// Returns the concatenation of the two lists.
    pub fn concatenate(&self, other: &List) -> List {
        let mut values = self.values.clone();
        values.extend(other.values.iter().cloned());
        List { values }
    }

    /// Returns the list repeated `n` times.
    pub fn multiply(&self, n: usize) -> List {
        let mut values = Vec::with_capacity(self.values.len() * n);
        for _ in 0..n {
            values.extend(self.values.iter().cloned());
        }
        List { values }
    }

    /// Returns the list in reverse order.
    pub fn reverse(&self) -> List {
        let mut values = self.values.clone();
        values.reverse();
        List { values }
    }

    /// Creates an independent copy. Mutating the copy never affects the
    /// original.
    pub fn copy(&self) -> List {
        self.clone()
    }

    /// Discards all elements, leaving an empty, reusable list.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl Iterable for List {
    fn length(&self) -> usize {
        self.values.len()
    }

    fn iterate(&self) -> Drain<'_> {
        Drain::new(self.values.iter())
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> List {
        List::from_values([Value::Int(1), Value::Float(2.2), Value::Text("three".into())])
    }

    #[test]
    fn get_in_and_out_of_range() {
        let list = sample();
        assert_eq!(list.get(0).unwrap(), &Value::Int(1));
        assert_eq!(list.get(2).unwrap(), &Value::Text("three".into()));
        assert!(matches!(
            list.get(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn range_clamps() {
        let list = sample();
        assert_eq!(list.range(1, 3).length(), 2);
        assert_eq!(list.range(1, 100).length(), 2);
        assert_eq!(list.range(2, 1).length(), 0);
        assert_eq!(list.range(50, 60).length(), 0);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list = sample();
        list.set(1, 9).unwrap();
        assert_eq!(list.get(1).unwrap(), &Value::Int(9));
        assert_eq!(list.length(), 3);
        assert!(list.set(3, 0).is_err());
    }

    #[test]
    fn insert_shifts_right() {
        let mut list = List::from_values([1, 3]);
        list.insert(1, 2).unwrap();
        assert!(list.equals(&List::from_values([1, 2, 3])));

        // index == length appends
        list.insert(3, 4).unwrap();
        assert_eq!(list.get(3).unwrap(), &Value::Int(4));

        assert!(matches!(
            list.insert(9, 0),
            Err(Error::IndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn delete_shifts_left() {
        let mut list = List::from_values([1, 2, 3]);
        list.delete(1).unwrap();
        assert!(list.equals(&List::from_values([1, 3])));
        assert!(list.delete(2).is_err());
    }

    #[test]
    fn delete_range_clamps() {
        let mut list = List::from_values([1, 2, 3, 4, 5]);
        list.delete_range(1, 3);
        assert!(list.equals(&List::from_values([1, 4, 5])));
        list.delete_range(2, 100);
        assert!(list.equals(&List::from_values([1, 4])));
        list.delete_range(1, 0); // inverted, no-op
        assert_eq!(list.length(), 2);
    }

    #[test]
    fn append_and_pop() {
        let mut list = List::new();
        list.append(1);
        list.append("two");
        assert_eq!(list.pop().unwrap(), Value::Text("two".into()));
        assert_eq!(list.pop().unwrap(), Value::Int(1));
        assert!(matches!(list.pop(), Err(Error::Empty)));
    }

    #[test]
    fn remove_first_occurrence() {
        let mut list = List::from_values([1, 2, 1]);
        list.remove(1);
        assert!(list.equals(&List::from_values([2, 1])));
        list.remove(99); // silent no-op
        assert_eq!(list.length(), 2);
    }

    #[test]
    fn index_and_count() {
        let list = List::from_values([1, 2, 1]);
        assert_eq!(list.index(1), Some(0));
        assert_eq!(list.index(2), Some(1));
        assert_eq!(list.index(9), None);
        assert_eq!(list.count(1), 2);
        assert_eq!(list.count(9), 0);
    }

    #[test]
    fn contains_is_structural() {
        let list = sample();
        assert!(list.contains(2.2));
        assert!(!list.contains("2.2"));
        // lists can hold the absent sentinel; no hashing is involved
        let mut list = list;
        list.append(Value::Absent);
        assert!(list.contains(Value::Absent));
    }

    #[test]
    fn equals_is_order_sensitive() {
        let a = List::from_values([1, 2]);
        let b = List::from_values([2, 1]);
        assert!(!a.equals(&b));
        assert!(a.equals(&a.copy()));
    }

    #[test]
    fn concatenate_multiply_reverse() {
        let a = List::from_values([1, 2]);
        let b = List::from_values([3]);
        assert!(a.concatenate(&b).equals(&List::from_values([1, 2, 3])));
        assert!(a.multiply(2).equals(&List::from_values([1, 2, 1, 2])));
        assert!(a.multiply(0).is_empty());
        assert!(a.reverse().equals(&List::from_values([2, 1])));
        // sources are untouched
        assert_eq!(a.length(), 2);
        assert_eq!(b.length(), 1);
    }

    #[test]
    fn copy_is_independent() {
        let a = List::from_values([1, 2]);
        let mut b = a.copy();
        b.append(3);
        assert_eq!(a.length(), 2);
        assert!(!a.contains(3));
    }

    #[test]
    fn iterate_in_insertion_order() {
        let list = sample();
        let seen: Vec<Value> = list.iterate().cloned().collect();
        assert_eq!(
            seen,
            vec![Value::Int(1), Value::Float(2.2), Value::Text("three".into())]
        );
        // a second drain observes the same order
        let again: Vec<Value> = list.iterate().cloned().collect();
        assert_eq!(seen, again);
    }

    #[test]
    fn display_form() {
        assert_eq!(sample().to_string(), "[1 2.2 three]");
        assert_eq!(List::new().to_string(), "[]");
    }
}
