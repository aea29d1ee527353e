use std::fmt;

use indexmap::IndexMap;

use crate::digest::ContentHash;
use crate::error::Result;
use crate::iter::{Drain, Iterable};
use crate::value::Value;

/// An unordered collection of unique values, indexed by content hash.
///
/// Membership is decided by [`ContentHash`] identity, so a set can hold
/// values of mixed types and still deduplicate reliably. Every stored
/// entry satisfies the index-consistency invariant: its map key is the
/// derivation of the stored value. Enumeration order is arbitrary and
/// not reproducible between calls.
#[derive(Debug, Default)]
pub struct Set {
    entries: IndexMap<ContentHash, Value>,
}

impl Set {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Set::default()
    }

    /// Creates a set holding every element of the source, deduplicated.
    pub fn from_iterable<I: Iterable + ?Sized>(source: &I) -> Result<Self> {
        let mut set = Set::new();
        for value in source.iterate() {
            set.add(value.clone())?;
        }
        Ok(set)
    }

    /// Creates a set from an explicit list of values.
    pub fn from_values<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut set = Set::new();
        for value in values {
            set.add(value)?;
        }
        Ok(set)
    }

    /// Adds a value to the set. Adding an already-present value is a no-op.
    pub fn add<T: Into<Value>>(&mut self, value: T) -> Result<()> {
        let value = value.into();
        let hash = ContentHash::derive(&value)?;
        self.entries.insert(hash, value);
        Ok(())
    }

    /// Removes a value from the set. Removing an absent value is a silent
    /// no-op.
    pub fn remove<T: Into<Value>>(&mut self, value: T) -> Result<()> {
        let hash = ContentHash::derive(&value.into())?;
        self.entries.swap_remove(&hash);
        Ok(())
    }

    /// Tests for membership in the set.
    pub fn contains<T: Into<Value>>(&self, value: T) -> Result<bool> {
        let hash = ContentHash::derive(&value.into())?;
        Ok(self.entries.contains_key(&hash))
    }

    /// Removes and returns an arbitrary element, or `None` if the set is
    /// empty. Which element is popped is implementation-defined.
    pub fn pop(&mut self) -> Option<Value> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Updates the set in place, adding every element of the other set.
    pub fn combine(&mut self, other: &Set) -> Result<()> {
        for value in other.iterate() {
            self.add(value.clone())?;
        }
        Ok(())
    }

    /// Returns true if the set has no elements in common with the other
    /// set. Vacuously true when the other set is empty.
    pub fn disjoint(&self, other: &Set) -> bool {
        other
            .entries
            .keys()
            .all(|hash| !self.entries.contains_key(hash))
    }

    /// Returns true if both sets hold exactly the same elements.
    pub fn equals(&self, other: &Set) -> bool {
        self.superset_of(other) && other.superset_of(self)
    }

    /// Tests whether every element of the other set is in this set.
    pub fn superset_of(&self, other: &Set) -> bool {
        // Stored keys are the derivations of their values, so comparing
        // them is equivalent to re-deriving each element.
        other
            .entries
            .keys()
            .all(|hash| self.entries.contains_key(hash))
    }

    /// Tests whether every element of this set is in the other set.
    pub fn subset_of(&self, other: &Set) -> bool {
        other.superset_of(self)
    }

    /// Returns a new set with the elements common to both sets.
    pub fn intersection(&self, other: &Set) -> Set {
        let entries = self
            .entries
            .iter()
            .filter(|(hash, _)| other.entries.contains_key(*hash))
            .map(|(hash, value)| (*hash, value.clone()))
            .collect();
        Set { entries }
    }

    /// Returns a new set with the elements of this set that are not in the
    /// other set.
    pub fn difference(&self, other: &Set) -> Set {
        let entries = self
            .entries
            .iter()
            .filter(|(hash, _)| !other.entries.contains_key(*hash))
            .map(|(hash, value)| (*hash, value.clone()))
            .collect();
        Set { entries }
    }

    /// Returns a new set with the elements in either set but not both.
    pub fn symmetric_difference(&self, other: &Set) -> Set {
        let mut out = self.difference(other);
        out.entries.extend(other.difference(self).entries);
        out
    }

    /// Returns a new set with the elements of both sets.
    pub fn union(&self, other: &Set) -> Result<Set> {
        let mut out = self.copy()?;
        out.combine(other)?;
        Ok(out)
    }

    /// Creates an independent copy with freshly derived hashes. Mutating
    /// the copy never affects the original.
    pub fn copy(&self) -> Result<Set> {
        Set::from_iterable(self)
    }

    /// Discards all elements, leaving an empty, reusable set.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Iterable for Set {
    fn length(&self) -> usize {
        self.entries.len()
    }

    fn iterate(&self) -> Drain<'_> {
        Drain::new(self.entries.values())
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.entries.values().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
