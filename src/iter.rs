use crate::value::Value;

/// A lazy, finite walk over a container's current contents.
///
/// Each call to [`Iterable::iterate`] produces a fresh, independent drain;
/// the drain itself is not restartable. A drain does no work until `next`
/// is asked for an element and spawns nothing in the background, so
/// dropping one partway through is an ordinary drop. Because a drain
/// borrows its container, the container cannot be mutated while one is
/// alive.
///
/// Enumeration order is insertion order for the ordered containers and
/// arbitrary for the hash-indexed ones; for the latter it may differ
/// between drains of the same container.
pub struct Drain<'a> {
    inner: Box<dyn Iterator<Item = &'a Value> + 'a>,
}

impl<'a> Drain<'a> {
    pub(crate) fn new(inner: impl Iterator<Item = &'a Value> + 'a) -> Self {
        Drain {
            inner: Box::new(inner),
        }
    }
}

impl<'a> Iterator for Drain<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// The uniform sequence surface implemented by all four container kinds.
pub trait Iterable {
    /// Returns the number of elements in the container.
    fn length(&self) -> usize;

    /// Starts a fresh walk over the container's current contents.
    fn iterate(&self) -> Drain<'_>;

    /// Returns true if the container has no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}
