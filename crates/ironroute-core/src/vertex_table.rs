//! The [`VertexTable`] type: vertex values addressed by small indices.

/// A growable, insertion-ordered table of vertex values.
///
/// Lookup by value is a linear scan using `PartialEq`. The table tracks its
/// own logical capacity so it grows in step with the matrices indexed by
/// it.
#[derive(Debug, Clone)]
pub struct VertexTable<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: PartialEq> VertexTable<T> {
    /// Create an empty table with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the next push needs a [`grow`](Self::grow) first.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Raise the logical capacity to `new_capacity`.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.items.reserve_exact(new_capacity - self.items.len());
        log::trace!("vertex table grew from {} to {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
    }

    /// Index of the first vertex equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Append `value` and return its index. Callers grow the table first
    /// when it is full; uniqueness is the caller's concern.
    pub fn push(&mut self, value: T) -> usize {
        self.items.push(value);
        self.items.len() - 1
    }

    /// Remove the vertex at `index`, shifting every later vertex down by one.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Vertices in index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_insertion_indices() {
        let mut t = VertexTable::with_capacity(4);
        assert_eq!(t.push("a"), 0);
        assert_eq!(t.push("b"), 1);
        assert_eq!(t.index_of(&"b"), Some(1));
        assert_eq!(t.index_of(&"z"), None);
    }

    #[test]
    fn full_then_grow() {
        let mut t = VertexTable::with_capacity(1);
        t.push(1);
        assert!(t.is_full());
        t.grow(2);
        assert!(!t.is_full());
        assert_eq!(t.capacity(), 2);
    }

    #[test]
    fn remove_shifts_later_indices() {
        let mut t = VertexTable::with_capacity(4);
        for v in ["a", "b", "c", "d"] {
            t.push(v);
        }
        assert_eq!(t.remove(1), Some("b"));
        assert_eq!(t.index_of(&"a"), Some(0));
        assert_eq!(t.index_of(&"c"), Some(1));
        assert_eq!(t.index_of(&"d"), Some(2));
        assert_eq!(t.remove(9), None);
        assert_eq!(t.as_slice(), &["a", "c", "d"]);
    }
}
