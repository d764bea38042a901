/// Parent sentinel meaning "no predecessor / root".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// An ordered sequence of distinct vertices produced by a traversal or a
/// shortest-path query.
///
/// A `Path` owns copies of the vertices; it is independent of the graph it
/// came from and stays valid across later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<T> {
    vertices: Vec<T>,
}

impl<T> Path<T> {
    /// The empty path (unreachable target).
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.vertices.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.vertices.last()
    }

    /// The vertex after the start, i.e. the next step to take.
    #[inline]
    pub fn next_hop(&self) -> Option<&T> {
        self.vertices.get(1)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vertices.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.vertices
    }
}

impl<T: Clone> Path<T> {
    /// Copy the vertices at `indices`, in order.
    pub(crate) fn from_indices(indices: &[usize], vertices: &[T]) -> Self {
        Self {
            vertices: indices.iter().map(|&i| vertices[i].clone()).collect(),
        }
    }

    /// Walk `parents` back from `target` to the root and reverse.
    ///
    /// The caller checks that `target` was reached; parent chains built by
    /// BFS and Dijkstra are acyclic.
    pub(crate) fn from_parents(parents: &[usize], target: usize, vertices: &[T]) -> Self {
        let mut indices = Vec::new();
        let mut at = target;
        while at != NO_PARENT {
            indices.push(at);
            at = parents[at];
        }
        indices.reverse();
        Self::from_indices(&indices, vertices)
    }
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
