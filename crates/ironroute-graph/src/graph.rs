use ironroute_core::{DEFAULT_CAPACITY, GraphError, SquareMatrix, VertexTable, grown_capacity};

/// An undirected graph stored as a dense boolean adjacency matrix.
///
/// `Graph` owns a [`VertexTable`] and an index-aligned adjacency
/// [`SquareMatrix`]. Both grow by doubling and both are compacted together
/// when a vertex is removed.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) vertices: VertexTable<T>,
    pub(crate) adjacency: SquareMatrix<bool>,
    generation: u64,
}

impl<T: PartialEq> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Graph<T> {
    /// Create an empty graph with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph with room for `capacity` vertices before the
    /// first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(capacity),
            adjacency: SquareMatrix::new(capacity, false),
            generation: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Vertices
    // -----------------------------------------------------------------------

    /// Insert `vertex` at the next free index and return that index.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if an equal vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: T) -> Result<usize, GraphError> {
        if self.vertices.contains(&vertex) {
            return Err(GraphError::DuplicateVertex);
        }
        if self.vertices.is_full() {
            let capacity = grown_capacity(self.vertices.capacity());
            self.adjacency.grow(capacity, self.vertices.len());
            self.vertices.grow(capacity);
        }
        let index = self.vertices.push(vertex);
        self.adjacency.clear_index(index);
        Ok(index)
    }

    /// Remove `vertex`, returning the stored value.
    ///
    /// Every vertex after it moves down one index and the generation
    /// counter is bumped.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T, GraphError> {
        if self.is_empty() {
            return Err(GraphError::EmptyOperation);
        }
        let index = self.vertices.index_of(vertex).ok_or(GraphError::NotFound)?;
        let live = self.vertices.len();
        self.adjacency.remove_index(index, live);
        let removed = self.vertices.remove(index).ok_or(GraphError::NotFound)?;
        self.generation += 1;
        log::debug!("removed vertex at index {index}, {} left", live - 1);
        Ok(removed)
    }

    /// Whether an equal vertex is present.
    #[inline]
    pub fn contains(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex slots allocated before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Counter bumped by every removal. An index obtained from
    /// [`index_of`](Self::index_of) is only meaningful while the generation
    /// is unchanged.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current index of `vertex`.
    pub fn index_of(&self, vertex: &T) -> Result<usize, GraphError> {
        self.vertices.index_of(vertex).ok_or(GraphError::NotFound)
    }

    /// Vertex at `index`.
    pub fn vertex(&self, index: usize) -> Result<&T, GraphError> {
        self.vertices.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.size(),
        })
    }

    /// Mutable access to the stored vertex equal to `vertex`.
    ///
    /// The caller must not change the parts of the value that take part in
    /// equality.
    pub fn vertex_mut(&mut self, vertex: &T) -> Option<&mut T> {
        let index = self.vertices.index_of(vertex)?;
        self.vertices.get_mut(index)
    }

    /// All vertices in current index order.
    #[inline]
    pub fn vertices(&self) -> &[T] {
        self.vertices.as_slice()
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Resolve both endpoints or fail with [`GraphError::InvalidVertex`].
    pub(crate) fn endpoints(&self, v1: &T, v2: &T) -> Result<(usize, usize), GraphError> {
        match (self.vertices.index_of(v1), self.vertices.index_of(v2)) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(GraphError::InvalidVertex),
        }
    }

    /// Connect `v1` and `v2`.
    pub fn add_edge(&mut self, v1: &T, v2: &T) -> Result<(), GraphError> {
        let (i, j) = self.endpoints(v1, v2)?;
        self.adjacency.set_symmetric(i, j, true);
        Ok(())
    }

    /// Disconnect `v1` and `v2`. Removing an absent edge is not an error.
    pub fn remove_edge(&mut self, v1: &T, v2: &T) -> Result<(), GraphError> {
        let (i, j) = self.endpoints(v1, v2)?;
        self.adjacency.set_symmetric(i, j, false);
        Ok(())
    }

    /// Whether `v1` and `v2` share an edge.
    pub fn is_adjacent(&self, v1: &T, v2: &T) -> Result<bool, GraphError> {
        let (i, j) = self.endpoints(v1, v2)?;
        Ok(self.adjacency.at(i, j))
    }

    /// Number of undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .map(|i| (i..n).filter(|&j| self.adjacency.at(i, j)).count())
            .sum()
    }

    /// Neighbour indices of `index` in ascending order.
    pub(crate) fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .row(index, self.size())
            .enumerate()
            .filter_map(|(j, adjacent)| adjacent.then_some(j))
    }

    /// Index of `vertex`, or [`GraphError::EmptyOperation`] /
    /// [`GraphError::InvalidVertex`] for traversal starts.
    pub(crate) fn traversal_index(&self, vertex: &T) -> Result<usize, GraphError> {
        if self.is_empty() {
            return Err(GraphError::EmptyOperation);
        }
        self.vertices
            .index_of(vertex)
            .ok_or(GraphError::InvalidVertex)
    }
}

impl<T: PartialEq + Clone> Graph<T> {
    /// Vertices adjacent to `vertex`, in index order.
    pub fn adjacent_vertices(&self, vertex: &T) -> Result<Vec<T>, GraphError> {
        let index = self
            .vertices
            .index_of(vertex)
            .ok_or(GraphError::InvalidVertex)?;
        let all = self.vertices.as_slice();
        Ok(self.neighbors(index).map(|j| all[j].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn chain(names: &[&'static str]) -> Graph<&'static str> {
        let mut g = Graph::new();
        for &n in names {
            g.add_vertex(n).unwrap();
        }
        for w in names.windows(2) {
            g.add_edge(&w[0], &w[1]).unwrap();
        }
        g
    }

    #[test]
    fn add_vertex_assigns_indices() {
        let mut g = Graph::new();
        assert_eq!(g.add_vertex("A"), Ok(0));
        assert_eq!(g.add_vertex("B"), Ok(1));
        assert_eq!(g.size(), 2);
        assert!(g.contains(&"A"));
        assert!(!g.is_empty());
    }

    #[test]
    fn duplicate_vertex_rejected() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        assert_eq!(g.add_vertex("A"), Err(GraphError::DuplicateVertex));
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut g = Graph::with_capacity(2);
        for i in 0..5 {
            g.add_vertex(i).unwrap();
        }
        assert_eq!(g.capacity(), 8);
        g.add_edge(&0, &4).unwrap();
        assert_eq!(g.is_adjacent(&4, &0), Ok(true));
        assert_eq!(g.vertices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut g = Graph::with_capacity(0);
        g.add_vertex('x').unwrap();
        g.add_vertex('y').unwrap();
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn growth_keeps_edges() {
        let mut g = Graph::with_capacity(2);
        g.add_vertex(0).unwrap();
        g.add_vertex(1).unwrap();
        g.add_edge(&0, &1).unwrap();
        g.add_vertex(2).unwrap();
        assert_eq!(g.is_adjacent(&0, &1), Ok(true));
        assert_eq!(g.is_adjacent(&1, &2), Ok(false));
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = chain(&["A", "B", "C"]);
        assert_eq!(g.is_adjacent(&"B", &"A"), Ok(true));
        g.remove_edge(&"B", &"A").unwrap();
        assert_eq!(g.is_adjacent(&"A", &"B"), Ok(false));
        assert_eq!(g.is_adjacent(&"B", &"A"), Ok(false));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn edge_ops_reject_unknown_vertices() {
        let mut g = chain(&["A", "B"]);
        assert_eq!(g.add_edge(&"A", &"Z"), Err(GraphError::InvalidVertex));
        assert_eq!(g.remove_edge(&"Z", &"A"), Err(GraphError::InvalidVertex));
        assert_eq!(g.is_adjacent(&"A", &"Z"), Err(GraphError::InvalidVertex));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_shifts_later_indices() {
        let mut g = chain(&["A", "B", "C", "D"]);
        g.add_edge(&"A", &"D").unwrap();
        let generation = g.generation();
        assert_eq!(g.remove_vertex(&"B"), Ok("B"));
        assert!(!g.contains(&"B"));
        assert_eq!(g.size(), 3);
        assert_eq!(g.index_of(&"A"), Ok(0));
        assert_eq!(g.index_of(&"C"), Ok(1));
        assert_eq!(g.index_of(&"D"), Ok(2));
        assert_ne!(g.generation(), generation);
        // Surviving edges follow their vertices.
        assert_eq!(g.is_adjacent(&"C", &"D"), Ok(true));
        assert_eq!(g.is_adjacent(&"A", &"D"), Ok(true));
        assert_eq!(g.is_adjacent(&"A", &"C"), Ok(false));
    }

    #[test]
    fn remove_then_readd_has_no_stale_edges() {
        let mut g = chain(&["A", "B", "C"]);
        g.remove_vertex(&"C").unwrap();
        g.add_vertex("C").unwrap();
        assert_eq!(g.is_adjacent(&"B", &"C"), Ok(false));
    }

    #[test]
    fn remove_vertex_errors() {
        let mut g: Graph<&str> = Graph::new();
        assert_eq!(g.remove_vertex(&"A"), Err(GraphError::EmptyOperation));
        g.add_vertex("A").unwrap();
        assert_eq!(g.remove_vertex(&"B"), Err(GraphError::NotFound));
    }

    #[test]
    fn index_lookups() {
        let g = chain(&["A", "B"]);
        assert_eq!(g.index_of(&"Q"), Err(GraphError::NotFound));
        assert_eq!(g.vertex(1), Ok(&"B"));
        assert_eq!(
            g.vertex(2),
            Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn adjacent_vertices_in_index_order() {
        let mut g = chain(&["A", "B", "C", "D"]);
        g.add_edge(&"B", &"D").unwrap();
        assert_eq!(g.adjacent_vertices(&"B"), Ok(vec!["A", "C", "D"]));
        assert_eq!(g.adjacent_vertices(&"X"), Err(GraphError::InvalidVertex));
    }

    #[test]
    fn vertex_mut_edits_in_place() {
        let mut g: Graph<(u8, u32)> = Graph::new();
        g.add_vertex((1, 10)).unwrap();
        if let Some(v) = g.vertex_mut(&(1, 10)) {
            v.1 = 11;
        }
        assert_eq!(g.vertices(), &[(1, 11)]);
        assert!(g.vertex_mut(&(9, 9)).is_none());
    }

    #[test]
    fn random_graphs_keep_symmetry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut g = Graph::with_capacity(1);
            let n = rng.random_range(1..15);
            for v in 0..n {
                g.add_vertex(v).unwrap();
            }
            for _ in 0..n * 2 {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                if rng.random_bool(0.8) {
                    g.add_edge(&a, &b).unwrap();
                } else {
                    g.remove_edge(&a, &b).unwrap();
                }
            }
            if rng.random_bool(0.5) {
                let victim = rng.random_range(0..n);
                g.remove_vertex(&victim).unwrap();
            }
            for a in g.vertices() {
                for b in g.vertices() {
                    assert_eq!(g.is_adjacent(a, b), g.is_adjacent(b, a));
                }
            }
        }
    }
}
