use ironroute_core::{DEFAULT_CAPACITY, GraphError, SquareMatrix};

use crate::graph::Graph;
use crate::traits::EdgeCost;

/// A weighted undirected graph.
///
/// `Network` composes a [`Graph`] with an index-aligned weight matrix.
/// Absent edges always weigh `f64::INFINITY`. Read-only graph queries
/// (traversals, connectivity, index lookups) go through
/// [`graph`](Self::graph).
#[derive(Debug, Clone)]
pub struct Network<T> {
    pub(crate) graph: Graph<T>,
    pub(crate) weights: SquareMatrix<f64>,
}

impl<T: PartialEq> Default for Network<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Network<T> {
    /// Create an empty network with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
            weights: SquareMatrix::new(capacity, f64::INFINITY),
        }
    }

    /// The underlying unweighted graph.
    #[inline]
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    #[inline]
    pub fn contains(&self, vertex: &T) -> bool {
        self.graph.contains(vertex)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.graph.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[T] {
        self.graph.vertices()
    }

    /// See [`Graph::vertex_mut`].
    pub fn vertex_mut(&mut self, vertex: &T) -> Option<&mut T> {
        self.graph.vertex_mut(vertex)
    }

    /// Insert `vertex` with no edges and return its index.
    pub fn add_vertex(&mut self, vertex: T) -> Result<usize, GraphError> {
        let live = self.graph.size();
        let index = self.graph.add_vertex(vertex)?;
        if self.graph.capacity() > self.weights.capacity() {
            self.weights.grow(self.graph.capacity(), live);
        }
        self.weights.clear_index(index);
        Ok(index)
    }

    /// Remove `vertex`, compacting the weight matrix along with the graph.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T, GraphError> {
        let live = self.graph.size();
        let index = self.graph.index_of(vertex).ok();
        let removed = self.graph.remove_vertex(vertex)?;
        if let Some(index) = index {
            self.weights.remove_index(index, live);
        }
        Ok(removed)
    }

    /// Connect `v1` and `v2` with `weight`, replacing any previous weight.
    pub fn add_edge(&mut self, v1: &T, v2: &T, weight: f64) -> Result<(), GraphError> {
        let (i, j) = self.graph.endpoints(v1, v2)?;
        self.graph.adjacency.set_symmetric(i, j, true);
        self.weights.set_symmetric(i, j, weight);
        Ok(())
    }

    /// Disconnect `v1` and `v2` and reset their weight to infinity.
    pub fn remove_edge(&mut self, v1: &T, v2: &T) -> Result<(), GraphError> {
        let (i, j) = self.graph.endpoints(v1, v2)?;
        self.graph.adjacency.set_symmetric(i, j, false);
        self.weights.set_symmetric(i, j, f64::INFINITY);
        Ok(())
    }

    /// Whether `v1` and `v2` share an edge.
    pub fn is_adjacent(&self, v1: &T, v2: &T) -> Result<bool, GraphError> {
        self.graph.is_adjacent(v1, v2)
    }

    /// Change the weight of an existing edge.
    ///
    /// Unknown endpoints fail with [`GraphError::InvalidVertex`]. If the two
    /// vertices are not connected nothing is written, so an absent edge
    /// keeps weighing infinity.
    pub fn update_edge_weight(&mut self, v1: &T, v2: &T, weight: f64) -> Result<(), GraphError> {
        let (i, j) = self.graph.endpoints(v1, v2)?;
        self.write_weight(i, j, weight);
        Ok(())
    }

    /// Weight of the edge between `v1` and `v2`; infinity for unknown
    /// vertices or absent edges.
    pub fn edge_weight(&self, v1: &T, v2: &T) -> f64 {
        match self.graph.endpoints(v1, v2) {
            Ok((i, j)) => self.weights.at(i, j),
            Err(_) => f64::INFINITY,
        }
    }

    /// Raw weight matrix entry; infinity for indices outside `0..size()`.
    pub fn weight_at(&self, i: usize, j: usize) -> f64 {
        let n = self.size();
        if i < n && j < n {
            self.weights.at(i, j)
        } else {
            f64::INFINITY
        }
    }

    /// Recompute the weight of the edge `from → to` with `cost` (evaluated
    /// on the stored vertices) and store it for both directions. Returns
    /// the new weight, or `None` when the vertices are not connected.
    pub fn reweigh_edge<C: EdgeCost<T>>(
        &mut self,
        from: &T,
        to: &T,
        cost: &C,
    ) -> Result<Option<f64>, GraphError> {
        let (i, j) = self.graph.endpoints(from, to)?;
        if !self.graph.adjacency.at(i, j) {
            return Ok(None);
        }
        let all = self.graph.vertices();
        let weight = cost.cost(&all[i], &all[j]);
        self.write_weight(i, j, weight);
        Ok(Some(weight))
    }

    /// Recompute every edge weight with `cost`.
    ///
    /// Edges are visited as `(vertex, neighbour)` pairs in index order, so
    /// each undirected edge is evaluated in both directions and keeps the
    /// weight of the later one. Returns the number of evaluations.
    pub fn reweigh<C: EdgeCost<T>>(&mut self, cost: &C) -> usize {
        let n = self.size();
        let mut evaluated = 0;
        for i in 0..n {
            for j in 0..n {
                if !self.graph.adjacency.at(i, j) {
                    continue;
                }
                let all = self.graph.vertices.as_slice();
                let weight = cost.cost(&all[i], &all[j]);
                self.weights.set_symmetric(i, j, weight);
                evaluated += 1;
            }
        }
        log::debug!("recomputed {evaluated} directed edge weights over {n} vertices");
        evaluated
    }

    fn write_weight(&mut self, i: usize, j: usize, weight: f64) {
        if self.graph.adjacency.at(i, j) {
            log::trace!("edge ({i}, {j}) weight -> {weight}");
            self.weights.set_symmetric(i, j, weight);
        }
    }
}

impl<T: PartialEq + Clone> Network<T> {
    /// See [`Graph::adjacent_vertices`].
    pub fn adjacent_vertices(&self, vertex: &T) -> Result<Vec<T>, GraphError> {
        self.graph.adjacent_vertices(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Network<&'static str> {
        let mut n = Network::new();
        for v in ["A", "B", "C"] {
            n.add_vertex(v).unwrap();
        }
        n
    }

    #[test]
    fn add_edge_sets_weight_both_ways() {
        let mut n = abc();
        n.add_edge(&"A", &"B", 5.0).unwrap();
        assert_eq!(n.is_adjacent(&"A", &"B"), Ok(true));
        assert_eq!(n.edge_weight(&"A", &"B"), 5.0);
        assert_eq!(n.edge_weight(&"B", &"A"), 5.0);
        let (a, b) = (n.graph().index_of(&"A").unwrap(), n.graph().index_of(&"B").unwrap());
        assert_eq!(n.weight_at(a, b), 5.0);
    }

    #[test]
    fn absent_edges_weigh_infinity() {
        let n = abc();
        assert_eq!(n.edge_weight(&"A", &"C"), f64::INFINITY);
        assert_eq!(n.edge_weight(&"A", &"Z"), f64::INFINITY);
        assert_eq!(n.weight_at(0, 9), f64::INFINITY);
    }

    #[test]
    fn add_edge_invalid_vertex() {
        let mut n = abc();
        assert_eq!(n.add_edge(&"A", &"Z", 1.0), Err(GraphError::InvalidVertex));
        assert_eq!(n.graph().edge_count(), 0);
    }

    #[test]
    fn update_edge_weight_only_touches_existing_edges() {
        let mut n = abc();
        n.add_edge(&"A", &"B", 1.0).unwrap();
        n.update_edge_weight(&"B", &"A", 4.5).unwrap();
        assert_eq!(n.edge_weight(&"A", &"B"), 4.5);
        n.update_edge_weight(&"A", &"C", 2.0).unwrap();
        assert_eq!(n.edge_weight(&"A", &"C"), f64::INFINITY);
        assert_eq!(
            n.update_edge_weight(&"A", &"Q", 2.0),
            Err(GraphError::InvalidVertex)
        );
    }

    #[test]
    fn remove_edge_resets_weight() {
        let mut n = abc();
        n.add_edge(&"A", &"B", 3.0).unwrap();
        n.remove_edge(&"A", &"B").unwrap();
        assert_eq!(n.is_adjacent(&"B", &"A"), Ok(false));
        assert_eq!(n.edge_weight(&"A", &"B"), f64::INFINITY);
    }

    #[test]
    fn remove_vertex_compacts_weights() {
        let mut n = abc();
        n.add_vertex("D").unwrap();
        n.add_edge(&"A", &"B", 1.0).unwrap();
        n.add_edge(&"C", &"D", 7.0).unwrap();
        n.add_edge(&"A", &"D", 2.0).unwrap();
        n.remove_vertex(&"B").unwrap();
        assert_eq!(n.edge_weight(&"C", &"D"), 7.0);
        assert_eq!(n.edge_weight(&"A", &"D"), 2.0);
        assert_eq!(n.edge_weight(&"A", &"C"), f64::INFINITY);
        // The vacated last slot must not leak into a new vertex.
        n.add_vertex("E").unwrap();
        assert_eq!(n.edge_weight(&"D", &"E"), f64::INFINITY);
        assert_eq!(n.is_adjacent(&"D", &"E"), Ok(false));
    }

    #[test]
    fn remove_vertex_errors_leave_weights() {
        let mut n = abc();
        n.add_edge(&"A", &"B", 1.0).unwrap();
        assert_eq!(n.remove_vertex(&"Z"), Err(GraphError::NotFound));
        assert_eq!(n.edge_weight(&"A", &"B"), 1.0);
    }

    #[test]
    fn weights_survive_growth() {
        let mut n = Network::with_capacity(1);
        for v in 0..6 {
            n.add_vertex(v).unwrap();
            if v > 0 {
                n.add_edge(&(v - 1), &v, v as f64).unwrap();
            }
        }
        for v in 1..6 {
            assert_eq!(n.edge_weight(&(v - 1), &v), v as f64);
        }
        assert_eq!(n.edge_weight(&0, &5), f64::INFINITY);
    }

    #[test]
    fn reweigh_uses_stored_vertices() {
        let mut n = Network::new();
        for v in [1, 2, 3] {
            n.add_vertex(v).unwrap();
        }
        n.add_edge(&1, &2, 1.0).unwrap();
        n.add_edge(&2, &3, 1.0).unwrap();
        let by_target = |_: &i32, to: &i32| f64::from(*to * 10);
        // Edge {1,2} is evaluated as 1->2 then 2->1; the later write wins.
        assert_eq!(n.reweigh(&by_target), 4);
        assert_eq!(n.edge_weight(&1, &2), 10.0);
        assert_eq!(n.edge_weight(&2, &3), 20.0);
        assert_eq!(n.edge_weight(&1, &3), f64::INFINITY);
    }

    #[test]
    fn reweigh_edge_single() {
        let mut n = abc();
        n.add_edge(&"A", &"B", 1.0).unwrap();
        let cost = |_: &&str, to: &&str| to.len() as f64 + 0.5;
        assert_eq!(n.reweigh_edge(&"A", &"B", &cost), Ok(Some(1.5)));
        assert_eq!(n.edge_weight(&"B", &"A"), 1.5);
        assert_eq!(n.reweigh_edge(&"A", &"C", &cost), Ok(None));
        assert_eq!(
            n.reweigh_edge(&"A", &"X", &cost),
            Err(GraphError::InvalidVertex)
        );
    }
}
