/// Per-query cost of moving between two adjacent vertices.
///
/// Used by the `*_with` Dijkstra queries in place of the stored weight
/// matrix. The cost may depend on the direction of travel. Negative costs
/// are accepted but the solver does not detect negative cycles.
pub trait EdgeCost<T> {
    /// Cost of moving from `from` to adjacent `to`. `f64::INFINITY` makes
    /// the move impossible.
    fn cost(&self, from: &T, to: &T) -> f64;
}

impl<T, F> EdgeCost<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    #[inline]
    fn cost(&self, from: &T, to: &T) -> f64 {
        self(from, to)
    }
}
