use ironroute_core::GraphError;

use crate::network::Network;
use crate::path::{NO_PARENT, Path};
use crate::traits::EdgeCost;

/// Distances and predecessors from one Dijkstra run.
struct Dijkstra {
    distances: Vec<f64>,
    parents: Vec<usize>,
}

impl<T: PartialEq> Network<T> {
    /// Single-source Dijkstra over the adjacency matrix.
    ///
    /// The next vertex to settle is found by a linear scan (lowest index wins
    /// ties), giving O(V²) overall, which suits small dense matrices. The
    /// loop ends as soon as no unsettled vertex has a finite distance.
    fn dijkstra<W>(&self, source: usize, weight: W) -> Dijkstra
    where
        W: Fn(usize, usize) -> f64,
    {
        let n = self.size();
        let mut distances = vec![f64::INFINITY; n];
        let mut parents = vec![NO_PARENT; n];
        let mut settled = vec![false; n];
        distances[source] = 0.0;

        let mut settled_count = 0;
        loop {
            let mut current = None;
            let mut best = f64::INFINITY;
            for i in 0..n {
                if !settled[i] && distances[i] < best {
                    best = distances[i];
                    current = Some(i);
                }
            }
            let Some(u) = current else {
                break;
            };
            settled[u] = true;
            settled_count += 1;

            for z in self.graph.neighbors(u) {
                if settled[z] {
                    continue;
                }
                let tentative = distances[u] + weight(u, z);
                if tentative < distances[z] {
                    distances[z] = tentative;
                    parents[z] = u;
                }
            }
        }

        log::debug!("dijkstra from {source}: settled {settled_count} of {n}");
        Dijkstra { distances, parents }
    }

    fn stored_weights(&self) -> impl Fn(usize, usize) -> f64 + '_ {
        move |u, z| self.weights.at(u, z)
    }

    fn injected<'a, C: EdgeCost<T>>(&'a self, cost: &'a C) -> impl Fn(usize, usize) -> f64 + 'a {
        let all = self.graph.vertices();
        move |u, z| cost.cost(&all[u], &all[z])
    }

    /// Total weight of the cheapest path from `v1` to `v2` using the stored
    /// weights; infinity if `v2` is unreachable.
    pub fn shortest_path_weight(&self, v1: &T, v2: &T) -> Result<f64, GraphError> {
        let si = self.graph.traversal_index(v1)?;
        let ti = self.graph.traversal_index(v2)?;
        Ok(self.dijkstra(si, self.stored_weights()).distances[ti])
    }

    /// As [`shortest_path_weight`](Self::shortest_path_weight), but with
    /// edge weights taken from `cost` instead of the matrix.
    pub fn shortest_path_weight_with<C: EdgeCost<T>>(
        &self,
        v1: &T,
        v2: &T,
        cost: &C,
    ) -> Result<f64, GraphError> {
        let si = self.graph.traversal_index(v1)?;
        let ti = self.graph.traversal_index(v2)?;
        Ok(self.dijkstra(si, self.injected(cost)).distances[ti])
    }
}

impl<T: PartialEq + Clone> Network<T> {
    fn path_to(&self, run: &Dijkstra, target: usize) -> Path<T> {
        if run.distances[target] == f64::INFINITY {
            return Path::empty();
        }
        Path::from_parents(&run.parents, target, self.graph.vertices())
    }

    /// Cheapest path from `start` to `target` using the stored weights.
    ///
    /// An unreachable target yields an empty path.
    pub fn weighted_shortest_path(&self, start: &T, target: &T) -> Result<Path<T>, GraphError> {
        let si = self.graph.traversal_index(start)?;
        let ti = self.graph.traversal_index(target)?;
        let run = self.dijkstra(si, self.stored_weights());
        Ok(self.path_to(&run, ti))
    }

    /// Cheapest path from `start` to `target` with weights from `cost`,
    /// evaluated per query on the stored vertices. The weight matrix is
    /// neither read nor written.
    pub fn weighted_shortest_path_with<C: EdgeCost<T>>(
        &self,
        start: &T,
        target: &T,
        cost: &C,
    ) -> Result<Path<T>, GraphError> {
        let si = self.graph.traversal_index(start)?;
        let ti = self.graph.traversal_index(target)?;
        let run = self.dijkstra(si, self.injected(cost));
        Ok(self.path_to(&run, ti))
    }
}
