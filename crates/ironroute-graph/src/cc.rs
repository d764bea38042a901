//! Connectivity queries.

use crate::graph::Graph;
use crate::path::Path;

impl<T: PartialEq> Graph<T> {
    /// Whether every vertex is reachable from every other.
    ///
    /// Graphs with zero or one vertex are connected.
    pub fn is_connected(&self) -> bool {
        if self.size() <= 1 {
            return true;
        }
        self.bfs_scan(0, None).visited.iter().all(|&v| v)
    }
}

impl<T: PartialEq + Clone> Graph<T> {
    /// Group the vertices into connected components.
    ///
    /// Components are ordered by their lowest index; each one lists its
    /// vertices in breadth-first order from that lowest index.
    pub fn connected_components(&self) -> Vec<Path<T>> {
        let n = self.size();
        let mut labelled = vec![false; n];
        let mut components = Vec::new();

        for start in 0..n {
            if labelled[start] {
                continue;
            }
            let scan = self.bfs_scan(start, None);
            for &i in &scan.order {
                labelled[i] = true;
            }
            components.push(Path::from_indices(&scan.order, self.vertices()));
        }

        components
    }
}
