use std::collections::VecDeque;

use ironroute_core::GraphError;

use crate::graph::Graph;
use crate::path::{NO_PARENT, Path};

/// Result of a breadth-first expansion over vertex indices.
pub(crate) struct BfsScan {
    /// Indices in dequeue order.
    pub(crate) order: Vec<usize>,
    pub(crate) visited: Vec<bool>,
    pub(crate) parents: Vec<usize>,
}

impl<T: PartialEq> Graph<T> {
    /// Breadth-first expansion from `start`, stopping after `stop` is
    /// dequeued (if given). Neighbours are scanned in ascending index order.
    pub(crate) fn bfs_scan(&self, start: usize, stop: Option<usize>) -> BfsScan {
        let n = self.size();
        let mut visited = vec![false; n];
        let mut parents = vec![NO_PARENT; n];
        let mut order = Vec::with_capacity(n);
        let mut queue: VecDeque<usize> = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(ci) = queue.pop_front() {
            order.push(ci);
            if stop == Some(ci) {
                break;
            }
            for ni in self.neighbors(ci) {
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                parents[ni] = ci;
                queue.push_back(ni);
            }
        }

        BfsScan {
            order,
            visited,
            parents,
        }
    }
}

impl<T: PartialEq + Clone> Graph<T> {
    /// Breadth-first traversal from `start`.
    ///
    /// Vertices appear in the order they are dequeued; unreachable vertices
    /// are not included.
    pub fn bfs(&self, start: &T) -> Result<Path<T>, GraphError> {
        let si = self.traversal_index(start)?;
        let scan = self.bfs_scan(si, None);
        Ok(Path::from_indices(&scan.order, self.vertices()))
    }

    /// Fewest-hops path from `start` to `target`, both included.
    ///
    /// Equal-length alternatives resolve to the one through lower indices.
    /// An unreachable target yields an empty path.
    pub fn shortest_path(&self, start: &T, target: &T) -> Result<Path<T>, GraphError> {
        let si = self.traversal_index(start)?;
        let ti = self.traversal_index(target)?;
        let scan = self.bfs_scan(si, Some(ti));
        if !scan.visited[ti] {
            return Ok(Path::empty());
        }
        Ok(Path::from_parents(&scan.parents, ti, self.vertices()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(names: &[&'static str], edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        let mut g = Graph::new();
        for &n in names {
            g.add_vertex(n).unwrap();
        }
        for (a, b) in edges {
            g.add_edge(a, b).unwrap();
        }
        g
    }

    #[test]
    fn bfs_levels_in_index_order() {
        //   A
        //  / \
        // B   C
        // |   |
        // D   E
        let g = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "C"), ("A", "B"), ("B", "D"), ("C", "E")],
        );
        let order = g.bfs(&"A").unwrap().into_vec();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn bfs_skips_unreachable() {
        let g = graph(&["A", "B", "C"], &[("A", "B")]);
        assert_eq!(g.bfs(&"A").unwrap().into_vec(), vec!["A", "B"]);
        assert_eq!(g.bfs(&"C").unwrap().into_vec(), vec!["C"]);
    }

    #[test]
    fn bfs_errors() {
        let empty: Graph<&str> = Graph::new();
        assert_eq!(empty.bfs(&"A"), Err(GraphError::EmptyOperation));
        let g = graph(&["A"], &[]);
        assert_eq!(g.bfs(&"B"), Err(GraphError::InvalidVertex));
    }

    #[test]
    fn shortest_path_on_chain() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D")],
        );
        let p = g.shortest_path(&"A", &"D").unwrap();
        assert_eq!(p.into_vec(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn shortest_path_prefers_fewer_hops() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
        );
        assert_eq!(g.shortest_path(&"A", &"D").unwrap().into_vec(), vec!["A", "D"]);
    }

    #[test]
    fn shortest_path_tie_goes_to_lower_index() {
        // A-B-D and A-C-D are both two hops; B has the lower index.
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "C"), ("C", "D"), ("A", "B"), ("B", "D")],
        );
        assert_eq!(
            g.shortest_path(&"A", &"D").unwrap().into_vec(),
            vec!["A", "B", "D"]
        );
    }

    #[test]
    fn shortest_path_to_self() {
        let g = graph(&["A", "B"], &[("A", "B")]);
        assert_eq!(g.shortest_path(&"A", &"A").unwrap().into_vec(), vec!["A"]);
    }

    #[test]
    fn shortest_path_unreachable_is_empty() {
        let g = graph(&["A", "B", "C"], &[("A", "B")]);
        assert!(g.shortest_path(&"A", &"C").unwrap().is_empty());
    }

    #[test]
    fn shortest_path_rejects_unknown_target() {
        let g = graph(&["A"], &[]);
        assert_eq!(g.shortest_path(&"A", &"Z"), Err(GraphError::InvalidVertex));
    }
}
