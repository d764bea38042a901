use ironroute_core::GraphError;

use crate::graph::Graph;
use crate::path::Path;

impl<T: PartialEq + Clone> Graph<T> {
    /// Depth-first traversal from `start`.
    ///
    /// A vertex is emitted when it is first pushed. At each step the
    /// lowest-index unvisited neighbour of the stack top is pushed; the top
    /// is popped only once it has no unvisited neighbour left.
    pub fn dfs(&self, start: &T) -> Result<Path<T>, GraphError> {
        let si = self.traversal_index(start)?;
        let mut visited = vec![false; self.size()];
        let mut order = Vec::with_capacity(self.size());
        let mut stack = vec![si];
        visited[si] = true;
        order.push(si);

        while let Some(&top) = stack.last() {
            match self.neighbors(top).find(|&ni| !visited[ni]) {
                Some(ni) => {
                    visited[ni] = true;
                    order.push(ni);
                    stack.push(ni);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(Path::from_indices(&order, self.vertices()))
    }
}
