//! Adjacency-matrix graphs for small, dense worlds.
//!
//! This crate provides an undirected graph ADT over caller-chosen vertex
//! values and a weighted extension of it:
//!
//! - **Breadth-first** traversal ([`Graph::bfs`])
//! - **Depth-first** traversal ([`Graph::dfs`])
//! - **Unweighted** shortest path by hop count ([`Graph::shortest_path`])
//! - **Connectivity** ([`Graph::is_connected`], [`Graph::connected_components`])
//! - **Dijkstra** over stored weights ([`Network::shortest_path_weight`],
//!   [`Network::weighted_shortest_path`]) or over an injected cost
//!   ([`Network::weighted_shortest_path_with`])
//!
//! Vertices are identified by value equality. Indices are assigned in
//! insertion order and shift down when a lower vertex is removed, so the
//! public API takes vertex values; [`Graph::generation`] changes whenever
//! previously returned indices become stale.
//!
//! Every tie (neighbour scan order, Dijkstra minimum selection) is broken
//! by ascending index, so results are reproducible for a given sequence of
//! insertions.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`EdgeCost`] | Dijkstra with an injected, per-query cost |

mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod graph;
mod network;
mod path;
mod traits;

pub use graph::Graph;
pub use ironroute_core::{DEFAULT_CAPACITY, GraphError};
pub use network::Network;
pub use path::Path;
pub use traits::EdgeCost;
