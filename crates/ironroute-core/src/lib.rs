//! Storage primitives for dense-matrix graphs.
//!
//! This crate provides the index-aligned building blocks used by
//! `ironroute-graph`: a growable square matrix (used both for edge presence
//! and for edge weights), a growable vertex table with lookup by equality,
//! and the shared error type.
//!
//! All three structures grow by doubling their capacity and are compacted
//! in lock-step when a vertex is removed, so an index always refers to the
//! same vertex in every structure of one graph.

pub mod error;
pub mod matrix;
pub mod vertex_table;

pub use error::GraphError;
pub use matrix::SquareMatrix;
pub use vertex_table::VertexTable;

/// Initial capacity used by `new()` constructors.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity after one growth step: doubled, and at least 1.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}
