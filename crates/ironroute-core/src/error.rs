//! Errors shared by every graph structure.

use std::fmt;

/// Errors returned by graph and network operations.
///
/// Every operation validates its arguments before touching storage, so a
/// returned error means the structure is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the graph.
    InvalidVertex,
    /// The vertex being inserted is already present.
    DuplicateVertex,
    /// A lookup by value found no match.
    NotFound,
    /// A lookup by index was outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// A removal or traversal was attempted on an empty graph.
    EmptyOperation,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex => write!(f, "vertex is not in the graph"),
            Self::DuplicateVertex => write!(f, "vertex already exists in the graph"),
            Self::NotFound => write!(f, "vertex not found"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {index} out of range (len {len})")
            }
            Self::EmptyOperation => write!(f, "operation on an empty graph"),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GraphError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "vertex index 7 out of range (len 3)"
        );
        assert_eq!(
            GraphError::DuplicateVertex.to_string(),
            "vertex already exists in the graph"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(GraphError::InvalidVertex);
        assert_eq!(err.to_string(), "vertex is not in the graph");
    }
}
