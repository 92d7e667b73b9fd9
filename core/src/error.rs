use thiserror::Error;

/// Errors raised by the graph store, its staging queue and the path engine.
///
/// All of them are recoverable: a failed call leaves the graph unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex insertion on a graph already holding `capacity` vertices.
    #[error("graph is full: capacity of {capacity} vertices reached")]
    Overflow { capacity: usize },

    /// An operation referenced a vertex that was never added.
    #[error("vertex not found in graph")]
    VertexNotFound,

    /// Dequeue attempted on an empty queue.
    #[error("dequeue attempted on empty queue")]
    QueueEmpty,
}

pub type Result<T> = std::result::Result<T, GraphError>;
