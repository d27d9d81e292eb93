//! Error types.
use std::collections::TryReserveError;
use std::fmt;

use crate::types::Edge;

/// Error type for the computation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The computation observed a cancellation request and stopped early.
    /// This is routine control flow, not a failure.
    Cancelled,
    /// A lattice or matrix allocation could not be satisfied.
    OutOfMemory(TryReserveError),
    /// An edge refers to a vertex outside `0..order`.
    InvalidEdge { edge: Edge, order: usize },
    /// An edge joins a vertex to itself.
    SelfLoop(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::OutOfMemory(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cancelled => write!(f, "computation cancelled"),
            Error::OutOfMemory(e) => write!(f, "out of memory: {}", e),
            Error::InvalidEdge { edge, order } => {
                write!(f, "edge {} is out of range for {} vertices", edge, order)
            }
            Error::SelfLoop(v) => write!(f, "self-loop on vertex {}", v),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OutOfMemory(e) => Some(e),
            _ => None,
        }
    }
}

/// Error type for structural edits of a [`Graph`][crate::graph::Graph].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// One of the vertices was invalid (out of bounds).
    OutOfBounds,
    /// The requested edge forms a loop.
    FormsLoop,
    /// The edge already exists.
    AlreadyExists,
    /// The edge to remove does not exist.
    Missing,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EditError::OutOfBounds => "vertex out of bounds",
            EditError::FormsLoop => "edge would form a loop",
            EditError::AlreadyExists => "edge already exists",
            EditError::Missing => "edge does not exist",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for EditError {}
