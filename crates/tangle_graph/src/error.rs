//! Error types for connection and graph operations.

use core::fmt;

use thiserror::Error;

use crate::id::{ArcId, VertexId};

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Which end of an arc an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The vertex the arc starts from.
    Tail,
    /// The vertex the arc ends at.
    Head,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tail => f.write_str("tail"),
            Endpoint::Head => f.write_str("head"),
        }
    }
}

/// The broad condition an error belongs to.
///
/// Callers that only care about *why* an operation was refused can match on
/// the kind instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value cannot be used for the operation.
    InvalidArgument,
    /// The operation is not legal in the current state of the object.
    InvalidState,
    /// A vertex implementation does not provide the connection capability.
    UnexpectedImplementation,
}

/// Errors raised by arcs, graphs and graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `connect` was called on an arc that already has a tail or a head.
    #[error("arc is not free")]
    ArcNotFree {
        /// The arc that was asked to connect.
        arc: ArcId,
    },

    /// An endpoint was attached to an arc that already has one on that side.
    #[error("arc already has attached {endpoint}")]
    EndpointAttached {
        /// The arc being attached.
        arc: ArcId,
        /// The side that is already occupied.
        endpoint: Endpoint,
    },

    /// A vertex was added to a graph that already contains it.
    #[error("graph already contains {vertex}")]
    VertexAlreadyInGraph {
        /// The duplicate vertex.
        vertex: VertexId,
    },

    /// A vertex-relative query named a vertex outside the graph.
    #[error("graph does not contain {vertex}")]
    VertexNotInGraph {
        /// The missing vertex.
        vertex: VertexId,
    },

    /// A capture named a vertex that is already in the target graph.
    #[error("{vertex} already belongs to the target graph")]
    AlreadyCaptured {
        /// The vertex that was already present.
        vertex: VertexId,
    },

    /// A capture named a vertex that is not in the source graph.
    #[error("{vertex} does not belong to the source graph")]
    NotInSource {
        /// The vertex that could not be captured.
        vertex: VertexId,
    },

    /// A vertex does not implement the connection capability.
    #[error(
        "'{argument}' is a vertex of type '{implementation}' that does not support arc connection"
    )]
    UnexpectedImplementation {
        /// Name of the offending argument (`tail` or `head`).
        argument: &'static str,
        /// Type name of the vertex implementation.
        implementation: &'static str,
    },
}

impl GraphError {
    /// Returns the condition kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::ArcNotFree { .. }
            | GraphError::EndpointAttached { .. }
            | GraphError::VertexAlreadyInGraph { .. }
            | GraphError::VertexNotInGraph { .. } => ErrorKind::InvalidState,
            GraphError::AlreadyCaptured { .. } | GraphError::NotInSource { .. } => {
                ErrorKind::InvalidArgument
            }
            GraphError::UnexpectedImplementation { .. } => ErrorKind::UnexpectedImplementation,
        }
    }
}
