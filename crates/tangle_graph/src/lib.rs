//! Vertex/arc graph primitives for Tangle.
//!
//! `tangle_graph` models a directed multigraph of labeled vertices joined by
//! labeled, data-bearing arcs. Arcs may dangle (be attached at one end only),
//! and graphs are plain sets of vertices, so subgraphs can be composed and
//! split without copying anything.
//!
//! # Core Concepts
//!
//! - [`Vertex`] - Graph node tracking its outgoing and incoming arcs
//! - [`Arc`] - Directed edge with an optional tail and an optional head
//! - [`Graph`] - Set of vertices; arcs are visible through member adjacency
//! - [`operations`] - Arc visibility, vertex capture and arc drawing
//! - [`render`] - Canonical text form used for diagnostics and tests
//!
//! The connection protocol in [`arc`] keeps each arc's endpoints and the
//! adjacency records of the vertices at those endpoints in step: an arc is in
//! `v.outgoing_arcs()` exactly when its tail is `v`.
//!
//! # Example
//!
//! ```
//! use tangle_graph::prelude::*;
//!
//! let a = Vertex::named("a");
//! let b = Vertex::named("b");
//! let arc = draw_arc(&a, &b)?;
//!
//! assert_eq!(arc.tail(), Some(a.clone()));
//! assert_eq!(a.outgoing_arcs(), vec![arc.clone()]);
//!
//! let graph = Graph::with_vertices([&a, &b]);
//! assert_eq!(render(&graph), "a\nb\n\na --> b");
//! # Ok::<(), tangle_graph::GraphError>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for connection transitions and
//!   captures. Off by default; without it the crate logs nothing.

/// Emits a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ()
    };
}

pub(crate) use trace_event;

/// Adjacency records and the connection capability.
pub mod adjacency;

/// Arcs and the connection protocol.
pub mod arc;

/// Payload-carrying vertex and arc wrappers.
pub mod data;

/// Error types.
pub mod error;

/// Graph structure and set algebra.
pub mod graph;

/// Vertex and arc identifiers.
pub mod id;

/// Names and property bags.
pub mod metadata;

/// Derived views, capture and arc drawing.
pub mod operations;

/// Canonical text rendering.
pub mod render;

/// Vertex handles and storage.
pub mod vertex;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyRecord, Connectable, ConnectionToken};
    pub use crate::arc::{Arc, ArcState};
    pub use crate::data::{DataArc, DataVertex};
    pub use crate::error::{Endpoint, ErrorKind, GraphError};
    pub use crate::graph::Graph;
    pub use crate::id::{ArcId, VertexId};
    pub use crate::metadata::{Metadata, Properties};
    pub use crate::operations::{
        ArcsInGraph, all_arcs, arcs_touching, capture_vertices, draw_arc, draw_arc_reversed,
        incoming_arcs_in_graph, outgoing_arcs_in_graph,
    };
    pub use crate::render::{RenderOptions, render, render_arc, render_with};
    pub use crate::vertex::{Vertex, VertexCore, VertexNode};
}

// Re-export key types at crate root for convenience
pub use arc::Arc;
pub use error::{ErrorKind, GraphError, Result};
pub use graph::Graph;
pub use vertex::Vertex;
