//! # Tangle Internal Library
//!
//! Re-exports the core Tangle crates for convenience.

/// Vertex, arc and graph primitives.
pub use tangle_graph;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use tangle_graph::prelude::*;
}
