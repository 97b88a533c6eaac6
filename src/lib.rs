//! Directed multigraphs with dangling arcs and composable vertex sets.
//!

pub use tangle_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use tangle_internal::prelude::*;
}
