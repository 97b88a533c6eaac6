//! Identifiers for vertices and arcs.
//!
//! Identity in this crate is reference identity: two vertices with the same
//! name are still different vertices. Every handle carries an opaque id that
//! is generated once, when the underlying entity is created, and shared by all
//! clones of the handle.

use core::fmt;
use std::sync::Arc;

/// Unique identifier for a vertex.
///
/// Vertex IDs are generated using nanoid, so vertices created independently
/// (and later combined into one graph) never collide.
///
/// Internally uses `Arc<str>` for cheap cloning (reference count bump only).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Creates a new vertex ID with a unique nanoid.
    #[must_use]
    pub fn new() -> Self {
        Self(nanoid::nanoid!().into())
    }

    /// Creates a vertex ID from a specific string value.
    ///
    /// Handles built from the same fixed ID compare equal, so this is meant
    /// for tests and for wrapping externally managed vertex stores.
    #[must_use]
    pub fn from_string(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex_{}", self.0)
    }
}

/// Unique identifier for an arc.
///
/// Adjacency records key their arcs by this ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArcId(Arc<str>);

impl ArcId {
    /// Creates a new arc ID with a unique nanoid.
    #[must_use]
    pub fn new() -> Self {
        Self(nanoid::nanoid!().into())
    }

    /// Creates an arc ID from a specific string value.
    #[must_use]
    pub fn from_string(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArcId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arc_{}", self.0)
    }
}
