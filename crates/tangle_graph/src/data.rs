//! Vertices and arcs carrying a typed payload.
//!
//! The payload sits next to the handle rather than inside it, so connection
//! semantics are exactly those of the plain [`Vertex`] and [`Arc`]. Both
//! wrappers dereference to their handle; pass `&*wrapper` (or
//! [`DataVertex::vertex`]) wherever a plain handle is expected.

use core::ops::Deref;

use crate::arc::Arc;
use crate::vertex::Vertex;

/// A [`Vertex`] paired with a payload of type `T`.
#[derive(Debug, Clone, Default)]
pub struct DataVertex<T> {
    vertex: Vertex,
    data: T,
}

impl<T> DataVertex<T> {
    /// Creates a named vertex with a payload.
    #[must_use]
    pub fn named(name: impl Into<String>, data: T) -> Self {
        Self::from_vertex(Vertex::named(name), data)
    }

    /// Attaches a payload to an existing vertex handle.
    #[must_use]
    pub fn from_vertex(vertex: Vertex, data: T) -> Self {
        Self { vertex, data }
    }

    /// Returns the underlying vertex handle.
    #[must_use]
    pub fn vertex(&self) -> &Vertex {
        &self.vertex
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the payload mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the payload, returning the old one.
    pub fn set_data(&mut self, data: T) -> T {
        core::mem::replace(&mut self.data, data)
    }

    /// Splits into handle and payload.
    #[must_use]
    pub fn into_parts(self) -> (Vertex, T) {
        (self.vertex, self.data)
    }
}

impl<T> Deref for DataVertex<T> {
    type Target = Vertex;

    fn deref(&self) -> &Vertex {
        &self.vertex
    }
}

/// An [`Arc`] paired with a payload of type `T`.
#[derive(Debug, Clone, Default)]
pub struct DataArc<T> {
    arc: Arc,
    data: T,
}

impl<T> DataArc<T> {
    /// Creates a free arc with a payload.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self::from_arc(Arc::new(), data)
    }

    /// Creates a free, named arc with a payload.
    #[must_use]
    pub fn named(name: impl Into<String>, data: T) -> Self {
        Self::from_arc(Arc::named(name), data)
    }

    /// Attaches a payload to an existing arc handle.
    #[must_use]
    pub fn from_arc(arc: Arc, data: T) -> Self {
        Self { arc, data }
    }

    /// Returns the underlying arc handle.
    #[must_use]
    pub fn arc(&self) -> &Arc {
        &self.arc
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the payload mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replaces the payload, returning the old one.
    pub fn set_data(&mut self, data: T) -> T {
        core::mem::replace(&mut self.data, data)
    }

    /// Splits into handle and payload.
    #[must_use]
    pub fn into_parts(self) -> (Arc, T) {
        (self.arc, self.data)
    }
}

impl<T> Deref for DataArc<T> {
    type Target = Arc;

    fn deref(&self) -> &Arc {
        &self.arc
    }
}
