//! Vertices and their adjacency.
//!
//! A [`Vertex`] is a cheap, clonable handle. All clones refer to the same
//! underlying vertex and compare equal; vertices created separately never do,
//! whatever their names.
//!
//! The storage behind a handle is any [`VertexCore`]. [`VertexNode`] is the
//! standard implementation and the only one most callers need. A custom core
//! that does not provide the [`Connectable`] capability can still live in a
//! [`Graph`](crate::graph::Graph), but arcs refuse to attach to it.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::{Arc as Shared, Weak};

use parking_lot::RwLock;
use serde_json::Value;

use crate::adjacency::{AdjacencyRecord, Connectable, ConnectionToken};
use crate::arc::Arc;
use crate::error::{GraphError, Result};
use crate::id::VertexId;
use crate::metadata::{Metadata, Properties};

/// Storage and read-only adjacency view behind a [`Vertex`] handle.
pub trait VertexCore: Send + Sync + 'static {
    /// Name and property bag of the vertex.
    fn metadata(&self) -> &Metadata;

    /// Owned snapshot of the arcs whose tail is this vertex.
    fn outgoing_arcs(&self) -> Vec<Arc>;

    /// Owned snapshot of the arcs whose head is this vertex.
    fn incoming_arcs(&self) -> Vec<Arc>;

    /// Number of outgoing arcs.
    fn outgoing_count(&self) -> usize {
        self.outgoing_arcs().len()
    }

    /// Number of incoming arcs.
    fn incoming_count(&self) -> usize {
        self.incoming_arcs().len()
    }

    /// The connection capability, or `None` if arcs may not attach here.
    fn connectable(&self) -> Option<&dyn Connectable> {
        None
    }

    /// Type name used in error messages.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// The standard vertex storage: metadata plus two adjacency records.
#[derive(Debug, Default)]
pub struct VertexNode {
    metadata: Metadata,
    outgoing: RwLock<AdjacencyRecord>,
    incoming: RwLock<AdjacencyRecord>,
}

impl VertexNode {
    /// Creates an unconnected node.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            metadata: Metadata::new(name),
            outgoing: RwLock::default(),
            incoming: RwLock::default(),
        }
    }
}

impl VertexCore for VertexNode {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn outgoing_arcs(&self) -> Vec<Arc> {
        self.outgoing.read().snapshot()
    }

    fn incoming_arcs(&self) -> Vec<Arc> {
        self.incoming.read().snapshot()
    }

    fn outgoing_count(&self) -> usize {
        self.outgoing.read().len()
    }

    fn incoming_count(&self) -> usize {
        self.incoming.read().len()
    }

    fn connectable(&self) -> Option<&dyn Connectable> {
        Some(self)
    }
}

impl Connectable for VertexNode {
    fn add_outgoing(&self, arc: &Arc, _token: ConnectionToken) -> bool {
        self.outgoing.write().insert(arc)
    }

    fn remove_outgoing(&self, arc: &Arc, _token: ConnectionToken) -> bool {
        self.outgoing.write().remove(arc)
    }

    fn add_incoming(&self, arc: &Arc, _token: ConnectionToken) -> bool {
        self.incoming.write().insert(arc)
    }

    fn remove_incoming(&self, arc: &Arc, _token: ConnectionToken) -> bool {
        self.incoming.write().remove(arc)
    }
}

/// A graph vertex.
#[derive(Clone)]
pub struct Vertex {
    id: VertexId,
    core: Shared<dyn VertexCore>,
}

impl Vertex {
    /// Creates an unnamed vertex.
    #[must_use]
    pub fn new() -> Self {
        Self::from_core(VertexNode::default())
    }

    /// Creates a named vertex.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_core(VertexNode::new(Some(name.into())))
    }

    /// Wraps a custom vertex implementation.
    #[must_use]
    pub fn from_core<C: VertexCore>(core: C) -> Self {
        Self {
            id: VertexId::new(),
            core: Shared::new(core),
        }
    }

    /// Returns the vertex ID.
    #[must_use]
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// Returns the storage behind this handle.
    #[must_use]
    pub fn core(&self) -> &dyn VertexCore {
        &*self.core
    }

    /// Returns a copy of the vertex name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.core.metadata().name()
    }

    /// Replaces the vertex name.
    pub fn set_name(&self, name: Option<String>) {
        self.core.metadata().set_name(name);
    }

    /// Returns a copy of the property bag.
    #[must_use]
    pub fn properties(&self) -> Option<Properties> {
        self.core.metadata().properties()
    }

    /// Replaces the property bag.
    pub fn set_properties(&self, properties: Option<Properties>) {
        self.core.metadata().set_properties(properties);
    }

    /// Returns a single property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<Value> {
        self.core.metadata().property(key)
    }

    /// Sets a single property, returning the previous value.
    pub fn set_property(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.core.metadata().set_property(key, value)
    }

    /// Arcs whose tail is this vertex.
    #[must_use]
    pub fn outgoing_arcs(&self) -> Vec<Arc> {
        self.core.outgoing_arcs()
    }

    /// Arcs whose head is this vertex.
    #[must_use]
    pub fn incoming_arcs(&self) -> Vec<Arc> {
        self.core.incoming_arcs()
    }

    /// Number of arcs whose tail is this vertex.
    #[must_use]
    pub fn outgoing_count(&self) -> usize {
        self.core.outgoing_count()
    }

    /// Number of arcs whose head is this vertex.
    #[must_use]
    pub fn incoming_count(&self) -> usize {
        self.core.incoming_count()
    }

    /// Returns true if no arc is attached to this vertex.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.outgoing_count() == 0 && self.incoming_count() == 0
    }

    /// Returns true if arcs may attach to this vertex.
    #[must_use]
    pub fn is_connectable(&self) -> bool {
        self.core.connectable().is_some()
    }

    /// Resolves the connection capability or reports the implementation.
    pub(crate) fn connectable(&self, argument: &'static str) -> Result<&dyn Connectable> {
        self.core
            .connectable()
            .ok_or_else(|| GraphError::UnexpectedImplementation {
                argument,
                implementation: self.core.type_name(),
            })
    }

    pub(crate) fn downgrade(&self) -> WeakVertex {
        WeakVertex {
            id: self.id.clone(),
            core: Shared::downgrade(&self.core),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("outgoing", &self.outgoing_count())
            .field("incoming", &self.incoming_count())
            .finish()
    }
}

/// Non-owning reference from an arc to one of its endpoints.
///
/// Arcs never keep their endpoints alive. Once every [`Vertex`] handle is
/// dropped the reference stops resolving and the endpoint reads as absent.
#[derive(Clone)]
pub(crate) struct WeakVertex {
    id: VertexId,
    core: Weak<dyn VertexCore>,
}

impl WeakVertex {
    pub(crate) fn upgrade(&self) -> Option<Vertex> {
        self.core.upgrade().map(|core| Vertex {
            id: self.id.clone(),
            core,
        })
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.core.strong_count() > 0
    }

    pub(crate) fn id(&self) -> &VertexId {
        &self.id
    }
}

impl fmt::Debug for WeakVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakVertex").field(&self.id).finish()
    }
}
