//! Arcs and the connection protocol.
//!
//! An arc moves through four states:
//!
//! ```text
//!            attach_tail              attach_head
//!   Free ──────────────▶ TailAttached ───────────▶ Connected
//!     │                                               ▲
//!     │ attach_head                      attach_tail  │
//!     └────────────────▶ HeadAttached ────────────────┘
//!                 connect (Free only) ──▶ Connected
//! ```
//!
//! `detach_tail`, `detach_head` and `disconnect` walk the same edges
//! backwards. Every transition updates the arc's endpoint and the vertex's
//! adjacency record together, so `arc ∈ v.outgoing_arcs()` holds exactly when
//! `arc.tail() == Some(v)`, and likewise for incoming arcs and the head.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc as Shared;

use parking_lot::Mutex;
use serde_json::Value;

use crate::adjacency::ConnectionToken;
use crate::error::{Endpoint, GraphError, Result};
use crate::id::ArcId;
use crate::metadata::{Metadata, Properties};
use crate::render::{RenderOptions, render_arc_with};
use crate::vertex::{Vertex, WeakVertex};

/// Connection state of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcState {
    /// Neither endpoint is attached.
    Free,
    /// Only the tail is attached.
    TailAttached,
    /// Only the head is attached.
    HeadAttached,
    /// Both endpoints are attached.
    Connected,
}

#[derive(Debug, Default)]
struct Ends {
    tail: Option<WeakVertex>,
    head: Option<WeakVertex>,
}

impl Ends {
    /// Forgets endpoints whose vertex has been dropped.
    fn prune(&mut self) {
        if self.tail.as_ref().is_some_and(|tail| !tail.is_alive()) {
            self.tail = None;
        }
        if self.head.as_ref().is_some_and(|head| !head.is_alive()) {
            self.head = None;
        }
    }

    fn slot(&mut self, endpoint: Endpoint) -> &mut Option<WeakVertex> {
        match endpoint {
            Endpoint::Tail => &mut self.tail,
            Endpoint::Head => &mut self.head,
        }
    }
}

#[derive(Debug, Default)]
struct ArcNode {
    metadata: Metadata,
    ends: Mutex<Ends>,
}

/// A directed arc between two vertices.
///
/// Like [`Vertex`], an `Arc` is a handle: clones share state and compare
/// equal. Arcs reference their endpoints weakly, while a vertex keeps the
/// arcs attached to it alive.
#[derive(Clone, Default)]
pub struct Arc {
    id: ArcId,
    node: Shared<ArcNode>,
}

impl Arc {
    /// Creates a free, unnamed arc.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a free, named arc.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ArcId::new(),
            node: Shared::new(ArcNode {
                metadata: Metadata::new(Some(name.into())),
                ends: Mutex::default(),
            }),
        }
    }

    /// Returns the arc ID.
    #[must_use]
    pub fn id(&self) -> &ArcId {
        &self.id
    }

    /// Returns a copy of the arc name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.node.metadata.name()
    }

    /// Replaces the arc name.
    pub fn set_name(&self, name: Option<String>) {
        self.node.metadata.set_name(name);
    }

    /// Returns a copy of the property bag.
    #[must_use]
    pub fn properties(&self) -> Option<Properties> {
        self.node.metadata.properties()
    }

    /// Replaces the property bag.
    pub fn set_properties(&self, properties: Option<Properties>) {
        self.node.metadata.set_properties(properties);
    }

    /// Returns a single property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<Value> {
        self.node.metadata.property(key)
    }

    /// Sets a single property, returning the previous value.
    pub fn set_property(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.node.metadata.set_property(key, value)
    }

    /// The vertex the arc starts from.
    #[must_use]
    pub fn tail(&self) -> Option<Vertex> {
        self.endpoint(Endpoint::Tail)
    }

    /// The vertex the arc ends at.
    #[must_use]
    pub fn head(&self) -> Option<Vertex> {
        self.endpoint(Endpoint::Head)
    }

    /// Returns the vertex attached at `endpoint`.
    #[must_use]
    pub fn endpoint(&self, endpoint: Endpoint) -> Option<Vertex> {
        self.node
            .ends
            .lock()
            .slot(endpoint)
            .as_ref()
            .and_then(WeakVertex::upgrade)
    }

    /// Returns the current connection state.
    #[must_use]
    pub fn state(&self) -> ArcState {
        let mut ends = self.node.ends.lock();
        ends.prune();
        match (ends.tail.is_some(), ends.head.is_some()) {
            (false, false) => ArcState::Free,
            (true, false) => ArcState::TailAttached,
            (false, true) => ArcState::HeadAttached,
            (true, true) => ArcState::Connected,
        }
    }

    /// Returns true if neither endpoint is attached.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.state() == ArcState::Free
    }

    /// Returns true if exactly one endpoint is attached.
    #[must_use]
    pub fn is_dangling(&self) -> bool {
        matches!(
            self.state(),
            ArcState::TailAttached | ArcState::HeadAttached
        )
    }

    /// Returns true if both endpoints are attached.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state() == ArcState::Connected
    }

    /// Connects a free arc from `tail` to `head`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::ArcNotFree`] if either endpoint is already attached,
    ///   even to the same vertices.
    /// - [`GraphError::UnexpectedImplementation`] if either vertex cannot
    ///   accept arcs. Both vertices are checked before anything changes.
    pub fn connect(&self, tail: &Vertex, head: &Vertex) -> Result<()> {
        let mut ends = self.node.ends.lock();
        ends.prune();

        if ends.tail.is_some() || ends.head.is_some() {
            return Err(GraphError::ArcNotFree {
                arc: self.id.clone(),
            });
        }

        let tail_side = tail.connectable("tail")?;
        let head_side = head.connectable("head")?;

        tail_side.add_outgoing(self, ConnectionToken::new());
        head_side.add_incoming(self, ConnectionToken::new());

        ends.tail = Some(tail.downgrade());
        ends.head = Some(head.downgrade());

        crate::trace_event!(
            trace,
            arc = %self.id,
            tail = %tail.id(),
            head = %head.id(),
            "arc connected"
        );
        Ok(())
    }

    /// Attaches `tail`, leaving the head as it is.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EndpointAttached`] if a tail is already attached,
    ///   including `tail` itself.
    /// - [`GraphError::UnexpectedImplementation`] if `tail` cannot accept arcs.
    pub fn attach_tail(&self, tail: &Vertex) -> Result<()> {
        self.attach(Endpoint::Tail, tail)
    }

    /// Attaches `head`, leaving the tail as it is.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EndpointAttached`] if a head is already attached,
    ///   including `head` itself.
    /// - [`GraphError::UnexpectedImplementation`] if `head` cannot accept arcs.
    pub fn attach_head(&self, head: &Vertex) -> Result<()> {
        self.attach(Endpoint::Head, head)
    }

    /// Detaches the tail. Returns `false` if there was none.
    pub fn detach_tail(&self) -> bool {
        self.detach(Endpoint::Tail)
    }

    /// Detaches the head. Returns `false` if there was none.
    pub fn detach_head(&self) -> bool {
        self.detach(Endpoint::Head)
    }

    /// Detaches both endpoints. Calling it on a free arc does nothing.
    pub fn disconnect(&self) {
        self.detach_head();
        self.detach_tail();
    }

    fn attach(&self, endpoint: Endpoint, vertex: &Vertex) -> Result<()> {
        let mut ends = self.node.ends.lock();
        ends.prune();

        let slot = ends.slot(endpoint);
        if slot.is_some() {
            return Err(GraphError::EndpointAttached {
                arc: self.id.clone(),
                endpoint,
            });
        }

        let side = match endpoint {
            Endpoint::Tail => vertex.connectable("tail")?,
            Endpoint::Head => vertex.connectable("head")?,
        };
        match endpoint {
            Endpoint::Tail => side.add_outgoing(self, ConnectionToken::new()),
            Endpoint::Head => side.add_incoming(self, ConnectionToken::new()),
        };
        *slot = Some(vertex.downgrade());

        crate::trace_event!(trace, arc = %self.id, vertex = %vertex.id(), %endpoint, "endpoint attached");
        Ok(())
    }

    fn detach(&self, endpoint: Endpoint) -> bool {
        let mut ends = self.node.ends.lock();
        let Some(vertex) = ends.slot(endpoint).take().and_then(|weak| weak.upgrade()) else {
            return false;
        };

        match vertex.core().connectable() {
            Some(side) => {
                match endpoint {
                    Endpoint::Tail => side.remove_outgoing(self, ConnectionToken::new()),
                    Endpoint::Head => side.remove_incoming(self, ConnectionToken::new()),
                };
            }
            None => {
                crate::trace_event!(
                    warn,
                    arc = %self.id,
                    vertex = %vertex.id(),
                    "vertex lost its connection capability; endpoint cleared without updating adjacency"
                );
            }
        }

        crate::trace_event!(trace, arc = %self.id, vertex = %vertex.id(), %endpoint, "endpoint detached");
        true
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Arc {}

impl Hash for Arc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ends = self.node.ends.lock();
        f.debug_struct("Arc")
            .field("id", &self.id)
            .field("name", &self.node.metadata.name())
            .field("tail", &ends.tail.as_ref().map(WeakVertex::id))
            .field("head", &ends.head.as_ref().map(WeakVertex::id))
            .finish()
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_arc_with(self, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arc_is_free() {
        let arc = Arc::new();
        assert!(arc.tail().is_none());
        assert!(arc.head().is_none());
        assert!(arc.name().is_none());
        assert!(arc.properties().is_none());
        assert_eq!(arc.state(), ArcState::Free);
    }

    #[test]
    fn connect_registers_both_sides() {
        let a = Vertex::named("a");
        let b = Vertex::named("b");
        let arc = Arc::new();

        arc.connect(&a, &b).unwrap();

        assert_eq!(arc.tail(), Some(a.clone()));
        assert_eq!(arc.head(), Some(b.clone()));
        assert_eq!(a.outgoing_arcs(), vec![arc.clone()]);
        assert!(a.incoming_arcs().is_empty());
        assert_eq!(b.incoming_arcs(), vec![arc.clone()]);
        assert!(b.outgoing_arcs().is_empty());
        assert!(arc.is_connected());
    }

    #[test]
    fn attach_head_registers_incoming() {
        let a = Vertex::named("a");
        let arc = Arc::new();

        arc.attach_head(&a).unwrap();

        assert_eq!(a.incoming_arcs(), vec![arc.clone()]);
        assert!(a.outgoing_arcs().is_empty());
        assert_eq!(arc.state(), ArcState::HeadAttached);
    }

    #[test]
    fn self_loop() {
        let a = Vertex::named("a");
        let arc = Arc::new();

        arc.connect(&a, &a).unwrap();
        assert_eq!(a.outgoing_count(), 1);
        assert_eq!(a.incoming_count(), 1);

        arc.disconnect();
        assert!(a.is_isolated());
    }

    #[test]
    fn dropped_endpoint_reads_as_absent() {
        let a = Vertex::named("a");
        let arc = Arc::new();
        {
            let b = Vertex::named("b");
            arc.connect(&a, &b).unwrap();
        }

        assert!(arc.head().is_none());
        assert_eq!(arc.state(), ArcState::TailAttached);
        assert!(!arc.detach_head());

        arc.attach_head(&a).unwrap();
        assert_eq!(arc.head(), Some(a));
    }

    #[test]
    fn display_uses_canonical_form() {
        let a = Vertex::named("a");
        let b = Vertex::named("b");
        let arc = Arc::named("x");
        arc.connect(&a, &b).unwrap();
        assert_eq!(arc.to_string(), "a -x-> b");
    }
}
