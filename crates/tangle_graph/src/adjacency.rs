//! Adjacency records and the privileged connection capability.
//!
//! A vertex keeps two [`AdjacencyRecord`]s, one per direction. The only code
//! allowed to change them is the arc connection protocol in [`crate::arc`],
//! which reaches a vertex through the [`Connectable`] capability. Every
//! capability method takes a [`ConnectionToken`]; the token cannot be built
//! outside this crate, so other crates may *implement* the capability for
//! their own vertex types but can never *invoke* it.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::arc::Arc;
use crate::id::ArcId;

/// Proof that a call originates from the arc connection protocol.
///
/// Neither `Clone` nor `Copy`: each privileged call consumes a
/// freshly minted token.
#[derive(Debug)]
pub struct ConnectionToken {
    _private: (),
}

impl ConnectionToken {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Privileged adjacency mutation exposed by connectable vertices.
///
/// Implementations must keep set semantics: adding an arc that is already
/// present and removing one that is absent are no-ops that return `false`.
/// Implementations must not call back into the arc they receive; the arc's
/// endpoint state is locked for the duration of the call.
pub trait Connectable: Send + Sync {
    /// Records `arc` as leaving this vertex. Returns whether it was new.
    fn add_outgoing(&self, arc: &Arc, token: ConnectionToken) -> bool;

    /// Forgets `arc` as leaving this vertex. Returns whether it was present.
    fn remove_outgoing(&self, arc: &Arc, token: ConnectionToken) -> bool;

    /// Records `arc` as entering this vertex. Returns whether it was new.
    fn add_incoming(&self, arc: &Arc, token: ConnectionToken) -> bool;

    /// Forgets `arc` as entering this vertex. Returns whether it was present.
    fn remove_incoming(&self, arc: &Arc, token: ConnectionToken) -> bool;
}

/// The set of arcs incident to one vertex in one direction.
///
/// Arcs are deduplicated by identity. Iteration order is unspecified.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyRecord {
    arcs: HashMap<ArcId, Arc>,
}

impl AdjacencyRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arc. Returns `false` if it was already recorded.
    pub fn insert(&mut self, arc: &Arc) -> bool {
        match self.arcs.entry(arc.id().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(arc.clone());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Removes an arc. Removing an absent arc is a no-op returning `false`.
    pub fn remove(&mut self, arc: &Arc) -> bool {
        self.arcs.remove(arc.id()).is_some()
    }

    /// Returns true if the arc is recorded.
    #[must_use]
    pub fn contains(&self, arc: &Arc) -> bool {
        self.arcs.contains_key(arc.id())
    }

    /// Returns the number of recorded arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns true if no arcs are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Iterates the recorded arcs.
    pub fn iter(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.values()
    }

    /// Returns an owned copy of the recorded arcs.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc> {
        self.arcs.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_by_identity() {
        let mut record = AdjacencyRecord::new();
        let arc = Arc::new();
        let other = Arc::named("same name");
        let twin = Arc::named("same name");

        assert!(record.insert(&arc));
        assert!(!record.insert(&arc.clone()));
        assert!(record.insert(&other));
        assert!(record.insert(&twin));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut record = AdjacencyRecord::new();
        let arc = Arc::new();

        assert!(!record.remove(&arc));
        record.insert(&arc);
        assert!(record.contains(&arc));
        assert!(record.remove(&arc));
        assert!(!record.remove(&arc));
        assert!(record.is_empty());
    }
}
