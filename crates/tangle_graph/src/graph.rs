//! Graphs as sets of vertices.
//!
//! A [`Graph`] stores vertices only. Arcs are found through the adjacency of
//! its members: an arc *lies in* a graph when both of its endpoints are
//! members. None of the set operations here touch arcs.
//!
//! The same vertex may belong to several graphs at once; moving a vertex
//! from one graph to another is done with
//! [`capture_vertices`](crate::operations::capture_vertices).

use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashSet;
use hashbrown::hash_set;

use crate::error::{GraphError, Result};
use crate::render::render;
use crate::vertex::Vertex;

/// A set of vertices defining a subgraph boundary.
///
/// Cloning a graph copies the membership, not the vertices: both graphs
/// refer to the same vertices afterwards.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashSet<Vertex>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from vertices. Duplicates collapse silently.
    #[must_use]
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        Self {
            vertices: collect(vertices),
        }
    }

    /// Returns the number of member vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if `vertex` is a member.
    #[must_use]
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.vertices.contains(vertex)
    }

    /// Iterates the member vertices in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Adds a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyInGraph`] if it is already a member.
    pub fn add(&mut self, vertex: Vertex) -> Result<()> {
        if self.vertices.contains(&vertex) {
            return Err(GraphError::VertexAlreadyInGraph {
                vertex: vertex.id().clone(),
            });
        }
        self.vertices.insert(vertex);
        Ok(())
    }

    /// Removes a vertex. Returns whether it was a member.
    pub fn remove(&mut self, vertex: &Vertex) -> bool {
        self.vertices.remove(vertex)
    }

    /// Removes every vertex.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Set algebra
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds every vertex of `other` that is not already a member.
    pub fn union_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        for vertex in other {
            self.vertices.insert(vertex.borrow().clone());
        }
    }

    /// Keeps only the vertices that are also in `other`.
    pub fn intersect_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        let other = collect(other);
        self.vertices.retain(|vertex| other.contains(vertex));
    }

    /// Removes every vertex that is in `other`.
    pub fn except_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        for vertex in other {
            self.vertices.remove(vertex.borrow());
        }
    }

    /// Keeps the vertices that are in exactly one of `self` and `other`.
    pub fn symmetric_except_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        for vertex in collect(other) {
            if !self.vertices.remove(&vertex) {
                self.vertices.insert(vertex);
            }
        }
    }

    /// Returns true if every member is also in `other`.
    #[must_use]
    pub fn is_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        self.vertices.is_subset(&collect(other))
    }

    /// Returns true if this is a subset of `other` and `other` has more.
    #[must_use]
    pub fn is_proper_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        let other = collect(other);
        other.len() > self.vertices.len() && self.vertices.is_subset(&other)
    }

    /// Returns true if every vertex of `other` is a member.
    #[must_use]
    pub fn is_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        other
            .into_iter()
            .all(|vertex| self.vertices.contains(vertex.borrow()))
    }

    /// Returns true if this is a superset of `other` and has more vertices.
    #[must_use]
    pub fn is_proper_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        let other = collect(other);
        self.vertices.len() > other.len() && self.vertices.is_superset(&other)
    }

    /// Returns true if at least one vertex of `other` is a member.
    #[must_use]
    pub fn overlaps<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        other
            .into_iter()
            .any(|vertex| self.vertices.contains(vertex.borrow()))
    }

    /// Returns true if `other` holds exactly the same vertices.
    #[must_use]
    pub fn set_equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Vertex>,
    {
        self.vertices == collect(other)
    }
}

fn collect<I>(vertices: I) -> HashSet<Vertex>
where
    I: IntoIterator,
    I::Item: Borrow<Vertex>,
{
    vertices
        .into_iter()
        .map(|vertex| vertex.borrow().clone())
        .collect()
}

impl FromIterator<Vertex> for Graph {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Vertex;
    type IntoIter = hash_set::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl IntoIterator for Graph {
    type Item = Vertex;
    type IntoIter = hash_set::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
