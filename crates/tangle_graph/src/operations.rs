//! Derived views over graphs and vertex capture.
//!
//! Everything here is built on the public vertex, arc and graph APIs; none
//! of it needs privileged access to adjacency records.

use core::borrow::Borrow;
use core::iter::FusedIterator;

use hashbrown::HashSet;

use crate::arc::Arc;
use crate::error::{Endpoint, GraphError, Result};
use crate::graph::Graph;
use crate::vertex::Vertex;

/// Arcs of one vertex whose far end lies in a graph.
///
/// Produced by [`outgoing_arcs_in_graph`] and [`incoming_arcs_in_graph`].
/// The vertex's arcs are captured when the iterator is created; membership of
/// the far end is checked lazily as the iterator advances. Cloning the
/// iterator restarts nothing but gives an independent cursor, so a fresh
/// clone taken before iteration can replay the sequence.
#[derive(Debug, Clone)]
pub struct ArcsInGraph<'g> {
    arcs: std::vec::IntoIter<Arc>,
    graph: &'g Graph,
    far_end: Endpoint,
}

impl<'g> ArcsInGraph<'g> {
    fn new(arcs: Vec<Arc>, graph: &'g Graph, far_end: Endpoint) -> Self {
        Self {
            arcs: arcs.into_iter(),
            graph,
            far_end,
        }
    }
}

impl Iterator for ArcsInGraph<'_> {
    type Item = Arc;

    fn next(&mut self) -> Option<Arc> {
        let graph = self.graph;
        let far_end = self.far_end;
        self.arcs.find(|arc| {
            arc.endpoint(far_end)
                .is_some_and(|vertex| graph.contains(&vertex))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.arcs.size_hint().1)
    }
}

impl FusedIterator for ArcsInGraph<'_> {}

/// Outgoing arcs of `vertex` whose head is also in `graph`.
///
/// Arcs without a head are skipped.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotInGraph`] if `vertex` is not a member of
/// `graph`, whatever arcs it has.
pub fn outgoing_arcs_in_graph<'g>(vertex: &Vertex, graph: &'g Graph) -> Result<ArcsInGraph<'g>> {
    ensure_member(vertex, graph)?;
    Ok(ArcsInGraph::new(
        vertex.outgoing_arcs(),
        graph,
        Endpoint::Head,
    ))
}

/// Incoming arcs of `vertex` whose tail is also in `graph`.
///
/// Arcs without a tail are skipped.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotInGraph`] if `vertex` is not a member of
/// `graph`.
pub fn incoming_arcs_in_graph<'g>(vertex: &Vertex, graph: &'g Graph) -> Result<ArcsInGraph<'g>> {
    ensure_member(vertex, graph)?;
    Ok(ArcsInGraph::new(
        vertex.incoming_arcs(),
        graph,
        Endpoint::Tail,
    ))
}

/// Every arc lying in `graph`, each exactly once.
///
/// Arcs are reached through the outgoing side of their tail, so an arc with
/// both endpoints inside the graph is produced once even when it is a
/// self-loop.
pub fn all_arcs(graph: &Graph) -> impl Iterator<Item = Arc> + Clone + '_ {
    graph
        .iter()
        .flat_map(move |vertex| ArcsInGraph::new(vertex.outgoing_arcs(), graph, Endpoint::Head))
}

/// Every arc with at least one endpoint in `graph`, deduplicated.
///
/// Unlike [`all_arcs`] this includes dangling arcs and arcs leading out of
/// the graph. Order is unspecified.
#[must_use]
pub fn arcs_touching(graph: &Graph) -> Vec<Arc> {
    let mut seen = HashSet::new();
    for vertex in graph {
        seen.extend(vertex.outgoing_arcs());
        seen.extend(vertex.incoming_arcs());
    }
    seen.into_iter().collect()
}

/// Moves `vertices` from `source` to `target`, in order.
///
/// The move is all-or-nothing: if any vertex cannot be captured, every vertex
/// already moved by this call is returned to `source` before the error is
/// reported.
///
/// # Errors
///
/// - [`GraphError::AlreadyCaptured`] if a vertex is already in `target`
///   (this includes a vertex listed twice).
/// - [`GraphError::NotInSource`] if a vertex is not in `source`.
pub fn capture_vertices<I>(target: &mut Graph, source: &mut Graph, vertices: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Borrow<Vertex>,
{
    let mut moved: Vec<Vertex> = Vec::new();

    for vertex in vertices {
        let vertex = vertex.borrow();
        if let Err(err) = capture_one(target, source, vertex) {
            crate::trace_event!(
                debug,
                vertex = %vertex.id(),
                rolled_back = moved.len(),
                error = %err,
                "capture failed, restoring source graph"
            );
            for vertex in moved.into_iter().rev() {
                target.remove(&vertex);
                source.union_with([vertex]);
            }
            return Err(err);
        }
        moved.push(vertex.clone());
    }

    crate::trace_event!(trace, captured = moved.len(), "vertices captured");
    Ok(())
}

fn capture_one(target: &mut Graph, source: &mut Graph, vertex: &Vertex) -> Result<()> {
    if target.contains(vertex) {
        return Err(GraphError::AlreadyCaptured {
            vertex: vertex.id().clone(),
        });
    }
    if !source.remove(vertex) {
        return Err(GraphError::NotInSource {
            vertex: vertex.id().clone(),
        });
    }
    target.add(vertex.clone())
}

/// Creates an arc from `tail` to `head`.
///
/// # Errors
///
/// Returns [`GraphError::UnexpectedImplementation`] if either vertex cannot
/// accept arcs.
pub fn draw_arc(tail: &Vertex, head: &Vertex) -> Result<Arc> {
    let arc = Arc::new();
    arc.connect(tail, head)?;
    Ok(arc)
}

/// Creates an arc into `head` from `tail`.
///
/// Same as [`draw_arc`] with the arguments given head first.
///
/// # Errors
///
/// Returns [`GraphError::UnexpectedImplementation`] if either vertex cannot
/// accept arcs.
pub fn draw_arc_reversed(head: &Vertex, tail: &Vertex) -> Result<Arc> {
    draw_arc(tail, head)
}

fn ensure_member(vertex: &Vertex, graph: &Graph) -> Result<()> {
    if graph.contains(vertex) {
        Ok(())
    } else {
        Err(GraphError::VertexNotInGraph {
            vertex: vertex.id().clone(),
        })
    }
}
