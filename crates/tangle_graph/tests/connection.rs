//! Integration tests for the arc connection protocol.
//!
//! Each test drives arcs through the public API only and checks both sides of
//! the connection: the arc's endpoints and the adjacency of the vertices, using
//! the canonical rendering where the full picture matters.


use tangle_graph::prelude::*;
use test_utils::{
    assert_arc_consistent, assert_vertex_consistent, named_vertices, read_only_vertex,
};

// ═══════════════════════════════════════════════════════════════════════════════
// CONNECT
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that connecting a fresh arc records it on both vertices.
#[test]
fn connect_fresh_arc() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();

    arc.connect(&a, &b).unwrap();

    assert_eq!(arc.tail(), Some(a.clone()));
    assert_eq!(arc.head(), Some(b.clone()));
    assert_eq!(a.outgoing_arcs(), vec![arc.clone()]);
    assert_eq!(b.incoming_arcs(), vec![arc.clone()]);
    assert!(a.incoming_arcs().is_empty());
    assert!(b.outgoing_arcs().is_empty());

    let graph = Graph::with_vertices([&a, &b]);
    assert_eq!(render(&graph), "a\nb\n\na --> b");
}

/// Verifies that a second `connect` fails even with the same endpoints.
#[test]
fn connect_twice_fails_with_not_free() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();
    arc.connect(&a, &b).unwrap();

    let err = arc.connect(&a, &b).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.to_string(), "arc is not free");
    assert_eq!(a.outgoing_count(), 1);
    assert_eq!(b.incoming_count(), 1);
}

/// Verifies that `connect` refuses a dangling arc.
#[test]
fn connect_dangling_arc_fails() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();
    arc.attach_head(&b).unwrap();

    let err = arc.connect(&a, &b).unwrap_err();

    assert!(matches!(err, GraphError::ArcNotFree { .. }));
    assert!(a.is_isolated());
    assert_eq!(arc.state(), ArcState::HeadAttached);
}

/// Verifies that parallel arcs between the same vertices are distinct.
#[test]
fn two_arcs_between_same_vertices() {
    let [a, b] = named_vertices(["a", "b"]);
    let first = Arc::new();
    let second = Arc::new();

    first.connect(&a, &b).unwrap();
    second.connect(&a, &b).unwrap();

    assert_eq!(a.outgoing_count(), 2);
    assert_eq!(b.incoming_count(), 2);

    let graph = Graph::with_vertices([&a, &b]);
    assert_eq!(render(&graph), "a\nb\n\na --> b\na --> b");
}

/// Verifies that arcs in both directions are sorted by rendered text.
#[test]
fn mutual_arcs_render_sorted() {
    let [a, b] = named_vertices(["a", "b"]);

    draw_arc(&b, &a).unwrap();
    draw_arc(&a, &b).unwrap();

    let graph = Graph::with_vertices([&b, &a]);
    assert_eq!(render(&graph), "a\nb\n\na --> b\nb --> a");
}

/// Verifies that named arcs render their name between the dashes.
#[test]
fn named_arc_renders_name() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::named("calls");
    arc.connect(&a, &b).unwrap();

    let graph = Graph::with_vertices([&a, &b]);
    assert_eq!(render(&graph), "a\nb\n\na -calls-> b");
}

/// Verifies that a vertex without the connection capability is reported and
/// that nothing is changed on either side.
#[test]
fn connect_to_read_only_vertex_fails() {
    let sealed = read_only_vertex("sealed");
    let [b] = named_vertices(["b"]);
    let arc = Arc::new();

    let err = arc.connect(&sealed, &b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedImplementation);
    assert!(matches!(
        err,
        GraphError::UnexpectedImplementation {
            argument: "tail",
            ..
        }
    ));

    let err = arc.connect(&b, &sealed).unwrap_err();
    assert!(matches!(
        err,
        GraphError::UnexpectedImplementation {
            argument: "head",
            ..
        }
    ));

    assert!(arc.is_free());
    assert!(b.is_isolated());
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTACH
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that attaching only a tail leaves a dangling outgoing arc.
#[test]
fn attach_tail_only() {
    let [a] = named_vertices(["a"]);
    let arc = Arc::new();

    arc.attach_tail(&a).unwrap();

    assert_eq!(arc.state(), ArcState::TailAttached);
    assert!(arc.is_dangling());
    assert_eq!(a.outgoing_arcs(), vec![arc.clone()]);
    assert!(a.incoming_arcs().is_empty());
    assert_eq!(render(&Graph::with_vertices([&a])), "a\n\na -->");
}

/// Verifies that attaching only a head leaves a dangling incoming arc.
#[test]
fn attach_head_only() {
    let [a] = named_vertices(["a"]);
    let arc = Arc::new();

    arc.attach_head(&a).unwrap();

    assert_eq!(arc.state(), ArcState::HeadAttached);
    assert_eq!(a.incoming_arcs(), vec![arc.clone()]);
    assert!(a.outgoing_arcs().is_empty());
    assert_eq!(render(&Graph::with_vertices([&a])), "a\n\n--> a");
}

/// Verifies that attaching tail then head is equivalent to `connect`.
#[test]
fn attach_both_ends_connects() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();

    arc.attach_tail(&a).unwrap();
    arc.attach_head(&b).unwrap();

    assert!(arc.is_connected());
    assert_arc_consistent(&arc);
    assert_eq!(render(&Graph::with_vertices([&a, &b])), "a\nb\n\na --> b");
}

/// Verifies that re-attaching an occupied end fails, even to the same vertex.
#[test]
fn attach_occupied_end_fails() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();
    arc.connect(&a, &b).unwrap();

    let err = arc.attach_tail(&a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.to_string(), "arc already has attached tail");

    let err = arc.attach_head(&a).unwrap_err();
    assert_eq!(err.to_string(), "arc already has attached head");

    assert_eq!(a.outgoing_count(), 1);
    assert_eq!(a.incoming_count(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// DETACH AND DISCONNECT
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that detaching the tail leaves the head side intact.
#[test]
fn detach_tail_keeps_head() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();
    arc.connect(&a, &b).unwrap();

    assert!(arc.detach_tail());

    assert!(arc.tail().is_none());
    assert_eq!(arc.head(), Some(b.clone()));
    assert!(a.outgoing_arcs().is_empty());
    assert_eq!(render(&Graph::with_vertices([&a, &b])), "a\nb\n\n--> b");
}

/// Verifies that detaching a missing end reports `false`.
#[test]
fn detach_missing_end_returns_false() {
    let [a] = named_vertices(["a"]);
    let arc = Arc::new();

    assert!(!arc.detach_tail());
    assert!(!arc.detach_head());

    arc.attach_tail(&a).unwrap();
    assert!(!arc.detach_head());
    assert!(arc.detach_tail());
    assert!(!arc.detach_tail());
    assert!(a.is_isolated());
}

/// Verifies that a detached end can be attached to another vertex.
#[test]
fn reattach_after_detach() {
    let [a, b, c] = named_vertices(["a", "b", "c"]);
    let arc = Arc::new();
    arc.connect(&a, &b).unwrap();

    arc.detach_head();
    arc.attach_head(&c).unwrap();

    assert!(b.incoming_arcs().is_empty());
    assert_eq!(c.incoming_arcs(), vec![arc.clone()]);
    assert_eq!(
        render(&Graph::with_vertices([&a, &b, &c])),
        "a\nb\nc\n\na --> c"
    );
}

/// Verifies that `disconnect` clears both ends and is idempotent.
#[test]
fn disconnect_twice() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();
    arc.connect(&a, &b).unwrap();

    arc.disconnect();
    assert!(arc.is_free());
    assert!(a.is_isolated());
    assert!(b.is_isolated());

    arc.disconnect();
    assert!(arc.is_free());
    assert!(a.is_isolated());
    assert!(b.is_isolated());
    assert_eq!(render(&Graph::with_vertices([&a, &b])), "a\nb");
}

/// Verifies that a disconnected arc can be connected again.
#[test]
fn reconnect_after_disconnect() {
    let [a, b] = named_vertices(["a", "b"]);
    let arc = Arc::new();

    arc.connect(&a, &b).unwrap();
    arc.disconnect();
    arc.connect(&b, &a).unwrap();

    assert_eq!(arc.tail(), Some(b.clone()));
    assert_eq!(arc.head(), Some(a.clone()));
    assert_vertex_consistent(&a);
    assert_vertex_consistent(&b);
}

// ═══════════════════════════════════════════════════════════════════════════════
// LIFETIMES
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that a vertex keeps its arcs alive after the caller drops them.
#[test]
fn vertex_keeps_arcs_alive() {
    let [a, b] = named_vertices(["a", "b"]);
    {
        let arc = Arc::named("kept");
        arc.connect(&a, &b).unwrap();
    }

    let arcs = a.outgoing_arcs();
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].name().as_deref(), Some("kept"));
    assert_eq!(arcs[0].head(), Some(b));
}

/// Verifies that handles are usable from several threads.
#[test]
fn handles_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Vertex>();
    assert_send_sync::<Arc>();
    assert_send_sync::<Graph>();

    let [hub] = named_vertices(["hub"]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let hub = hub.clone();
            scope.spawn(move || {
                let leaf = Vertex::named("leaf");
                draw_arc(&hub, &leaf).unwrap();
            });
        }
    });

    assert_eq!(hub.outgoing_count(), 4);
    assert_vertex_consistent(&hub);
}
