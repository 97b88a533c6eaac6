//! Canonical text rendering of graphs and arcs.
//!
//! The rendered form is deterministic and byte-exact, which makes it a
//! convenient oracle in tests:
//!
//! ```text
//! a
//! b
//!
//! a --> b
//! b -back-> a
//! ```
//!
//! Vertex names come first, sorted, one per line. If any arc touches a member
//! vertex, a blank line follows and then the arcs, sorted by their rendered
//! text. There is no trailing newline.

use std::borrow::Cow;

use crate::arc::Arc;
use crate::graph::Graph;
use crate::operations::arcs_touching;
use crate::vertex::Vertex;

/// Text used in place of a missing vertex name.
pub const UNNAMED_PLACEHOLDER: &str = "<null-name>";

/// Knobs for [`render_with`].
///
/// The default options produce the canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    unnamed_placeholder: Cow<'static, str>,
}

impl RenderOptions {
    /// Creates the canonical options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text printed for vertices without a name.
    #[must_use]
    pub fn with_unnamed_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.unnamed_placeholder = placeholder.into();
        self
    }

    /// Returns the text printed for vertices without a name.
    #[must_use]
    pub fn unnamed_placeholder(&self) -> &str {
        &self.unnamed_placeholder
    }

    fn vertex_label(&self, vertex: &Vertex) -> String {
        vertex
            .name()
            .unwrap_or_else(|| self.unnamed_placeholder.to_string())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unnamed_placeholder: Cow::Borrowed(UNNAMED_PLACEHOLDER),
        }
    }
}

/// Renders a graph in canonical form.
#[must_use]
pub fn render(graph: &Graph) -> String {
    render_with(graph, &RenderOptions::default())
}

/// Renders a graph with custom options.
#[must_use]
pub fn render_with(graph: &Graph, options: &RenderOptions) -> String {
    let mut names: Vec<String> = graph
        .iter()
        .map(|vertex| options.vertex_label(vertex))
        .collect();
    names.sort_unstable();

    let mut arcs: Vec<String> = arcs_touching(graph)
        .iter()
        .map(|arc| render_arc_with(arc, options))
        .collect();
    arcs.sort_unstable();

    let mut out = names.join("\n");
    if !arcs.is_empty() {
        out.push_str("\n\n");
        out.push_str(&arcs.join("\n"));
    }
    out
}

/// Renders a single arc in canonical form.
#[must_use]
pub fn render_arc(arc: &Arc) -> String {
    render_arc_with(arc, &RenderOptions::default())
}

/// Renders a single arc as `"<tail> -<name>-> <head>"`.
///
/// A missing tail drops `"<tail> "`, a missing head drops `" <head>"`.
#[must_use]
pub fn render_arc_with(arc: &Arc, options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(tail) = arc.tail() {
        out.push_str(&options.vertex_label(&tail));
        out.push(' ');
    }

    out.push('-');
    if let Some(name) = arc.name() {
        out.push_str(&name);
    }
    out.push_str("->");

    if let Some(head) = arc.head() {
        out.push(' ');
        out.push_str(&options.vertex_label(&head));
    }

    out
}
