//! Fixed palette for rendering vertex states.
//!
//! Coloring is driven purely by [`VisitState`] and the settled component
//! index; the traversal itself never reads colors. Presentation collaborators
//! are free to apply their own styling on top of this mapping.

use crate::graph::{Vertex, VisitState};

/// Fill for a vertex that has not been discovered yet.
pub const UNVISITED: &str = "#9CA3AF";

/// Highlight for a vertex between discovery and settlement.
pub const VISITING: &str = "#FCD34D";

/// Distinct colors assigned to settled components, cycling when a graph has
/// more than eight components.
pub const COMPONENT_PALETTE: [&str; 8] = [
    "#10B981", "#3B82F6", "#EF4444", "#8B5CF6", "#F59E0B", "#EC4899", "#14B8A6", "#F97316",
];

/// Returns the render color for the vertex in its current state.
pub fn vertex_color(vertex: &Vertex) -> &'static str {
    match vertex.state() {
        VisitState::Unvisited => UNVISITED,
        VisitState::Visiting => VISITING,
        VisitState::Settled => {
            let index = vertex.component().unwrap_or(0);
            COMPONENT_PALETTE[index % COMPONENT_PALETTE.len()]
        }
    }
}
