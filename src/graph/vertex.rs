use std::fmt;

/// Identifier of a vertex, 1-based as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates an id from its 1-based number.
    pub fn new(id: usize) -> Self {
        debug_assert!(id >= 1, "vertex ids are 1-based");
        Self(id)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based number of the id.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Returns the 0-based position of the vertex in the store.
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2-D position of a vertex on the render canvas.
///
/// Set once at construction and never touched by traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-run visitation state of a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisitState {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered, subtree exploration still in progress.
    Visiting,
    /// Subtree fully explored and component membership finalized.
    Settled,
}

/// A vertex together with its visualization attributes.
///
/// The component index is `Some` if and only if the vertex is
/// [`VisitState::Settled`]. The fields are private so the invariant cannot be
/// broken from outside the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    position: Position,
    state: VisitState,
    component: Option<usize>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Position) -> Self {
        Self {
            id,
            position,
            state: VisitState::Unvisited,
            component: None,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> VisitState {
        self.state
    }

    /// Returns the 0-based index of the component the vertex belongs to, once
    /// the vertex is settled.
    pub fn component(&self) -> Option<usize> {
        self.component
    }

    pub(crate) fn mark_visiting(&mut self) {
        self.state = VisitState::Visiting;
    }

    pub(crate) fn settle(&mut self, component: usize) {
        self.state = VisitState::Settled;
        self.component = Some(component);
    }

    pub(crate) fn reset(&mut self) {
        self.state = VisitState::Unvisited;
        self.component = None;
    }
}
