//! Storage for the visualized graph.
//!
//! [`GraphStore`] owns the vertex set, the symmetric adjacency relation and
//! the per-vertex visualization attributes. It contains no traversal logic;
//! algorithms in [`crate::algo`] consume the store for structure and write
//! visitation results back through it.

mod matrix;
mod store;
mod vertex;

pub use matrix::AdjMatrix;
pub use store::{Edge, GraphStore, NewStoreError};
pub use vertex::{Position, Vertex, VertexId, VisitState};
