pub mod algo;
pub mod color;
pub mod graph;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::ConnectedComponents,
        graph::{GraphStore, Vertex, VertexId, VisitState},
        visit::Visitor,
    };
}
