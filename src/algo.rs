//! Graph algorithms with an observable, paced execution.

pub mod connected_components;

#[doc(inline)]
pub use connected_components::ConnectedComponents;
