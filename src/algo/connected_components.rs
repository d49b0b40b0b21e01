//! Discover [connected] components with an observable DFS trace.
//!
//! The traversal hands an immutable [`Step`] (vertex snapshot plus the run
//! log accumulated so far) to an observer after every state-changing step and
//! pauses for a configurable delay before continuing, so a presentation layer
//! can animate the progress without driving the algorithm itself. Pausing
//! yields to the async runtime instead of blocking, leaving a host service
//! loop free.
//!
//! Given an identical store, two runs produce byte-identical log sequences
//! and identical component partitions. The only randomness in the whole core
//! is the edge sampling in
//! [`GraphStore::generate_random`](crate::graph::GraphStore::generate_random),
//! which happens upstream of the traversal.
//!
//! # Examples
//!
//! ```
//! use stepgraph::{algo::ConnectedComponents, graph::GraphStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut rng = fastrand::Rng::with_seed(7);
//! let mut store = GraphStore::new(4, &mut rng).unwrap();
//! store.add_edge(1, 2);
//! store.add_edge(3, 4);
//!
//! let components = ConnectedComponents::on(&mut store).run().await;
//! assert_eq!(components.len(), 2);
//! # }
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

mod builder;
mod dfs;

pub use builder::ConnectedComponentsBuilder;

use crate::graph::{Vertex, VertexId};

/// Immutable view of one observable step: a defensive copy of every vertex
/// plus the run log accumulated so far.
///
/// The copies are owned by the observer; later mutations by the traversal
/// cannot show up in them retroactively.
#[derive(Debug, Clone)]
pub struct Step {
    pub vertices: Vec<Vertex>,
    pub log: Vec<String>,
}

/// Append-only sequence of human-readable trace lines for one traversal run.
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(line = line.trim(), "trace");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }
}

/// Connected components of a graph, in discovery order.
///
/// Each component lists its vertices in the order they were first visited
/// during one DFS descent; components themselves are ordered by the ascending
/// id of their root. See [module](self) documentation for more details and
/// example.
#[derive(Debug)]
pub struct ConnectedComponents {
    components: Vec<Vec<VertexId>>,
    log: RunLog,
}

impl ConnectedComponents {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Returns the full run log of the traversal that produced this result.
    pub fn log(&self) -> &[String] {
        self.log.lines()
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Vec<VertexId>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [VertexId];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}
