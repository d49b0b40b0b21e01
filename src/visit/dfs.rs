use fixedbitset::FixedBitSet;

use super::{DfsEvent, Time, Visitor};
use crate::graph::{GraphStore, VertexId};

// One frame of the explicit traversal stack: a vertex together with the
// cursor into its neighbor row. Replaces the recursion described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html
// so the traversal can be suspended between any two events.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    cursor: usize,
    opened: bool,
}

impl Frame {
    fn new(vertex: usize) -> Self {
        Self {
            vertex,
            cursor: 0,
            opened: false,
        }
    }
}

/// Iterative depth-first search reporting [`DfsEvent`]s.
///
/// [`DfsEvent::Open`] is emitted in pre-order, before any neighbor of the
/// vertex is descended into; [`DfsEvent::Close`] once all its neighbors are
/// exhausted. Visited marks are kept across [`start`](DfsEvents::start)
/// calls, so a multi-root loop visits every vertex exactly once.
pub struct DfsEvents {
    visited: FixedBitSet,
    stack: Vec<Frame>,
    time: usize,
}

impl DfsEvents {
    pub fn new(store: &GraphStore) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(store.vertex_count()),
            stack: Vec::new(),
            time: 0,
        }
    }

    /// Starts (or restarts) the traversal from the given root.
    ///
    /// An already visited root yields no events.
    pub fn start(&mut self, root: VertexId) {
        self.stack.clear();
        self.stack.push(Frame::new(root.index()));
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.contains(id.index())
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.clear();
        self.time = 0;
    }

    fn tick(&mut self) -> Time {
        let time = Time(self.time);
        self.time += 1;
        time
    }
}

impl Visitor for DfsEvents {
    type Item = DfsEvent;

    fn visit_next(&mut self, store: &GraphStore) -> Option<DfsEvent> {
        let n = store.vertex_count();

        loop {
            let top = self.stack.len().checked_sub(1)?;

            if !self.stack[top].opened {
                self.stack[top].opened = true;
                let vertex = self.stack[top].vertex;

                if self.visited.put(vertex) {
                    // A root that was already visited by an earlier start.
                    self.stack.pop();
                    continue;
                }

                let time = self.tick();
                return Some(DfsEvent::Open {
                    vertex: VertexId::from_index(vertex),
                    time,
                });
            }

            let vertex = self.stack[top].vertex;
            let mut cursor = self.stack[top].cursor;
            let mut next = None;

            while cursor < n {
                let candidate = cursor;
                cursor += 1;

                if store.matrix().contains(vertex, candidate) && !self.visited.contains(candidate) {
                    next = Some(candidate);
                    break;
                }
            }

            self.stack[top].cursor = cursor;

            match next {
                Some(neighbor) => self.stack.push(Frame::new(neighbor)),
                None => {
                    self.stack.pop();
                    let time = self.tick();
                    return Some(DfsEvent::Close {
                        vertex: VertexId::from_index(vertex),
                        time,
                    });
                }
            }
        }
    }
}
