//! Stepwise graph traversal machinery.
//!
//! The traversal implementation in this module is **iterative**, that is, it
//! doesn't use recursion. This means that
//!
//! * the visitor is lazy and can be suspended after every event,
//! * the visitor state is independent of the store itself, allowing vertex
//!   attribute mutations between individual steps,
//! * the traversal is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are explored in ascending index order, so the event
//! sequence is fully deterministic for a given topology.

pub mod dfs;

#[doc(inline)]
pub use self::dfs::DfsEvents;

use crate::graph::{GraphStore, VertexId};

/// Trait for a graph traversal that is advanced one observable step at a
/// time.
pub trait Visitor {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next element in the given store.
    ///
    /// The difference from [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the store and thus allows mutating vertex
    /// attributes between individual visitor steps or passing the visitor
    /// around without lifetime problems.
    fn visit_next(&mut self, store: &GraphStore) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in the given store.
    fn iter<'a>(&'a mut self, store: &'a GraphStore) -> Iter<'a, Self>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            store,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) over the elements in
    /// the given store.
    fn into_iter(self, store: &GraphStore) -> IntoIter<'_, Self>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            store,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V> {
    visitor: &'a mut V,
    store: &'a GraphStore,
}

impl<V> Iterator for Iter<'_, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.store)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V> {
    visitor: V,
    store: &'a GraphStore,
}

impl<V> Iterator for IntoIter<'_, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.store)
    }
}

/// Strictly monotonically increasing numbering of traversal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Use the [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered.
    Open {
        /// Discovered vertex.
        vertex: VertexId,

        /// Discovering time.
        time: Time,
    },

    /// All neighbors of the vertex have been explored.
    Close {
        /// Closed vertex.
        vertex: VertexId,

        /// Closing time.
        time: Time,
    },
}
