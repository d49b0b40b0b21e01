use std::time::Duration;

use crate::graph::GraphStore;

use super::{dfs::dfs_paced, ConnectedComponents, Step};

/// Configures an observable traversal run. See [module](super) documentation
/// for details and example.
pub struct ConnectedComponentsBuilder<'a, F> {
    store: &'a mut GraphStore,
    on_step: F,
    delay: Duration,
}

impl ConnectedComponents {
    /// Creates a builder of the algorithm running on the given store.
    ///
    /// The store is borrowed exclusively for the whole run: the traversal
    /// writes visitation results back to its vertices, and no other mutator
    /// may touch the store while the run is in flight.
    pub fn on(store: &mut GraphStore) -> ConnectedComponentsBuilder<'_, fn(Step)> {
        fn noop(_: Step) {}

        ConnectedComponentsBuilder {
            store,
            on_step: noop,
            delay: Duration::ZERO,
        }
    }
}

impl<'a, F> ConnectedComponentsBuilder<'a, F>
where
    F: FnMut(Step),
{
    /// Sets the pause inserted after each observable step.
    ///
    /// The pause yields to the async runtime; a zero delay (the default)
    /// skips the pause entirely.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Sets the observer invoked with a fresh [`Step`] after every
    /// state-changing step of the traversal.
    pub fn on_step<F2>(self, on_step: F2) -> ConnectedComponentsBuilder<'a, F2>
    where
        F2: FnMut(Step),
    {
        ConnectedComponentsBuilder {
            store: self.store,
            on_step,
            delay: self.delay,
        }
    }

    /// Runs the traversal to completion and returns the discovered
    /// components.
    pub async fn run(self) -> ConnectedComponents {
        let Self {
            store,
            mut on_step,
            delay,
        } = self;

        dfs_paced(store, &mut on_step, delay).await
    }
}
