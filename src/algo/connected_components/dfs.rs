use std::time::Duration;

use crate::{
    graph::{GraphStore, VertexId},
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::{ConnectedComponents, RunLog, Step};

pub(super) async fn dfs_paced<F>(
    store: &mut GraphStore,
    on_step: &mut F,
    delay: Duration,
) -> ConnectedComponents
where
    F: FnMut(Step),
{
    // A run always starts from a clean visitation state and an empty log so
    // that re-running on an unchanged store reproduces the trace byte for
    // byte.
    store.reset();

    tracing::debug!(
        vertices = store.vertex_count(),
        edges = store.edges().len(),
        "starting connected components run"
    );

    let mut log = RunLog::new();
    let mut traversal = DfsEvents::new(store);
    let mut components: Vec<Vec<VertexId>> = Vec::new();

    log.push("=== Starting Connected Components Algorithm ===\n");
    emit(store, &log, on_step);
    pause(delay).await;

    for index in 0..store.vertex_count() {
        let root = VertexId::from_index(index);
        if traversal.is_visited(root) {
            continue;
        }

        let current = components.len();
        let mut component = Vec::new();
        log.push(format!("\nStarting new component from node {root}:"));

        traversal.start(root);
        while let Some(event) = traversal.visit_next(store) {
            match event {
                DfsEvent::Open { vertex, .. } => {
                    store.mark_visiting(vertex);
                    component.push(vertex);
                    log.push(format!("  Visiting node {vertex}"));
                    emit(store, &log, on_step);
                    pause(delay).await;
                }
                DfsEvent::Close { vertex, .. } => {
                    store.settle(vertex, current);
                    // The settling snapshot carries no pause; only discovery
                    // steps are paced.
                    emit(store, &log, on_step);
                }
            }
        }

        log.push(format!(
            "Component {}: [{}]",
            current + 1,
            display_ids(&component)
        ));
        tracing::debug!(component = current, size = component.len(), "component closed");
        components.push(component);
        emit(store, &log, on_step);
        pause(delay).await;
    }

    log.push("\n=== Algorithm Complete ===");
    log.push(format!("Total Connected Components: {}\n", components.len()));
    for (index, component) in components.iter().enumerate() {
        log.push(format!(
            "Component {}: [{}]",
            index + 1,
            display_ids(component)
        ));
    }
    emit(store, &log, on_step);

    tracing::debug!(total = components.len(), "connected components run finished");

    ConnectedComponents { components, log }
}

fn display_ids(component: &[VertexId]) -> String {
    component
        .iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit<F>(store: &GraphStore, log: &RunLog, on_step: &mut F)
where
    F: FnMut(Step),
{
    on_step(Step {
        vertices: store.vertices().to_vec(),
        log: log.snapshot(),
    });
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
