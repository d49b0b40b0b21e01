//! Runs the paced traversal over a random graph and prints the trace to the
//! terminal as it unfolds.
//!
//! ```sh
//! cargo run --example terminal_trace
//! RUST_LOG=stepgraph=debug cargo run --example terminal_trace
//! ```

use std::time::Duration;

use stepgraph::{algo::ConnectedComponents, color, graph::GraphStore};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = fastrand::Rng::with_seed(42);
    let mut store = match GraphStore::new(8, &mut rng) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    store.generate_random(&mut rng);

    for edge in store.edges() {
        println!("edge {} -- {}", edge.u, edge.v);
    }

    let mut printed = 0;
    let components = ConnectedComponents::on(&mut store)
        .with_delay(Duration::from_millis(150))
        .on_step(|step| {
            for line in &step.log[printed..] {
                println!("{line}");
            }
            printed = step.log.len();
        })
        .run()
        .await;

    println!();
    for vertex in store.vertices() {
        println!("node {} -> {}", vertex.id(), color::vertex_color(vertex));
    }
    println!("total components: {}", components.len());
}
