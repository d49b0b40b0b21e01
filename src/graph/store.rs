use fastrand::Rng;
use thiserror::Error;

use super::{
    matrix::AdjMatrix,
    vertex::{Position, Vertex, VertexId},
};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;
const CANVAS_MARGIN: f64 = 80.0;
const NODE_RADIUS: f64 = 30.0;
const MAX_SCATTER_ATTEMPTS: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("graph must have at least one vertex")]
pub struct NewStoreError;

/// An undirected edge as an unordered pair of distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
}

/// Vertex set, edge set and adjacency matrix of the visualized graph.
///
/// Topology mutation goes exclusively through [`add_edge`](Self::add_edge)
/// and [`generate_random`](Self::generate_random); the accessors hand out
/// read views only. Traversal code treats the topology as read-only and
/// mutates nothing but the per-vertex visitation attributes.
#[derive(Debug, Clone)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    matrix: AdjMatrix,
}

impl GraphStore {
    /// Creates a store with `n` unvisited vertices and no edges.
    ///
    /// Every vertex receives a random position on the render canvas, retried
    /// up to a fixed number of attempts to avoid overlapping an earlier
    /// vertex. The randomness comes solely from the passed generator, so a
    /// seeded generator yields a reproducible layout.
    pub fn new(n: usize, rng: &mut Rng) -> Result<Self, NewStoreError> {
        if n == 0 {
            return Err(NewStoreError);
        }

        let mut vertices: Vec<Vertex> = Vec::with_capacity(n);

        for index in 0..n {
            let mut position = random_position(rng);
            let mut attempts = 1;

            while overlaps(&vertices, position) && attempts < MAX_SCATTER_ATTEMPTS {
                position = random_position(rng);
                attempts += 1;
            }

            vertices.push(Vertex::new(VertexId::from_index(index), position));
        }

        Ok(Self {
            vertices,
            edges: Vec::new(),
            matrix: AdjMatrix::new(n),
        })
    }

    /// Adds the undirected edge `{u, v}` given as 1-based ids.
    ///
    /// Self-loops and out-of-range endpoints are silently ignored and adding
    /// the same pair again (in either order) keeps a single edge. Permissive
    /// by design: input validation is the caller's concern.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.vertex_count();
        if u < 1 || u > n || v < 1 || v > n || u == v {
            return;
        }

        let (u, v) = (VertexId::new(u), VertexId::new(v));
        if self.matrix.contains(u.index(), v.index()) {
            return;
        }

        self.matrix.insert(u.index(), v.index());
        self.edges.push(Edge { u, v });
    }

    /// Replaces the edge set with a connectivity-biased random one.
    ///
    /// The edge count is drawn uniformly from `n - 1` (the spanning-tree
    /// lower bound) up to `min(n(n-1)/2, 2n)`, then that many distinct pairs
    /// are taken from a full shuffle of all candidate pairs. The result is
    /// not guaranteed to be connected; multiple components are an expected
    /// outcome for the visualization.
    pub fn generate_random(&mut self, rng: &mut Rng) {
        self.matrix.clear();
        self.edges.clear();

        let n = self.vertex_count();
        let min_edges = n - 1;
        let max_edges = (n * (n - 1) / 2).min(2 * n);
        let target = rng.usize(min_edges..=max_edges);

        let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
        for u in 1..=n {
            for v in (u + 1)..=n {
                pairs.push((u, v));
            }
        }
        rng.shuffle(&mut pairs);

        for &(u, v) in pairs.iter().take(target) {
            self.add_edge(u, v);
        }
    }

    /// Restores every vertex to unvisited with no component, leaving the
    /// topology untouched. Enables replaying a traversal.
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset();
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn matrix(&self) -> &AdjMatrix {
        &self.matrix
    }

    pub(crate) fn mark_visiting(&mut self, id: VertexId) {
        if let Some(vertex) = self.vertices.get_mut(id.index()) {
            vertex.mark_visiting();
        }
    }

    pub(crate) fn settle(&mut self, id: VertexId, component: usize) {
        if let Some(vertex) = self.vertices.get_mut(id.index()) {
            vertex.settle(component);
        }
    }
}

fn random_position(rng: &mut Rng) -> Position {
    Position {
        x: CANVAS_MARGIN + rng.f64() * (CANVAS_WIDTH - 2.0 * CANVAS_MARGIN),
        y: CANVAS_MARGIN + rng.f64() * (CANVAS_HEIGHT - 2.0 * CANVAS_MARGIN),
    }
}

fn overlaps(vertices: &[Vertex], position: Position) -> bool {
    let min_distance = NODE_RADIUS * 2.5;

    vertices.iter().any(|vertex| {
        let dx = vertex.position().x - position.x;
        let dy = vertex.position().y - position.y;
        (dx * dx + dy * dy).sqrt() < min_distance
    })
}

#[cfg(test)]
mod tests {
    use crate::graph::VisitState;

    use super::*;

    fn rng() -> Rng {
        Rng::with_seed(0x5eed)
    }

    fn store(n: usize) -> GraphStore {
        GraphStore::new(n, &mut rng()).unwrap()
    }

    #[test]
    fn rejects_zero_vertices() {
        assert_eq!(GraphStore::new(0, &mut rng()).unwrap_err(), NewStoreError);
    }

    #[test]
    fn add_edge_deduplicates_unordered_pair() {
        let mut store = store(4);

        store.add_edge(1, 2);
        store.add_edge(1, 2);
        store.add_edge(2, 1);

        assert_eq!(store.edges().len(), 1);
        assert!(store.matrix().contains(0, 1));
        assert!(store.matrix().contains(1, 0));
    }

    #[test]
    fn add_edge_ignores_self_loop() {
        let mut store = store(4);

        store.add_edge(1, 1);

        assert!(store.edges().is_empty());
        assert!(!store.matrix().contains(0, 0));
    }

    #[test]
    fn add_edge_ignores_out_of_range() {
        let mut store = store(5);

        store.add_edge(0, 1);
        store.add_edge(1, 6);
        store.add_edge(6, 7);

        assert!(store.edges().is_empty());
        assert_eq!(store.matrix().to_table(), vec![vec![0; 5]; 5]);
    }

    #[test]
    fn reset_clears_visitation_keeps_topology() {
        let mut store = store(3);
        store.add_edge(1, 2);
        store.mark_visiting(VertexId::new(1));
        store.settle(VertexId::new(2), 0);

        let edges_before = store.edges().to_vec();
        let table_before = store.matrix().to_table();

        store.reset();

        for vertex in store.vertices() {
            assert_eq!(vertex.state(), VisitState::Unvisited);
            assert_eq!(vertex.component(), None);
        }
        assert_eq!(store.edges(), edges_before.as_slice());
        assert_eq!(store.matrix().to_table(), table_before);
    }

    #[test]
    fn generate_random_stays_within_bounds() {
        for seed in 0..32 {
            let mut rng = Rng::with_seed(seed);
            let mut store = GraphStore::new(7, &mut rng).unwrap();

            store.generate_random(&mut rng);

            let count = store.edges().len();
            assert!((6..=14).contains(&count), "edge count {count} out of bounds");

            let table = store.matrix().to_table();
            for i in 0..7 {
                assert_eq!(table[i][i], 0, "diagonal must be zero");
                for j in 0..7 {
                    assert_eq!(table[i][j], table[j][i], "matrix must be symmetric");
                }
            }
        }
    }

    #[test]
    fn generate_random_clears_previous_edges() {
        let mut rng = rng();
        let mut store = GraphStore::new(4, &mut rng).unwrap();
        store.add_edge(1, 4);

        store.generate_random(&mut rng);

        let set_cells: usize = store
            .matrix()
            .to_table()
            .iter()
            .flatten()
            .map(|&cell| cell as usize)
            .sum();
        assert_eq!(set_cells, 2 * store.edges().len());
    }

    #[test]
    fn generate_random_single_vertex() {
        let mut rng = rng();
        let mut store = GraphStore::new(1, &mut rng).unwrap();

        store.generate_random(&mut rng);

        assert!(store.edges().is_empty());
    }

    #[test]
    fn positions_respect_canvas_margins() {
        let store = store(10);

        for vertex in store.vertices() {
            let position = vertex.position();
            assert!((CANVAS_MARGIN..=CANVAS_WIDTH - CANVAS_MARGIN).contains(&position.x));
            assert!((CANVAS_MARGIN..=CANVAS_HEIGHT - CANVAS_MARGIN).contains(&position.y));
        }
    }
}
