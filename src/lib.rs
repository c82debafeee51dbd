//! Single-source shortest paths over edge-weighted digraphs.
//!
//! Three engines cover the three weight regimes: [`DijkstraSP`] for
//! non-negative weights, [`BellmanFordSP`] for arbitrary weights with
//! negative-cycle detection, and [`AcyclicSP`]/[`AcyclicLP`] for DAGs
//! (shortest or longest paths via topological relaxation).
//!
//! All engines are one-shot: construct against a fixed
//! [`EdgeWeightedDigraph`] snapshot and a source vertex, then query the
//! resulting distance/predecessor tree read-only.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    acyclic::{AcyclicLP, AcyclicSP},
    bellman_ford::BellmanFordSP,
    dijkstra::DijkstraSP,
    ShortestPaths,
};
pub use data_structures::IndexedPriorityQueue;
pub use graph::{DirectedEdge, EdgeWeightedDigraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vertex {0} is not a valid vertex index")]
    InvalidVertex(usize),

    #[error("edge {from}->{to} has NaN weight")]
    NanWeight { from: usize, to: usize },

    #[error("edge {from}->{to} has negative weight {weight}")]
    NegativeWeightEdge { from: usize, to: usize, weight: f64 },

    #[error("digraph is not acyclic")]
    NotADag,

    #[error("negative cost cycle reachable from source")]
    NegativeCycleExists,

    #[error("priority queue underflow")]
    Underflow,

    #[error("index {0} is already in the priority queue")]
    IndexAlreadyPresent(usize),

    #[error("index {0} is not in the priority queue")]
    IndexNotPresent(usize),

    #[error("new key for index {0} does not improve on the current key")]
    NonImprovingKey(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
