pub mod cycle;
pub mod digraph;
pub mod edge;
pub mod generators;
pub mod topological;

pub use cycle::DirectedCycle;
pub use digraph::{EdgeId, EdgeWeightedDigraph};
pub use edge::DirectedEdge;
pub use topological::Topological;
