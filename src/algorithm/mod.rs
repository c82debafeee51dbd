pub mod acyclic;
pub mod bellman_ford;
pub mod dijkstra;
pub mod traits;
pub mod verify;

pub use traits::ShortestPaths;
