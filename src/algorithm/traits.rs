use std::fmt::Debug;

use num_traits::Float;

use crate::graph::{DirectedEdge, EdgeId, EdgeWeightedDigraph};
use crate::Result;

/// Query surface shared by every SSSP engine.
///
/// An engine is built once against a digraph snapshot and a source vertex;
/// afterward these methods read the finished distance/predecessor tree.
/// [`AcyclicLP`](crate::AcyclicLP) exposes the same surface with
/// longest-path semantics.
pub trait ShortestPaths<W>
where
    W: Float + Debug + Copy,
{
    /// The source vertex this tree was computed from.
    fn source(&self) -> usize;

    /// Distance of the best known source-to-`v` path; the engine's sentinel
    /// (`+∞`, or `-∞` for longest paths) when `v` is unreachable.
    fn dist_to(&self, v: usize) -> Result<W>;

    /// Is `v` reachable from the source?
    fn has_path_to(&self, v: usize) -> Result<bool>;

    /// The best source-to-`v` path as an ordered edge sequence, or `None`
    /// when `v` is unreachable.
    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>>;
}

/// Walks predecessor edges back from `v` to the tree root and returns the
/// path in source-to-`v` order.
pub(crate) fn tree_path<'g, W>(
    graph: &'g EdgeWeightedDigraph<W>,
    edge_to: &[Option<EdgeId>],
    v: usize,
) -> Vec<&'g DirectedEdge<W>>
where
    W: Float + Debug + Copy,
{
    let mut path = Vec::new();
    let mut current = v;
    while let Some(id) = edge_to[current] {
        let edge = graph.edge(id);
        path.push(edge);
        current = edge.from();
    }
    path.reverse();
    path
}
