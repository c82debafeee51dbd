use std::fmt::Debug;
use std::ops::Range;

use num_traits::Float;
use rand::prelude::*;

use crate::graph::EdgeWeightedDigraph;
use crate::Result;

/// Generates a digraph with `v` vertices and `e` edges whose endpoints are
/// chosen uniformly and whose weights are drawn uniformly from `weights`.
pub fn random_digraph<W, R>(
    v: usize,
    e: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedDigraph<W>>
where
    W: Float + Debug + Copy,
    R: Rng + ?Sized,
{
    assert!(v > 0, "graph must have at least one vertex");
    let mut graph = EdgeWeightedDigraph::new(v);
    for _ in 0..e {
        let from = rng.gen_range(0..v);
        let to = rng.gen_range(0..v);
        let weight = W::from(rng.gen_range(weights.clone())).unwrap_or_else(W::zero);
        graph.add(from, to, weight)?;
    }
    Ok(graph)
}

/// Generates a random DAG with `v` vertices and `e` edges.
///
/// Every edge points from a lower to a higher vertex id, so the identity
/// order is already topological and the result is acyclic by construction.
pub fn random_dag<W, R>(
    v: usize,
    e: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedDigraph<W>>
where
    W: Float + Debug + Copy,
    R: Rng + ?Sized,
{
    assert!(v >= 2, "a DAG with edges needs at least two vertices");
    let mut graph = EdgeWeightedDigraph::new(v);
    for _ in 0..e {
        let from = rng.gen_range(0..v - 1);
        let to = rng.gen_range(from + 1..v);
        let weight = W::from(rng.gen_range(weights.clone())).unwrap_or_else(W::zero);
        graph.add(from, to, weight)?;
    }
    Ok(graph)
}
