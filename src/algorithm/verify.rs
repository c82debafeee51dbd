//! Post-construction self-verification of relaxation invariants.
//!
//! A correct shortest-path tree satisfies, for every edge `v->w`,
//! `dist_to[w] <= dist_to[v] + weight`, with equality on every tree edge
//! (inequalities flipped for longest paths). The engines assert these checks
//! in debug builds; the integration tests call them directly. They are not
//! part of the caller-visible error surface.

use std::fmt::Debug;

use log::error;
use num_traits::Float;

use crate::graph::{DirectedEdge, EdgeId, EdgeWeightedDigraph};

/// Which extremum a tree was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Shortest,
    Longest,
}

impl Sense {
    fn sentinel<W: Float>(self) -> W {
        match self {
            Sense::Shortest => W::infinity(),
            Sense::Longest => W::neg_infinity(),
        }
    }

    fn violated<W: Float>(self, dist_w: W, candidate: W) -> bool {
        match self {
            Sense::Shortest => candidate < dist_w,
            Sense::Longest => candidate > dist_w,
        }
    }
}

/// Checks the optimality conditions of a finished distance/predecessor tree.
pub fn optimality_conditions<W>(
    graph: &EdgeWeightedDigraph<W>,
    source: usize,
    dist_to: &[W],
    edge_to: &[Option<EdgeId>],
    sense: Sense,
) -> bool
where
    W: Float + Debug + Copy,
{
    if dist_to[source] != W::zero() || edge_to[source].is_some() {
        error!("dist_to[source] and edge_to[source] inconsistent");
        return false;
    }
    for v in 0..graph.vertex_count() {
        if v == source {
            continue;
        }
        if edge_to[v].is_none() && dist_to[v] != sense.sentinel() {
            error!("dist_to[{}] set but edge_to[{}] missing", v, v);
            return false;
        }
    }

    // no edge may still admit an improving relaxation
    for e in graph.edges() {
        let (v, w) = (e.from(), e.to());
        if sense.violated(dist_to[w], dist_to[v] + e.weight()) {
            error!("edge {:?} not relaxed", e);
            return false;
        }
    }

    // every tree edge must be tight
    for w in 0..graph.vertex_count() {
        let e = match edge_to[w] {
            Some(id) => graph.edge(id),
            None => continue,
        };
        if e.to() != w {
            error!("edge_to[{}] does not point at {}", w, w);
            return false;
        }
        if dist_to[e.from()] + e.weight() != dist_to[w] {
            error!("tree edge {:?} not tight", e);
            return false;
        }
    }
    true
}

/// Checks that a reported negative cycle is a genuine cycle with strictly
/// negative total weight, by independently summing its edges.
pub fn is_negative_cycle<W>(cycle: &[DirectedEdge<W>]) -> bool
where
    W: Float + Debug + Copy,
{
    if cycle.is_empty() {
        return false;
    }
    for pair in cycle.windows(2) {
        if pair[0].to() != pair[1].from() {
            error!("cycle edges {:?} and {:?} not incident", pair[0], pair[1]);
            return false;
        }
    }
    let (first, last) = (&cycle[0], &cycle[cycle.len() - 1]);
    if last.to() != first.from() {
        error!("cycle edges {:?} and {:?} do not close the loop", last, first);
        return false;
    }

    let weight = cycle
        .iter()
        .fold(W::zero(), |total, e| total + e.weight());
    if weight >= W::zero() {
        error!("weight of reported negative cycle is {:?}", weight);
        return false;
    }
    true
}
