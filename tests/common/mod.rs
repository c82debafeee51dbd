// Not every test binary uses every helper.
#![allow(dead_code)]

use sssp_core::EdgeWeightedDigraph;

pub const EPS: f64 = 1e-10;

pub fn digraph(v: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedDigraph<f64> {
    let mut g = EdgeWeightedDigraph::new(v);
    for &(from, to, weight) in edges {
        g.add(from, to, weight).expect("valid edge");
    }
    g
}

/// The 8-vertex non-negative digraph from Sedgewick & Wayne §4.4; from
/// source 0 the cheapest route to 1 is 0->4->5->1 = 1.05.
pub fn tiny_ewd() -> EdgeWeightedDigraph<f64> {
    digraph(
        8,
        &[
            (4, 5, 0.35),
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

/// Same shape with negative weights but no negative cycle.
pub fn tiny_ewdn() -> EdgeWeightedDigraph<f64> {
    digraph(
        8,
        &[
            (4, 5, 0.35),
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, -1.20),
            (3, 6, 0.52),
            (6, 0, -1.40),
            (6, 4, -1.25),
        ],
    )
}

/// Same shape with the 5->4 weight flipped to -0.66, closing the reachable
/// negative cycle 4->5->4 of weight -0.31.
pub fn tiny_ewdnc() -> EdgeWeightedDigraph<f64> {
    digraph(
        8,
        &[
            (4, 5, 0.35),
            (5, 4, -0.66),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

/// The 8-vertex DAG from §4.4; longest path from 5 to 0 is
/// 5->1->3->6->4->0 = 2.44.
pub fn tiny_ewdag() -> EdgeWeightedDigraph<f64> {
    digraph(
        8,
        &[
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (5, 1, 0.32),
            (4, 0, 0.38),
            (0, 2, 0.26),
            (3, 7, 0.39),
            (1, 3, 0.29),
            (7, 2, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
}

pub fn approx(a: f64, b: f64) -> bool {
    // exact equality covers the infinite sentinels
    a == b || (a - b).abs() < EPS
}
