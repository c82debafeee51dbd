use std::fmt::Debug;

use num_traits::Float;

use crate::graph::{DirectedCycle, EdgeWeightedDigraph};

/// Computes a topological order of an edge-weighted digraph, when one exists.
///
/// The order is the reverse of a whole-graph DFS postorder, visiting unmarked
/// vertices in id order and unmarked neighbors in adjacency order; it exists
/// exactly when [`DirectedCycle`] finds no cycle. DFS is iterative for the
/// same stack-depth reason as the cycle detector.
#[derive(Debug)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<Option<usize>>,
}

impl Topological {
    /// Determines whether `graph` has a topological order and, if so,
    /// computes one.
    pub fn new<W>(graph: &EdgeWeightedDigraph<W>) -> Self
    where
        W: Float + Debug + Copy,
    {
        let v = graph.vertex_count();
        if DirectedCycle::new(graph).has_cycle() {
            return Topological {
                order: None,
                rank: vec![None; v],
            };
        }

        let mut marked = vec![false; v];
        let mut postorder = Vec::with_capacity(v);
        for s in 0..v {
            if !marked[s] {
                Self::dfs(graph, s, &mut marked, &mut postorder);
            }
        }
        postorder.reverse();

        let mut rank = vec![None; v];
        for (i, &w) in postorder.iter().enumerate() {
            rank[w] = Some(i);
        }
        Topological {
            order: Some(postorder),
            rank,
        }
    }

    /// Does the digraph have a topological order?
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the vertices in topological order, or `None` if the digraph
    /// has a directed cycle.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of vertex `v` in the topological order.
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.rank.get(v).copied().flatten()
    }

    fn dfs<W>(
        graph: &EdgeWeightedDigraph<W>,
        root: usize,
        marked: &mut [bool],
        postorder: &mut Vec<usize>,
    ) where
        W: Float + Debug + Copy,
    {
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marked[root] = true;

        while let Some(&mut (v, ref mut pos)) = stack.last_mut() {
            let out = graph.out_edges(v);
            if *pos == out.len() {
                postorder.push(v);
                stack.pop();
                continue;
            }
            let w = graph.edge(out[*pos]).to();
            *pos += 1;
            if !marked[w] {
                marked[w] = true;
                stack.push((w, 0));
            }
        }
    }
}
