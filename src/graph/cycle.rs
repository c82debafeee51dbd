use std::fmt::Debug;

use num_traits::Float;

use crate::graph::{DirectedEdge, EdgeWeightedDigraph};

/// Finds a directed cycle in an edge-weighted digraph, if one exists.
///
/// Depth-first search with an on-recursion-stack marker per vertex; reaching
/// a vertex already on the stack closes a cycle, which is reconstructed by
/// walking parent edges back to that vertex. The search is driven by an
/// explicit work-stack of `(vertex, adjacency position)` frames, so arbitrarily
/// deep graphs cannot overflow the call stack.
///
/// The detector serves two roles: an upfront DAG precondition check for the
/// acyclic shortest-path engines, and the periodic predecessor-graph scan
/// inside Bellman-Ford that surfaces negative cycles. For the latter the
/// found cycle must outlive the throwaway predecessor digraph, so cycle edges
/// are stored by value.
#[derive(Debug)]
pub struct DirectedCycle<W>
where
    W: Float + Debug + Copy,
{
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> DirectedCycle<W>
where
    W: Float + Debug + Copy,
{
    /// Searches `graph` for a directed cycle.
    pub fn new(graph: &EdgeWeightedDigraph<W>) -> Self {
        let v = graph.vertex_count();
        let mut marked = vec![false; v];
        let mut on_stack = vec![false; v];
        let mut edge_to: Vec<Option<usize>> = vec![None; v];

        for s in 0..v {
            if marked[s] {
                continue;
            }
            if let Some(cycle) = Self::dfs(graph, s, &mut marked, &mut on_stack, &mut edge_to) {
                return DirectedCycle { cycle: Some(cycle) };
            }
        }
        DirectedCycle { cycle: None }
    }

    /// Does the digraph have a directed cycle?
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle as an edge sequence in path order, where each
    /// edge's head is the next edge's tail and the last edge closes the loop.
    pub fn cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    /// Consumes the detector, returning the cycle if one was found.
    pub fn into_cycle(self) -> Option<Vec<DirectedEdge<W>>> {
        self.cycle
    }

    fn dfs(
        graph: &EdgeWeightedDigraph<W>,
        root: usize,
        marked: &mut [bool],
        on_stack: &mut [bool],
        edge_to: &mut [Option<usize>],
    ) -> Option<Vec<DirectedEdge<W>>> {
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marked[root] = true;
        on_stack[root] = true;

        while let Some(&mut (v, ref mut pos)) = stack.last_mut() {
            let out = graph.out_edges(v);
            if *pos == out.len() {
                on_stack[v] = false;
                stack.pop();
                continue;
            }
            let id = out[*pos];
            *pos += 1;

            let w = graph.edge(id).to();
            if !marked[w] {
                marked[w] = true;
                on_stack[w] = true;
                edge_to[w] = Some(id);
                stack.push((w, 0));
            } else if on_stack[w] {
                return Some(Self::trace_cycle(graph, id, w, edge_to));
            }
        }
        None
    }

    // Walk parent edges back from the closing edge until the cycle head `w`
    // is reached, then reverse into path order.
    fn trace_cycle(
        graph: &EdgeWeightedDigraph<W>,
        closing: usize,
        w: usize,
        edge_to: &[Option<usize>],
    ) -> Vec<DirectedEdge<W>> {
        let mut path = Vec::new();
        let mut e = *graph.edge(closing);
        while e.from() != w {
            path.push(e);
            match edge_to[e.from()] {
                Some(id) => e = *graph.edge(id),
                // w is an ancestor of the closing edge on the DFS stack
                None => break,
            }
        }
        path.push(e);
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digraph(v: usize, edges: &[(usize, usize, f64)]) -> EdgeWeightedDigraph<f64> {
        let mut g = EdgeWeightedDigraph::new(v);
        for &(from, to, weight) in edges {
            g.add(from, to, weight).unwrap();
        }
        g
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let g = digraph(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
        let finder = DirectedCycle::new(&g);
        assert!(!finder.has_cycle());
        assert!(finder.cycle().is_none());
    }

    #[test]
    fn finds_cycle_in_path_order() {
        let g = digraph(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0), (3, 4, 1.0)]);
        let finder = DirectedCycle::new(&g);
        let cycle = finder.cycle().expect("cycle expected");
        assert_eq!(cycle.len(), 3);
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
        assert_eq!(cycle.last().unwrap().to(), cycle[0].from());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = digraph(2, &[(0, 1, 1.0), (1, 1, -0.5)]);
        let finder = DirectedCycle::new(&g);
        let cycle = finder.cycle().expect("cycle expected");
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle[0].from(), 1);
        assert_eq!(cycle[0].to(), 1);
    }

    #[test]
    fn cycle_unreachable_from_low_ids_is_still_found() {
        let g = digraph(6, &[(0, 1, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)]);
        let finder = DirectedCycle::new(&g);
        assert!(finder.has_cycle());
    }
}
