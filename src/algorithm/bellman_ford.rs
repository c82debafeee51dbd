use std::collections::VecDeque;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::traits::{tree_path, ShortestPaths};
use crate::algorithm::verify;
use crate::graph::{DirectedCycle, DirectedEdge, EdgeId, EdgeWeightedDigraph};
use crate::{Error, Result};

/// Bellman-Ford-Moore: single-source shortest paths with arbitrary edge
/// weights, finding either a shortest-path tree or a negative cycle
/// reachable from the source.
///
/// Instead of V−1 full relaxation rounds this keeps a FIFO queue of vertices
/// whose distance just improved, with an `on_queue` flag suppressing
/// duplicates. A negative cycle would keep the queue busy forever, so after
/// every V edge relaxations the current predecessor edges are materialized
/// into a digraph of their own and handed to [`DirectedCycle`]; any cycle in
/// that predecessor digraph can only be sustained by a net-negative chain of
/// improvements, so it is recorded and the main loop halts.
///
/// Construction always succeeds. In the cycle outcome the recorded cycle is
/// the sole valid output: [`dist_to`](ShortestPaths::dist_to) and
/// [`path_to`](ShortestPaths::path_to) fail with
/// [`Error::NegativeCycleExists`], while
/// [`has_negative_cycle`](BellmanFordSP::has_negative_cycle) and
/// [`negative_cycle`](BellmanFordSP::negative_cycle) are always safe.
#[derive(Debug)]
pub struct BellmanFordSP<'g, W>
where
    W: Float + Debug + Copy,
{
    graph: &'g EdgeWeightedDigraph<W>,
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<EdgeId>>,
    on_queue: Vec<bool>,
    queue: VecDeque<usize>,
    /// number of edge relaxations so far, drives the cycle-check cadence
    cost: usize,
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<'g, W> BellmanFordSP<'g, W>
where
    W: Float + Debug + Copy,
{
    /// Computes a shortest-path tree from `source`, or finds a negative
    /// cycle reachable from it.
    pub fn new(graph: &'g EdgeWeightedDigraph<W>, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }

        let mut sp = BellmanFordSP {
            graph,
            source,
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
            on_queue: vec![false; n],
            queue: VecDeque::new(),
            cost: 0,
            cycle: None,
        };
        sp.compute()?;

        debug_assert!(sp.check());
        Ok(sp)
    }

    fn compute(&mut self) -> Result<()> {
        debug!(
            "bellman-ford: {} vertices, {} edges, source {}",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.source
        );

        self.dist_to[self.source] = W::zero();
        self.queue.push_back(self.source);
        self.on_queue[self.source] = true;

        while let Some(v) = self.queue.pop_front() {
            if self.has_negative_cycle() {
                break;
            }
            self.on_queue[v] = false;
            self.relax(v)?;
        }
        Ok(())
    }

    /// Relaxes every edge leaving `v`, enqueueing improved endpoints.
    fn relax(&mut self, v: usize) -> Result<()> {
        let graph = self.graph;
        let n = graph.vertex_count();
        for &id in graph.out_edges(v) {
            let e = graph.edge(id);
            let w = e.to();
            let candidate = self.dist_to[v] + e.weight();
            if candidate < self.dist_to[w] {
                trace!("relax {:?}: {:?} -> {:?}", e, self.dist_to[w], candidate);
                self.dist_to[w] = candidate;
                self.edge_to[w] = Some(id);
                if !self.on_queue[w] {
                    self.queue.push_back(w);
                    self.on_queue[w] = true;
                }
            }
            if self.cost % n == 0 {
                self.find_negative_cycle()?;
                if self.has_negative_cycle() {
                    return Ok(());
                }
            }
            self.cost += 1;
        }
        Ok(())
    }

    /// Searches the predecessor digraph (at most one outgoing edge per
    /// vertex, its current `edge_to`) for a cycle.
    fn find_negative_cycle(&mut self) -> Result<()> {
        let n = self.graph.vertex_count();
        let mut spt = EdgeWeightedDigraph::new(n);
        for v in 0..n {
            if let Some(id) = self.edge_to[v] {
                spt.add_edge(*self.graph.edge(id))?;
            }
        }

        self.cycle = DirectedCycle::new(&spt).into_cycle();
        if let Some(cycle) = &self.cycle {
            debug!(
                "negative cycle of {} edges found after {} relaxations",
                cycle.len(),
                self.cost
            );
        }
        Ok(())
    }

    /// Is there a negative cycle reachable from the source?
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a negative cycle reachable from the source as an edge
    /// sequence in cycle order, or `None` if no such cycle exists.
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }

    // Either the recorded cycle has strictly negative weight, or the tree
    // satisfies the optimality conditions.
    fn check(&self) -> bool {
        match &self.cycle {
            Some(cycle) => verify::is_negative_cycle(cycle),
            None => verify::optimality_conditions(
                self.graph,
                self.source,
                &self.dist_to,
                &self.edge_to,
                verify::Sense::Shortest,
            ),
        }
    }
}

impl<W> ShortestPaths<W> for BellmanFordSP<'_, W>
where
    W: Float + Debug + Copy,
{
    fn source(&self) -> usize {
        self.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.validate_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycleExists);
        }
        Ok(self.dist_to[v])
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] < W::infinity())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>> {
        self.validate_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycleExists);
        }
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(tree_path(self.graph, &self.edge_to, v)))
    }
}
