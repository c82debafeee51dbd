use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, ToPrimitive};
use ordered_float::OrderedFloat;

use crate::algorithm::traits::{tree_path, ShortestPaths};
use crate::algorithm::verify;
use crate::data_structures::{IndexedPriorityQueue, MinPriorityQueue};
use crate::graph::{DirectedEdge, EdgeId, EdgeWeightedDigraph};
use crate::{Error, Result};

/// Dijkstra's algorithm: single-source shortest paths for digraphs with
/// non-negative edge weights.
///
/// Uses the indexed min-priority queue keyed by tentative distance; each
/// extracted vertex's distance is final, so every edge is relaxed at most
/// once. Construction is Θ(E log V); queries are constant time.
///
/// Any negative-weight edge anywhere in the digraph, reachable from the
/// source or not, fails construction before any relaxation runs.
#[derive(Debug)]
pub struct DijkstraSP<'g, W>
where
    W: Float + Debug + Copy,
{
    graph: &'g EdgeWeightedDigraph<W>,
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<EdgeId>>,
}

impl<'g, W> DijkstraSP<'g, W>
where
    W: Float + Debug + Copy,
    OrderedFloat<W>: Ord,
{
    /// Computes the shortest-path tree from `source`.
    pub fn new(graph: &'g EdgeWeightedDigraph<W>, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        for e in graph.edges() {
            if e.weight() < W::zero() {
                return Err(Error::NegativeWeightEdge {
                    from: e.from(),
                    to: e.to(),
                    weight: e.weight().to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let mut sp = DijkstraSP {
            graph,
            source,
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
        };
        sp.compute()?;

        debug_assert!(verify::optimality_conditions(
            graph,
            source,
            &sp.dist_to,
            &sp.edge_to,
            verify::Sense::Shortest,
        ));
        Ok(sp)
    }

    fn compute(&mut self) -> Result<()> {
        let graph = self.graph;
        debug!(
            "dijkstra: {} vertices, {} edges, source {}",
            graph.vertex_count(),
            graph.edge_count(),
            self.source
        );

        self.dist_to[self.source] = W::zero();
        let mut pq = IndexedPriorityQueue::min(graph.vertex_count());
        pq.insert(self.source, OrderedFloat(W::zero()))?;

        while !pq.is_empty() {
            let v = pq.pop_min()?;
            for &id in graph.out_edges(v) {
                self.relax(id, &mut pq)?;
            }
        }
        Ok(())
    }

    fn relax(&mut self, id: EdgeId, pq: &mut MinPriorityQueue<OrderedFloat<W>>) -> Result<()> {
        let e = self.graph.edge(id);
        let (v, w) = (e.from(), e.to());
        let candidate = self.dist_to[v] + e.weight();
        if candidate < self.dist_to[w] {
            trace!("relax {:?}: {:?} -> {:?}", e, self.dist_to[w], candidate);
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(id);
            if pq.contains(w)? {
                pq.decrease_key(w, OrderedFloat(candidate))?;
            } else {
                pq.insert(w, OrderedFloat(candidate))?;
            }
        }
        Ok(())
    }
}

impl<W> DijkstraSP<'_, W>
where
    W: Float + Debug + Copy,
{
    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }
}

impl<W> ShortestPaths<W> for DijkstraSP<'_, W>
where
    W: Float + Debug + Copy,
{
    fn source(&self) -> usize {
        self.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v])
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] < W::infinity())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(tree_path(self.graph, &self.edge_to, v)))
    }
}
