use std::fmt::Debug;

use log::debug;
use num_traits::Float;

use crate::algorithm::traits::{tree_path, ShortestPaths};
use crate::algorithm::verify;
use crate::graph::{DirectedEdge, EdgeId, EdgeWeightedDigraph, Topological};
use crate::{Error, Result};

/// Topological relaxation over a DAG.
///
/// Visiting vertices in topological order guarantees every predecessor of a
/// vertex is finalized before the vertex itself is processed, so one pass
/// relaxing each outgoing edge exactly once suffices. Linear in V+E, no
/// priority queue. The shortest- and longest-path variants differ only in
/// the unreached sentinel and the direction of the improvement test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

impl Extremum {
    fn sentinel<W: Float>(self) -> W {
        match self {
            Extremum::Min => W::infinity(),
            Extremum::Max => W::neg_infinity(),
        }
    }

    fn improves<W: Float>(self, candidate: W, current: W) -> bool {
        match self {
            Extremum::Min => candidate < current,
            Extremum::Max => candidate > current,
        }
    }

    fn sense(self) -> verify::Sense {
        match self {
            Extremum::Min => verify::Sense::Shortest,
            Extremum::Max => verify::Sense::Longest,
        }
    }
}

#[derive(Debug)]
struct AcyclicPaths<'g, W>
where
    W: Float + Debug + Copy,
{
    graph: &'g EdgeWeightedDigraph<W>,
    source: usize,
    extremum: Extremum,
    dist_to: Vec<W>,
    edge_to: Vec<Option<EdgeId>>,
}

impl<'g, W> AcyclicPaths<'g, W>
where
    W: Float + Debug + Copy,
{
    fn new(graph: &'g EdgeWeightedDigraph<W>, source: usize, extremum: Extremum) -> Result<Self> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        let topological = Topological::new(graph);
        let order = topological.order().ok_or(Error::NotADag)?;
        debug!(
            "acyclic {:?}-paths: {} vertices, {} edges, source {}",
            extremum,
            n,
            graph.edge_count(),
            source
        );

        let mut dist_to = vec![extremum.sentinel(); n];
        let mut edge_to: Vec<Option<EdgeId>> = vec![None; n];
        dist_to[source] = W::zero();

        for &v in order {
            for &id in graph.out_edges(v) {
                let e = graph.edge(id);
                let w = e.to();
                let candidate = dist_to[v] + e.weight();
                if extremum.improves(candidate, dist_to[w]) {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(id);
                }
            }
        }

        debug_assert!(verify::optimality_conditions(
            graph,
            source,
            &dist_to,
            &edge_to,
            extremum.sense(),
        ));
        Ok(AcyclicPaths {
            graph,
            source,
            extremum,
            dist_to,
            edge_to,
        })
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v])
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] != self.extremum.sentinel())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(tree_path(self.graph, &self.edge_to, v)))
    }
}

/// Single-source shortest paths in an edge-weighted DAG; weights may be
/// negative. Fails construction with [`Error::NotADag`] when the digraph
/// has a directed cycle.
#[derive(Debug)]
pub struct AcyclicSP<'g, W>(AcyclicPaths<'g, W>)
where
    W: Float + Debug + Copy;

impl<'g, W> AcyclicSP<'g, W>
where
    W: Float + Debug + Copy,
{
    /// Computes the shortest-path tree from `source`.
    pub fn new(graph: &'g EdgeWeightedDigraph<W>, source: usize) -> Result<Self> {
        Ok(AcyclicSP(AcyclicPaths::new(graph, source, Extremum::Min)?))
    }
}

impl<W> ShortestPaths<W> for AcyclicSP<'_, W>
where
    W: Float + Debug + Copy,
{
    fn source(&self) -> usize {
        self.0.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.0.dist_to(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.0.has_path_to(v)
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>> {
        self.0.path_to(v)
    }
}

/// Single-source *longest* paths in an edge-weighted DAG: the same
/// topological relaxation as [`AcyclicSP`] with the improvement test
/// flipped and the unreached sentinel at `-∞`.
#[derive(Debug)]
pub struct AcyclicLP<'g, W>(AcyclicPaths<'g, W>)
where
    W: Float + Debug + Copy;

impl<'g, W> AcyclicLP<'g, W>
where
    W: Float + Debug + Copy,
{
    /// Computes the longest-path tree from `source`.
    pub fn new(graph: &'g EdgeWeightedDigraph<W>, source: usize) -> Result<Self> {
        Ok(AcyclicLP(AcyclicPaths::new(graph, source, Extremum::Max)?))
    }
}

impl<W> ShortestPaths<W> for AcyclicLP<'_, W>
where
    W: Float + Debug + Copy,
{
    fn source(&self) -> usize {
        self.0.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.0.dist_to(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.0.has_path_to(v)
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<&DirectedEdge<W>>>> {
        self.0.path_to(v)
    }
}
