use std::fmt;
use std::fmt::Debug;

use num_traits::Float;

use crate::graph::DirectedEdge;
use crate::{Error, Result};

/// Identifier of an edge inside the digraph's edge arena.
pub type EdgeId = usize;

/// An edge-weighted directed graph over vertices `0..V`.
///
/// The vertex count is fixed at construction; edges are appended one at a
/// time. All edges live in a single arena owned by the digraph, and the
/// per-vertex adjacency lists store arena indices, so shortest-path engines
/// can record predecessor edges as [`EdgeId`]s without owning edge data.
///
/// Self-loops and parallel edges are permitted.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Number of vertices
    v: usize,
    /// Edge arena: every edge ever added, in insertion order
    edges: Vec<DirectedEdge<W>>,
    /// adj[v] = ids of edges leaving vertex v
    adj: Vec<Vec<EdgeId>>,
    /// indegree[v] = number of edges pointing to vertex v
    indegree: Vec<usize>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an empty digraph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        EdgeWeightedDigraph {
            v,
            edges: Vec::new(),
            adj: vec![Vec::new(); v],
            indegree: vec![0; v],
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.v
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a directed edge, validating that both endpoints lie in `[0, V)`.
    ///
    /// Returns the id of the stored edge.
    pub fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<EdgeId> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;
        let id = self.edges.len();
        self.edges.push(edge);
        self.adj[edge.from()].push(id);
        self.indegree[edge.to()] += 1;
        Ok(id)
    }

    /// Convenience wrapper building the edge in place.
    pub fn add(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId> {
        self.add_edge(DirectedEdge::new(from, to, weight)?)
    }

    /// Returns the edges leaving vertex `v`, in insertion order.
    pub fn adj(&self, v: usize) -> Result<impl Iterator<Item = &DirectedEdge<W>>> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter().map(move |&id| &self.edges[id]))
    }

    /// Returns the ids of the edges leaving vertex `v`.
    pub fn adj_ids(&self, v: usize) -> Result<impl Iterator<Item = EdgeId> + '_> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter().copied())
    }

    /// Returns the edge stored under `id`.
    pub fn edge(&self, id: EdgeId) -> &DirectedEdge<W> {
        &self.edges[id]
    }

    /// Returns the outdegree of vertex `v`.
    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Returns the indegree of vertex `v`.
    pub fn in_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v])
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> {
        self.edges.iter()
    }

    /// Adjacency slice for a vertex already known to be in range.
    pub(crate) fn out_edges(&self, v: usize) -> &[EdgeId] {
        &self.adj[v]
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.v {
            return Err(Error::InvalidVertex(v));
        }
        Ok(())
    }
}

impl<W> fmt::Display for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.v, self.edges.len())?;
        for v in 0..self.v {
            write!(f, "{}:", v)?;
            for &id in &self.adj[v] {
                write!(f, " {}", self.edges[id])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
