use std::fmt;
use std::fmt::Debug;

use num_traits::Float;

use crate::{Error, Result};

/// An immutable weighted edge in an [`EdgeWeightedDigraph`].
///
/// Each edge consists of two vertex indices (tail and head) and a real
/// weight, which may be negative or zero but never NaN.
///
/// [`EdgeWeightedDigraph`]: crate::graph::EdgeWeightedDigraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a directed edge `from -> to` with the given weight.
    ///
    /// Fails with [`Error::NanWeight`] if the weight is NaN.
    pub fn new(from: usize, to: usize, weight: W) -> Result<Self> {
        if weight.is_nan() {
            return Err(Error::NanWeight { from, to });
        }
        Ok(DirectedEdge { from, to, weight })
    }

    /// Returns the tail vertex of the edge.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the head vertex of the edge.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> fmt::Display for DirectedEdge<W>
where
    W: Float + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
