//! Kuratowski obstruction search: induced K5/K3,3 scans and degree-2 contraction.
//!
//! Purpose
//! - `subgraph`: enumerate 5- and 6-vertex subsets and test the induced
//!   subgraph against K5 and K3,3.
//! - `minor`: suppress degree-2 vertices one at a time on a private working
//!   copy and re-test after each contraction, which finds subdivisions that the
//!   induced scan cannot see.
//!
//! Both stages are combinatorial (C(n,5) + C(n,6) subsets per scan) and take a
//! `Deadline` that is checked inside the enumeration loops.

mod minor;
mod subgraph;

pub use minor::find_subdivision_minor;
pub use subgraph::{find_forbidden_subgraph, find_k33, find_k5};

use std::fmt;
use std::time::Instant;

use crate::error::PlanarityError;
use crate::graph::VertexId;

/// Witness of non-planarity. Vertex ids refer to the graph handed to `decide`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Certificate {
    K5 { vertices: [VertexId; 5] },
    K33 { left: [VertexId; 3], right: [VertexId; 3] },
}

impl Certificate {
    /// All branch vertices, sorted.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut out = match self {
            Certificate::K5 { vertices } => vertices.to_vec(),
            Certificate::K33 { left, right } => left.iter().chain(right).copied().collect(),
        };
        out.sort_unstable();
        out
    }

    /// Edges the obstruction consists of (in the graph where it was found, which
    /// for a minor is a contracted copy).
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        match self {
            Certificate::K5 { vertices } => {
                let mut out = Vec::with_capacity(10);
                for (i, &a) in vertices.iter().enumerate() {
                    for &b in &vertices[i + 1..] {
                        out.push((a, b));
                    }
                }
                out
            }
            Certificate::K33 { left, right } => left
                .iter()
                .flat_map(|&a| right.iter().map(move |&b| (a, b)))
                .collect(),
        }
    }
}

fn join(vs: &[VertexId]) -> String {
    vs.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Certificate::K5 { vertices } => write!(f, "K5 on {{{}}}", join(vertices)),
            Certificate::K33 { left, right } => {
                write!(f, "K3,3 with parts {{{}}} | {{{}}}", join(left), join(right))
            }
        }
    }
}

/// Optional wall-clock limit for the combinatorial stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub const NONE: Deadline = Deadline(None);

    pub fn at(instant: Instant) -> Self {
        Deadline(Some(instant))
    }

    pub fn from_option(instant: Option<Instant>) -> Self {
        Deadline(instant)
    }

    #[inline]
    pub(crate) fn check(&self) -> Result<(), PlanarityError> {
        match self.0 {
            Some(t) if Instant::now() >= t => Err(PlanarityError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
