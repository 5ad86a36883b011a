//! Error type shared by the graph model and the decision procedure.

use std::fmt;

use crate::graph::VertexId;

/// Errors surfaced by graph operations and `decide`.
///
/// All failures are local and deterministic; retrying the same call on the
/// same input yields the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanarityError {
    /// An operation referenced a vertex that is not in the graph.
    InvalidVertex { vertex: VertexId },
    /// Adjacency-matrix input was not square, symmetric, 0/1, or had a non-zero diagonal.
    InvalidAdjacencyMatrix { reason: String },
    /// The empty graph was handed to `decide` under `EmptyGraphPolicy::Reject`.
    EmptyGraphPolicyViolation,
    /// `add_edge(v, v)`; the model is simple.
    SelfLoop { vertex: VertexId },
    /// `contract_edge(u, v)` on a non-edge.
    NotAdjacent { u: VertexId, v: VertexId },
    /// The graph splits into several components under `DisconnectedPolicy::Reject`.
    Disconnected { components: usize },
    /// The caller-supplied deadline passed during a combinatorial search stage.
    DeadlineExceeded,
}

impl PlanarityError {
    pub(crate) fn matrix(reason: impl Into<String>) -> Self {
        Self::InvalidAdjacencyMatrix {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlanarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex { vertex } => write!(f, "vertex {vertex} is not in the graph"),
            Self::InvalidAdjacencyMatrix { reason } => {
                write!(f, "invalid adjacency matrix: {reason}")
            }
            Self::EmptyGraphPolicyViolation => {
                write!(f, "empty graph rejected by the configured empty-graph policy")
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop at vertex {vertex} is not allowed"),
            Self::NotAdjacent { u, v } => write!(f, "vertices {u} and {v} are not adjacent"),
            Self::Disconnected { components } => write!(
                f,
                "graph has {components} connected components; planarity test not applied"
            ),
            Self::DeadlineExceeded => write!(f, "deadline exceeded during subgraph search"),
        }
    }
}

impl std::error::Error for PlanarityError {}
