//! Degree-2 suppression: detect K5/K3,3 subdivisions by contracting long edges.
//!
//! The machine runs on a private clone:
//! `Scanning → Contracting → (Found | Scanning)`, `Scanning → Exhausted`.
//! Each contraction removes exactly one vertex, so it stops within `n` steps.

use tracing::trace;

use super::subgraph::find_forbidden_subgraph_at;
use super::{Certificate, Deadline};
use crate::error::PlanarityError;
use crate::graph::{Graph, VertexId};

#[derive(Debug)]
enum MinorState {
    Scanning,
    Contracting { vertex: VertexId },
    Found(Certificate),
    Exhausted,
}

/// Contract degree-2 vertices until a K5/K3,3 appears or none are left.
///
/// Precondition: `g` itself has already been scanned by
/// `find_forbidden_subgraph`. After a contraction only subsets through the
/// surviving vertex can be new, so re-tests are anchored there.
///
/// Not a complete minor test: only minors reachable by suppressing degree-2
/// vertices are explored.
pub fn find_subdivision_minor(
    g: &Graph,
    deadline: Deadline,
) -> Result<Option<Certificate>, PlanarityError> {
    MinorSearch::new(g, deadline).run()
}

struct MinorSearch {
    work: Graph,
    deadline: Deadline,
    contractions: usize,
}

impl MinorSearch {
    fn new(g: &Graph, deadline: Deadline) -> Self {
        Self {
            work: g.clone(),
            deadline,
            contractions: 0,
        }
    }

    fn run(mut self) -> Result<Option<Certificate>, PlanarityError> {
        let mut state = MinorState::Scanning;
        loop {
            state = match state {
                MinorState::Scanning => match self.next_degree_two() {
                    Some(vertex) => MinorState::Contracting { vertex },
                    None => MinorState::Exhausted,
                },
                MinorState::Contracting { vertex } => self.contract(vertex)?,
                MinorState::Found(cert) => {
                    trace!(contractions = self.contractions, %cert, "minor found");
                    return Ok(Some(cert));
                }
                MinorState::Exhausted => {
                    trace!(
                        contractions = self.contractions,
                        remaining = self.work.order(),
                        "no degree-2 vertex left"
                    );
                    return Ok(None);
                }
            };
        }
    }

    fn next_degree_two(&self) -> Option<VertexId> {
        self.work
            .degrees()
            .find(|&(_, d)| d == 2)
            .map(|(v, _)| v)
    }

    /// Merge `vertex` into its smaller neighbor and re-test around the survivor.
    fn contract(&mut self, vertex: VertexId) -> Result<MinorState, PlanarityError> {
        self.deadline.check()?;
        let Some(&keep) = self.work.neighbors(vertex)?.first() else {
            return Ok(MinorState::Exhausted);
        };
        let next = self.work.contract_edge(keep, vertex)?;
        self.contractions += 1;
        trace!(removed = %vertex, into = %keep, order = next.order(), "contracted");
        let hit = find_forbidden_subgraph_at(&next, keep, self.deadline)?;
        self.work = next;
        Ok(match hit {
            Some(cert) => MinorState::Found(cert),
            None => MinorState::Scanning,
        })
    }
}
