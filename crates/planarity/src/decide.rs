//! Planarity decision: fast filters, then the induced scan, then the minor search.
//!
//! Pipeline for one call (on a private copy without degree-0 vertices):
//! 1. empty input → `EmptyGraphPolicy`;
//! 2. more than one component → `DisconnectedPolicy`;
//! 3. edge bound → `NonPlanar { EdgeBound }`;
//! 4. degree bound → `NonPlanar { DegreeBound }`;
//! 5. induced K5/K3,3 → `NonPlanar { ForbiddenMinor }`;
//! 6. degree-2 contraction → `NonPlanar { ForbiddenMinor }`;
//! 7. otherwise `Planar`.
//!
//! A `Planar` verdict means no obstruction was found by these stages; the
//! minor search only explores minors reachable by suppressing degree-2 vertices.

use std::fmt;
use std::time::Instant;

use tracing::debug;

use crate::error::PlanarityError;
use crate::filters::{exceeds_edge_bound, has_no_low_degree_vertex};
use crate::graph::Graph;
use crate::search::{find_forbidden_subgraph, find_subdivision_minor, Certificate, Deadline};

/// How graphs with several non-trivial components are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisconnectedPolicy {
    /// Decide each component on its own; planar iff every component is.
    #[default]
    PerComponent,
    /// Run the stages on the whole graph at once.
    WholeGraph,
    /// Fail with `PlanarityError::Disconnected`.
    Reject,
}

/// Verdict for a graph with no vertices at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyGraphPolicy {
    #[default]
    Planar,
    Reject,
}

/// Decision configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecideCfg {
    pub disconnected: DisconnectedPolicy,
    pub empty: EmptyGraphPolicy,
    /// Checked inside the combinatorial stages; the filters always run to completion.
    pub deadline: Option<Instant>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NonPlanarReason {
    /// `m > 3n − 6` with `n ≥ 5`.
    EdgeBound,
    /// Every vertex has degree ≥ 6.
    DegreeBound,
    /// A K5 or K3,3 found directly or after degree-2 contractions.
    ForbiddenMinor(Certificate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanarityResult {
    Planar,
    NonPlanar { reason: NonPlanarReason },
}

impl PlanarityResult {
    fn non_planar(reason: NonPlanarReason) -> Self {
        PlanarityResult::NonPlanar { reason }
    }

    pub fn is_planar(&self) -> bool {
        matches!(self, PlanarityResult::Planar)
    }

    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            PlanarityResult::NonPlanar {
                reason: NonPlanarReason::ForbiddenMinor(cert),
            } => Some(cert),
            _ => None,
        }
    }
}

impl fmt::Display for NonPlanarReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonPlanarReason::EdgeBound => write!(f, "edge bound m > 3n - 6"),
            NonPlanarReason::DegreeBound => write!(f, "every vertex has degree >= 6"),
            NonPlanarReason::ForbiddenMinor(cert) => write!(f, "contains {cert}"),
        }
    }
}

impl fmt::Display for PlanarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarityResult::Planar => write!(f, "planar"),
            PlanarityResult::NonPlanar { reason } => write!(f, "non-planar: {reason}"),
        }
    }
}

/// Decide planarity with `DecideCfg::default()`.
pub fn decide(g: &Graph) -> Result<PlanarityResult, PlanarityError> {
    decide_with(g, DecideCfg::default())
}

/// Decide planarity. `g` is only read; all work happens on copies.
pub fn decide_with(g: &Graph, cfg: DecideCfg) -> Result<PlanarityResult, PlanarityError> {
    if g.is_empty() {
        return match cfg.empty {
            EmptyGraphPolicy::Planar => Ok(PlanarityResult::Planar),
            EmptyGraphPolicy::Reject => Err(PlanarityError::EmptyGraphPolicyViolation),
        };
    }
    let work = g.without_isolated();
    let deadline = Deadline::from_option(cfg.deadline);
    debug!(
        order = work.order(),
        size = work.size(),
        pruned = g.order() - work.order(),
        "decide"
    );
    if cfg.disconnected == DisconnectedPolicy::WholeGraph {
        return run_stages(&work, deadline);
    }
    let components = work.components();
    if components.len() <= 1 {
        return run_stages(&work, deadline);
    }
    match cfg.disconnected {
        DisconnectedPolicy::Reject => Err(PlanarityError::Disconnected {
            components: components.len(),
        }),
        _ => {
            for (index, comp) in components.iter().enumerate() {
                let sub = work.induced_subgraph(comp)?;
                let verdict = run_stages(&sub, deadline)?;
                if !verdict.is_planar() {
                    debug!(component = index, "non-planar component");
                    return Ok(verdict);
                }
            }
            Ok(PlanarityResult::Planar)
        }
    }
}

fn run_stages(g: &Graph, deadline: Deadline) -> Result<PlanarityResult, PlanarityError> {
    if exceeds_edge_bound(g) {
        debug!(stage = "edge_bound", "rejected");
        return Ok(PlanarityResult::non_planar(NonPlanarReason::EdgeBound));
    }
    if has_no_low_degree_vertex(g) {
        debug!(stage = "degree_bound", "rejected");
        return Ok(PlanarityResult::non_planar(NonPlanarReason::DegreeBound));
    }
    if let Some(cert) = find_forbidden_subgraph(g, deadline)? {
        debug!(stage = "subgraph", %cert, "rejected");
        return Ok(PlanarityResult::non_planar(NonPlanarReason::ForbiddenMinor(cert)));
    }
    if let Some(cert) = find_subdivision_minor(g, deadline)? {
        debug!(stage = "minor", %cert, "rejected");
        return Ok(PlanarityResult::non_planar(NonPlanarReason::ForbiddenMinor(cert)));
    }
    Ok(PlanarityResult::Planar)
}

#[cfg(test)]
mod tests;
