//! Induced-subgraph scans for K5 and K3,3.

use itertools::Itertools;

use super::{Certificate, Deadline};
use crate::error::PlanarityError;
use crate::graph::{Graph, VertexId};
use crate::reference::k5;

/// A K5 branch vertex has degree ≥ 4; a K3,3 branch vertex degree ≥ 3.
const K5_MIN_DEGREE: usize = 4;
const K33_MIN_DEGREE: usize = 3;
/// Edges of K3,3; a 3+3 bipartite graph on six vertices with this many edges is K3,3.
const K33_EDGES: usize = 9;

/// First 5-subset (in lexicographic id order) inducing a K5.
pub fn find_k5(g: &Graph, deadline: Deadline) -> Result<Option<Certificate>, PlanarityError> {
    let reference = k5();
    scan(g, None, 5, K5_MIN_DEGREE, deadline, |h, s| k5_match(&reference, h, s))
}

/// First 6-subset inducing a 3+3 bipartite graph with all nine cross edges.
pub fn find_k33(g: &Graph, deadline: Deadline) -> Result<Option<Certificate>, PlanarityError> {
    scan(g, None, 6, K33_MIN_DEGREE, deadline, k33_match)
}

/// K5 scan, then K3,3 scan; stops at the first match.
pub fn find_forbidden_subgraph(
    g: &Graph,
    deadline: Deadline,
) -> Result<Option<Certificate>, PlanarityError> {
    if let Some(c) = find_k5(g, deadline)? {
        return Ok(Some(c));
    }
    find_k33(g, deadline)
}

/// Same as `find_forbidden_subgraph`, restricted to subsets containing `anchor`.
pub(crate) fn find_forbidden_subgraph_at(
    g: &Graph,
    anchor: VertexId,
    deadline: Deadline,
) -> Result<Option<Certificate>, PlanarityError> {
    let reference = k5();
    let k5_hit = scan(g, Some(anchor), 5, K5_MIN_DEGREE, deadline, |h, s| {
        k5_match(&reference, h, s)
    })?;
    if let Some(c) = k5_hit {
        return Ok(Some(c));
    }
    scan(g, Some(anchor), 6, K33_MIN_DEGREE, deadline, k33_match)
}

fn scan<F>(
    g: &Graph,
    anchor: Option<VertexId>,
    k: usize,
    min_degree: usize,
    deadline: Deadline,
    mut test: F,
) -> Result<Option<Certificate>, PlanarityError>
where
    F: FnMut(&Graph, &[VertexId]) -> Option<Certificate>,
{
    if g.order() < k {
        return Ok(None);
    }
    if let Some(a) = anchor {
        if g.degree(a)? < min_degree {
            return Ok(None);
        }
    }
    // Vertices below the branch degree can never be part of the obstruction.
    let pool: Vec<VertexId> = g
        .degrees()
        .filter(|&(v, d)| d >= min_degree && Some(v) != anchor)
        .map(|(v, _)| v)
        .collect();
    let pick = if anchor.is_some() { k - 1 } else { k };
    for combo in pool.into_iter().combinations(pick) {
        deadline.check()?;
        let mut subset = combo;
        if let Some(a) = anchor {
            subset.push(a);
            subset.sort_unstable();
        }
        let induced = g.induced_subgraph(&subset)?;
        if let Some(c) = test(&induced, &subset) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

fn k5_match(reference: &Graph, induced: &Graph, subset: &[VertexId]) -> Option<Certificate> {
    if !induced.is_isomorphic_to(reference) {
        return None;
    }
    let vertices = <[VertexId; 5]>::try_from(subset).ok()?;
    Some(Certificate::K5 { vertices })
}

fn k33_match(induced: &Graph, _subset: &[VertexId]) -> Option<Certificate> {
    // A sparser 3+3 bipartite subgraph (e.g. a 6-path) must not count.
    if induced.size() < K33_EDGES {
        return None;
    }
    let part = induced.bipartition();
    if !part.is_bipartite {
        return None;
    }
    let left = <[VertexId; 3]>::try_from(part.left.as_slice()).ok()?;
    let right = <[VertexId; 3]>::try_from(part.right.as_slice()).ok()?;
    Some(Certificate::K33 { left, right })
}
