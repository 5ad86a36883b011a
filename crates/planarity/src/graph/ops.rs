//! Derived graphs and structural queries.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use itertools::Itertools;

use super::types::{Graph, VertexId};
use crate::error::PlanarityError;

/// Result of a 2-coloring attempt.
///
/// When `is_bipartite` is false both parts are empty. For each component the
/// smallest vertex is put on the `left`; both parts are sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bipartition {
    pub is_bipartite: bool,
    pub left: Vec<VertexId>,
    pub right: Vec<VertexId>,
}

impl Graph {
    /// Subgraph on `subset` with exactly the edges whose endpoints both lie in it.
    ///
    /// Duplicate ids in `subset` are ignored.
    pub fn induced_subgraph(&self, subset: &[VertexId]) -> Result<Graph, PlanarityError> {
        let keep: BTreeSet<VertexId> = subset.iter().copied().collect();
        let mut out = Graph::new();
        for &v in &keep {
            self.check_vertex(v)?;
            out.add_vertex(v);
        }
        for &u in &keep {
            for &v in self.adj[&u].range(u..) {
                if keep.contains(&v) {
                    out.link(u, v);
                }
            }
        }
        Ok(out)
    }

    /// Copy without degree-0 vertices.
    pub fn without_isolated(&self) -> Graph {
        let mut out = self.clone();
        out.adj.retain(|_, nb| !nb.is_empty());
        out
    }

    /// True when every vertex is reachable from every other.
    ///
    /// The empty graph counts as connected; `decide` handles zero-order input
    /// through `EmptyGraphPolicy` before asking.
    pub fn is_connected(&self) -> bool {
        match self.adj.keys().next() {
            None => true,
            Some(&start) => self.reach(start).len() == self.order(),
        }
    }

    /// Connected components, each sorted, ordered by their smallest vertex.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut seen: BTreeSet<VertexId> = BTreeSet::new();
        let mut out = Vec::new();
        for v in self.vertices() {
            if seen.contains(&v) {
                continue;
            }
            let comp = self.reach(v);
            seen.extend(comp.iter().copied());
            out.push(comp.into_iter().collect());
        }
        out
    }

    fn reach(&self, start: VertexId) -> BTreeSet<VertexId> {
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &w in &self.adj[&u] {
                if seen.insert(w) {
                    queue.push_back(w);
                }
            }
        }
        seen
    }

    /// BFS 2-coloring over all components.
    pub fn bipartition(&self) -> Bipartition {
        let mut color: BTreeMap<VertexId, bool> = BTreeMap::new();
        for start in self.vertices() {
            if color.contains_key(&start) {
                continue;
            }
            color.insert(start, false);
            let mut queue = VecDeque::from([start]);
            while let Some(u) = queue.pop_front() {
                let cu = color[&u];
                for &w in &self.adj[&u] {
                    match color.get(&w) {
                        Some(&cw) if cw == cu => return Bipartition::default(),
                        Some(_) => {}
                        None => {
                            color.insert(w, !cu);
                            queue.push_back(w);
                        }
                    }
                }
            }
        }
        let (right, left): (Vec<_>, Vec<_>) = color.into_iter().partition(|&(_, c)| c);
        Bipartition {
            is_bipartite: true,
            left: left.into_iter().map(|(v, _)| v).collect(),
            right: right.into_iter().map(|(v, _)| v).collect(),
        }
    }

    fn degree_sequence(&self) -> Vec<usize> {
        let mut seq: Vec<usize> = self.degrees().map(|(_, d)| d).collect();
        seq.sort_unstable();
        seq
    }

    /// Isomorphism test against a small reference graph.
    ///
    /// Order, size and sorted degree sequence are compared first; the remaining
    /// candidates are checked by trying every bijection, so this is meant for
    /// references of a handful of vertices (K5, K3,3, K4).
    pub fn is_isomorphic_to(&self, reference: &Graph) -> bool {
        if self.order() != reference.order() || self.size() != reference.size() {
            return false;
        }
        if self.degree_sequence() != reference.degree_sequence() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        let targets: Vec<(VertexId, usize)> = reference.degrees().collect();
        let ref_edges: Vec<(VertexId, VertexId)> = reference.edges().collect();
        self.vertices()
            .permutations(self.order())
            .any(|image| {
                let degrees_match = targets
                    .iter()
                    .zip(&image)
                    .all(|(&(_, d), v)| self.adj[v].len() == d);
                if !degrees_match {
                    return false;
                }
                let map: BTreeMap<VertexId, VertexId> = targets
                    .iter()
                    .map(|&(r, _)| r)
                    .zip(image.iter().copied())
                    .collect();
                // Equal sizes make edge-preservation sufficient.
                ref_edges
                    .iter()
                    .all(|(a, b)| self.has_edge(map[a], map[b]))
            })
    }

    /// Merge `v` into `u`.
    ///
    /// `u` inherits every neighbor of `v` except itself, `v` disappears, the
    /// would-be self-loop is dropped and parallel edges collapse. The result has
    /// order `n - 1`.
    pub fn contract_edge(&self, u: VertexId, v: VertexId) -> Result<Graph, PlanarityError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !self.has_edge(u, v) {
            return Err(PlanarityError::NotAdjacent { u, v });
        }
        let mut out = self.clone();
        for w in out.detach(v) {
            if w != u {
                out.link(u, w);
            }
        }
        Ok(out)
    }
}
