//! Vertex ids and the graph storage with its builders.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::PlanarityError;

/// Vertex identifier. Graphs built from adjacency matrices number vertices `1..=n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl From<usize> for VertexId {
    fn from(v: usize) -> Self {
        VertexId(v)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected simple graph.
///
/// Invariants
/// - every neighbor listed for a vertex is itself a key of `adj`;
/// - adjacency is symmetric and irreflexive;
/// - `size` equals the number of unordered adjacent pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub(super) adj: BTreeMap<VertexId, BTreeSet<VertexId>>,
    pub(super) size: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the given vertices and no edges.
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VertexId>,
    {
        let mut g = Graph::new();
        for v in vertices {
            g.add_vertex(v.into());
        }
        g
    }

    /// Graph on vertices `1..=order` with the listed edges.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self, PlanarityError> {
        let mut g = Graph::with_vertices(1..=order);
        for &(u, v) in edges {
            g.add_edge(VertexId(u), VertexId(v))?;
        }
        Ok(g)
    }

    /// Insert an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adj.contains_key(&v) {
            return false;
        }
        self.adj.insert(v, BTreeSet::new());
        true
    }

    /// Insert the edge `{u, v}`. Returns `false` if it was already present.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, PlanarityError> {
        if u == v {
            return Err(PlanarityError::SelfLoop { vertex: u });
        }
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.link(u, v))
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.adj.contains_key(&v)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adj.get(&u).is_some_and(|nb| nb.contains(&v))
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.keys().copied()
    }

    /// Edges as `(u, v)` with `u < v`, lexicographically ordered.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adj
            .iter()
            .flat_map(|(&u, nb)| nb.range(u..).map(move |&v| (u, v)))
    }

    pub fn degree(&self, v: VertexId) -> Result<usize, PlanarityError> {
        Ok(self.neighbors(v)?.len())
    }

    pub fn neighbors(&self, v: VertexId) -> Result<&BTreeSet<VertexId>, PlanarityError> {
        self.adj
            .get(&v)
            .ok_or(PlanarityError::InvalidVertex { vertex: v })
    }

    /// `(vertex, degree)` pairs in ascending id order.
    pub fn degrees(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.adj.iter().map(|(&v, nb)| (v, nb.len()))
    }

    /// Smallest id strictly greater than every id in use (1 for the empty graph).
    pub fn next_vertex_id(&self) -> VertexId {
        self.adj
            .keys()
            .next_back()
            .map_or(VertexId(1), |v| VertexId(v.0 + 1))
    }

    pub(super) fn check_vertex(&self, v: VertexId) -> Result<(), PlanarityError> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(PlanarityError::InvalidVertex { vertex: v })
        }
    }

    /// Symmetric insert without endpoint checks; callers guarantee `u != v` and presence.
    pub(crate) fn link(&mut self, u: VertexId, v: VertexId) -> bool {
        let fresh = self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
        if fresh {
            self.size += 1;
        }
        fresh
    }

    /// Symmetric removal of `{u, v}`; no-op on a non-edge.
    pub(crate) fn detach_edge(&mut self, u: VertexId, v: VertexId) {
        let removed = self.adj.get_mut(&u).is_some_and(|nb| nb.remove(&v));
        if removed {
            if let Some(nb) = self.adj.get_mut(&v) {
                nb.remove(&u);
            }
            self.size -= 1;
        }
    }

    /// Remove `v` with its incident edges and return its former neighborhood.
    pub(super) fn detach(&mut self, v: VertexId) -> BTreeSet<VertexId> {
        let nb = self.adj.remove(&v).unwrap_or_default();
        for w in &nb {
            if let Some(set) = self.adj.get_mut(w) {
                set.remove(&v);
            }
        }
        self.size -= nb.len();
        nb
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph n={} m={}", self.order(), self.size())?;
        let isolated: Vec<String> = self
            .degrees()
            .filter(|&(_, d)| d == 0)
            .map(|(v, _)| v.to_string())
            .collect();
        if !isolated.is_empty() {
            write!(f, " isolated=[{}]", isolated.join(" "))?;
        }
        let edges: Vec<String> = self.edges().map(|(u, v)| format!("{u}-{v}")).collect();
        write!(f, " edges=[{}]", edges.join(" "))
    }
}
