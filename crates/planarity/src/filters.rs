//! Necessary conditions for planarity used as O(n + m) rejection filters.
//!
//! - Edge bound: a simple planar graph with n ≥ 3 vertices has at most 3n − 6
//!   edges. Applied only from n ≥ 5, below that no graph exceeds it anyway.
//! - Degree bound: every simple planar graph has a vertex of degree ≤ 5.
//!
//! Callers prune degree-0 vertices first; an isolated vertex would satisfy the
//! degree bound trivially without saying anything about the rest of the graph.

use crate::graph::Graph;

/// Smallest minimum degree that a planar graph can never reach.
pub const NONPLANAR_MIN_DEGREE: usize = 6;

/// True when `n ≥ 5` and `m > 3n − 6`.
pub fn exceeds_edge_bound(g: &Graph) -> bool {
    let n = g.order();
    n >= 5 && g.size() > 3 * n - 6
}

/// True when the graph is non-empty and every vertex has degree ≥ 6.
pub fn has_no_low_degree_vertex(g: &Graph) -> bool {
    !g.is_empty() && g.degrees().all(|(_, d)| d >= NONPLANAR_MIN_DEGREE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;
    use crate::reference::{complete_graph, k33, k4, k5, path};

    #[test]
    fn edge_bound_threshold() {
        assert!(exceeds_edge_bound(&k5()));
        assert!(!exceeds_edge_bound(&k4()));
        assert!(!exceeds_edge_bound(&k33()));
        // K5 minus one edge sits exactly on 3n − 6 = 9.
        let mut g = k5();
        g.detach_edge(VertexId(1), VertexId(2));
        assert_eq!(g.size(), 9);
        assert!(!exceeds_edge_bound(&g));
        assert!(!exceeds_edge_bound(&path(2)));
    }

    #[test]
    fn degree_bound_needs_all_vertices_at_six() {
        assert!(!has_no_low_degree_vertex(&complete_graph(6)));
        assert!(has_no_low_degree_vertex(&complete_graph(7)));
        assert!(!has_no_low_degree_vertex(&crate::graph::Graph::new()));
        let mut g = complete_graph(7);
        let extra = g.next_vertex_id();
        g.add_vertex(extra);
        g.link(extra, VertexId(1));
        assert!(!has_no_low_degree_vertex(&g));
    }
}
