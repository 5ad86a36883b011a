//! Reference graphs: Kuratowski obstructions, small planar fixtures, and
//! subdivided variants.
//!
//! Every constructor returns a fresh value; nothing here is shared or cached.

use crate::error::PlanarityError;
use crate::graph::{Graph, VertexId};

/// Complete graph `K_n` on vertices `1..=n`.
pub fn complete_graph(n: usize) -> Graph {
    let mut g = Graph::with_vertices(1..=n);
    for u in 1..=n {
        for v in (u + 1)..=n {
            g.link(VertexId(u), VertexId(v));
        }
    }
    g
}

/// Complete bipartite graph `K_{a,b}`: left part `1..=a`, right part `a+1..=a+b`.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::with_vertices(1..=a + b);
    for u in 1..=a {
        for v in (a + 1)..=(a + b) {
            g.link(VertexId(u), VertexId(v));
        }
    }
    g
}

pub fn k5() -> Graph {
    complete_graph(5)
}

pub fn k33() -> Graph {
    complete_bipartite(3, 3)
}

pub fn k4() -> Graph {
    complete_graph(4)
}

/// Path `1 - 2 - … - n`.
pub fn path(n: usize) -> Graph {
    let mut g = Graph::with_vertices(1..=n);
    for v in 2..=n {
        g.link(VertexId(v - 1), VertexId(v));
    }
    g
}

/// Cycle `1 - 2 - … - n - 1`. For `n < 3` this is just `path(n)`.
pub fn cycle(n: usize) -> Graph {
    let mut g = path(n);
    if n >= 3 {
        g.link(VertexId(n), VertexId(1));
    }
    g
}

/// Replace the edge `{u, v}` by the path `u - w - v` through a fresh vertex `w`.
///
/// `w` is `g.next_vertex_id()`. Fails if `{u, v}` is not an edge of `g`.
pub fn subdivide_edge(g: &Graph, u: VertexId, v: VertexId) -> Result<Graph, PlanarityError> {
    if !g.contains(u) {
        return Err(PlanarityError::InvalidVertex { vertex: u });
    }
    if !g.contains(v) {
        return Err(PlanarityError::InvalidVertex { vertex: v });
    }
    if !g.has_edge(u, v) {
        return Err(PlanarityError::NotAdjacent { u, v });
    }
    Ok(route_through(g.clone(), u, v))
}

/// Unchecked core of `subdivide_edge`; `{u, v}` must be an edge of `g`.
fn route_through(mut g: Graph, u: VertexId, v: VertexId) -> Graph {
    let w = g.next_vertex_id();
    g.detach_edge(u, v);
    g.add_vertex(w);
    g.link(u, w);
    g.link(w, v);
    g
}

/// K5 with edge 3–5 routed through a new vertex 6.
pub fn k5_subdivided() -> Graph {
    route_through(k5(), VertexId(3), VertexId(5))
}

/// K3,3 with edge 3–6 routed through a new vertex 7.
pub fn k33_subdivided() -> Graph {
    route_through(k33(), VertexId(3), VertexId(6))
}

/// Named fixtures, in the order the CLI reports them.
pub fn fixtures() -> Vec<(&'static str, Graph)> {
    vec![
        ("K5", k5()),
        ("K5 subdivided", k5_subdivided()),
        ("K3,3", k33()),
        ("K3,3 subdivided", k33_subdivided()),
        ("K4", k4()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kuratowski_graphs_have_expected_counts() {
        let g = k5();
        assert_eq!((g.order(), g.size()), (5, 10));
        assert!(g.degrees().all(|(_, d)| d == 4));
        let h = k33();
        assert_eq!((h.order(), h.size()), (6, 9));
        assert!(!h.has_edge(VertexId(1), VertexId(2)));
        assert!(h.has_edge(VertexId(1), VertexId(4)));
        let b = h.bipartition();
        assert!(b.is_bipartite);
        assert_eq!(b.left, vec![VertexId(1), VertexId(2), VertexId(3)]);
    }

    #[test]
    fn subdivided_fixtures_match_generic_subdivision() {
        let generic = subdivide_edge(&k5(), VertexId(3), VertexId(5)).unwrap();
        assert_eq!(generic, k5_subdivided());
        let generic = subdivide_edge(&k33(), VertexId(3), VertexId(6)).unwrap();
        assert_eq!(generic, k33_subdivided());
        assert_eq!(k33_subdivided().degree(VertexId(7)).unwrap(), 2);
        assert!(!k5_subdivided().has_edge(VertexId(3), VertexId(5)));
        assert_eq!(k5_subdivided().neighbors(VertexId(6)).unwrap().len(), 2);
    }

    #[test]
    fn subdivide_rejects_non_edge() {
        let err = subdivide_edge(&k33(), VertexId(1), VertexId(2)).unwrap_err();
        assert_eq!(
            err,
            PlanarityError::NotAdjacent {
                u: VertexId(1),
                v: VertexId(2)
            }
        );
    }

    #[test]
    fn fresh_values_each_call() {
        let mut a = k4();
        a.add_vertex(VertexId(99));
        assert_eq!(k4().order(), 4);
    }

    #[test]
    fn path_and_cycle_shapes() {
        assert_eq!(path(1).size(), 0);
        assert_eq!(path(6).size(), 5);
        assert_eq!(cycle(2).size(), 1);
        assert_eq!(cycle(7).size(), 7);
        assert!(cycle(7).degrees().all(|(_, d)| d == 2));
    }
}
