use super::*;
use crate::graph::VertexId;
use crate::reference::{
    complete_bipartite, complete_graph, cycle, k33, k33_subdivided, k4, k5, k5_subdivided, path,
};
use nalgebra::DMatrix;
use proptest::prelude::*;
use std::time::Duration;

fn from_matrix(n: usize, edge: impl Fn(usize, usize) -> bool) -> Graph {
    let m = DMatrix::from_fn(n, n, |i, j| u8::from(i != j && edge(i, j)));
    Graph::from_adjacency(&m).unwrap()
}

/// Disjoint union; `b` is shifted past the ids of `a`.
fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
    let shift = a.next_vertex_id().0 - 1;
    let mut out = a.clone();
    for v in b.vertices() {
        out.add_vertex(VertexId(v.0 + shift));
    }
    for (u, v) in b.edges() {
        out.add_edge(VertexId(u.0 + shift), VertexId(v.0 + shift))
            .unwrap();
    }
    out
}

#[test]
fn matrix_k5_hits_edge_bound() {
    let g = from_matrix(5, |_, _| true);
    assert_eq!(
        decide(&g).unwrap(),
        PlanarityResult::NonPlanar {
            reason: NonPlanarReason::EdgeBound
        }
    );
}

#[test]
fn matrix_k4_is_planar() {
    let g = from_matrix(4, |_, _| true);
    assert_eq!((g.order(), g.size()), (4, 6));
    assert_eq!(decide(&g).unwrap(), PlanarityResult::Planar);
}

#[test]
fn matrix_k33_yields_partition_certificate() {
    let g = from_matrix(6, |i, j| (i < 3) != (j < 3));
    let verdict = decide(&g).unwrap();
    match verdict.certificate() {
        Some(Certificate::K33 { left, right }) => {
            assert_eq!(left.len(), 3);
            assert_eq!(right.len(), 3);
            assert_eq!(*left, [1, 2, 3].map(VertexId));
            assert_eq!(*right, [4, 5, 6].map(VertexId));
        }
        other => panic!("expected a K3,3 certificate, got {other:?}"),
    }
    assert!(!verdict.is_planar());
}

#[test]
fn single_isolated_vertex_is_planar() {
    let g = from_matrix(1, |_, _| false);
    assert_eq!(decide(&g).unwrap(), PlanarityResult::Planar);
    let scattered = Graph::with_vertices(1..=9usize);
    assert_eq!(decide(&scattered).unwrap(), PlanarityResult::Planar);
}

#[test]
fn subdivided_obstructions_need_the_minor_stage() {
    for g in [k5_subdivided(), k33_subdivided()] {
        let verdict = decide(&g).unwrap();
        assert!(verdict.certificate().is_some(), "{g}: {verdict}");
    }
}

#[test]
fn small_planar_families() {
    for g in [k4(), path(9), cycle(10), complete_bipartite(2, 7), complete_graph(3)] {
        assert_eq!(decide(&g).unwrap(), PlanarityResult::Planar, "{g}");
    }
}

#[test]
fn empty_graph_policy() {
    assert_eq!(decide(&Graph::new()).unwrap(), PlanarityResult::Planar);
    let cfg = DecideCfg {
        empty: EmptyGraphPolicy::Reject,
        ..DecideCfg::default()
    };
    assert_eq!(
        decide_with(&Graph::new(), cfg),
        Err(PlanarityError::EmptyGraphPolicyViolation)
    );
    // Isolated vertices are pruned after the empty check.
    assert_eq!(
        decide_with(&Graph::with_vertices([VertexId(1)]), cfg).unwrap(),
        PlanarityResult::Planar
    );
}

#[test]
fn disconnected_policies() {
    let g = disjoint_union(&k4(), &k33());
    let per_component = decide(&g).unwrap();
    assert_eq!(
        per_component.certificate().map(|c| c.vertices()),
        Some((5..=10).map(VertexId).collect())
    );
    let whole = decide_with(
        &g,
        DecideCfg {
            disconnected: DisconnectedPolicy::WholeGraph,
            ..DecideCfg::default()
        },
    )
    .unwrap();
    assert!(!whole.is_planar());
    let reject = DecideCfg {
        disconnected: DisconnectedPolicy::Reject,
        ..DecideCfg::default()
    };
    assert_eq!(
        decide_with(&g, reject),
        Err(PlanarityError::Disconnected { components: 2 })
    );
    // Isolated vertices do not count as components.
    let mut lonely = k4();
    lonely.add_vertex(VertexId(50));
    assert!(decide_with(&lonely, reject).unwrap().is_planar());
}

#[test]
fn deadline_only_limits_search_stages() {
    let past = DecideCfg {
        deadline: Some(Instant::now() - Duration::from_millis(1)),
        ..DecideCfg::default()
    };
    assert_eq!(
        decide_with(&k5(), past).unwrap(),
        PlanarityResult::NonPlanar {
            reason: NonPlanarReason::EdgeBound
        }
    );
    assert_eq!(
        decide_with(&k33_subdivided(), past),
        Err(PlanarityError::DeadlineExceeded)
    );
    let generous = DecideCfg {
        deadline: Some(Instant::now() + Duration::from_secs(60)),
        ..DecideCfg::default()
    };
    assert!(decide_with(&k33_subdivided(), generous)
        .unwrap()
        .certificate()
        .is_some());
}

#[test]
fn display_renders_reason_and_certificate() {
    assert_eq!(PlanarityResult::Planar.to_string(), "planar");
    assert_eq!(
        decide(&k5()).unwrap().to_string(),
        "non-planar: edge bound m > 3n - 6"
    );
    assert_eq!(
        decide(&k5_subdivided()).unwrap().to_string(),
        "non-planar: contains K5 on {1, 2, 3, 4, 5}"
    );
}

#[test]
fn parallel_calls_agree_with_serial() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
    assert_send_sync::<PlanarityResult>();

    let inputs: Vec<Graph> = crate::reference::fixtures()
        .into_iter()
        .map(|(_, g)| g)
        .collect();
    let serial: Vec<_> = inputs.iter().map(|g| decide(g).unwrap()).collect();
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs.iter().map(|g| s.spawn(move || decide(g))).collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    assert_eq!(serial, parallel);
}

fn arb_graph(max_n: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * (n - 1) / 2).prop_map(move |bits| {
            let mut bits = bits.into_iter();
            from_matrix_bits(n, &mut bits)
        })
    })
}

fn from_matrix_bits(n: usize, bits: &mut impl Iterator<Item = bool>) -> Graph {
    let mut g = Graph::with_vertices(1..=n);
    for a in 1..=n {
        for b in (a + 1)..=n {
            if bits.next().unwrap_or(false) {
                g.add_edge(VertexId(a), VertexId(b)).unwrap();
            }
        }
    }
    g
}

/// Random forest: vertex `i` hangs below an earlier vertex or starts a new tree.
fn arb_forest(max_n: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(any::<prop::sample::Index>(), n).prop_map(move |picks| {
            let mut g = Graph::with_vertices(1..=n);
            for i in 2..=n {
                // Index i - 1 means "no parent".
                let p = picks[i - 1].index(i);
                if p >= 1 {
                    g.add_edge(VertexId(p), VertexId(i)).unwrap();
                }
            }
            g
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn planar_verdict_respects_edge_bound(g in arb_graph(8)) {
        let verdict = decide(&g).unwrap();
        if verdict.is_planar() && g.order() >= 3 {
            prop_assert!(g.size() <= 3 * g.order() - 6);
        }
    }

    #[test]
    fn decide_is_idempotent_and_pure(g in arb_graph(8)) {
        let before = g.clone();
        let first = decide(&g).unwrap();
        let second = decide(&g).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(g, before);
    }

    #[test]
    fn forests_are_planar(g in arb_forest(14)) {
        prop_assert_eq!(decide(&g).unwrap(), PlanarityResult::Planar);
    }
}
