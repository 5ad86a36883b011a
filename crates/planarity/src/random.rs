//! Random symmetric 0/1 adjacency matrices (exercise inputs).
//!
//! Model
//! - Each unordered pair `{i, j}`, `i < j`, is an edge independently with
//!   probability `edge_prob`; the diagonal stays zero.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`, so
//!   any single draw of a batch can be regenerated without replaying the rest.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Order distribution for sampled graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDist {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl OrderDist {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            OrderDist::Fixed(n) => n,
            OrderDist::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration. Defaults draw 5..=10 vertices with fair-coin edges.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub order: OrderDist,
    /// Clamped to [0, 1].
    pub edge_prob: f64,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            order: OrderDist::Uniform { min: 5, max: 10 },
            edge_prob: 0.5,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random symmetric 0/1 matrix of size `n` with zero diagonal.
pub fn random_adjacency_matrix(n: usize, edge_prob: f64, tok: ReplayToken) -> DMatrix<u8> {
    let mut rng = tok.to_std_rng();
    fill_symmetric(n, edge_prob, &mut rng)
}

fn fill_symmetric<R: Rng>(n: usize, edge_prob: f64, rng: &mut R) -> DMatrix<u8> {
    let p = if edge_prob.is_nan() {
        0.0
    } else {
        edge_prob.clamp(0.0, 1.0)
    };
    let mut m = DMatrix::<u8>::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let bit = u8::from(rng.gen_bool(p));
            m[(i, j)] = bit;
            m[(j, i)] = bit;
        }
    }
    m
}

/// One sampled matrix with the graph built from it and the token that replays it.
#[derive(Clone, Debug)]
pub struct GraphSample {
    pub matrix: DMatrix<u8>,
    pub graph: Graph,
    pub replay: ReplayToken,
}

/// Draw a matrix (order from `cfg.order`) and build its graph.
pub fn draw_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> GraphSample {
    let mut rng = tok.to_std_rng();
    let n = cfg.order.sample(&mut rng);
    let matrix = fill_symmetric(n, cfg.edge_prob, &mut rng);
    // Valid by construction.
    let graph = Graph::from_checked_adjacency(&matrix);
    GraphSample {
        matrix,
        graph,
        replay: tok,
    }
}
