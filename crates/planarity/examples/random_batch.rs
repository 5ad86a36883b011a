//! Decide a small batch of random graphs and print the verdicts.
//!
//! Mirrors the exercise loop the procedure was written for: a handful of graphs
//! of order 5..=10 with fair-coin edges, each reported with its matrix size,
//! edge count and verdict.
//!
//! Usage: cargo run -p planarity --example random_batch [seed]

use planarity::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2023u64);
    let cfg = RandomGraphCfg::default();
    for index in 0..3 {
        let sample = draw_graph(cfg, ReplayToken::new(seed, index));
        let verdict = decide(&sample.graph).expect("non-empty sampled graph");
        println!(
            "seed={seed} index={index} n={} m={} planar={} ({verdict})",
            sample.graph.order(),
            sample.graph.size(),
            verdict.is_planar()
        );
    }
}
