//! Curated surface for the CLI and benches.
//!
//! Groups the stage-level functions next to the top-level decision so callers
//! can run a single stage (e.g. only the filters) without digging through
//! module paths.

// Decision
pub use crate::decide::{
    decide, decide_with, DecideCfg, DisconnectedPolicy, EmptyGraphPolicy, NonPlanarReason,
    PlanarityResult,
};
// Stages
pub use crate::filters::{exceeds_edge_bound, has_no_low_degree_vertex};
pub use crate::search::{
    find_forbidden_subgraph, find_k33, find_k5, find_subdivision_minor, Certificate, Deadline,
};
// Graph model and inputs
pub use crate::graph::{adjacency_from_rows, Bipartition, Graph, VertexId};
pub use crate::random::{
    draw_graph, random_adjacency_matrix, GraphSample, OrderDist, RandomGraphCfg, ReplayToken,
};
pub use crate::reference::{
    complete_bipartite, complete_graph, fixtures, k33, k33_subdivided, k4, k5, k5_subdivided,
};
