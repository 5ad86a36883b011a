//! Planarity verification for small undirected simple graphs.
//!
//! The decision procedure combines the edge-count and minimum-degree bounds
//! with an exhaustive search for K5 and K3,3: first as induced subgraphs, then
//! after suppressing degree-2 vertices. It is meant for graphs of roughly a
//! dozen vertices; no embedding is constructed.
//!
//! Entry points
//! - `decide` / `decide_with` return a `PlanarityResult`, with a `Certificate`
//!   whenever an obstruction was located.
//! - `Graph::from_adjacency` builds inputs from square 0/1 matrices.
//! - `random` draws reproducible random matrices for exercising the procedure.

pub mod api;
pub mod decide;
pub mod error;
pub mod filters;
pub mod graph;
pub mod random;
pub mod reference;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use decide::{decide, decide_with, DecideCfg, NonPlanarReason, PlanarityResult};
pub use error::PlanarityError;
pub use graph::{Graph, VertexId};
pub use search::Certificate;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decide::{
        decide, decide_with, DecideCfg, DisconnectedPolicy, EmptyGraphPolicy, NonPlanarReason,
        PlanarityResult,
    };
    pub use crate::error::PlanarityError;
    pub use crate::graph::{adjacency_from_rows, Graph, VertexId};
    pub use crate::random::{draw_graph, random_adjacency_matrix, RandomGraphCfg, ReplayToken};
    pub use crate::search::Certificate;
    pub use nalgebra::DMatrix;
}
