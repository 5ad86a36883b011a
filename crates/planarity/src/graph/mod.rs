//! Undirected simple graph model.
//!
//! Purpose
//! - Hold a vertex set and an edge set of unordered pairs with no loops and no
//!   duplicates, and answer the structural queries the planarity pipeline needs:
//!   degrees, neighborhoods, induced subgraphs, components, 2-colorings,
//!   isomorphism against small reference graphs, and edge contraction.
//!
//! Why this design
//! - Adjacency is a `BTreeMap<VertexId, BTreeSet<VertexId>>`, so every
//!   iteration is in ascending id order and subset enumeration is
//!   deterministic without a separate sort.
//! - All queries take `&self`; operations that change the structure
//!   (`induced_subgraph`, `contract_edge`, `without_isolated`) return new values.
//!   Only the builder methods (`add_vertex`, `add_edge`) take `&mut self`.
//!
//! Layout
//! - `types.rs` (ids, graph storage, builders), `ops.rs` (derived graphs and
//!   structural queries), `matrix.rs` (adjacency-matrix I/O).

mod matrix;
mod ops;
mod types;

pub use matrix::adjacency_from_rows;
pub use ops::Bipartition;
pub use types::{Graph, VertexId};
