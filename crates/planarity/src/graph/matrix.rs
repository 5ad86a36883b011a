//! Adjacency-matrix construction and export.
//!
//! Matrices are `nalgebra::DMatrix<u8>`; row/column `i` is vertex `i + 1`.

use nalgebra::DMatrix;

use super::types::{Graph, VertexId};
use crate::error::PlanarityError;

impl Graph {
    /// Build a graph from a square, symmetric 0/1 matrix with zero diagonal.
    ///
    /// Vertices are numbered `1..=n`; `{i+1, j+1}` is an edge iff `m[(i, j)] == 1`.
    pub fn from_adjacency(m: &DMatrix<u8>) -> Result<Graph, PlanarityError> {
        let n = m.nrows();
        if m.ncols() != n {
            return Err(PlanarityError::matrix(format!(
                "matrix is {}x{}, expected square",
                n,
                m.ncols()
            )));
        }
        for i in 0..n {
            if m[(i, i)] != 0 {
                return Err(PlanarityError::matrix(format!(
                    "non-zero diagonal entry at ({i}, {i})"
                )));
            }
            for j in (i + 1)..n {
                let (a, b) = (m[(i, j)], m[(j, i)]);
                if a > 1 || b > 1 {
                    return Err(PlanarityError::matrix(format!(
                        "entry at ({i}, {j}) is not 0/1"
                    )));
                }
                if a != b {
                    return Err(PlanarityError::matrix(format!(
                        "asymmetric entries at ({i}, {j}) and ({j}, {i})"
                    )));
                }
            }
        }
        Ok(Graph::from_checked_adjacency(m))
    }

    /// Build from a matrix already known to be square, symmetric, 0/1 with zero
    /// diagonal. Only the upper triangle is read.
    pub(crate) fn from_checked_adjacency(m: &DMatrix<u8>) -> Graph {
        let n = m.nrows();
        let mut g = Graph::with_vertices(1..=n);
        for i in 0..n {
            for j in (i + 1)..n {
                if m[(i, j)] == 1 {
                    g.link(VertexId(i + 1), VertexId(j + 1));
                }
            }
        }
        g
    }

    /// Adjacency matrix with rows in ascending vertex-id order.
    ///
    /// Inverse of `from_adjacency` for graphs whose vertices are exactly `1..=n`.
    pub fn to_adjacency(&self) -> DMatrix<u8> {
        let ids: Vec<VertexId> = self.vertices().collect();
        let n = ids.len();
        DMatrix::from_fn(n, n, |i, j| u8::from(self.has_edge(ids[i], ids[j])))
    }
}

/// Collect row vectors (e.g. parsed from JSON or CSV) into a square matrix.
///
/// Ragged or non-square input fails with `InvalidAdjacencyMatrix`; the entry
/// checks happen in `Graph::from_adjacency`.
pub fn adjacency_from_rows(rows: &[Vec<u8>]) -> Result<DMatrix<u8>, PlanarityError> {
    let n = rows.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(PlanarityError::matrix(format!(
            "row {i} has {} entries, expected {n}",
            row.len()
        )));
    }
    Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
}
