//! Entry checks shared by the graph algorithms.
//!
//! Every check runs before any iteration starts, in the order shape,
//! vertices, element type.

use crate::graphblas::{AnyMatrix, GrBMatrix};
use crate::{GraphError, Result};

/// Order of a square adjacency matrix
pub(crate) fn square_order(graph: &AnyMatrix) -> Result<usize> {
    if !graph.is_square() {
        return Err(GraphError::NotSquare {
            nrows: graph.nrows(),
            ncols: graph.ncols(),
        });
    }
    Ok(graph.nrows())
}

pub(crate) fn check_vertices(order: usize, vertices: &[usize]) -> Result<()> {
    match vertices.iter().find(|&&v| v >= order) {
        Some(&vertex) => Err(GraphError::InvalidVertex { vertex, order }),
        None => Ok(()),
    }
}

/// The boolean matrix inside `graph`, or `InvalidType`
pub(crate) fn boolean(graph: &AnyMatrix) -> Result<&GrBMatrix<bool>> {
    graph.as_bool().ok_or(GraphError::InvalidType {
        found: graph.dtype(),
        expected: "BOOL",
    })
}
