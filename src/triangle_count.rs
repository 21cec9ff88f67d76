//! Per-vertex triangle counts
//!
//! ```text
//! G         = A ∪ Aᵀ                    (undirected view)
//! P⟨G⟩      = G plus.land G             (common neighbours of each edge)
//! count[v]  = (Σ_j P[v, j]) / 2
//! ```
//!
//! A triangle through `v` closes two edges at `v`, and each of those edges
//! sees the third vertex as a common neighbour, so every triangle is
//! counted twice in row `v`. Masking by `G` keeps the product to pairs that
//! are themselves edges.

use tracing::{debug, trace};

use crate::graphblas::{
    grb_ewise_add_matrix, grb_mxm, grb_reduce_to_vector, AnyMatrix, BinaryOp, GrBDesc, GrBMatrix,
    GrBVector, Monoid, PlusLand,
};
use crate::validate;
use crate::Result;

/// Number of triangles each vertex belongs to.
///
/// `graph` must be a square boolean adjacency matrix; edge direction is
/// ignored. The caller's matrix is left untouched.
pub fn triangle_count(graph: &AnyMatrix) -> Result<Vec<u64>> {
    let n = validate::square_order(graph)?;
    let adjacency = validate::boolean(graph)?;

    debug!(order = n, edges = adjacency.nvals(), "triangle_count");

    let mut undirected = GrBMatrix::new(n, n);
    grb_ewise_add_matrix(
        &mut undirected,
        None,
        None,
        BinaryOp::LOr,
        adjacency,
        adjacency,
        Some(&GrBDesc::t1()),
    )?;

    let mut paths = GrBMatrix::<u64>::new(n, n);
    grb_mxm(
        &mut paths,
        Some(&undirected),
        Some(BinaryOp::Plus),
        &PlusLand::new(),
        &undirected,
        &undirected,
        None,
    )?;
    trace!(undirected = undirected.nvals(), paths = paths.nvals(), "triangle_count product");

    let mut per_vertex = GrBVector::new(n);
    grb_reduce_to_vector(&mut per_vertex, None, None, Monoid::Plus, &paths, None)?;

    Ok(per_vertex.to_dense(0).into_iter().map(|twice| twice / 2).collect())
}
