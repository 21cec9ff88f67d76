//! Breadth-first search levels
//!
//! One BFS step is a masked vector-matrix multiply over (OR, AND): the
//! frontier moves to every out-neighbour not yet visited. The loop stops
//! when the visited set stops growing.
//!
//! ```text
//! frontier⟨¬visited, replace⟩ = frontier lor.land A
//! visited⟨frontier⟩           = visited ∪ frontier
//! level⟨frontier⟩             = step
//! ```
//!
//! `true AND false` leaves a stored `false` in the frontier. Both masks
//! read values, so such an entry is neither levelled nor marked visited,
//! and the vertex stays open for a real edge in a later step.
//!
//! The multi-source variant stacks one frontier per source as rows of a
//! matrix and advances all of them with a single matrix-matrix multiply.

use std::mem;

use tracing::{debug, trace};

use crate::graphblas::{
    grb_assign_scalar_matrix, grb_assign_scalar_vector, grb_ewise_add_matrix,
    grb_ewise_add_vector, grb_mxm, grb_vxm, AnyMatrix, BinaryOp, GrBDesc, GrBMatrix, GrBVector,
    Indices, LorLand, GRB_ALL,
};
use crate::validate;
use crate::Result;

/// Level of a vertex the search never reaches
pub const UNREACHED: i64 = -1;

/// BFS levels from `start_vertex`.
///
/// `graph` must be a square boolean adjacency matrix. Element `v` of the
/// result is the number of edges on a shortest path from `start_vertex` to
/// `v`, or [`UNREACHED`]. An edge stored as `false` is not followed.
pub fn bfs(graph: &AnyMatrix, start_vertex: usize) -> Result<Vec<i64>> {
    let n = validate::square_order(graph)?;
    validate::check_vertices(n, &[start_vertex])?;
    let adjacency = validate::boolean(graph)?;

    debug!(order = n, start_vertex, edges = adjacency.nvals(), "bfs");

    let mut frontier = GrBVector::new(n);
    frontier.set(start_vertex, true)?;
    let mut visited = frontier.clone();
    let mut levels = GrBVector::dense(n, UNREACHED);
    levels.set(start_vertex, 0)?;

    let advance = GrBDesc::rc();

    let mut step = 1;
    let mut prev_nvals = None;
    while prev_nvals != Some(visited.nvals()) {
        prev_nvals = Some(visited.nvals());

        let current = mem::replace(&mut frontier, GrBVector::new(n));
        grb_vxm(&mut frontier, Some(&visited), None, &LorLand, &current, adjacency, Some(&advance))?;

        let seen = visited.clone();
        grb_ewise_add_vector(&mut visited, Some(&frontier), None, BinaryOp::LOr, &seen, &frontier, None)?;

        grb_assign_scalar_vector(&mut levels, Some(&frontier), None, step, GRB_ALL, None)?;

        trace!(step, frontier = frontier.nvals(), visited = visited.nvals(), "bfs step");
        step += 1;
    }

    Ok(levels.to_dense(UNREACHED))
}

/// BFS levels from each of `start_vertices`, all advanced together.
///
/// Returns one `(start_vertex, levels)` pair per input vertex, in input
/// order; each `levels` equals [`bfs`] from that vertex.
pub fn multi_source_bfs(
    graph: &AnyMatrix,
    start_vertices: &[usize],
) -> Result<Vec<(usize, Vec<i64>)>> {
    let n = validate::square_order(graph)?;
    validate::check_vertices(n, start_vertices)?;
    let adjacency = validate::boolean(graph)?;

    debug!(order = n, sources = start_vertices.len(), "multi_source_bfs");

    if start_vertices.is_empty() {
        return Ok(Vec::new());
    }

    let m = start_vertices.len();
    let rows: Vec<usize> = (0..m).collect();
    let mut frontier = GrBMatrix::from_triples(m, n, &rows, start_vertices, &vec![true; m])?;
    let mut visited = frontier.clone();
    let mut levels = GrBMatrix::dense(m, n, UNREACHED);
    for (row, &vertex) in start_vertices.iter().enumerate() {
        grb_assign_scalar_matrix(
            &mut levels,
            None,
            None,
            0,
            Indices::List(&[row]),
            Indices::List(&[vertex]),
            None,
        )?;
    }

    let advance = GrBDesc::rc();

    let mut step = 1;
    let mut prev_nvals = None;
    while prev_nvals != Some(visited.nvals()) {
        prev_nvals = Some(visited.nvals());

        let current = mem::replace(&mut frontier, GrBMatrix::new(m, n));
        grb_mxm(&mut frontier, Some(&visited), None, &LorLand, &current, adjacency, Some(&advance))?;

        let seen = visited.clone();
        grb_ewise_add_matrix(&mut visited, Some(&frontier), None, BinaryOp::LOr, &seen, &frontier, None)?;

        grb_assign_scalar_matrix(&mut levels, Some(&frontier), None, step, GRB_ALL, GRB_ALL, None)?;

        trace!(step, frontier = frontier.nvals(), visited = visited.nvals(), "multi-source bfs step");
        step += 1;
    }

    Ok(start_vertices
        .iter()
        .enumerate()
        .map(|(row, &vertex)| (vertex, levels.row_values(row)))
        .collect())
}
