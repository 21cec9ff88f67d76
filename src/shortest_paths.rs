//! Single- and multi-source shortest paths
//!
//! Bellman-Ford as repeated min-plus relaxation:
//!
//! ```text
//! d = d min (d min.+ A)        at most `order` times
//! ```
//!
//! A shortest simple path has fewer than `order` edges, so without a
//! negative cycle the relaxation is stable by the last round. A change in
//! the last round means a negative cycle is reachable from a source.
//!
//! Edge weights are relaxed in the domain picked by
//! [`select_weight_domain`]; unreached vertices come out as `-1`.

use tracing::{debug, trace};

use crate::graphblas::{grb_mxm, grb_vxm, AnyMatrix, BinaryOp, Element, GrBMatrix, GrBVector, MinPlus};
use crate::validate;
use crate::weights::{select_weight_domain, WeightDomain};
use crate::{GraphConfig, GraphError, Result};

/// Distances from one source, `-1` where the source does not reach
#[derive(Clone, Debug, PartialEq)]
pub enum Distances {
    /// Weights were relaxed as integers
    Int(Vec<i64>),
    /// Weights were relaxed as floats
    Float(Vec<f64>),
}

impl Distances {
    /// Number of vertices
    pub fn len(&self) -> usize {
        match self {
            Distances::Int(d) => d.len(),
            Distances::Float(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distances as `f64`, whichever domain was used
    pub fn as_f64(&self) -> Vec<f64> {
        match self {
            Distances::Int(d) => d.iter().map(|&x| x as f64).collect(),
            Distances::Float(d) => d.clone(),
        }
    }
}

/// Shortest-path distances from `start_vertex`, with the default
/// [`GraphConfig`].
pub fn sssp(graph: &AnyMatrix, start_vertex: usize) -> Result<Distances> {
    sssp_with_config(graph, start_vertex, &GraphConfig::default())
}

/// Shortest-path distances from `start_vertex`.
///
/// `graph` must be a square numeric matrix; entry `(u, v)` is the weight of
/// edge `u -> v` and may be negative.
///
/// # Errors
/// `NotSquare`, `InvalidVertex` and `InvalidType` are checked in that
/// order before any work; `NegativeCycle` if one is reachable.
pub fn sssp_with_config(
    graph: &AnyMatrix,
    start_vertex: usize,
    config: &GraphConfig,
) -> Result<Distances> {
    let n = validate::square_order(graph)?;
    validate::check_vertices(n, &[start_vertex])?;
    let domain = select_weight_domain(graph, config)?;

    debug!(order = n, start_vertex, domain = %domain.dtype(), "sssp");

    Ok(match domain {
        WeightDomain::Int(weights, sentinel) => {
            let d = relax_single(&weights, sentinel, start_vertex)?;
            Distances::Int(reported(d.to_dense(sentinel), sentinel, -1))
        }
        WeightDomain::Float(weights) => {
            let d = relax_single(&weights, f64::INFINITY, start_vertex)?;
            Distances::Float(reported(d.to_dense(f64::INFINITY), f64::INFINITY, -1.0))
        }
    })
}

/// Shortest-path distances from each of `start_vertices`, with the default
/// [`GraphConfig`].
pub fn mssp(graph: &AnyMatrix, start_vertices: &[usize]) -> Result<Vec<(usize, Distances)>> {
    mssp_with_config(graph, start_vertices, &GraphConfig::default())
}

/// Shortest-path distances from each of `start_vertices`, relaxed together
/// as the rows of one matrix.
///
/// Returns one `(start_vertex, distances)` pair per input vertex, in input
/// order. A negative cycle reachable from any source fails the whole call;
/// the error names the first such source.
pub fn mssp_with_config(
    graph: &AnyMatrix,
    start_vertices: &[usize],
    config: &GraphConfig,
) -> Result<Vec<(usize, Distances)>> {
    let n = validate::square_order(graph)?;
    validate::check_vertices(n, start_vertices)?;
    let domain = select_weight_domain(graph, config)?;

    debug!(order = n, sources = start_vertices.len(), domain = %domain.dtype(), "mssp");

    if start_vertices.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<Distances> = match domain {
        WeightDomain::Int(weights, sentinel) => {
            let d = relax_batch(&weights, sentinel, start_vertices)?;
            (0..d.nrows())
                .map(|r| Distances::Int(reported(d.row_values(r), sentinel, -1)))
                .collect()
        }
        WeightDomain::Float(weights) => {
            let d = relax_batch(&weights, f64::INFINITY, start_vertices)?;
            (0..d.nrows())
                .map(|r| Distances::Float(reported(d.row_values(r), f64::INFINITY, -1.0)))
                .collect()
        }
    };

    Ok(start_vertices.iter().copied().zip(rows).collect())
}

fn relax_single<T: Element>(weights: &GrBMatrix<T>, infinity: T, source: usize) -> Result<GrBVector<T>> {
    let n = weights.nrows();
    let semiring = MinPlus::new(infinity);

    let mut distance = GrBVector::dense(n, infinity);
    distance.set(source, T::zero())?;

    for round in 0..n {
        let prev = distance.clone();
        grb_vxm(&mut distance, None, Some(BinaryOp::Min), &semiring, &prev, weights, None)?;

        let changed = distance != prev;
        trace!(round, changed, "sssp relax");
        if !changed {
            break;
        }
        if round == n - 1 {
            return Err(GraphError::NegativeCycle { start_vertex: source });
        }
    }

    Ok(distance)
}

fn relax_batch<T: Element>(
    weights: &GrBMatrix<T>,
    infinity: T,
    sources: &[usize],
) -> Result<GrBMatrix<T>> {
    let n = weights.nrows();
    let semiring = MinPlus::new(infinity);

    let mut distance = GrBMatrix::dense(sources.len(), n, infinity);
    for (row, &source) in sources.iter().enumerate() {
        distance.set(row, source, T::zero())?;
    }

    for round in 0..n {
        let prev = distance.clone();
        grb_mxm(&mut distance, None, Some(BinaryOp::Min), &semiring, &prev, weights, None)?;

        let changed_row = (0..sources.len()).find(|&r| distance.row(r).ne(prev.row(r)));
        trace!(round, changed = changed_row.is_some(), "mssp relax");
        match changed_row {
            None => break,
            Some(row) if round == n - 1 => {
                return Err(GraphError::NegativeCycle { start_vertex: sources[row] });
            }
            Some(_) => {}
        }
    }

    Ok(distance)
}

/// Swap the sentinel for the reported "unreached" value
fn reported<T: Element>(distances: Vec<T>, infinity: T, unreached: T) -> Vec<T> {
    distances
        .into_iter()
        .map(|d| if d == infinity { unreached } else { d })
        .collect()
}
