//! Weight domain policy for shortest paths
//!
//! Min-plus relaxation needs an "infinity" that no real path can reach.
//! Floating weights use `+∞`. Integer weights are relaxed in `i64` with a
//! finite sentinel, as long as no path can get near it:
//!
//! ```text
//! |path weight| <= order * max|w| < integer_sentinel
//! ```
//!
//! Otherwise the weights are relaxed in `f64`. This module is the only
//! place that makes that decision.

use num_traits::ToPrimitive;

use crate::graphblas::{AnyMatrix, Element, GrBMatrix, GrBType};
use crate::{GraphConfig, GraphError, Result};

/// Edge weights converted to the domain relaxation runs in
#[derive(Clone, Debug, PartialEq)]
pub enum WeightDomain {
    /// `i64` weights with the sentinel standing for "unreached"
    Int(GrBMatrix<i64>, i64),
    /// `f64` weights, `+∞` for "unreached"
    Float(GrBMatrix<f64>),
}

impl WeightDomain {
    /// Element type relaxation runs in
    pub fn dtype(&self) -> GrBType {
        match self {
            WeightDomain::Int(..) => GrBType::Int64,
            WeightDomain::Float(_) => GrBType::Float64,
        }
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        match self {
            WeightDomain::Int(m, _) => m.nrows(),
            WeightDomain::Float(m) => m.nrows(),
        }
    }
}

/// Pick the relaxation domain for `graph` and convert its weights.
///
/// - boolean matrices have no min-plus semiring: `InvalidType`
/// - floating matrices relax in `f64`; a NaN or infinite weight is
///   `InvalidWeight`
/// - integer matrices relax in `i64` with `config.integer_sentinel` when
///   `order * max|w|` stays below the sentinel and `config.force_float` is
///   unset, in `f64` otherwise
pub fn select_weight_domain(graph: &AnyMatrix, config: &GraphConfig) -> Result<WeightDomain> {
    match graph {
        AnyMatrix::Bool(_) => Err(GraphError::InvalidType {
            found: GrBType::Bool,
            expected: "a numeric type",
        }),
        AnyMatrix::Int8(m) => integer_domain(m, config),
        AnyMatrix::Int16(m) => integer_domain(m, config),
        AnyMatrix::Int32(m) => integer_domain(m, config),
        AnyMatrix::Int64(m) => integer_domain(m, config),
        AnyMatrix::UInt8(m) => integer_domain(m, config),
        AnyMatrix::UInt16(m) => integer_domain(m, config),
        AnyMatrix::UInt32(m) => integer_domain(m, config),
        AnyMatrix::UInt64(m) => integer_domain(m, config),
        AnyMatrix::Float32(m) => float_domain(m),
        AnyMatrix::Float64(m) => float_domain(m),
    }
}

fn integer_domain<T: Element + ToPrimitive>(
    weights: &GrBMatrix<T>,
    config: &GraphConfig,
) -> Result<WeightDomain> {
    if !config.force_float {
        let max_abs = weights
            .iter()
            .map(|e| e.value.to_i128().map_or(u128::MAX, i128::unsigned_abs))
            .max()
            .unwrap_or(0);
        let bound = max_abs.saturating_mul(weights.nrows() as u128);

        if let Ok(sentinel) = u128::try_from(config.integer_sentinel) {
            if bound < sentinel {
                let converted = weights.try_map(|row, col, w| {
                    w.to_i64().ok_or(GraphError::InvalidWeight { row, col })
                })?;
                return Ok(WeightDomain::Int(converted, config.integer_sentinel));
            }
        }
    }
    float_domain(weights)
}

fn float_domain<T: Element + ToPrimitive>(weights: &GrBMatrix<T>) -> Result<WeightDomain> {
    let converted = weights.try_map(|row, col, w| {
        w.to_f64()
            .filter(|x| x.is_finite())
            .ok_or(GraphError::InvalidWeight { row, col })
    })?;
    Ok(WeightDomain::Float(converted))
}
