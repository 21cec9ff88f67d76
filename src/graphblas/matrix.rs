//! GraphBLAS Matrix
//!
//! Typed sparse matrix backed by CSR storage.

use crate::{GraphError, Result};
use super::sparse::{CooStorage, CsrBuilder, CsrStorage, SparseEntry};
use super::types::{BinaryOp, Element, GrBIndex, GrBType};

/// GraphBLAS Matrix
///
/// A sparse matrix of `T`. An absent entry and an entry holding `T::zero()`
/// are different things: both contribute nothing to a multiply, but only
/// the present one counts in a structural mask or in [`nvals`](Self::nvals).
#[derive(Clone, Debug, PartialEq)]
pub struct GrBMatrix<T> {
    storage: CsrStorage<T>,
}

impl<T: Element> GrBMatrix<T> {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create a new empty matrix
    pub fn new(nrows: GrBIndex, ncols: GrBIndex) -> Self {
        Self {
            storage: CsrStorage::new(nrows, ncols),
        }
    }

    /// Create a matrix with every entry present and equal to `fill`
    pub fn dense(nrows: GrBIndex, ncols: GrBIndex, fill: T) -> Self {
        let mut builder = CsrBuilder::with_capacity(nrows, ncols, nrows * ncols);
        for _ in 0..nrows {
            for col in 0..ncols {
                builder.push(col, fill);
            }
            builder.end_row();
        }
        Self {
            storage: builder.finish(),
        }
    }

    /// Build from parallel coordinate lists; a repeated coordinate keeps
    /// its last value
    pub fn from_triples(
        nrows: GrBIndex,
        ncols: GrBIndex,
        rows: &[GrBIndex],
        cols: &[GrBIndex],
        values: &[T],
    ) -> Result<Self> {
        if cols.len() != rows.len() {
            return Err(GraphError::DimensionMismatch {
                expected: rows.len(),
                got: cols.len(),
            });
        }
        if values.len() != rows.len() {
            return Err(GraphError::DimensionMismatch {
                expected: rows.len(),
                got: values.len(),
            });
        }

        let mut coo = CooStorage::with_capacity(nrows, ncols, rows.len());
        for ((&row, &col), &value) in rows.iter().zip(cols).zip(values) {
            coo.add(row, col, value)?;
        }
        Ok(Self::from_coo(&coo, BinaryOp::Second))
    }

    /// Build from COO storage, folding duplicates with `dup`
    pub fn from_coo(coo: &CooStorage<T>, dup: BinaryOp) -> Self {
        Self {
            storage: coo.to_csr(dup),
        }
    }

    pub(crate) fn from_csr(storage: CsrStorage<T>) -> Self {
        Self { storage }
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Number of rows
    pub fn nrows(&self) -> GrBIndex {
        self.storage.dims().0
    }

    /// Number of columns
    pub fn ncols(&self) -> GrBIndex {
        self.storage.dims().1
    }

    /// Number of stored entries
    pub fn nvals(&self) -> usize {
        self.storage.nnz()
    }

    /// Element type
    pub fn dtype(&self) -> GrBType {
        T::TYPE
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.nvals() == 0
    }

    /// Same number of rows and columns?
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    /// Get element at (row, col)
    pub fn get(&self, row: GrBIndex, col: GrBIndex) -> Option<T> {
        self.storage.get(row, col)
    }

    /// Set element at (row, col)
    pub fn set(&mut self, row: GrBIndex, col: GrBIndex, value: T) -> Result<()> {
        if row >= self.nrows() {
            return Err(GraphError::InvalidIndex { index: row, bound: self.nrows() });
        }
        if col >= self.ncols() {
            return Err(GraphError::InvalidIndex { index: col, bound: self.ncols() });
        }
        self.storage.insert(row, col, value);
        Ok(())
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.storage = CsrStorage::new(self.nrows(), self.ncols());
    }

    // ========================================================================
    // ITERATION
    // ========================================================================

    /// Iterate over stored entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = SparseEntry<T>> + '_ {
        self.storage.iter()
    }

    /// Iterate over one row as (col, value)
    pub fn row(&self, row: GrBIndex) -> impl Iterator<Item = (GrBIndex, T)> + '_ {
        self.storage.row(row)
    }

    /// Values of one row in column order
    pub fn row_values(&self, row: GrBIndex) -> Vec<T> {
        self.row(row).map(|(_, v)| v).collect()
    }

    /// All stored entries as (row, col, value), row-major
    pub fn extract_tuples(&self) -> Vec<(GrBIndex, GrBIndex, T)> {
        self.iter().map(|e| (e.row, e.col, e.value)).collect()
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Transpose
    pub fn transpose(&self) -> GrBMatrix<T> {
        GrBMatrix {
            storage: self.storage.transpose(),
        }
    }

    /// Convert every entry, keeping the pattern
    pub fn try_map<U, F>(&self, mut f: F) -> Result<GrBMatrix<U>>
    where
        U: Element,
        F: FnMut(GrBIndex, GrBIndex, T) -> Result<U>,
    {
        let mut builder = CsrBuilder::with_capacity(self.nrows(), self.ncols(), self.nvals());
        for row in 0..self.nrows() {
            for (col, value) in self.row(row) {
                builder.push(col, f(row, col, value)?);
            }
            builder.end_row();
        }
        Ok(GrBMatrix::from_csr(builder.finish()))
    }
}
