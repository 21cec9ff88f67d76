//! Sparse Storage Formats
//!
//! COO (Coordinate) storage for construction, CSR (Compressed Sparse Row)
//! storage for computation, and a sorted sparse vector.

use std::cmp::Ordering;

use crate::{GraphError, Result};
use super::types::{BinaryOp, Element, GrBIndex};

/// Entry in sparse storage
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparseEntry<T> {
    pub row: GrBIndex,
    pub col: GrBIndex,
    pub value: T,
}

/// COO (Coordinate) format storage
///
/// Stores triples (row, col, value) for each entry in insertion order.
/// Good for: construction, conversion
#[derive(Clone, Debug)]
pub struct CooStorage<T> {
    /// Row indices
    rows: Vec<GrBIndex>,
    /// Column indices
    cols: Vec<GrBIndex>,
    /// Values
    values: Vec<T>,
    /// Number of rows
    nrows: GrBIndex,
    /// Number of columns
    ncols: GrBIndex,
    /// Is sorted by (row, col)?
    sorted: bool,
}

impl<T: Element> CooStorage<T> {
    /// Create empty COO storage
    pub fn new(nrows: GrBIndex, ncols: GrBIndex) -> Self {
        Self::with_capacity(nrows, ncols, 0)
    }

    /// Create with capacity
    pub fn with_capacity(nrows: GrBIndex, ncols: GrBIndex, nnz: usize) -> Self {
        Self {
            rows: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
            nrows,
            ncols,
            sorted: true,
        }
    }

    /// Add an entry
    pub fn add(&mut self, row: GrBIndex, col: GrBIndex, value: T) -> Result<()> {
        if row >= self.nrows {
            return Err(GraphError::InvalidIndex { index: row, bound: self.nrows });
        }
        if col >= self.ncols {
            return Err(GraphError::InvalidIndex { index: col, bound: self.ncols });
        }

        if let (Some(&last_row), Some(&last_col)) = (self.rows.last(), self.cols.last()) {
            if (row, col) <= (last_row, last_col) {
                self.sorted = false;
            }
        }

        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
        Ok(())
    }

    /// Number of stored triples (duplicates counted)
    pub fn nnz(&self) -> usize {
        self.rows.len()
    }

    /// Get dimensions
    pub fn dims(&self) -> (GrBIndex, GrBIndex) {
        (self.nrows, self.ncols)
    }

    /// Iterator over entries in storage order
    pub fn iter(&self) -> impl Iterator<Item = SparseEntry<T>> + '_ {
        (0..self.nnz()).map(move |i| SparseEntry {
            row: self.rows[i],
            col: self.cols[i],
            value: self.values[i],
        })
    }

    /// Sort entries by (row, col); equal coordinates keep insertion order
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }

        let mut order: Vec<usize> = (0..self.nnz()).collect();
        order.sort_by_key(|&i| (self.rows[i], self.cols[i]));

        self.rows = order.iter().map(|&i| self.rows[i]).collect();
        self.cols = order.iter().map(|&i| self.cols[i]).collect();
        self.values = order.iter().map(|&i| self.values[i]).collect();
        self.sorted = true;
    }

    /// Convert to CSR format, folding duplicate coordinates with `dup`
    /// in insertion order (`BinaryOp::Second` keeps the last one).
    pub fn to_csr(&self, dup: BinaryOp) -> CsrStorage<T> {
        let mut sorted = self.clone();
        sorted.sort();

        let mut builder = CsrBuilder::with_capacity(self.nrows, self.ncols, sorted.nnz());
        let mut current_row = 0;

        for entry in sorted.iter() {
            while current_row < entry.row {
                builder.end_row();
                current_row += 1;
            }
            builder.push_or_fold(entry.col, entry.value, dup);
        }

        builder.finish()
    }
}

/// CSR (Compressed Sparse Row) format storage
///
/// Efficient for row-wise operations and vector-matrix multiply. Column
/// indices are strictly increasing within each row.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrStorage<T> {
    /// Row pointers (size nrows + 1)
    pub row_ptr: Vec<usize>,
    /// Column indices (size nnz)
    pub col_idx: Vec<GrBIndex>,
    /// Values (size nnz)
    pub values: Vec<T>,
    /// Number of rows
    nrows: GrBIndex,
    /// Number of columns
    ncols: GrBIndex,
}

impl<T: Element> CsrStorage<T> {
    /// Create empty CSR storage
    pub fn new(nrows: GrBIndex, ncols: GrBIndex) -> Self {
        Self {
            row_ptr: vec![0; nrows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
            nrows,
            ncols,
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.col_idx.len()
    }

    /// Get dimensions
    pub fn dims(&self) -> (GrBIndex, GrBIndex) {
        (self.nrows, self.ncols)
    }

    fn row_range(&self, row: GrBIndex) -> (usize, usize) {
        if row >= self.nrows {
            return (0, 0);
        }
        (self.row_ptr[row], self.row_ptr[row + 1])
    }

    /// Get value at (row, col)
    pub fn get(&self, row: GrBIndex, col: GrBIndex) -> Option<T> {
        let (start, end) = self.row_range(row);
        self.col_idx[start..end]
            .binary_search(&col)
            .ok()
            .map(|idx| self.values[start + idx])
    }

    /// Get row as iterator
    pub fn row(&self, row: GrBIndex) -> impl Iterator<Item = (GrBIndex, T)> + '_ {
        let (start, end) = self.row_range(row);
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// Set (row, col), inserting if absent. Caller checks bounds.
    pub(crate) fn insert(&mut self, row: GrBIndex, col: GrBIndex, value: T) {
        let (start, end) = self.row_range(row);
        match self.col_idx[start..end].binary_search(&col) {
            Ok(idx) => self.values[start + idx] = value,
            Err(idx) => {
                self.col_idx.insert(start + idx, col);
                self.values.insert(start + idx, value);
                for ptr in &mut self.row_ptr[row + 1..] {
                    *ptr += 1;
                }
            }
        }
    }

    /// Iterate all entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = SparseEntry<T>> + '_ {
        (0..self.nrows).flat_map(move |row| {
            self.row(row).map(move |(col, value)| SparseEntry { row, col, value })
        })
    }

    /// Transpose (counting sort by column, rows stay sorted)
    pub fn transpose(&self) -> CsrStorage<T> {
        let mut row_ptr = vec![0usize; self.ncols + 1];
        for &col in &self.col_idx {
            row_ptr[col + 1] += 1;
        }
        for i in 0..self.ncols {
            row_ptr[i + 1] += row_ptr[i];
        }

        let mut next = row_ptr.clone();
        let mut col_idx = vec![0; self.nnz()];
        let mut values = self.values.clone();

        for entry in self.iter() {
            let slot = next[entry.col];
            col_idx[slot] = entry.row;
            values[slot] = entry.value;
            next[entry.col] += 1;
        }

        CsrStorage {
            row_ptr,
            col_idx,
            values,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

/// Row-by-row CSR construction
///
/// Push entries of the current row in increasing column order, then
/// [`end_row`](CsrBuilder::end_row). Rows not ended before
/// [`finish`](CsrBuilder::finish) are empty.
pub struct CsrBuilder<T> {
    storage: CsrStorage<T>,
}

impl<T: Element> CsrBuilder<T> {
    pub fn with_capacity(nrows: GrBIndex, ncols: GrBIndex, nnz: usize) -> Self {
        let mut row_ptr = Vec::with_capacity(nrows + 1);
        row_ptr.push(0);
        Self {
            storage: CsrStorage {
                row_ptr,
                col_idx: Vec::with_capacity(nnz),
                values: Vec::with_capacity(nnz),
                nrows,
                ncols,
            },
        }
    }

    /// Append an entry to the current row
    pub fn push(&mut self, col: GrBIndex, value: T) {
        self.storage.col_idx.push(col);
        self.storage.values.push(value);
    }

    fn push_or_fold(&mut self, col: GrBIndex, value: T, dup: BinaryOp) {
        let row_start = self.storage.row_ptr.last().copied().unwrap_or(0);
        if self.storage.col_idx.len() > row_start && self.storage.col_idx.last() == Some(&col) {
            if let Some(last) = self.storage.values.last_mut() {
                *last = dup.apply(*last, value);
            }
        } else {
            self.push(col, value);
        }
    }

    /// Close the current row
    pub fn end_row(&mut self) {
        if self.storage.row_ptr.len() <= self.storage.nrows {
            self.storage.row_ptr.push(self.storage.col_idx.len());
        }
    }

    pub fn finish(mut self) -> CsrStorage<T> {
        while self.storage.row_ptr.len() <= self.storage.nrows {
            self.storage.row_ptr.push(self.storage.col_idx.len());
        }
        self.storage
    }
}

/// Sparse vector storage with sorted indices
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVec<T> {
    /// Indices of stored elements (strictly increasing)
    pub indices: Vec<GrBIndex>,
    /// Values
    pub values: Vec<T>,
    /// Length
    pub len: GrBIndex,
}

impl<T: Element> SparseVec<T> {
    /// Create empty sparse vector
    pub fn new(len: GrBIndex) -> Self {
        Self::with_capacity(len, 0)
    }

    /// Create with capacity
    pub fn with_capacity(len: GrBIndex, nnz: usize) -> Self {
        Self {
            indices: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
            len,
        }
    }

    /// Number of stored elements
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Get value at index
    pub fn get(&self, idx: GrBIndex) -> Option<T> {
        self.indices
            .binary_search(&idx)
            .ok()
            .map(|pos| self.values[pos])
    }

    /// Set value at index, inserting if absent. Caller checks bounds.
    pub(crate) fn insert(&mut self, idx: GrBIndex, value: T) {
        match self.indices.binary_search(&idx) {
            Ok(pos) => self.values[pos] = value,
            Err(pos) => {
                self.indices.insert(pos, idx);
                self.values.insert(pos, value);
            }
        }
    }

    /// Append past the current last index
    pub(crate) fn push(&mut self, idx: GrBIndex, value: T) {
        debug_assert!(self.indices.last().map_or(true, |&last| last < idx));
        self.indices.push(idx);
        self.values.push(value);
    }

    /// Iterator over (index, value) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (GrBIndex, T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }
}

/// Merge two index-sorted streams, yielding each index once with the
/// value from either side.
pub(crate) fn merge_sorted<T, A, B>(
    left: A,
    right: B,
) -> impl Iterator<Item = (GrBIndex, Option<T>, Option<T>)>
where
    T: Copy,
    A: Iterator<Item = (GrBIndex, T)>,
    B: Iterator<Item = (GrBIndex, T)>,
{
    let mut left = left.peekable();
    let mut right = right.peekable();

    std::iter::from_fn(move || match (left.peek().copied(), right.peek().copied()) {
        (None, None) => None,
        (Some((i, a)), None) => {
            left.next();
            Some((i, Some(a), None))
        }
        (None, Some((j, b))) => {
            right.next();
            Some((j, None, Some(b)))
        }
        (Some((i, a)), Some((j, b))) => match i.cmp(&j) {
            Ordering::Less => {
                left.next();
                Some((i, Some(a), None))
            }
            Ordering::Greater => {
                right.next();
                Some((j, None, Some(b)))
            }
            Ordering::Equal => {
                left.next();
                right.next();
                Some((i, Some(a), Some(b)))
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coo_storage() {
        let mut coo = CooStorage::new(3, 3);

        coo.add(0, 0, 1i64).unwrap();
        coo.add(0, 2, 2).unwrap();
        coo.add(1, 1, 3).unwrap();
        coo.add(2, 0, 4).unwrap();

        assert_eq!(coo.nnz(), 4);
        assert_eq!(coo.dims(), (3, 3));
        assert!(coo.add(3, 0, 5).is_err());
        assert!(coo.add(0, 3, 5).is_err());
    }

    #[test]
    fn test_coo_to_csr() {
        let mut coo = CooStorage::new(3, 3);

        coo.add(2, 0, 4i64).unwrap();
        coo.add(0, 2, 2).unwrap();
        coo.add(1, 1, 3).unwrap();
        coo.add(0, 0, 1).unwrap();

        let csr = coo.to_csr(BinaryOp::Second);

        assert_eq!(csr.nnz(), 4);
        assert_eq!(csr.get(0, 0), Some(1));
        assert_eq!(csr.get(0, 1), None);
        assert_eq!(csr.row(0).count(), 2);
        assert_eq!(csr.row(1).collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(csr.row_ptr, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_coo_duplicates() {
        let mut coo = CooStorage::new(2, 2);
        coo.add(1, 1, 5i32).unwrap();
        coo.add(0, 0, 1).unwrap();
        coo.add(1, 1, 7).unwrap();

        assert_eq!(coo.to_csr(BinaryOp::Second).get(1, 1), Some(7));
        assert_eq!(coo.to_csr(BinaryOp::First).get(1, 1), Some(5));
        assert_eq!(coo.to_csr(BinaryOp::Plus).get(1, 1), Some(12));
        assert_eq!(coo.to_csr(BinaryOp::Plus).nnz(), 2);
    }

    #[test]
    fn test_csr_row_iteration() {
        let mut coo = CooStorage::new(3, 4);

        coo.add(1, 3, true).unwrap();
        coo.add(1, 0, true).unwrap();
        coo.add(1, 2, false).unwrap();

        let csr = coo.to_csr(BinaryOp::Second);

        let row1: Vec<_> = csr.row(1).collect();
        assert_eq!(row1, vec![(0, true), (2, false), (3, true)]);
        assert_eq!(csr.row(0).count(), 0);
        assert_eq!(csr.row(2).count(), 0);
    }

    #[test]
    fn test_csr_insert() {
        let mut csr = CsrStorage::new(3, 3);
        csr.insert(1, 2, 9u8);
        csr.insert(0, 1, 4);
        csr.insert(1, 0, 3);
        csr.insert(1, 2, 8);

        assert_eq!(csr.nnz(), 3);
        assert_eq!(csr.row_ptr, vec![0, 1, 3, 3]);
        assert_eq!(csr.row(1).collect::<Vec<_>>(), vec![(0, 3), (2, 8)]);
    }

    #[test]
    fn test_csr_transpose() {
        let mut coo = CooStorage::new(2, 3);
        coo.add(0, 1, 1i64).unwrap();
        coo.add(0, 2, 2).unwrap();
        coo.add(1, 0, 3).unwrap();
        coo.add(1, 2, 4).unwrap();

        let t = coo.to_csr(BinaryOp::Second).transpose();

        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.row(0).collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(t.row(1).collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(t.row(2).collect::<Vec<_>>(), vec![(0, 2), (1, 4)]);
        assert_eq!(t.transpose(), coo.to_csr(BinaryOp::Second));
    }

    #[test]
    fn test_sparse_vec() {
        let mut v = SparseVec::new(10);
        v.insert(5, 2.0f64);
        v.insert(1, 1.0);
        v.insert(5, 3.0);

        assert_eq!(v.nnz(), 2);
        assert_eq!(v.get(5), Some(3.0));
        assert_eq!(v.get(2), None);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(1, 1.0), (5, 3.0)]);
    }

    #[test]
    fn test_merge_sorted() {
        let a = vec![(0, 1), (2, 2), (5, 3)];
        let b = vec![(2, 20), (3, 30)];

        let merged: Vec<_> = merge_sorted(a.into_iter(), b.into_iter()).collect();
        assert_eq!(
            merged,
            vec![
                (0, Some(1), None),
                (2, Some(2), Some(20)),
                (3, None, Some(30)),
                (5, Some(3), None),
            ]
        );
    }
}
