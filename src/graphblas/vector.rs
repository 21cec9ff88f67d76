//! GraphBLAS Vector
//!
//! Typed sparse vector with sorted indices.

use crate::{GraphError, Result};
use super::sparse::SparseVec;
use super::types::{Element, GrBIndex, GrBType};

/// GraphBLAS Vector
///
/// A sparse vector of `T`; absent and present-but-zero are distinct, as
/// for [`GrBMatrix`](super::GrBMatrix).
#[derive(Clone, Debug, PartialEq)]
pub struct GrBVector<T> {
    /// Internal sparse storage
    storage: SparseVec<T>,
}

impl<T: Element> GrBVector<T> {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create empty vector
    pub fn new(len: GrBIndex) -> Self {
        Self {
            storage: SparseVec::new(len),
        }
    }

    /// Create with every index present and equal to `fill`
    pub fn dense(len: GrBIndex, fill: T) -> Self {
        Self {
            storage: SparseVec {
                indices: (0..len).collect(),
                values: vec![fill; len],
                len,
            },
        }
    }

    /// Create from sparse entries; a repeated index keeps its last value
    pub fn from_entries(len: GrBIndex, entries: &[(GrBIndex, T)]) -> Result<Self> {
        let mut v = Self::new(len);
        for &(idx, value) in entries {
            v.set(idx, value)?;
        }
        Ok(v)
    }

    pub(crate) fn from_storage(storage: SparseVec<T>) -> Self {
        Self { storage }
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Vector length
    pub fn len(&self) -> GrBIndex {
        self.storage.len
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

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    /// Get element at index
    pub fn get(&self, idx: GrBIndex) -> Option<T> {
        self.storage.get(idx)
    }

    /// Set element at index
    pub fn set(&mut self, idx: GrBIndex, value: T) -> Result<()> {
        if idx >= self.len() {
            return Err(GraphError::InvalidIndex { index: idx, bound: self.len() });
        }
        self.storage.insert(idx, value);
        Ok(())
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.storage = SparseVec::new(self.storage.len);
    }

    // ========================================================================
    // ITERATION
    // ========================================================================

    /// Iterate over (index, value) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (GrBIndex, T)> + '_ {
        self.storage.iter()
    }

    /// Get indices of stored elements
    pub fn indices(&self) -> &[GrBIndex] {
        &self.storage.indices
    }

    /// Get stored values
    pub fn values(&self) -> &[T] {
        &self.storage.values
    }

    /// All stored entries as (index, value), in index order
    pub fn extract_tuples(&self) -> Vec<(GrBIndex, T)> {
        self.iter().collect()
    }

    /// Dense copy, `fill` where nothing is stored
    pub fn to_dense(&self, fill: T) -> Vec<T> {
        let mut dense = vec![fill; self.len()];
        for (idx, value) in self.iter() {
            dense[idx] = value;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_basic() {
        let mut v = GrBVector::new(10);

        v.set(0, 1.5f64).unwrap();
        v.set(5, 2.5).unwrap();
        v.set(9, 3.5).unwrap();

        assert_eq!(v.nvals(), 3);
        assert_eq!(v.get(0), Some(1.5));
        assert_eq!(v.get(1), None);
        assert_eq!(v.dtype(), GrBType::Float64);
        assert!(v.set(10, 0.0).is_err());
    }

    #[test]
    fn test_extract_order() {
        let v = GrBVector::from_entries(6, &[(4, 40i64), (1, 10), (3, 30), (1, 11)]).unwrap();

        assert_eq!(v.extract_tuples(), vec![(1, 11), (3, 30), (4, 40)]);
        assert_eq!(v.indices(), &[1, 3, 4]);
        assert_eq!(v.values(), &[11, 30, 40]);
        assert_eq!(v.to_dense(-1), vec![-1, 11, -1, 30, 40, -1]);
    }

    #[test]
    fn test_dense() {
        let mut v = GrBVector::dense(4, -1i64);
        assert_eq!(v.nvals(), 4);
        v.set(2, 0).unwrap();
        assert_eq!(v.to_dense(99), vec![-1, -1, 0, -1]);

        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.len(), 4);
    }
}
