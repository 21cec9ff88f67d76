//! Write masks
//!
//! Any vector or matrix can restrict which output positions an operation
//! writes. A *valued* mask selects positions that are present and non-zero;
//! a *structural* mask selects every present position.

use super::descriptor::Descriptor;
use super::matrix::GrBMatrix;
use super::types::{Element, GrBIndex};
use super::vector::GrBVector;

/// A vector usable as a write mask, regardless of its element type
pub trait VectorMask {
    /// Logical length
    fn mask_len(&self) -> GrBIndex;

    /// Does the mask select `idx`?
    fn mask_get(&self, idx: GrBIndex, structural: bool) -> bool;
}

/// A matrix usable as a write mask, regardless of its element type
pub trait MatrixMask {
    /// Logical shape
    fn mask_dims(&self) -> (GrBIndex, GrBIndex);

    /// Does the mask select `(row, col)`?
    fn mask_get(&self, row: GrBIndex, col: GrBIndex, structural: bool) -> bool;
}

impl<T: Element> VectorMask for GrBVector<T> {
    fn mask_len(&self) -> GrBIndex {
        self.len()
    }

    fn mask_get(&self, idx: GrBIndex, structural: bool) -> bool {
        self.get(idx).map_or(false, |v| structural || v.is_truthy())
    }
}

impl<T: Element> MatrixMask for GrBMatrix<T> {
    fn mask_dims(&self) -> (GrBIndex, GrBIndex) {
        (self.nrows(), self.ncols())
    }

    fn mask_get(&self, row: GrBIndex, col: GrBIndex, structural: bool) -> bool {
        self.get(row, col).map_or(false, |v| structural || v.is_truthy())
    }
}

/// A mask with the descriptor's complement/structure flags applied.
///
/// Without a mask every position is writable, unless the descriptor asks
/// for the complement (the complement of "everything" is nothing).
pub(crate) struct MaskView<'a, M: ?Sized> {
    mask: Option<&'a M>,
    complement: bool,
    structural: bool,
}

impl<'a, M: ?Sized> MaskView<'a, M> {
    pub(crate) fn new(mask: Option<&'a M>, desc: &Descriptor) -> Self {
        Self {
            mask,
            complement: desc.is_mask_complemented(),
            structural: desc.is_mask_structural(),
        }
    }
}

impl<M: VectorMask + ?Sized> MaskView<'_, M> {
    pub(crate) fn allows(&self, idx: GrBIndex) -> bool {
        match self.mask {
            None => !self.complement,
            Some(m) => m.mask_get(idx, self.structural) != self.complement,
        }
    }
}

impl<M: MatrixMask + ?Sized> MaskView<'_, M> {
    pub(crate) fn allows_at(&self, row: GrBIndex, col: GrBIndex) -> bool {
        match self.mask {
            None => !self.complement,
            Some(m) => m.mask_get(row, col, self.structural) != self.complement,
        }
    }
}
