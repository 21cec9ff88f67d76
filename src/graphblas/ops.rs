//! GraphBLAS Operations
//!
//! High-level operations following the GraphBLAS C API argument order:
//! output, mask, accumulator, operator, inputs, descriptor.
//!
//! Every operation computes an intermediate result `T`, then writes it into
//! the output `C` position by position:
//!
//! - `Z = accum ? C ∪ T (combined by accum) : T`
//! - where the mask allows: `C = Z` (deleting `C` where `Z` has no entry)
//! - where it does not: `C` is kept, or deleted with `outp = Replace`

use std::borrow::Cow;

use crate::{GraphError, Result};
use super::descriptor::Descriptor;
use super::mask::{MaskView, MatrixMask, VectorMask};
use super::matrix::GrBMatrix;
use super::semiring::Semiring;
use super::sparse::{merge_sorted, CsrBuilder, SparseVec};
use super::types::{BinaryOp, Element, GrBIndex, Indices, Monoid};
use super::vector::GrBVector;

// ============================================================================
// VECTOR-MATRIX / MATRIX-MATRIX MULTIPLY
// ============================================================================

/// Vector-matrix multiply: w<mask> = accum(w, u ⊕.⊗ A)
///
/// # Arguments
/// * `w` - Output vector (will be modified)
/// * `mask` - Optional mask vector
/// * `accum` - Optional accumulator (how to combine with existing w)
/// * `semiring` - The semiring to use
/// * `u` - Input vector
/// * `a` - Input matrix (transposed with `inp1 = Transpose`)
/// * `desc` - Operation descriptor
pub fn grb_vxm<S: Semiring>(
    w: &mut GrBVector<S::Output>,
    mask: Option<&dyn VectorMask>,
    accum: Option<BinaryOp>,
    semiring: &S,
    u: &GrBVector<S::Left>,
    a: &GrBMatrix<S::Right>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    let a = oriented(a, desc.is_inp1_transposed());

    check_dim(a.nrows(), u.len())?;
    check_dim(a.ncols(), w.len())?;
    check_vector_mask(mask, w.len())?;

    let mask = MaskView::new(mask, &desc);
    let allowed: Vec<bool> = (0..w.len()).map(|j| mask.allows(j)).collect();

    let mut spa = Spa::new(w.len());
    for (k, uk) in u.iter() {
        for (j, akj) in a.row(k) {
            if allowed[j] {
                spa.scatter(j, semiring.multiply(uk, akj), |x, y| semiring.add(x, y));
            }
        }
    }

    let mut t = SparseVec::with_capacity(w.len(), spa.touched.len());
    spa.gather(|j, value| t.push(j, value));

    write_vector(w, &t, |j| allowed[j], accum, desc.should_replace_output());
    Ok(())
}

/// Matrix-matrix multiply: C<mask> = accum(C, A ⊕.⊗ B)
///
/// Row-by-row (Gustavson) with a sparse accumulator; products the mask
/// would discard are never formed.
///
/// # Arguments
/// * `c` - Output matrix (will be modified)
/// * `mask` - Optional mask matrix
/// * `accum` - Optional accumulator (how to combine with existing C)
/// * `semiring` - The semiring to use
/// * `a` - First input matrix
/// * `b` - Second input matrix
/// * `desc` - Operation descriptor
pub fn grb_mxm<S: Semiring>(
    c: &mut GrBMatrix<S::Output>,
    mask: Option<&dyn MatrixMask>,
    accum: Option<BinaryOp>,
    semiring: &S,
    a: &GrBMatrix<S::Left>,
    b: &GrBMatrix<S::Right>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    let a = oriented(a, desc.is_inp0_transposed());
    let b = oriented(b, desc.is_inp1_transposed());

    check_dim(a.ncols(), b.nrows())?;
    check_dim(a.nrows(), c.nrows())?;
    check_dim(b.ncols(), c.ncols())?;
    check_matrix_mask(mask, c.nrows(), c.ncols())?;

    let mask = MaskView::new(mask, &desc);
    let (nrows, ncols) = (c.nrows(), c.ncols());

    let mut spa = Spa::new(ncols);
    let mut t = CsrBuilder::with_capacity(nrows, ncols, c.nvals());
    for i in 0..nrows {
        for (k, aik) in a.row(i) {
            for (j, bkj) in b.row(k) {
                if mask.allows_at(i, j) {
                    spa.scatter(j, semiring.multiply(aik, bkj), |x, y| semiring.add(x, y));
                }
            }
        }
        spa.gather(|j, value| t.push(j, value));
        t.end_row();
    }
    let t = GrBMatrix::from_csr(t.finish());

    write_matrix(c, &t, |i, j| mask.allows_at(i, j), accum, desc.should_replace_output());
    Ok(())
}

// ============================================================================
// ELEMENT-WISE OPERATIONS
// ============================================================================

/// Element-wise union: w<mask> = accum(w, u ∪ v)
///
/// A position present in both inputs gets `op(u, v)`; present in one, that
/// value.
pub fn grb_ewise_add_vector<T: Element>(
    w: &mut GrBVector<T>,
    mask: Option<&dyn VectorMask>,
    accum: Option<BinaryOp>,
    op: BinaryOp,
    u: &GrBVector<T>,
    v: &GrBVector<T>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();

    check_dim(w.len(), u.len())?;
    check_dim(w.len(), v.len())?;
    check_vector_mask(mask, w.len())?;

    let mask = MaskView::new(mask, &desc);

    let mut t = SparseVec::with_capacity(w.len(), u.nvals().max(v.nvals()));
    for (idx, left, right) in merge_sorted(u.iter(), v.iter()) {
        if mask.allows(idx) {
            if let Some(value) = union_value(left, right, op) {
                t.push(idx, value);
            }
        }
    }

    write_vector(w, &t, |idx| mask.allows(idx), accum, desc.should_replace_output());
    Ok(())
}

/// Element-wise union: C<mask> = accum(C, A ∪ B)
pub fn grb_ewise_add_matrix<T: Element>(
    c: &mut GrBMatrix<T>,
    mask: Option<&dyn MatrixMask>,
    accum: Option<BinaryOp>,
    op: BinaryOp,
    a: &GrBMatrix<T>,
    b: &GrBMatrix<T>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    let a = oriented(a, desc.is_inp0_transposed());
    let b = oriented(b, desc.is_inp1_transposed());

    for m in [&*a, &*b] {
        check_dim(c.nrows(), m.nrows())?;
        check_dim(c.ncols(), m.ncols())?;
    }
    check_matrix_mask(mask, c.nrows(), c.ncols())?;

    let mask = MaskView::new(mask, &desc);

    let mut t = CsrBuilder::with_capacity(c.nrows(), c.ncols(), a.nvals().max(b.nvals()));
    for i in 0..c.nrows() {
        for (j, left, right) in merge_sorted(a.row(i), b.row(i)) {
            if mask.allows_at(i, j) {
                if let Some(value) = union_value(left, right, op) {
                    t.push(j, value);
                }
            }
        }
        t.end_row();
    }
    let t = GrBMatrix::from_csr(t.finish());

    write_matrix(c, &t, |i, j| mask.allows_at(i, j), accum, desc.should_replace_output());
    Ok(())
}

// ============================================================================
// ASSIGN
// ============================================================================

/// Scalar assign: w<mask>(indices) = accum(w(indices), value)
///
/// Positions outside `indices` are left alone, except that `Replace`
/// clears every position the mask does not allow.
pub fn grb_assign_scalar_vector<T: Element>(
    w: &mut GrBVector<T>,
    mask: Option<&dyn VectorMask>,
    accum: Option<BinaryOp>,
    value: T,
    indices: Indices<'_>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    check_vector_mask(mask, w.len())?;
    let region = indices.resolve(w.len())?;

    let mask = MaskView::new(mask, &desc);
    let replace = desc.should_replace_output();

    let mut out = SparseVec::with_capacity(w.len(), w.nvals().max(region.len()));
    let assigned = region.iter().map(|&idx| (idx, value));
    for (idx, existing, scalar) in merge_sorted(w.iter(), assigned) {
        if let Some(v) = assign_value(existing, scalar, mask.allows(idx), accum, replace) {
            out.push(idx, v);
        }
    }

    *w = GrBVector::from_storage(out);
    Ok(())
}

/// Scalar assign: C<mask>(rows, cols) = accum(C(rows, cols), value)
pub fn grb_assign_scalar_matrix<T: Element>(
    c: &mut GrBMatrix<T>,
    mask: Option<&dyn MatrixMask>,
    accum: Option<BinaryOp>,
    value: T,
    rows: Indices<'_>,
    cols: Indices<'_>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    check_matrix_mask(mask, c.nrows(), c.ncols())?;
    let rows = rows.resolve(c.nrows())?;
    let cols = cols.resolve(c.ncols())?;

    let mask = MaskView::new(mask, &desc);
    let replace = desc.should_replace_output();

    let mut in_region = vec![false; c.nrows()];
    for &row in &rows {
        in_region[row] = true;
    }

    let mut out = CsrBuilder::with_capacity(c.nrows(), c.ncols(), c.nvals() + rows.len() * cols.len());
    for i in 0..c.nrows() {
        let region: &[GrBIndex] = if in_region[i] { &cols } else { &[] };
        let assigned = region.iter().map(|&j| (j, value));
        for (j, existing, scalar) in merge_sorted(c.row(i), assigned) {
            if let Some(v) = assign_value(existing, scalar, mask.allows_at(i, j), accum, replace) {
                out.push(j, v);
            }
        }
        out.end_row();
    }

    *c = GrBMatrix::from_csr(out.finish());
    Ok(())
}

// ============================================================================
// REDUCE
// ============================================================================

/// Row reduction: w<mask> = accum(w, ⊕_j A[i, j])
///
/// Rows without entries produce no entry. `inp0 = Transpose` reduces
/// columns instead.
pub fn grb_reduce_to_vector<T: Element>(
    w: &mut GrBVector<T>,
    mask: Option<&dyn VectorMask>,
    accum: Option<BinaryOp>,
    monoid: Monoid,
    a: &GrBMatrix<T>,
    desc: Option<&Descriptor>,
) -> Result<()> {
    let desc = desc.cloned().unwrap_or_default();
    let a = oriented(a, desc.is_inp0_transposed());

    check_dim(a.nrows(), w.len())?;
    check_vector_mask(mask, w.len())?;

    let mask = MaskView::new(mask, &desc);

    let mut t = SparseVec::with_capacity(w.len(), a.nrows());
    for i in 0..a.nrows() {
        if !mask.allows(i) {
            continue;
        }
        let mut row = a.row(i).map(|(_, v)| v);
        if let Some(first) = row.next() {
            t.push(i, row.fold(first, |acc, v| monoid.combine(acc, v)));
        }
    }

    write_vector(w, &t, |i| mask.allows(i), accum, desc.should_replace_output());
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

fn check_dim(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(GraphError::DimensionMismatch { expected, got })
    }
}

fn check_vector_mask(mask: Option<&dyn VectorMask>, len: GrBIndex) -> Result<()> {
    match mask {
        Some(m) => check_dim(len, m.mask_len()),
        None => Ok(()),
    }
}

fn check_matrix_mask(mask: Option<&dyn MatrixMask>, nrows: GrBIndex, ncols: GrBIndex) -> Result<()> {
    if let Some(m) = mask {
        let (mrows, mcols) = m.mask_dims();
        check_dim(nrows, mrows)?;
        check_dim(ncols, mcols)?;
    }
    Ok(())
}

fn oriented<T: Element>(a: &GrBMatrix<T>, transpose: bool) -> Cow<'_, GrBMatrix<T>> {
    if transpose {
        Cow::Owned(a.transpose())
    } else {
        Cow::Borrowed(a)
    }
}

fn union_value<T: Element>(left: Option<T>, right: Option<T>, op: BinaryOp) -> Option<T> {
    match (left, right) {
        (Some(a), Some(b)) => Some(op.apply(a, b)),
        (a, b) => a.or(b),
    }
}

/// Final value of one output position given the existing entry and the
/// computed one.
fn resolve<T: Element>(
    existing: Option<T>,
    computed: Option<T>,
    allowed: bool,
    accum: Option<BinaryOp>,
    replace: bool,
) -> Option<T> {
    if !allowed {
        return if replace { None } else { existing };
    }
    match (accum, existing, computed) {
        (Some(op), Some(c), Some(t)) => Some(op.apply(c, t)),
        (Some(_), c, None) => c,
        (_, _, t) => t,
    }
}

/// Like [`resolve`], but a position outside the assigned region keeps its
/// entry where the mask allows it.
fn assign_value<T: Element>(
    existing: Option<T>,
    scalar: Option<T>,
    allowed: bool,
    accum: Option<BinaryOp>,
    replace: bool,
) -> Option<T> {
    match scalar {
        Some(_) => resolve(existing, scalar, allowed, accum, replace),
        None if allowed || !replace => existing,
        None => None,
    }
}

fn write_vector<T: Element>(
    w: &mut GrBVector<T>,
    t: &SparseVec<T>,
    allows: impl Fn(GrBIndex) -> bool,
    accum: Option<BinaryOp>,
    replace: bool,
) {
    let mut out = SparseVec::with_capacity(w.len(), w.nvals().max(t.nnz()));
    for (idx, existing, computed) in merge_sorted(w.iter(), t.iter()) {
        if let Some(v) = resolve(existing, computed, allows(idx), accum, replace) {
            out.push(idx, v);
        }
    }
    *w = GrBVector::from_storage(out);
}

fn write_matrix<T: Element>(
    c: &mut GrBMatrix<T>,
    t: &GrBMatrix<T>,
    allows: impl Fn(GrBIndex, GrBIndex) -> bool,
    accum: Option<BinaryOp>,
    replace: bool,
) {
    let mut out = CsrBuilder::with_capacity(c.nrows(), c.ncols(), c.nvals().max(t.nvals()));
    for i in 0..c.nrows() {
        for (j, existing, computed) in merge_sorted(c.row(i), t.row(i)) {
            if let Some(v) = resolve(existing, computed, allows(i, j), accum, replace) {
                out.push(j, v);
            }
        }
        out.end_row();
    }
    *c = GrBMatrix::from_csr(out.finish());
}

/// Sparse accumulator for one output row
struct Spa<T> {
    slots: Vec<Option<T>>,
    touched: Vec<GrBIndex>,
}

impl<T: Element> Spa<T> {
    fn new(len: GrBIndex) -> Self {
        Self {
            slots: vec![None; len],
            touched: Vec::new(),
        }
    }

    fn scatter(&mut self, j: GrBIndex, value: T, add: impl Fn(T, T) -> T) {
        match self.slots[j] {
            Some(acc) => self.slots[j] = Some(add(acc, value)),
            None => {
                self.slots[j] = Some(value);
                self.touched.push(j);
            }
        }
    }

    /// Emit accumulated entries in index order and reset
    fn gather(&mut self, mut emit: impl FnMut(GrBIndex, T)) {
        self.touched.sort_unstable();
        for &j in &self.touched {
            if let Some(value) = self.slots[j].take() {
                emit(j, value);
            }
        }
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphblas::{GrBDesc, LorLand, MinPlus, PlusLand, GRB_ALL};

    fn bool_matrix(n: usize, edges: &[(usize, usize)]) -> GrBMatrix<bool> {
        let rows: Vec<_> = edges.iter().map(|e| e.0).collect();
        let cols: Vec<_> = edges.iter().map(|e| e.1).collect();
        GrBMatrix::from_triples(n, n, &rows, &cols, &vec![true; edges.len()]).unwrap()
    }

    #[test]
    fn test_vxm_lor_land() {
        let a = bool_matrix(3, &[(0, 1), (0, 2), (1, 2)]);
        let u = GrBVector::from_entries(3, &[(0, true)]).unwrap();
        let mut w = GrBVector::new(3);

        grb_vxm(&mut w, None, None, &LorLand, &u, &a, None).unwrap();

        assert_eq!(w.extract_tuples(), vec![(1, true), (2, true)]);
    }

    #[test]
    fn test_vxm_complement_replace() {
        let a = bool_matrix(3, &[(0, 1), (0, 2), (1, 2)]);
        let visited = GrBVector::from_entries(3, &[(0, true), (1, true)]).unwrap();
        let u = GrBVector::from_entries(3, &[(0, true)]).unwrap();
        let mut w = u.clone();

        grb_vxm(&mut w, Some(&visited), None, &LorLand, &u, &a, Some(&GrBDesc::rc())).unwrap();

        assert_eq!(w.extract_tuples(), vec![(2, true)]);
    }

    #[test]
    fn test_vxm_keeps_explicit_false() {
        let a = GrBMatrix::from_triples(2, 2, &[0], &[1], &[false]).unwrap();
        let u = GrBVector::from_entries(2, &[(0, true)]).unwrap();
        let mut w = GrBVector::new(2);

        grb_vxm(&mut w, None, None, &LorLand, &u, &a, None).unwrap();

        assert_eq!(w.nvals(), 1);
        assert_eq!(w.get(1), Some(false));
    }

    #[test]
    fn test_vxm_min_plus_accumulate() {
        let inf = i64::MAX;
        let a = GrBMatrix::from_triples(3, 3, &[0, 0, 1], &[1, 2, 2], &[4i64, 10, 3]).unwrap();
        let mut d = GrBVector::dense(3, inf);
        d.set(0, 0).unwrap();

        let semiring = MinPlus::new(inf);
        let prev = d.clone();
        grb_vxm(&mut d, None, Some(BinaryOp::Min), &semiring, &prev, &a, None).unwrap();
        assert_eq!(d.to_dense(-1), vec![0, 4, 10]);

        let prev = d.clone();
        grb_vxm(&mut d, None, Some(BinaryOp::Min), &semiring, &prev, &a, None).unwrap();
        assert_eq!(d.to_dense(-1), vec![0, 4, 7]);
    }

    #[test]
    fn test_vxm_dimension_mismatch() {
        let a = bool_matrix(3, &[]);
        let u = GrBVector::<bool>::new(2);
        let mut w = GrBVector::new(3);

        let err = grb_vxm(&mut w, None, None, &LorLand, &u, &a, None).unwrap_err();
        assert_eq!(err, GraphError::DimensionMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn test_mxm_plus_land_masked() {
        let a = bool_matrix(3, &[(0, 1), (1, 0), (1, 2), (2, 1), (0, 2), (2, 0)]);

        let mut masked = GrBMatrix::<u64>::new(3, 3);
        grb_mxm(&mut masked, Some(&a), None, &PlusLand::new(), &a, &a, None).unwrap();
        assert_eq!(masked.nvals(), 6);
        assert!(masked.iter().all(|e| e.value == 1));
        assert_eq!(masked.get(0, 0), None);

        let mut full = GrBMatrix::<u64>::new(3, 3);
        grb_mxm(&mut full, None, None, &PlusLand::new(), &a, &a, None).unwrap();
        assert_eq!(full.get(0, 0), Some(2));
        assert_eq!(full.nvals(), 9);
    }

    #[test]
    fn test_mxm_transpose_first() {
        let a = bool_matrix(2, &[(0, 1)]);
        let mut c = GrBMatrix::new(2, 2);

        grb_mxm(&mut c, None, None, &LorLand, &a, &a, Some(&GrBDesc::t0())).unwrap();

        assert_eq!(c.extract_tuples(), vec![(1, 1, true)]);
    }

    #[test]
    fn test_mxm_accumulate() {
        let a = bool_matrix(2, &[(0, 1), (1, 0)]);
        let mut c = GrBMatrix::from_triples(2, 2, &[0], &[0], &[5u64]).unwrap();

        grb_mxm(&mut c, None, Some(BinaryOp::Plus), &PlusLand::new(), &a, &a, None).unwrap();

        assert_eq!(c.extract_tuples(), vec![(0, 0, 6), (1, 1, 1)]);
    }

    #[test]
    fn test_ewise_add_vector() {
        let u = GrBVector::from_entries(4, &[(0, true), (1, false)]).unwrap();
        let v = GrBVector::from_entries(4, &[(1, true), (2, true)]).unwrap();
        let mut w = GrBVector::from_entries(4, &[(3, true)]).unwrap();

        grb_ewise_add_vector(&mut w, None, None, BinaryOp::LOr, &u, &v, None).unwrap();
        assert_eq!(w.extract_tuples(), vec![(0, true), (1, true), (2, true)]);

        let mask = GrBVector::from_entries(4, &[(2, true)]).unwrap();
        let mut w = GrBVector::from_entries(4, &[(3, true)]).unwrap();
        grb_ewise_add_vector(&mut w, Some(&mask), None, BinaryOp::LOr, &u, &v, Some(&GrBDesc::r()))
            .unwrap();
        assert_eq!(w.extract_tuples(), vec![(2, true)]);
    }

    #[test]
    fn test_ewise_add_matrix_symmetrize() {
        let a = bool_matrix(3, &[(0, 1), (2, 1), (1, 2)]);
        let mut c = GrBMatrix::new(3, 3);

        grb_ewise_add_matrix(&mut c, None, None, BinaryOp::LOr, &a, &a, Some(&GrBDesc::t1())).unwrap();

        assert_eq!(
            c.extract_tuples(),
            vec![(0, 1, true), (1, 0, true), (1, 2, true), (2, 1, true)]
        );
        assert_eq!(c, c.transpose());
    }

    #[test]
    fn test_assign_scalar_vector_masks() {
        let q = GrBVector::from_entries(4, &[(1, true), (2, false)]).unwrap();

        let mut valued = GrBVector::dense(4, -1i64);
        grb_assign_scalar_vector(&mut valued, Some(&q), None, 5, GRB_ALL, None).unwrap();
        assert_eq!(valued.to_dense(0), vec![-1, 5, -1, -1]);

        let mut structural = GrBVector::dense(4, -1i64);
        let by_pattern = Descriptor::new().structural_mask();
        grb_assign_scalar_vector(&mut structural, Some(&q), None, 5, GRB_ALL, Some(&by_pattern)).unwrap();
        assert_eq!(structural.to_dense(0), vec![-1, 5, 5, -1]);

        let mut listed = GrBVector::dense(4, -1i64);
        grb_assign_scalar_vector(&mut listed, None, None, 5, Indices::List(&[1, 0]), None).unwrap();
        assert_eq!(listed.to_dense(0), vec![5, 5, -1, -1]);
    }

    #[test]
    fn test_assign_scalar_vector_replace_and_accum() {
        let mask = GrBVector::from_entries(3, &[(0, true)]).unwrap();
        let mut w = GrBVector::dense(3, 7i64);
        grb_assign_scalar_vector(&mut w, Some(&mask), None, 1, Indices::List(&[0]), Some(&GrBDesc::r()))
            .unwrap();
        assert_eq!(w.extract_tuples(), vec![(0, 1)]);

        let mut w = GrBVector::from_entries(3, &[(0, 2i64)]).unwrap();
        grb_assign_scalar_vector(&mut w, None, Some(BinaryOp::Plus), 3, Indices::List(&[0, 1]), None)
            .unwrap();
        assert_eq!(w.extract_tuples(), vec![(0, 5), (1, 3)]);

        let mut w = GrBVector::dense(2, 3i64);
        grb_assign_scalar_vector(&mut w, None, None, 9, GRB_ALL, Some(&GrBDesc::c())).unwrap();
        assert_eq!(w.to_dense(0), vec![3, 3]);

        let err = grb_assign_scalar_vector(&mut w, None, None, 9, Indices::List(&[2]), None);
        assert!(matches!(err, Err(GraphError::InvalidIndex { index: 2, bound: 2 })));
    }

    #[test]
    fn test_assign_scalar_matrix() {
        let mut c = GrBMatrix::<i64>::new(2, 3);
        grb_assign_scalar_matrix(&mut c, None, None, 9, Indices::List(&[1]), GRB_ALL, None).unwrap();
        assert_eq!(c.extract_tuples(), vec![(1, 0, 9), (1, 1, 9), (1, 2, 9)]);

        let mask = GrBMatrix::from_triples(2, 3, &[0, 1], &[2, 1], &[true, true]).unwrap();
        grb_assign_scalar_matrix(&mut c, Some(&mask), None, 4, GRB_ALL, GRB_ALL, None).unwrap();
        assert_eq!(
            c.extract_tuples(),
            vec![(0, 2, 4), (1, 0, 9), (1, 1, 4), (1, 2, 9)]
        );

        let err = grb_assign_scalar_matrix(&mut c, None, None, 1, Indices::List(&[2]), GRB_ALL, None);
        assert!(matches!(err, Err(GraphError::InvalidIndex { index: 2, bound: 2 })));
    }

    #[test]
    fn test_reduce_rows_and_columns() {
        let a = GrBMatrix::from_triples(3, 3, &[0, 0, 2, 2], &[0, 1, 0, 2], &[1u64, 2, 3, 4]).unwrap();

        let mut rows = GrBVector::new(3);
        grb_reduce_to_vector(&mut rows, None, None, Monoid::Plus, &a, None).unwrap();
        assert_eq!(rows.extract_tuples(), vec![(0, 3), (2, 7)]);

        let mut cols = GrBVector::new(3);
        grb_reduce_to_vector(&mut cols, None, None, Monoid::Plus, &a, Some(&GrBDesc::t0())).unwrap();
        assert_eq!(cols.extract_tuples(), vec![(0, 4), (1, 2), (2, 4)]);

        let mut maxes = GrBVector::new(3);
        grb_reduce_to_vector(&mut maxes, None, None, Monoid::Max, &a, None).unwrap();
        assert_eq!(maxes.extract_tuples(), vec![(0, 2), (2, 4)]);
    }
}
