//! # GraphBLAS: Typed Sparse Algebra
//!
//! The minimal subset of the GraphBLAS API the graph algorithms need:
//! typed sparse matrices and vectors, semirings, masks with complement and
//! replace semantics, and the `grb_*` operations that combine them.
//!
//! ## GraphBLAS Operations
//!
//! ```text
//! Operation              Meaning
//! ─────────────────────  ──────────────────────────────────────────
//! w⟨m⟩ ⊙= u ⊕.⊗ A        grb_vxm               (vector × matrix)
//! C⟨M⟩ ⊙= A ⊕.⊗ B        grb_mxm               (matrix × matrix)
//! w⟨m⟩ ⊙= u ∪op v        grb_ewise_add_vector  (union combine)
//! C⟨M⟩ ⊙= A ∪op B        grb_ewise_add_matrix
//! w⟨m⟩(I) ⊙= s           grb_assign_scalar_vector
//! C⟨M⟩(I,J) ⊙= s         grb_assign_scalar_matrix
//! w⟨m⟩ ⊙= [⊕_j A(i,j)]   grb_reduce_to_vector  (row reduction)
//! ```
//!
//! `⟨m⟩` is an optional mask, `⊙=` an optional accumulator. A
//! [`Descriptor`] complements the mask, makes it structural, clears
//! masked-out output entries (replace), or transposes inputs.
//!
//! ## Semirings
//!
//! | Name | ⊕ (Add) | ⊗ (Multiply) | Zero | Use Case |
//! |------|---------|--------------|------|----------|
//! | [`LorLand`] | OR | AND | false | Reachability |
//! | [`MinPlus`] | MIN | PLUS (∞ absorbing) | ∞ | Shortest paths |
//! | [`PlusLand`] | PLUS | AND cast to count | 0 | Path counting |

mod any;
mod descriptor;
mod mask;
mod matrix;
mod ops;
mod semiring;
mod sparse;
mod types;
mod vector;

pub use any::AnyMatrix;
pub use descriptor::{Descriptor, GrBDesc, MaskField, Orientation, Output};
pub use mask::{MatrixMask, VectorMask};
pub use matrix::GrBMatrix;
pub use ops::*;
pub use semiring::{LorLand, MinPlus, PlusLand, Semiring};
pub use sparse::{CooStorage, CsrBuilder, CsrStorage, SparseEntry, SparseVec};
pub use types::*;
pub use vector::GrBVector;
