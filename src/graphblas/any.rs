//! Type-erased matrix
//!
//! Graph entry points accept a matrix whose element type is only known at
//! run time, the way a GraphBLAS handle carries its `GrB_Type`.

use super::matrix::GrBMatrix;
use super::types::{GrBIndex, GrBType};

macro_rules! any_matrix {
    ($($variant:ident($t:ty)),* $(,)?) => {
        /// A [`GrBMatrix`] of any built-in element type
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnyMatrix {
            $($variant(GrBMatrix<$t>),)*
        }

        impl AnyMatrix {
            /// Element type of the wrapped matrix
            pub fn dtype(&self) -> GrBType {
                match self {
                    $(AnyMatrix::$variant(_) => GrBType::$variant,)*
                }
            }

            /// Number of rows
            pub fn nrows(&self) -> GrBIndex {
                match self {
                    $(AnyMatrix::$variant(m) => m.nrows(),)*
                }
            }

            /// Number of columns
            pub fn ncols(&self) -> GrBIndex {
                match self {
                    $(AnyMatrix::$variant(m) => m.ncols(),)*
                }
            }

            /// Number of stored entries
            pub fn nvals(&self) -> usize {
                match self {
                    $(AnyMatrix::$variant(m) => m.nvals(),)*
                }
            }
        }

        $(
            impl From<GrBMatrix<$t>> for AnyMatrix {
                fn from(m: GrBMatrix<$t>) -> Self {
                    AnyMatrix::$variant(m)
                }
            }
        )*
    };
}

any_matrix!(
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
);

impl AnyMatrix {
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// The boolean matrix, if that is what this is
    pub fn as_bool(&self) -> Option<&GrBMatrix<bool>> {
        match self {
            AnyMatrix::Bool(m) => Some(m),
            _ => None,
        }
    }
}
