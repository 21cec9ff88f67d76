//! GraphBLAS Type Definitions
//!
//! Runtime type tags, the [`Element`] trait tying a Rust scalar to its tag,
//! and the binary operators and monoids used for accumulation, combination
//! and reduction.

use std::fmt;

/// GraphBLAS index type
pub type GrBIndex = usize;

/// GraphBLAS type descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrBType {
    /// Boolean
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
}

impl GrBType {
    /// GraphBLAS spelling of the type name
    pub fn name(&self) -> &'static str {
        match self {
            GrBType::Bool => "BOOL",
            GrBType::Int8 => "INT8",
            GrBType::Int16 => "INT16",
            GrBType::Int32 => "INT32",
            GrBType::Int64 => "INT64",
            GrBType::UInt8 => "UINT8",
            GrBType::UInt16 => "UINT16",
            GrBType::UInt32 => "UINT32",
            GrBType::UInt64 => "UINT64",
            GrBType::Float32 => "FP32",
            GrBType::Float64 => "FP64",
        }
    }
}

impl fmt::Display for GrBType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar that can live in a [`GrBMatrix`](super::GrBMatrix) or
/// [`GrBVector`](super::GrBVector).
///
/// Arithmetic follows the GraphBLAS built-ins: integers wrap, booleans use
/// `PLUS = OR`, `TIMES = AND`, `MIN = AND`, `MAX = OR`.
pub trait Element: Copy + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Runtime type tag
    const TYPE: GrBType;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Smallest value (identity of MAX)
    fn min_value() -> Self;

    /// Largest value (identity of MIN)
    fn max_value() -> Self;

    /// Typecast from boolean (`true` → 1)
    fn from_bool(b: bool) -> Self;

    /// Typecast to boolean (non-zero → `true`), used by valued masks
    fn is_truthy(self) -> bool;

    /// `PLUS` operator
    fn plus(self, other: Self) -> Self;

    /// `TIMES` operator
    fn times(self, other: Self) -> Self;
}

impl Element for bool {
    const TYPE: GrBType = GrBType::Bool;

    fn zero() -> Self {
        false
    }

    fn one() -> Self {
        true
    }

    fn min_value() -> Self {
        false
    }

    fn max_value() -> Self {
        true
    }

    fn from_bool(b: bool) -> Self {
        b
    }

    fn is_truthy(self) -> bool {
        self
    }

    fn plus(self, other: Self) -> Self {
        self || other
    }

    fn times(self, other: Self) -> Self {
        self && other
    }
}

macro_rules! impl_integer_element {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const TYPE: GrBType = GrBType::$tag;

                fn zero() -> Self { 0 }
                fn one() -> Self { 1 }
                fn min_value() -> Self { <$t>::MIN }
                fn max_value() -> Self { <$t>::MAX }
                fn from_bool(b: bool) -> Self { <$t>::from(b) }
                fn is_truthy(self) -> bool { self != 0 }
                fn plus(self, other: Self) -> Self { self.wrapping_add(other) }
                fn times(self, other: Self) -> Self { self.wrapping_mul(other) }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const TYPE: GrBType = GrBType::$tag;

                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }
                fn min_value() -> Self { <$t>::NEG_INFINITY }
                fn max_value() -> Self { <$t>::INFINITY }
                fn from_bool(b: bool) -> Self { if b { 1.0 } else { 0.0 } }
                fn is_truthy(self) -> bool { self != 0.0 }
                fn plus(self, other: Self) -> Self { self + other }
                fn times(self, other: Self) -> Self { self * other }
            }
        )*
    };
}

impl_integer_element!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
);

impl_float_element!(f32 => Float32, f64 => Float64);

/// Binary operator types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// First argument
    First,
    /// Second argument
    Second,
    /// Minimum
    Min,
    /// Maximum
    Max,
    /// Addition
    Plus,
    /// Multiplication
    Times,
    /// Logical OR
    LOr,
    /// Logical AND
    LAnd,
    /// Logical XOR
    LXor,
}

impl BinaryOp {
    /// Apply to two values of the same type
    pub fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            BinaryOp::First => a,
            BinaryOp::Second => b,
            BinaryOp::Min => {
                if b < a {
                    b
                } else {
                    a
                }
            }
            BinaryOp::Max => {
                if b > a {
                    b
                } else {
                    a
                }
            }
            BinaryOp::Plus => a.plus(b),
            BinaryOp::Times => a.times(b),
            BinaryOp::LOr => T::from_bool(a.is_truthy() || b.is_truthy()),
            BinaryOp::LAnd => T::from_bool(a.is_truthy() && b.is_truthy()),
            BinaryOp::LXor => T::from_bool(a.is_truthy() != b.is_truthy()),
        }
    }
}

/// Monoid types (associative binary op with identity)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Monoid {
    /// Minimum
    Min,
    /// Maximum
    Max,
    /// Addition
    Plus,
    /// Multiplication
    Times,
    /// Logical OR
    LOr,
    /// Logical AND
    LAnd,
    /// Logical XOR
    LXor,
}

impl Monoid {
    /// Get identity element for this monoid
    pub fn identity<T: Element>(&self) -> T {
        match self {
            Monoid::Min => T::max_value(),
            Monoid::Max => T::min_value(),
            Monoid::Plus => T::zero(),
            Monoid::Times => T::one(),
            Monoid::LOr => T::from_bool(false),
            Monoid::LAnd => T::from_bool(true),
            Monoid::LXor => T::from_bool(false),
        }
    }

    /// The underlying binary operator
    pub fn op(&self) -> BinaryOp {
        match self {
            Monoid::Min => BinaryOp::Min,
            Monoid::Max => BinaryOp::Max,
            Monoid::Plus => BinaryOp::Plus,
            Monoid::Times => BinaryOp::Times,
            Monoid::LOr => BinaryOp::LOr,
            Monoid::LAnd => BinaryOp::LAnd,
            Monoid::LXor => BinaryOp::LXor,
        }
    }

    /// Combine two values
    pub fn combine<T: Element>(&self, a: T, b: T) -> T {
        self.op().apply(a, b)
    }
}

/// Index selection for assign operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indices<'a> {
    /// Every index of the dimension
    All,
    /// An explicit list (duplicates allowed, any order)
    List(&'a [GrBIndex]),
}

/// Marker for "all indices"
pub const GRB_ALL: Indices<'static> = Indices::All;

impl Indices<'_> {
    /// Sorted, deduplicated index list for a dimension of size `bound`.
    pub fn resolve(&self, bound: GrBIndex) -> crate::Result<Vec<GrBIndex>> {
        match self {
            Indices::All => Ok((0..bound).collect()),
            Indices::List(list) => {
                if let Some(&index) = list.iter().find(|&&i| i >= bound) {
                    return Err(crate::GraphError::InvalidIndex { index, bound });
                }
                let mut resolved = list.to_vec();
                resolved.sort_unstable();
                resolved.dedup();
                Ok(resolved)
            }
        }
    }
}
