//! GraphBLAS Semirings
//!
//! A semiring (⊕, ⊗) provides:
//! - ⊕ (add): Associative, commutative, with identity 0
//! - ⊗ (multiply): Associative, distributes over ⊕
//! - 0 annihilates: a ⊗ 0 = 0 ⊗ a = 0
//!
//! | Semiring | ⊕ (Add) | ⊗ (Multiply) | Zero | Inputs → Output |
//! |----------|---------|--------------|------|-----------------|
//! | LOR_LAND | OR | AND | false | bool, bool → bool |
//! | MIN_PLUS | MIN | PLUS | ∞ | T, T → T |
//! | PLUS_LAND | PLUS | AND, cast | 0 | bool, bool → C |

use std::marker::PhantomData;

use super::types::Element;

/// A semiring defines the algebraic operations for matrix computation.
///
/// The two inputs and the output may have different types, so a boolean
/// adjacency matrix can produce counts without being cast first.
pub trait Semiring: Clone + Send + Sync {
    /// Left operand type (vector / left matrix)
    type Left: Element;
    /// Right operand type (matrix)
    type Right: Element;
    /// Result type
    type Output: Element;

    /// Additive identity (0)
    fn zero(&self) -> Self::Output;

    /// Addition operation (⊕)
    fn add(&self, a: Self::Output, b: Self::Output) -> Self::Output;

    /// Multiplication operation (⊗)
    fn multiply(&self, a: Self::Left, b: Self::Right) -> Self::Output;

    /// Name of this semiring
    fn name(&self) -> &'static str;
}

/// Boolean OR.AND, for reachability.
///
/// This is `GrB_LOR_LAND_SEMIRING_BOOL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LorLand;

impl Semiring for LorLand {
    type Left = bool;
    type Right = bool;
    type Output = bool;

    fn zero(&self) -> bool {
        false
    }

    fn add(&self, a: bool, b: bool) -> bool {
        a || b
    }

    fn multiply(&self, a: bool, b: bool) -> bool {
        a && b
    }

    fn name(&self) -> &'static str {
        "LOR_LAND_BOOL"
    }
}

/// Tropical MIN.PLUS, for shortest paths.
///
/// `infinity` is both the additive identity and absorbing for ⊗: a
/// negative edge weight never turns an unreached distance into a finite
/// one. For floats it is `+∞`, for integers a finite sentinel chosen by
/// [`select_weight_domain`](crate::weights::select_weight_domain).
#[derive(Clone, Copy, Debug)]
pub struct MinPlus<T> {
    infinity: T,
}

impl<T: Element> MinPlus<T> {
    pub fn new(infinity: T) -> Self {
        Self { infinity }
    }
}

impl<T: Element> Semiring for MinPlus<T> {
    type Left = T;
    type Right = T;
    type Output = T;

    fn zero(&self) -> T {
        self.infinity
    }

    fn add(&self, a: T, b: T) -> T {
        if b < a {
            b
        } else {
            a
        }
    }

    fn multiply(&self, a: T, b: T) -> T {
        if a == self.infinity || b == self.infinity {
            self.infinity
        } else {
            a.plus(b)
        }
    }

    fn name(&self) -> &'static str {
        "MIN_PLUS"
    }
}

/// PLUS over boolean AND cast to a count: the number of two-hop paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlusLand<C> {
    _count: PhantomData<C>,
}

impl<C: Element> PlusLand<C> {
    pub fn new() -> Self {
        Self {
            _count: PhantomData,
        }
    }
}

impl<C: Element> Semiring for PlusLand<C> {
    type Left = bool;
    type Right = bool;
    type Output = C;

    fn zero(&self) -> C {
        C::zero()
    }

    fn add(&self, a: C, b: C) -> C {
        a.plus(b)
    }

    fn multiply(&self, a: bool, b: bool) -> C {
        C::from_bool(a && b)
    }

    fn name(&self) -> &'static str {
        "PLUS_LAND"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lor_land() {
        let s = LorLand;
        assert!(!s.zero());
        assert!(s.multiply(true, true));
        assert!(!s.multiply(true, false));
        assert!(s.add(false, true));
    }

    #[test]
    fn test_min_plus_integer_sentinel() {
        let s = MinPlus::new(i64::MAX);
        assert_eq!(s.zero(), i64::MAX);
        assert_eq!(s.multiply(3, 4), 7);
        assert_eq!(s.multiply(i64::MAX, -5), i64::MAX);
        assert_eq!(s.multiply(-5, i64::MAX), i64::MAX);
        assert_eq!(s.add(s.zero(), 9), 9);
        assert_eq!(s.add(-2, 9), -2);
    }

    #[test]
    fn test_min_plus_float() {
        let s = MinPlus::new(f64::INFINITY);
        assert_eq!(s.multiply(1.5, 2.0), 3.5);
        assert_eq!(s.multiply(f64::INFINITY, -1.0), f64::INFINITY);
        assert_eq!(s.add(f64::INFINITY, 0.0), 0.0);
        assert_eq!(s.name(), "MIN_PLUS");
    }

    #[test]
    fn test_plus_land_counts() {
        let s = PlusLand::<u64>::new();
        assert_eq!(s.multiply(true, true), 1);
        assert_eq!(s.multiply(true, false), 0);
        assert_eq!(s.add(s.multiply(true, true), 2), 3);
        assert_eq!(s.zero(), 0);
    }
}
