// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The lane-coherent scalar/vector dual value.

use crate::LaneElement;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// One numeric element held simultaneously as a scalar and as that scalar
/// broadcast into every lane of a vector register.
///
/// # Lane coherence
/// The invariant: the vector field always equals the scalar broadcast into
/// every lane. Construction, assignment, and every arithmetic result
/// re-establish it before returning. All SIMD-computing paths flow through
/// [`from_vector`](Self::from_vector), which re-derives the scalar from
/// lane 0 of the result — the scalar is never recomputed independently.
///
/// `ScalarLane` is a plain value: `Copy`, no shared ownership.
///
/// # Example
/// ```
/// use lane_core::ScalarLane;
///
/// let a = ScalarLane::from_scalar(3.0f32);
/// let b = ScalarLane::from_scalar(4.0f32);
/// let c = a * b;
/// assert_eq!(c.value(), 12.0);
/// // Lane 0 of the register agrees with the scalar.
/// assert_eq!(<f32 as lane_core::LaneElement>::first_lane(c.vector()), 12.0);
/// ```
#[derive(Clone, Copy)]
pub struct ScalarLane<T: LaneElement> {
    /// Authoritative value.
    scalar: T,
    /// `scalar` broadcast into every lane.
    vector: T::Vector,
}

impl<T: LaneElement> ScalarLane<T> {
    /// Creates a lane from a scalar; the vector field is set by the
    /// type- and width-specific broadcast instruction.
    #[inline]
    pub fn from_scalar(value: T) -> Self {
        Self {
            scalar: value,
            vector: T::splat(value),
        }
    }

    /// Creates a lane from a register, re-deriving the scalar from lane 0.
    ///
    /// This is the single update routine for every SIMD-computed result;
    /// it is what keeps the two representations coherent.
    #[inline]
    pub fn from_vector(vector: T::Vector) -> Self {
        Self {
            scalar: T::first_lane(vector),
            vector,
        }
    }

    /// The scalar value.
    #[inline]
    pub fn value(&self) -> T {
        self.scalar
    }

    /// The broadcast register.
    #[inline]
    pub fn vector(&self) -> T::Vector {
        self.vector
    }

    /// Assigns a new scalar value, re-broadcasting it.
    #[inline]
    pub fn set(&mut self, value: T) {
        *self = Self::from_scalar(value);
    }

    /// Scalar exponential; the vector field is reset to the broadcast of
    /// the result. The exponential is scalar-correct — the vector is a
    /// derived broadcast, not an independent SIMD transcendental.
    #[inline]
    pub fn exp(self) -> Self {
        Self::from_scalar(self.scalar.exp())
    }

    /// True when the scalar equals the element's zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.scalar == T::ZERO
    }
}

impl<T: LaneElement> Add for ScalarLane<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vector(T::vec_add(self.vector, rhs.vector))
    }
}

impl<T: LaneElement> Sub for ScalarLane<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_vector(T::vec_sub(self.vector, rhs.vector))
    }
}

impl<T: LaneElement> Mul for ScalarLane<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_vector(T::vec_mul(self.vector, rhs.vector))
    }
}

impl<T: LaneElement> Div for ScalarLane<T> {
    type Output = Self;

    /// Lane-wise division for float types; integer types always fall back
    /// to scalar division (two's-complement, truncating toward zero) and
    /// re-broadcast the quotient. Callers are expected to reject zero
    /// divisors first; `T::MIN / -1` overflows like plain integer `/`.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        match T::vec_div(self.vector, rhs.vector) {
            Some(vector) => Self::from_vector(vector),
            None => Self::from_scalar(self.scalar / rhs.scalar),
        }
    }
}

/// Equality compares only the scalar field — the vector is derived state.
impl<T: LaneElement> PartialEq for ScalarLane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl<T: LaneElement> Default for ScalarLane<T> {
    fn default() -> Self {
        Self::from_scalar(T::ZERO)
    }
}

impl<T: LaneElement> From<T> for ScalarLane<T> {
    fn from(value: T) -> Self {
        Self::from_scalar(value)
    }
}

impl<T: LaneElement> fmt::Debug for ScalarLane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarLane")
            .field("scalar", &self.scalar)
            .field("lanes", &T::LANES)
            .finish()
    }
}

impl<T: LaneElement> fmt::Display for ScalarLane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lane 0 of the vector field must agree with the scalar field.
    fn coherent<T: LaneElement>(lane: &ScalarLane<T>) -> bool {
        T::first_lane(lane.vector()) == lane.value()
    }

    #[test]
    fn test_construction_coherence() {
        assert!(coherent(&ScalarLane::from_scalar(-7i8)));
        assert!(coherent(&ScalarLane::from_scalar(1234i16)));
        assert!(coherent(&ScalarLane::from_scalar(-56789i32)));
        assert!(coherent(&ScalarLane::from_scalar(3.25f32)));
        assert!(coherent(&ScalarLane::from_scalar(-0.5f64)));
    }

    #[test]
    fn test_from_vector_recovers_scalar() {
        let v = <i32 as LaneElement>::splat(42);
        let lane = ScalarLane::<i32>::from_vector(v);
        assert_eq!(lane.value(), 42);
        assert!(coherent(&lane));

        let v = <f64 as LaneElement>::splat(2.5);
        let lane = ScalarLane::<f64>::from_vector(v);
        assert_eq!(lane.value(), 2.5);
    }

    #[test]
    fn test_assignment_coherence() {
        let mut lane = ScalarLane::from_scalar(1.0f32);
        lane.set(9.75);
        assert_eq!(lane.value(), 9.75);
        assert!(coherent(&lane));
    }

    #[test]
    fn test_add_sub() {
        let a = ScalarLane::from_scalar(100i16);
        let b = ScalarLane::from_scalar(23i16);
        assert_eq!((a + b).value(), 123);
        assert_eq!((a - b).value(), 77);
        assert!(coherent(&(a + b)));
        assert!(coherent(&(a - b)));
    }

    #[test]
    fn test_mul_all_types() {
        assert_eq!((ScalarLane::from_scalar(5i8) * ScalarLane::from_scalar(6i8)).value(), 30);
        assert_eq!(
            (ScalarLane::from_scalar(300i16) * ScalarLane::from_scalar(4i16)).value(),
            1200
        );
        assert_eq!(
            (ScalarLane::from_scalar(70000i32) * ScalarLane::from_scalar(3i32)).value(),
            210000
        );
        assert_eq!(
            (ScalarLane::from_scalar(1.5f32) * ScalarLane::from_scalar(4.0f32)).value(),
            6.0
        );
        assert_eq!(
            (ScalarLane::from_scalar(1.5f64) * ScalarLane::from_scalar(-2.0f64)).value(),
            -3.0
        );
    }

    #[test]
    fn test_i8_mul_truncating_narrow() {
        // 12 * 11 = 132, which exceeds i8::MAX; the widening multiply keeps
        // the truncated low byte (-124), never a saturated 127.
        let p = ScalarLane::from_scalar(12i8) * ScalarLane::from_scalar(11i8);
        assert_eq!(p.value(), 132u8 as i8);
        assert!(coherent(&p));
    }

    #[test]
    fn test_div_float_simd() {
        let q = ScalarLane::from_scalar(1.0f32) / ScalarLane::from_scalar(4.0f32);
        assert_eq!(q.value(), 0.25);
        assert!(coherent(&q));
    }

    #[test]
    fn test_div_int_scalar_fallback() {
        // Truncation toward zero, as plain integer division.
        let q = ScalarLane::from_scalar(7i32) / ScalarLane::from_scalar(2i32);
        assert_eq!(q.value(), 3);
        assert!(coherent(&q));

        let q = ScalarLane::from_scalar(-7i32) / ScalarLane::from_scalar(2i32);
        assert_eq!(q.value(), -3);
    }

    #[test]
    fn test_exp() {
        let e = ScalarLane::from_scalar(1.0f64).exp();
        assert!((e.value() - std::f64::consts::E).abs() < 1e-12);
        assert!(coherent(&e));

        let zero = ScalarLane::from_scalar(0.0f32).exp();
        assert_eq!(zero.value(), 1.0);
    }

    #[test]
    fn test_exp_int_truncates() {
        // e^3 ≈ 20.08 → 20.
        let e = ScalarLane::from_scalar(3i32).exp();
        assert_eq!(e.value(), 20);
        assert!(coherent(&e));
    }

    #[test]
    fn test_equality_scalar_only() {
        let a = ScalarLane::from_scalar(5i32);
        let b = ScalarLane::from_vector(<i32 as LaneElement>::splat(5));
        assert_eq!(a, b);
        assert_ne!(a, ScalarLane::from_scalar(6i32));
    }

    #[test]
    fn test_default_is_zero() {
        assert!(ScalarLane::<f32>::default().is_zero());
        assert!(ScalarLane::<i8>::default().is_zero());
    }

    #[test]
    fn test_lane_counts_match_width() {
        let width = crate::SIMD_WIDTH_BITS;
        assert_eq!(<i8 as LaneElement>::LANES, width / 8);
        assert_eq!(<i16 as LaneElement>::LANES, width / 16);
        assert_eq!(<i32 as LaneElement>::LANES, width / 32);
        assert_eq!(<f32 as LaneElement>::LANES, width / 32);
        assert_eq!(<f64 as LaneElement>::LANES, width / 64);
    }
}
