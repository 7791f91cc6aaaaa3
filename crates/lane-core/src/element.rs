// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`LaneElement`] capability trait: one entry per supported element
//! type, mapping it to the active backend's register type and lane-wise
//! operations.
//!
//! This is the capability table the dispatch design calls for — intrinsic
//! selection happens once, statically, per (element type, width) pair.
//! The trait is sealed: requesting a vector representation for a type
//! without a SIMD mapping is a compile error, not a runtime fault.

use crate::backend::active;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

mod sealed {
    pub trait Sealed {}
}

/// A numeric element type with a SIMD lane mapping at the compiled width.
///
/// Implemented exactly for `i8`, `i16`, `i32`, `f32`, `f64`. The associated
/// functions wrap the active backend's intrinsics; the scalar `std::ops`
/// bounds let reductions and matrix products accumulate in plain element
/// arithmetic.
pub trait LaneElement:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + sealed::Sealed
    + Send
    + Sync
    + 'static
{
    /// The hardware register (or portable stand-in) holding `LANES` copies
    /// of the element.
    type Vector: Copy + Send + Sync;

    /// Lane count at the compiled width: `width_bits / bit_size(Self)`.
    const LANES: usize;

    /// Whether division has a lane-wise instruction. False for the integer
    /// types — SIMD integer divide is intentionally unsupported and falls
    /// back to scalar division.
    const SIMD_DIV: bool;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Broadcasts `value` into every lane.
    fn splat(value: Self) -> Self::Vector;

    /// Extracts lane 0 by storing the full register to an aligned buffer
    /// and reading back the first element.
    fn first_lane(vector: Self::Vector) -> Self;

    /// Lane-wise addition.
    fn vec_add(a: Self::Vector, b: Self::Vector) -> Self::Vector;

    /// Lane-wise subtraction.
    fn vec_sub(a: Self::Vector, b: Self::Vector) -> Self::Vector;

    /// Lane-wise multiplication. For `i8` this widens each lane to 16 bits,
    /// multiplies, and truncating-narrows back.
    fn vec_mul(a: Self::Vector, b: Self::Vector) -> Self::Vector;

    /// Lane-wise division, or `None` when the type has no division
    /// instruction (all integer types).
    fn vec_div(a: Self::Vector, b: Self::Vector) -> Option<Self::Vector>;

    /// Scalar exponential. Integer types compute through `f64` and cast
    /// back with truncation.
    fn exp(self) -> Self;
}

/// Floating-point lane elements (`f32`, `f64`).
///
/// Random sampling factories are bounded on this trait, so requesting a
/// random integer tensor fails to compile rather than at runtime.
pub trait FloatElement: LaneElement {
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_int_element {
    ($t:ty, $vec:ty, $lanes:expr,
     $splat:path, $first:path, $add:path, $sub:path, $mul:path) => {
        impl sealed::Sealed for $t {}

        impl LaneElement for $t {
            type Vector = $vec;
            const LANES: usize = $lanes;
            const SIMD_DIV: bool = false;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn splat(value: Self) -> Self::Vector {
                // SAFETY: backend contract — the compiled width is
                // supported on the executing CPU (see backend/mod.rs).
                unsafe { $splat(value) }
            }

            #[inline]
            fn first_lane(vector: Self::Vector) -> Self {
                // SAFETY: as above.
                unsafe { $first(vector) }
            }

            #[inline]
            fn vec_add(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $add(a, b) }
            }

            #[inline]
            fn vec_sub(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $sub(a, b) }
            }

            #[inline]
            fn vec_mul(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $mul(a, b) }
            }

            #[inline]
            fn vec_div(_a: Self::Vector, _b: Self::Vector) -> Option<Self::Vector> {
                None
            }

            #[inline]
            fn exp(self) -> Self {
                (self as f64).exp() as $t
            }
        }
    };
}

macro_rules! impl_float_element {
    ($t:ty, $vec:ty, $lanes:expr,
     $splat:path, $first:path, $add:path, $sub:path, $mul:path, $div:path) => {
        impl sealed::Sealed for $t {}

        impl LaneElement for $t {
            type Vector = $vec;
            const LANES: usize = $lanes;
            const SIMD_DIV: bool = true;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn splat(value: Self) -> Self::Vector {
                // SAFETY: backend contract — the compiled width is
                // supported on the executing CPU (see backend/mod.rs).
                unsafe { $splat(value) }
            }

            #[inline]
            fn first_lane(vector: Self::Vector) -> Self {
                // SAFETY: as above.
                unsafe { $first(vector) }
            }

            #[inline]
            fn vec_add(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $add(a, b) }
            }

            #[inline]
            fn vec_sub(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $sub(a, b) }
            }

            #[inline]
            fn vec_mul(a: Self::Vector, b: Self::Vector) -> Self::Vector {
                // SAFETY: as above.
                unsafe { $mul(a, b) }
            }

            #[inline]
            fn vec_div(a: Self::Vector, b: Self::Vector) -> Option<Self::Vector> {
                // SAFETY: as above.
                Some(unsafe { $div(a, b) })
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }
        }

        impl FloatElement for $t {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_int_element!(
    i8,
    active::I8Vec,
    active::I8_LANES,
    active::splat_i8,
    active::first_i8,
    active::add_i8,
    active::sub_i8,
    active::mul_i8
);

impl_int_element!(
    i16,
    active::I16Vec,
    active::I16_LANES,
    active::splat_i16,
    active::first_i16,
    active::add_i16,
    active::sub_i16,
    active::mul_i16
);

impl_int_element!(
    i32,
    active::I32Vec,
    active::I32_LANES,
    active::splat_i32,
    active::first_i32,
    active::add_i32,
    active::sub_i32,
    active::mul_i32
);

impl_float_element!(
    f32,
    active::F32Vec,
    active::F32_LANES,
    active::splat_f32,
    active::first_f32,
    active::add_f32,
    active::sub_f32,
    active::mul_f32,
    active::div_f32
);

impl_float_element!(
    f64,
    active::F64Vec,
    active::F64_LANES,
    active::splat_f64,
    active::first_f64,
    active::add_f64,
    active::sub_f64,
    active::mul_f64,
    active::div_f64
);
