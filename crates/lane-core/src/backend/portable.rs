// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Portable fallback backend for non-x86_64 targets.
//!
//! Models the vector register as an aligned array with one slot per lane,
//! so every lane-semantics guarantee of the SIMD backends (including the
//! 8-bit widening multiply) holds bit-for-bit on architectures without an
//! intrinsics mapping. The compiler autovectorises the loops where the
//! target allows.

#![allow(clippy::missing_safety_doc)] // module-level contract in backend/mod.rs

#[cfg(not(feature = "avx256"))]
pub const WIDTH_BITS: usize = 128;
#[cfg(feature = "avx256")]
pub const WIDTH_BITS: usize = 256;

#[cfg(not(feature = "avx256"))]
pub const NAME: &str = "portable-128";
#[cfg(feature = "avx256")]
pub const NAME: &str = "portable-256";

pub const I8_LANES: usize = WIDTH_BITS / 8;
pub const I16_LANES: usize = WIDTH_BITS / 16;
pub const I32_LANES: usize = WIDTH_BITS / 32;
pub const F32_LANES: usize = WIDTH_BITS / 32;
pub const F64_LANES: usize = WIDTH_BITS / 64;

macro_rules! portable_vector {
    ($name:ident, $t:ty, $lanes:expr) => {
        #[derive(Clone, Copy, Debug)]
        #[repr(align(32))]
        pub struct $name(pub [$t; $lanes]);
    };
}

portable_vector!(I8Vec, i8, I8_LANES);
portable_vector!(I16Vec, i16, I16_LANES);
portable_vector!(I32Vec, i32, I32_LANES);
portable_vector!(F32Vec, f32, F32_LANES);
portable_vector!(F64Vec, f64, F64_LANES);

macro_rules! portable_ops {
    ($vec:ident, $t:ty, $lanes:expr,
     $splat:ident, $first:ident, $add:ident, $sub:ident, $mul:ident) => {
        #[inline]
        pub unsafe fn $splat(value: $t) -> $vec {
            $vec([value; $lanes])
        }

        #[inline]
        pub unsafe fn $first(vector: $vec) -> $t {
            vector.0[0]
        }

        #[inline]
        pub unsafe fn $add(a: $vec, b: $vec) -> $vec {
            let mut out = a;
            for (lane, rhs) in out.0.iter_mut().zip(b.0.iter()) {
                *lane = lane.wrapping_op_add(*rhs);
            }
            out
        }

        #[inline]
        pub unsafe fn $sub(a: $vec, b: $vec) -> $vec {
            let mut out = a;
            for (lane, rhs) in out.0.iter_mut().zip(b.0.iter()) {
                *lane = lane.wrapping_op_sub(*rhs);
            }
            out
        }

        #[inline]
        pub unsafe fn $mul(a: $vec, b: $vec) -> $vec {
            let mut out = a;
            for (lane, rhs) in out.0.iter_mut().zip(b.0.iter()) {
                *lane = lane.wrapping_op_mul(*rhs);
            }
            out
        }
    };
}

/// Lane arithmetic with hardware register semantics: integers wrap,
/// floats follow IEEE 754. Keeps the macro above type-agnostic.
trait WrappingOps: Copy {
    fn wrapping_op_add(self, rhs: Self) -> Self;
    fn wrapping_op_sub(self, rhs: Self) -> Self;
    fn wrapping_op_mul(self, rhs: Self) -> Self;
}

macro_rules! wrapping_int {
    ($t:ty) => {
        impl WrappingOps for $t {
            fn wrapping_op_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            fn wrapping_op_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            fn wrapping_op_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    };
}

macro_rules! wrapping_float {
    ($t:ty) => {
        impl WrappingOps for $t {
            fn wrapping_op_add(self, rhs: Self) -> Self {
                self + rhs
            }
            fn wrapping_op_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            fn wrapping_op_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    };
}

wrapping_int!(i8);
wrapping_int!(i16);
wrapping_int!(i32);
wrapping_float!(f32);
wrapping_float!(f64);

portable_ops!(I8Vec, i8, I8_LANES, splat_i8, first_i8, add_i8, sub_i8, mul_i8);
portable_ops!(I16Vec, i16, I16_LANES, splat_i16, first_i16, add_i16, sub_i16, mul_i16);
portable_ops!(I32Vec, i32, I32_LANES, splat_i32, first_i32, add_i32, sub_i32, mul_i32);
portable_ops!(F32Vec, f32, F32_LANES, splat_f32, first_f32, add_f32, sub_f32, mul_f32);
portable_ops!(F64Vec, f64, F64_LANES, splat_f64, first_f64, add_f64, sub_f64, mul_f64);

#[inline]
pub unsafe fn div_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    let mut out = a;
    for (lane, rhs) in out.0.iter_mut().zip(b.0.iter()) {
        *lane /= *rhs;
    }
    out
}

#[inline]
pub unsafe fn div_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    let mut out = a;
    for (lane, rhs) in out.0.iter_mut().zip(b.0.iter()) {
        *lane /= *rhs;
    }
    out
}
