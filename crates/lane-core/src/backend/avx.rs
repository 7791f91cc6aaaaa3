// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! 256-bit x86_64 backend (AVX2), selected by the `avx256` cargo feature.
//!
//! Enabling `avx256` is a build-time promise that the target CPU supports
//! AVX2; every function carries `#[target_feature(enable = "avx2")]` so the
//! compiler may emit VEX-encoded instructions regardless of the global
//! target flags.

#![allow(clippy::missing_safety_doc)] // module-level contract in backend/mod.rs

use std::arch::x86_64::*;

pub const WIDTH_BITS: usize = 256;
pub const NAME: &str = "avx2-256";

pub type I8Vec = __m256i;
pub type I16Vec = __m256i;
pub type I32Vec = __m256i;
pub type F32Vec = __m256;
pub type F64Vec = __m256d;

pub const I8_LANES: usize = 32;
pub const I16_LANES: usize = 16;
pub const I32_LANES: usize = 8;
pub const F32_LANES: usize = 8;
pub const F64_LANES: usize = 4;

/// Stack buffer aligned for full-width register stores.
#[repr(align(32))]
struct AlignedBytes([u8; 32]);

// ── broadcast ──────────────────────────────────────────────────

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn splat_i8(value: i8) -> I8Vec {
    _mm256_set1_epi8(value)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn splat_i16(value: i16) -> I16Vec {
    _mm256_set1_epi16(value)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn splat_i32(value: i32) -> I32Vec {
    _mm256_set1_epi32(value)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn splat_f32(value: f32) -> F32Vec {
    _mm256_set1_ps(value)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn splat_f64(value: f64) -> F64Vec {
    _mm256_set1_pd(value)
}

// ── lane-0 extraction ──────────────────────────────────────────

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn first_i8(vector: I8Vec) -> i8 {
    let mut buf = AlignedBytes([0u8; 32]);
    _mm256_store_si256(buf.0.as_mut_ptr().cast(), vector);
    i8::from_ne_bytes([buf.0[0]])
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn first_i16(vector: I16Vec) -> i16 {
    let mut buf = AlignedBytes([0u8; 32]);
    _mm256_store_si256(buf.0.as_mut_ptr().cast(), vector);
    i16::from_ne_bytes([buf.0[0], buf.0[1]])
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn first_i32(vector: I32Vec) -> i32 {
    let mut buf = AlignedBytes([0u8; 32]);
    _mm256_store_si256(buf.0.as_mut_ptr().cast(), vector);
    i32::from_ne_bytes([buf.0[0], buf.0[1], buf.0[2], buf.0[3]])
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn first_f32(vector: F32Vec) -> f32 {
    #[repr(align(32))]
    struct Buf([f32; 8]);
    let mut buf = Buf([0.0; 8]);
    _mm256_store_ps(buf.0.as_mut_ptr(), vector);
    buf.0[0]
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn first_f64(vector: F64Vec) -> f64 {
    #[repr(align(32))]
    struct Buf([f64; 4]);
    let mut buf = Buf([0.0; 4]);
    _mm256_store_pd(buf.0.as_mut_ptr(), vector);
    buf.0[0]
}

// ── lane-wise arithmetic ───────────────────────────────────────

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    _mm256_add_epi8(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sub_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    _mm256_sub_epi8(a, b)
}

/// 8-bit lane multiply via 16-bit widening, 32 lanes at once.
///
/// Both 128-bit halves are sign-extended to 16-bit lanes, low-multiplied,
/// and truncating-packed back. `_mm256_packus_epi16` interleaves the two
/// 128-bit halves, so a final 64-bit permute restores lane order.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn mul_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    let a_lo = _mm256_cvtepi8_epi16(_mm256_castsi256_si128(a));
    let b_lo = _mm256_cvtepi8_epi16(_mm256_castsi256_si128(b));
    let a_hi = _mm256_cvtepi8_epi16(_mm256_extracti128_si256::<1>(a));
    let b_hi = _mm256_cvtepi8_epi16(_mm256_extracti128_si256::<1>(b));

    let lo = _mm256_mullo_epi16(a_lo, b_lo);
    let hi = _mm256_mullo_epi16(a_hi, b_hi);

    let mask = _mm256_set1_epi16(0x00ff);
    let packed = _mm256_packus_epi16(
        _mm256_and_si256(lo, mask),
        _mm256_and_si256(hi, mask),
    );
    // packus lane order is [lo₀, hi₀, lo₁, hi₁] per 64-bit group.
    _mm256_permute4x64_epi64::<0b1101_1000>(packed)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm256_add_epi16(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sub_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm256_sub_epi16(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn mul_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm256_mullo_epi16(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    _mm256_add_epi32(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sub_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    _mm256_sub_epi32(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn mul_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    _mm256_mullo_epi32(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm256_add_ps(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sub_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm256_sub_ps(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn mul_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm256_mul_ps(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn div_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm256_div_ps(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn add_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm256_add_pd(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sub_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm256_sub_pd(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn mul_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm256_mul_pd(a, b)
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn div_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm256_div_pd(a, b)
}
