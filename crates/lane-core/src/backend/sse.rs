// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! 128-bit x86_64 backend (SSE2 baseline).
//!
//! Everything here restricts itself to SSE2, which is part of the x86_64
//! baseline — no runtime feature detection is required. The two
//! instructions that SSE2 lacks are emulated:
//!
//! - 32-bit low-multiply (`_mm_mullo_epi32` is SSE4.1): built from two
//!   `_mm_mul_epu32` even/odd passes plus shuffles.
//! - 8-bit multiply (no such instruction at any SSE level): each half is
//!   sign-extended to 16-bit lanes, low-multiplied, then truncating-packed
//!   back to 8-bit lanes.

#![allow(clippy::missing_safety_doc)] // module-level contract in backend/mod.rs

use std::arch::x86_64::*;

pub const WIDTH_BITS: usize = 128;
pub const NAME: &str = "sse2-128";

pub type I8Vec = __m128i;
pub type I16Vec = __m128i;
pub type I32Vec = __m128i;
pub type F32Vec = __m128;
pub type F64Vec = __m128d;

pub const I8_LANES: usize = 16;
pub const I16_LANES: usize = 8;
pub const I32_LANES: usize = 4;
pub const F32_LANES: usize = 4;
pub const F64_LANES: usize = 2;

/// Stack buffer aligned for full-width register stores.
#[repr(align(16))]
struct AlignedBytes([u8; 16]);

// ── broadcast ──────────────────────────────────────────────────

#[inline]
pub unsafe fn splat_i8(value: i8) -> I8Vec {
    _mm_set1_epi8(value)
}

#[inline]
pub unsafe fn splat_i16(value: i16) -> I16Vec {
    _mm_set1_epi16(value)
}

#[inline]
pub unsafe fn splat_i32(value: i32) -> I32Vec {
    _mm_set1_epi32(value)
}

#[inline]
pub unsafe fn splat_f32(value: f32) -> F32Vec {
    _mm_set1_ps(value)
}

#[inline]
pub unsafe fn splat_f64(value: f64) -> F64Vec {
    _mm_set1_pd(value)
}

// ── lane-0 extraction ──────────────────────────────────────────
//
// Integer lanes: full-width store, then a raw copy of the first
// `size_of::<T>()` bytes. Float lanes: full-width store even though only
// lane 0 is consumed — matches hardware store granularity.

#[inline]
pub unsafe fn first_i8(vector: I8Vec) -> i8 {
    let mut buf = AlignedBytes([0u8; 16]);
    _mm_store_si128(buf.0.as_mut_ptr().cast(), vector);
    i8::from_ne_bytes([buf.0[0]])
}

#[inline]
pub unsafe fn first_i16(vector: I16Vec) -> i16 {
    let mut buf = AlignedBytes([0u8; 16]);
    _mm_store_si128(buf.0.as_mut_ptr().cast(), vector);
    i16::from_ne_bytes([buf.0[0], buf.0[1]])
}

#[inline]
pub unsafe fn first_i32(vector: I32Vec) -> i32 {
    let mut buf = AlignedBytes([0u8; 16]);
    _mm_store_si128(buf.0.as_mut_ptr().cast(), vector);
    i32::from_ne_bytes([buf.0[0], buf.0[1], buf.0[2], buf.0[3]])
}

#[inline]
pub unsafe fn first_f32(vector: F32Vec) -> f32 {
    #[repr(align(16))]
    struct Buf([f32; 4]);
    let mut buf = Buf([0.0; 4]);
    _mm_store_ps(buf.0.as_mut_ptr(), vector);
    buf.0[0]
}

#[inline]
pub unsafe fn first_f64(vector: F64Vec) -> f64 {
    #[repr(align(16))]
    struct Buf([f64; 2]);
    let mut buf = Buf([0.0; 2]);
    _mm_store_pd(buf.0.as_mut_ptr(), vector);
    buf.0[0]
}

// ── lane-wise arithmetic ───────────────────────────────────────

#[inline]
pub unsafe fn add_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    _mm_add_epi8(a, b)
}

#[inline]
pub unsafe fn sub_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    _mm_sub_epi8(a, b)
}

/// 8-bit lane multiply via 16-bit widening.
///
/// Multiplying directly in 8-bit lanes is not expressible in SSE; widening
/// first also avoids the saturation semantics a packed 8-bit product would
/// imply. The narrow-back keeps the truncated low byte of each product.
#[inline]
pub unsafe fn mul_i8(a: I8Vec, b: I8Vec) -> I8Vec {
    // Sign-extend each half into 16-bit lanes: unpack duplicates the byte
    // into both halves of the word, the arithmetic shift drops the copy.
    let a_lo = _mm_srai_epi16::<8>(_mm_unpacklo_epi8(a, a));
    let b_lo = _mm_srai_epi16::<8>(_mm_unpacklo_epi8(b, b));
    let a_hi = _mm_srai_epi16::<8>(_mm_unpackhi_epi8(a, a));
    let b_hi = _mm_srai_epi16::<8>(_mm_unpackhi_epi8(b, b));

    let lo = _mm_mullo_epi16(a_lo, b_lo);
    let hi = _mm_mullo_epi16(a_hi, b_hi);

    // Truncating narrow: keep the low byte of each 16-bit product.
    // packus on masked (0..=255) words is lossless.
    let mask = _mm_set1_epi16(0x00ff);
    _mm_packus_epi16(_mm_and_si128(lo, mask), _mm_and_si128(hi, mask))
}

#[inline]
pub unsafe fn add_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm_add_epi16(a, b)
}

#[inline]
pub unsafe fn sub_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm_sub_epi16(a, b)
}

#[inline]
pub unsafe fn mul_i16(a: I16Vec, b: I16Vec) -> I16Vec {
    _mm_mullo_epi16(a, b)
}

#[inline]
pub unsafe fn add_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    _mm_add_epi32(a, b)
}

#[inline]
pub unsafe fn sub_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    _mm_sub_epi32(a, b)
}

/// 32-bit lane low-multiply on plain SSE2.
///
/// `_mm_mullo_epi32` needs SSE4.1, which is above the x86_64 baseline this
/// backend targets. The classic emulation multiplies even and odd lanes as
/// 64-bit products and recombines the low halves.
#[inline]
pub unsafe fn mul_i32(a: I32Vec, b: I32Vec) -> I32Vec {
    let even = _mm_mul_epu32(a, b);
    let odd = _mm_mul_epu32(_mm_srli_si128::<4>(a), _mm_srli_si128::<4>(b));
    // 0b_00_00_10_00 selects lanes {0, 2} into positions {0, 1}.
    let even_lo = _mm_shuffle_epi32::<0b0000_1000>(even);
    let odd_lo = _mm_shuffle_epi32::<0b0000_1000>(odd);
    _mm_unpacklo_epi32(even_lo, odd_lo)
}

#[inline]
pub unsafe fn add_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm_add_ps(a, b)
}

#[inline]
pub unsafe fn sub_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm_sub_ps(a, b)
}

#[inline]
pub unsafe fn mul_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm_mul_ps(a, b)
}

#[inline]
pub unsafe fn div_f32(a: F32Vec, b: F32Vec) -> F32Vec {
    _mm_div_ps(a, b)
}

#[inline]
pub unsafe fn add_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm_add_pd(a, b)
}

#[inline]
pub unsafe fn sub_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm_sub_pd(a, b)
}

#[inline]
pub unsafe fn mul_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm_mul_pd(a, b)
}

#[inline]
pub unsafe fn div_f64(a: F64Vec, b: F64Vec) -> F64Vec {
    _mm_div_pd(a, b)
}
