// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # lane-core
//!
//! The lane-coherent scalar/vector dual representation underlying the
//! tensor engine.
//!
//! This crate provides:
//! - [`ScalarLane<T>`] — one numeric value held simultaneously as a scalar
//!   and as its broadcast into every lane of a vector register, with the
//!   "lane coherence" invariant re-established by every operation.
//! - [`LaneElement`] — the sealed capability trait mapping each supported
//!   element type (`i8`, `i16`, `i32`, `f32`, `f64`) to the active
//!   backend's register type and lane-wise instructions.
//! - [`FloatElement`] — the floating-point subset, required for random
//!   sampling.
//!
//! # Width selection
//! The SIMD width is a build-time configuration: 128-bit registers by
//! default, 256-bit with the `avx256` cargo feature. One compiled artifact
//! targets exactly one width; there is no runtime dispatch. On targets
//! other than x86_64 a portable aligned-array backend preserves the exact
//! lane semantics.
//!
//! # Design
//! Per-type, per-width intrinsic branching lives in one place: the
//! [`LaneElement`] impls select backend functions statically, and every
//! SIMD-computed result flows through [`ScalarLane::from_vector`], which
//! re-derives the scalar from lane 0. No code path writes the scalar and
//! vector fields independently.

mod backend;
mod element;
mod lane;

pub use backend::active::{F32Vec, F64Vec, I16Vec, I32Vec, I8Vec};
pub use element::{FloatElement, LaneElement};
pub use lane::ScalarLane;

/// Register width, in bits, of the compiled artifact.
pub const SIMD_WIDTH_BITS: usize = backend::active::WIDTH_BITS;

/// Human-readable name of the active backend (e.g. `"sse2-128"`).
pub const BACKEND_NAME: &str = backend::active::NAME;
