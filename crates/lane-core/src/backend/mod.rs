// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Width- and architecture-specific vector backends.
//!
//! Exactly one backend is compiled into an artifact:
//!
//! - `sse` — x86_64 default: 128-bit registers, SSE2 baseline only.
//! - `avx` — x86_64 with the `avx256` cargo feature: 256-bit registers,
//!   AVX2 intrinsics.
//! - `portable` — every other architecture: aligned arrays with identical
//!   lane semantics.
//!
//! Each backend exports the same surface — vector type aliases
//! (`I8Vec` … `F64Vec`), per-type lane counts, and `unsafe fn`s for
//! broadcast, lane-0 extraction, and lane-wise arithmetic — so the
//! [`LaneElement`](crate::LaneElement) impls are backend-agnostic.
//!
//! # Safety contract
//! Every backend function is `unsafe fn` with the same obligation: the
//! executing CPU must support the compiled register width. For `sse` and
//! `portable` this holds unconditionally (SSE2 is part of the x86_64
//! baseline); for `avx` it is the documented contract of enabling the
//! `avx256` feature.

#[cfg(all(target_arch = "x86_64", not(feature = "avx256")))]
pub(crate) mod sse;
#[cfg(all(target_arch = "x86_64", not(feature = "avx256")))]
pub(crate) use sse as active;

#[cfg(all(target_arch = "x86_64", feature = "avx256"))]
pub(crate) mod avx;
#[cfg(all(target_arch = "x86_64", feature = "avx256"))]
pub(crate) use avx as active;

#[cfg(not(target_arch = "x86_64"))]
pub(crate) mod portable;
#[cfg(not(target_arch = "x86_64"))]
pub(crate) use portable as active;
