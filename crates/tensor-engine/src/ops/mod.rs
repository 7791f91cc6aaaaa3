// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor operations.
//!
//! All operations are eager and allocate a fresh output tensor tagged
//! [`crate::FillKind::Computed`]; operands are never modified.

mod dot;
mod elementwise;
mod reduce;

pub use dot::dot;
pub use elementwise::{add, div, mul, sub};
pub use reduce::{exp, flatten, max, sum};
