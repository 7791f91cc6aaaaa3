// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Eager tensor operations over lane-coherent elements.
//!
//! A [`Tensor`] owns an aligned buffer of [`lane_core::ScalarLane`]
//! elements in row-major order. Factories ([`full`], [`zeros`], [`ones`],
//! [`twos`], [`rand`], [`randn`]) build tensors from a shape and a fill
//! policy; operations ([`add`], [`sub`], [`mul`], [`div`], [`dot`],
//! [`sum`], [`max`], [`flatten`], [`exp`]) validate shapes, then produce
//! freshly allocated results. Nothing is lazy and no tensor ever shares
//! storage with another.
//!
//! ```
//! use tensor_engine::{dot, full, Tensor};
//!
//! let a = Tensor::from_values([2, 2], &[1.0f32, 2.0, 3.0, 4.0])?;
//! let b = full([2, 2], 1.0f32);
//! let c = dot(&a, &b)?;
//! assert_eq!(c.to_vec(), vec![3.0, 3.0, 7.0, 7.0]);
//! # Ok::<(), tensor_engine::TensorError>(())
//! ```

mod display;
mod error;
mod factory;
mod fill;
mod ops;
mod shape;
mod tensor;
mod tuple;

pub use display::PRINT_LIMIT;
pub use error::TensorError;
pub use factory::{full, ones, rand, rand_with, randn, randn_with, twos, zeros};
pub use fill::FillKind;
pub use ops::{add, div, dot, exp, flatten, max, mul, sub, sum};
pub use shape::Shape;
pub use tensor::Tensor;
pub use tuple::{apply, apply_unary, BinaryOp, TensorTuple, UnaryOp};

pub use lane_core::{FloatElement, LaneElement, ScalarLane, BACKEND_NAME, SIMD_WIDTH_BITS};
