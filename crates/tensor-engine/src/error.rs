// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.
//!
//! Every failure is recoverable at the operation level: a failing
//! operation returns an error and never a tensor violating its
//! length/shape invariant. Allocation failure is the one process-fatal
//! condition and lives in `lane-buffer`.

use crate::Shape;

/// Errors that can occur during tensor operations.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// Two operands have different shapes where equality is required.
    /// Applied uniformly across all elementwise operations.
    #[error("shape mismatch in {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A right-hand element of `div` is zero. Detected before any element
    /// is divided; the whole operation fails.
    #[error("division by zero at element {index}")]
    DivideByZero { index: usize },

    /// The operation needs at least one element (e.g. `max`).
    #[error("{op} requires a non-empty tensor")]
    EmptyTensor { op: &'static str },

    /// `dot` was invoked outside the supported {1×2, 2×1, 2×2} rank pairs.
    #[error(
        "unsupported rank pair for {op}: {lhs_rank}×{rhs_rank} \
         (supported: vector·matrix, matrix·vector, matrix·matrix)"
    )]
    UnsupportedRankPair {
        op: &'static str,
        lhs_rank: usize,
        rhs_rank: usize,
    },

    /// A provided element buffer does not match `shape.num_elements()`.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
