// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Forwarding adapters that pair an operation result with its shape.
//!
//! Binding layers want the result tensor and its shape as one unit
//! without a second round-trip. These adapters are mechanical: all
//! validation and arithmetic stays in [`crate::ops`].

use crate::{Tensor, TensorError};
use lane_core::LaneElement;

/// A binary tensor operation, e.g. [`crate::add`] or [`crate::dot`].
pub type BinaryOp<T> = fn(&Tensor<T>, &Tensor<T>) -> Result<Tensor<T>, TensorError>;

/// A unary tensor operation, e.g. [`crate::flatten`].
pub type UnaryOp<T> = fn(&Tensor<T>) -> Tensor<T>;

/// An operation result bundled with its shape.
#[derive(Debug, PartialEq)]
pub struct TensorTuple<T: LaneElement> {
    tensor: Tensor<T>,
    dims: Vec<usize>,
}

impl<T: LaneElement> TensorTuple<T> {
    /// The result tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// The result's dimensions, copied out at construction.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Unbundles into the tensor, dropping the shape copy.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T: LaneElement> From<Tensor<T>> for TensorTuple<T> {
    fn from(tensor: Tensor<T>) -> Self {
        let dims = tensor.shape().dims().to_vec();
        Self { tensor, dims }
    }
}

/// Runs `op` and bundles the result with its shape.
pub fn apply<T: LaneElement>(
    op: BinaryOp<T>,
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
) -> Result<TensorTuple<T>, TensorError> {
    op(lhs, rhs).map(TensorTuple::from)
}

/// Runs a unary `op` and bundles the result with its shape.
pub fn apply_unary<T: LaneElement>(op: UnaryOp<T>, input: &Tensor<T>) -> TensorTuple<T> {
    TensorTuple::from(op(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{add, dot, flatten, Tensor};

    #[test]
    fn test_apply_binary() {
        let a = Tensor::from_values([2, 2], &[1i32, 2, 3, 4]).unwrap();
        let b = Tensor::from_values([2, 2], &[5i32, 6, 7, 8]).unwrap();
        let out = apply(dot, &a, &b).unwrap();
        assert_eq!(out.dims(), &[2, 2]);
        assert_eq!(out.tensor().to_vec(), vec![19, 22, 43, 50]);
    }

    #[test]
    fn test_apply_propagates_errors() {
        let a = Tensor::<f32>::new([2, 3]);
        let b = Tensor::<f32>::new([3, 2]);
        assert!(apply(add, &a, &b).is_err());
    }

    #[test]
    fn test_apply_unary() {
        let a = Tensor::from_values([2, 3], &[0i16, 1, 2, 3, 4, 5]).unwrap();
        let out = apply_unary(flatten, &a);
        assert_eq!(out.dims(), &[6]);
        assert_eq!(out.into_tensor().to_vec(), vec![0, 1, 2, 3, 4, 5]);
    }
}
