// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reductions and unary transforms.

use crate::{FillKind, Shape, Tensor, TensorError};
use lane_core::{LaneElement, ScalarLane};

/// Sums every element into a rank-1, single-element tensor.
///
/// An empty tensor sums to zero.
pub fn sum<T: LaneElement>(tensor: &Tensor<T>) -> Tensor<T> {
    let total = tensor
        .lanes()
        .iter()
        .fold(T::ZERO, |acc, lane| acc + lane.value());
    let lane = ScalarLane::from_scalar(total);
    Tensor::build(Shape::vector(1), FillKind::Computed, |_| lane)
}

/// The largest element, by scalar comparison starting from element 0,
/// as a rank-1, single-element tensor.
///
/// # Errors
/// [`TensorError::EmptyTensor`] if the tensor holds no elements.
pub fn max<T: LaneElement>(tensor: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    let lanes = tensor.lanes();
    let Some(first) = lanes.first() else {
        return Err(TensorError::EmptyTensor { op: "max" });
    };
    let mut best = first.value();
    for lane in &lanes[1..] {
        if lane.value() > best {
            best = lane.value();
        }
    }
    let lane = ScalarLane::from_scalar(best);
    Ok(Tensor::build(Shape::vector(1), FillKind::Computed, |_| lane))
}

/// Elementwise natural exponential.
///
/// Integer element types compute through `f64` and truncate back.
pub fn exp<T: LaneElement>(tensor: &Tensor<T>) -> Tensor<T> {
    let lanes = tensor.lanes();
    Tensor::build(tensor.shape().clone(), FillKind::Computed, |i| {
        lanes[i].exp()
    })
}

/// Copies the elements into a rank-1 tensor in row-major order.
pub fn flatten<T: LaneElement>(tensor: &Tensor<T>) -> Tensor<T> {
    let lanes = tensor.lanes();
    Tensor::build(Shape::vector(lanes.len()), FillKind::Computed, |i| lanes[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t<T: LaneElement>(dims: &[usize], values: &[T]) -> Tensor<T> {
        Tensor::from_values(Shape::from(dims), values).unwrap()
    }

    #[test]
    fn test_sum() {
        let a = t(&[2, 2], &[3i32, 3, 3, 3]);
        let s = sum(&a);
        assert_eq!(s.shape().dims(), &[1]);
        assert_eq!(s.to_vec(), vec![12]);
        assert_eq!(s.init(), FillKind::Computed);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let a = Tensor::<f32>::new([0]);
        assert_eq!(sum(&a).to_vec(), vec![0.0]);
    }

    #[test]
    fn test_max() {
        let a = t(&[4], &[1i32, 7, 3, 2]);
        let m = max(&a).unwrap();
        assert_eq!(m.shape().dims(), &[1]);
        assert_eq!(m.to_vec(), vec![7]);
    }

    #[test]
    fn test_max_negative() {
        let a = t(&[3], &[-5i8, -1, -9]);
        assert_eq!(max(&a).unwrap().to_vec(), vec![-1]);
    }

    #[test]
    fn test_max_empty() {
        let a = Tensor::<i32>::new([0, 3]);
        assert!(matches!(
            max(&a),
            Err(TensorError::EmptyTensor { op: "max" })
        ));
    }

    #[test]
    fn test_exp_of_zeros_is_ones() {
        let a = Tensor::<f64>::new([3]);
        for x in exp(&a).to_vec() {
            assert!((x - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_exp_integer_truncates() {
        let a = t(&[2], &[0i32, 2]);
        // e^2 = 7.389..., truncated.
        assert_eq!(exp(&a).to_vec(), vec![1, 7]);
    }

    #[test]
    fn test_flatten() {
        let a = t(&[2, 3], &[1i16, 2, 3, 4, 5, 6]);
        let f = flatten(&a);
        assert_eq!(f.shape().dims(), &[6]);
        assert_eq!(f.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        // Source keeps its shape and contents.
        assert_eq!(a.shape().dims(), &[2, 3]);
    }

    #[test]
    fn test_flatten_rank_zero() {
        let a = Tensor::from_value(Shape::scalar(), 4.5f32);
        let f = flatten(&a);
        assert_eq!(f.shape().dims(), &[1]);
        assert_eq!(f.to_vec(), vec![4.5]);
    }
}
