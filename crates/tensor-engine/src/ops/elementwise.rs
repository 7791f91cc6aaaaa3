// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise binary operations.
//!
//! All four operations require identical operand shapes and report a
//! mismatch with the same recoverable [`TensorError::ShapeMismatch`].
//! Division additionally scans the divisor for zeros up front so a
//! failing call produces no partial result.

use crate::{FillKind, Tensor, TensorError};
use lane_core::{LaneElement, ScalarLane};

/// Elementwise addition.
///
/// # Errors
/// [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn add<T: LaneElement>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    zip("add", lhs, rhs, |a, b| a + b)
}

/// Elementwise subtraction.
///
/// # Errors
/// [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn sub<T: LaneElement>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    zip("sub", lhs, rhs, |a, b| a - b)
}

/// Elementwise multiplication.
///
/// Integer products wrap at the element width, matching the packed
/// arithmetic underneath.
///
/// # Errors
/// [`TensorError::ShapeMismatch`] if the shapes differ.
pub fn mul<T: LaneElement>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    zip("mul", lhs, rhs, |a, b| a * b)
}

/// Elementwise division.
///
/// # Errors
/// [`TensorError::ShapeMismatch`] if the shapes differ, or
/// [`TensorError::DivideByZero`] naming the first zero divisor. The zero
/// scan runs before any element is divided.
pub fn div<T: LaneElement>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    check_shapes("div", lhs, rhs)?;
    if let Some(index) = rhs.lanes().iter().position(|lane| lane.is_zero()) {
        return Err(TensorError::DivideByZero { index });
    }
    zip("div", lhs, rhs, |a, b| a / b)
}

fn check_shapes<T: LaneElement>(
    op: &'static str,
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
) -> Result<(), TensorError> {
    if lhs.shape() != rhs.shape() {
        tracing::debug!(op, lhs = %lhs.shape(), rhs = %rhs.shape(), "shape mismatch");
        return Err(TensorError::ShapeMismatch {
            op,
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }
    Ok(())
}

fn zip<T: LaneElement>(
    op: &'static str,
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    f: impl Fn(ScalarLane<T>, ScalarLane<T>) -> ScalarLane<T>,
) -> Result<Tensor<T>, TensorError> {
    check_shapes(op, lhs, rhs)?;
    let (a, b) = (lhs.lanes(), rhs.lanes());
    Ok(Tensor::build(lhs.shape().clone(), FillKind::Computed, |i| {
        f(a[i], b[i])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn t<T: LaneElement>(dims: &[usize], values: &[T]) -> Tensor<T> {
        Tensor::from_values(Shape::from(dims), values).unwrap()
    }

    #[test]
    fn test_add() {
        let a = t(&[2, 2], &[1i32, 2, 3, 4]);
        let b = t(&[2, 2], &[10i32, 20, 30, 40]);
        let c = add(&a, &b).unwrap();
        assert_eq!(c.to_vec(), vec![11, 22, 33, 44]);
        assert_eq!(c.init(), FillKind::Computed);
    }

    #[test]
    fn test_sub() {
        let a = t(&[3], &[5.0f32, 6.0, 7.0]);
        let b = t(&[3], &[1.0f32, 2.0, 3.0]);
        assert_eq!(sub(&a, &b).unwrap().to_vec(), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_mul() {
        let a = t(&[4], &[1i16, -2, 3, -4]);
        let b = t(&[4], &[2i16, 2, 2, 2]);
        assert_eq!(mul(&a, &b).unwrap().to_vec(), vec![2, -4, 6, -8]);
    }

    #[test]
    fn test_div_float() {
        let a = t(&[2], &[1.0f64, 9.0]);
        let b = t(&[2], &[2.0f64, 3.0]);
        assert_eq!(div(&a, &b).unwrap().to_vec(), vec![0.5, 3.0]);
    }

    #[test]
    fn test_div_integer_truncates() {
        let a = t(&[3], &[7i32, -7, 9]);
        let b = t(&[3], &[2i32, 2, 3]);
        assert_eq!(div(&a, &b).unwrap().to_vec(), vec![3, -3, 3]);
    }

    #[test]
    fn test_div_by_zero_reports_first_index() {
        let a = t(&[4], &[1i32, 2, 3, 4]);
        let b = t(&[4], &[1i32, 0, 2, 0]);
        assert!(matches!(
            div(&a, &b),
            Err(TensorError::DivideByZero { index: 1 })
        ));
    }

    #[test]
    fn test_shape_mismatch_uniform_across_ops() {
        let a = t(&[2, 3], &[0i32; 6]);
        let b = t(&[3, 2], &[0i32; 6]);
        let ops: [crate::BinaryOp<i32>; 4] = [add, sub, mul, div];
        for op in ops {
            assert!(matches!(
                op(&a, &b),
                Err(TensorError::ShapeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_operands_untouched() {
        let a = t(&[2], &[1i8, 2]);
        let b = t(&[2], &[3i8, 4]);
        let _ = add(&a, &b).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(b.to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_add_zeros_identity() {
        let a = t(&[2, 2], &[1.5f32, -2.5, 3.0, 0.0]);
        let z = crate::zeros::<f32>([2, 2]);
        assert_eq!(add(&a, &z).unwrap().to_vec(), a.to_vec());
    }

    #[test]
    fn test_lane_coherence_after_op() {
        let a = t(&[2], &[3i32, 4]);
        let b = t(&[2], &[5i32, 6]);
        let c = mul(&a, &b).unwrap();
        for lane in c.lanes() {
            assert_eq!(
                <i32 as LaneElement>::first_lane(lane.vector()),
                lane.value()
            );
        }
    }
}
