// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rank-dispatched dot product.

use crate::{FillKind, Shape, Tensor, TensorError};
use lane_core::{LaneElement, ScalarLane};

/// Dot product over the supported rank pairs:
///
/// * vector(L) · matrix(L×M) → vector(M)
/// * matrix(N×K) · vector(K) → vector(N)
/// * matrix(N×K) · matrix(K×M) → matrix(N×M)
///
/// Row-major layout throughout; accumulation happens in the element type,
/// so float products lose precision at scale rather than being
/// compensated.
///
/// # Errors
/// [`TensorError::UnsupportedRankPair`] for any other rank combination and
/// [`TensorError::ShapeMismatch`] when the inner dimensions disagree.
pub fn dot<T: LaneElement>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    match (lhs.rank(), rhs.rank()) {
        (1, 2) => vec_mat(lhs, rhs),
        (2, 1) => mat_vec(lhs, rhs),
        (2, 2) => mat_mat(lhs, rhs),
        (lhs_rank, rhs_rank) => {
            tracing::debug!(lhs_rank, rhs_rank, "unsupported rank pair for dot");
            Err(TensorError::UnsupportedRankPair {
                op: "dot",
                lhs_rank,
                rhs_rank,
            })
        }
    }
}

fn inner_dim_check<T: LaneElement>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    lhs_inner: usize,
    rhs_inner: usize,
) -> Result<(), TensorError> {
    if lhs_inner != rhs_inner {
        return Err(TensorError::ShapeMismatch {
            op: "dot",
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }
    Ok(())
}

/// out[j] = Σ_i v[i] · m[i, j]
fn vec_mat<T: LaneElement>(v: &Tensor<T>, m: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    let l = v.shape().dims()[0];
    let (rows, cols) = (m.shape().dims()[0], m.shape().dims()[1]);
    inner_dim_check(v, m, l, rows)?;

    let (vd, md) = (v.lanes(), m.lanes());
    Ok(Tensor::build(Shape::vector(cols), FillKind::Computed, |j| {
        let mut acc = T::ZERO;
        for i in 0..l {
            acc = acc + vd[i].value() * md[i * cols + j].value();
        }
        ScalarLane::from_scalar(acc)
    }))
}

/// out[i] = Σ_k m[i, k] · v[k]
fn mat_vec<T: LaneElement>(m: &Tensor<T>, v: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    let (rows, cols) = (m.shape().dims()[0], m.shape().dims()[1]);
    let k = v.shape().dims()[0];
    inner_dim_check(m, v, cols, k)?;

    let (md, vd) = (m.lanes(), v.lanes());
    Ok(Tensor::build(Shape::vector(rows), FillKind::Computed, |i| {
        let mut acc = T::ZERO;
        for kk in 0..cols {
            acc = acc + md[i * cols + kk].value() * vd[kk].value();
        }
        ScalarLane::from_scalar(acc)
    }))
}

/// Naive triple loop, fresh accumulator per output cell.
fn mat_mat<T: LaneElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
    let (n, k) = (a.shape().dims()[0], a.shape().dims()[1]);
    let (k2, m) = (b.shape().dims()[0], b.shape().dims()[1]);
    inner_dim_check(a, b, k, k2)?;

    let (ad, bd) = (a.lanes(), b.lanes());
    Ok(Tensor::build(
        Shape::matrix(n, m),
        FillKind::Computed,
        |idx| {
            let (i, j) = (idx / m, idx % m);
            let mut acc = T::ZERO;
            for kk in 0..k {
                acc = acc + ad[i * k + kk].value() * bd[kk * m + j].value();
            }
            ScalarLane::from_scalar(acc)
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t<T: LaneElement>(dims: &[usize], values: &[T]) -> Tensor<T> {
        Tensor::from_values(Shape::from(dims), values).unwrap()
    }

    #[test]
    fn test_mat_mat() {
        let a = t(&[2, 2], &[1i32, 2, 3, 4]);
        let b = t(&[2, 2], &[5i32, 6, 7, 8]);
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.shape().dims(), &[2, 2]);
        assert_eq!(c.to_vec(), vec![19, 22, 43, 50]);
    }

    #[test]
    fn test_vec_mat() {
        let v = t(&[2], &[1i32, 2]);
        let m = t(&[2, 3], &[1i32, 2, 3, 4, 5, 6]);
        let r = dot(&v, &m).unwrap();
        assert_eq!(r.shape().dims(), &[3]);
        assert_eq!(r.to_vec(), vec![9, 12, 15]);
    }

    #[test]
    fn test_mat_vec() {
        let m = t(&[2, 3], &[1f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v = t(&[3], &[1f64, 0.0, -1.0]);
        let r = dot(&m, &v).unwrap();
        assert_eq!(r.shape().dims(), &[2]);
        assert_eq!(r.to_vec(), vec![-2.0, -2.0]);
    }

    #[test]
    fn test_non_square() {
        let a = t(&[1, 3], &[1i32, 2, 3]);
        let b = t(&[3, 1], &[4i32, 5, 6]);
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.shape().dims(), &[1, 1]);
        assert_eq!(c.to_vec(), vec![32]);
    }

    #[test]
    fn test_inner_dim_mismatch() {
        let a = t(&[2, 3], &[0i32; 6]);
        let b = t(&[2, 2], &[0i32; 4]);
        assert!(matches!(
            dot(&a, &b),
            Err(TensorError::ShapeMismatch { op: "dot", .. })
        ));
    }

    #[test]
    fn test_vec_mat_inner_mismatch() {
        let v = t(&[3], &[0i32; 3]);
        let m = t(&[2, 2], &[0i32; 4]);
        assert!(matches!(dot(&v, &m), Err(TensorError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_unsupported_rank_pairs() {
        let v = t(&[2], &[1i32, 2]);
        let s = Tensor::from_value(Shape::scalar(), 3i32);
        let cube = Tensor::<i32>::new([2, 2, 2]);
        assert!(matches!(
            dot(&v, &v),
            Err(TensorError::UnsupportedRankPair {
                lhs_rank: 1,
                rhs_rank: 1,
                ..
            })
        ));
        assert!(matches!(
            dot(&s, &v),
            Err(TensorError::UnsupportedRankPair { .. })
        ));
        assert!(matches!(
            dot(&cube, &cube),
            Err(TensorError::UnsupportedRankPair { .. })
        ));
    }

    #[test]
    fn test_result_shape_invariant() {
        let a = t(&[3, 4], &[1i16; 12]);
        let b = t(&[4, 2], &[1i16; 8]);
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.len(), c.shape().num_elements());
        assert_eq!(c.to_vec(), vec![4i16; 6]);
    }
}
