// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor factories.
//!
//! Each named factory fills the tensor through the value constructor and
//! records its [`FillKind`] tag. The random factories draw **one** sample
//! and broadcast it to every element — they are fill policies, not
//! per-element samplers — and are restricted to floating element types at
//! the type level.
//!
//! Sampling uses the caller's generator when determinism matters
//! ([`rand_with`], [`randn_with`]); the plain versions use
//! [`rand::thread_rng`], a per-thread generator seeded once from the OS,
//! so concurrent callers never share mutable generator state.

use crate::{FillKind, Shape, Tensor};
use lane_core::{FloatElement, LaneElement, ScalarLane};
use rand::Rng;

/// Creates a tensor with every element set to `value`.
pub fn full<T: LaneElement>(shape: impl Into<Shape>, value: T) -> Tensor<T> {
    tagged(shape.into(), value, FillKind::Full)
}

/// Creates a tensor of zeros.
pub fn zeros<T: LaneElement>(shape: impl Into<Shape>) -> Tensor<T> {
    tagged(shape.into(), T::ZERO, FillKind::Zeros)
}

/// Creates a tensor of ones.
pub fn ones<T: LaneElement>(shape: impl Into<Shape>) -> Tensor<T> {
    tagged(shape.into(), T::ONE, FillKind::Ones)
}

/// Creates a tensor of twos.
pub fn twos<T: LaneElement>(shape: impl Into<Shape>) -> Tensor<T> {
    tagged(shape.into(), T::TWO, FillKind::Twos)
}

/// Creates a tensor filled with one uniform sample from [0, 1).
///
/// Floating element types only — enforced by the [`FloatElement`] bound.
pub fn rand<T: FloatElement>(shape: impl Into<Shape>) -> Tensor<T> {
    rand_with(shape, &mut rand::thread_rng())
}

/// [`rand`] with an explicit generator, for deterministic sampling.
pub fn rand_with<T: FloatElement, R: Rng + ?Sized>(
    shape: impl Into<Shape>,
    rng: &mut R,
) -> Tensor<T> {
    let value = T::from_f64(rng.gen::<f64>());
    tagged(shape.into(), value, FillKind::RandUniform)
}

/// Creates a tensor filled with one standard-normal sample.
///
/// Floating element types only — enforced by the [`FloatElement`] bound.
pub fn randn<T: FloatElement>(shape: impl Into<Shape>) -> Tensor<T> {
    randn_with(shape, &mut rand::thread_rng())
}

/// [`randn`] with an explicit generator, for deterministic sampling.
///
/// Box–Muller transform over two uniform draws.
pub fn randn_with<T: FloatElement, R: Rng + ?Sized>(
    shape: impl Into<Shape>,
    rng: &mut R,
) -> Tensor<T> {
    // Map [0, 1) to (0, 1] so the logarithm is finite.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let value = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    tagged(shape.into(), T::from_f64(value), FillKind::RandNormal)
}

fn tagged<T: LaneElement>(shape: Shape, value: T, init: FillKind) -> Tensor<T> {
    tracing::debug!(shape = %shape, kind = %init, "tensor factory");
    let lane = ScalarLane::from_scalar(value);
    Tensor::build(shape, init, |_| lane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full() {
        let t = full([2, 3], 7i32);
        assert_eq!(t.to_vec(), vec![7; 6]);
        assert_eq!(t.init(), FillKind::Full);
    }

    #[test]
    fn test_zeros_ones_twos() {
        assert_eq!(zeros::<i16>([3]).to_vec(), vec![0, 0, 0]);
        assert_eq!(ones::<f32>([3]).to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(twos::<f64>([2]).to_vec(), vec![2.0, 2.0]);
        assert_eq!(twos::<i8>([2]).init(), FillKind::Twos);
    }

    #[test]
    fn test_rand_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let t: Tensor<f32> = rand_with([4], &mut rng);
        let v = t.to_vec();
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
        // One sample broadcast to every element.
        assert!(v.iter().all(|&x| x == v[0]));
        assert_eq!(t.init(), FillKind::RandUniform);
    }

    #[test]
    fn test_rand_deterministic_with_seed() {
        let a: Tensor<f64> = rand_with([3], &mut StdRng::seed_from_u64(7));
        let b: Tensor<f64> = rand_with([3], &mut StdRng::seed_from_u64(7));
        assert_eq!(a.to_vec(), b.to_vec());
    }

    #[test]
    fn test_randn_finite() {
        let mut rng = StdRng::seed_from_u64(11);
        let t: Tensor<f64> = randn_with([8], &mut rng);
        assert!(t.to_vec().iter().all(|x| x.is_finite()));
        assert_eq!(t.init(), FillKind::RandNormal);
    }

    #[test]
    fn test_factory_shape_invariant() {
        let t: Tensor<f32> = rand([2, 5]);
        assert_eq!(t.len(), t.shape().num_elements());
    }
}
