// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The owned tensor type.

use crate::{FillKind, Shape, TensorError};
use lane_buffer::LaneBuffer;
use lane_core::{LaneElement, ScalarLane};

/// An owned, n-dimensional tensor of lane-coherent elements stored in
/// row-major order.
///
/// # Invariant
/// `data.len() == shape.num_elements()` at all times. Every constructor
/// establishes it, and every operation allocates a fresh buffer sized to
/// its result shape — tensors never alias each other's storage.
///
/// # Examples
/// ```
/// use tensor_engine::{full, Tensor};
///
/// let t: Tensor<f32> = full([2, 3], 1.5);
/// assert_eq!(t.len(), 6);
/// assert!(t.to_vec().iter().all(|&x| x == 1.5));
/// ```
#[derive(Debug)]
pub struct Tensor<T: LaneElement> {
    shape: Shape,
    data: LaneBuffer<ScalarLane<T>>,
    init: FillKind,
}

impl<T: LaneElement> Tensor<T> {
    /// Creates a tensor with default-constructed (zero) elements.
    pub fn new(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        Self::build(shape, FillKind::Default, |_| ScalarLane::default())
    }

    /// Creates a tensor with every element set to `value`.
    pub fn from_value(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        let lane = ScalarLane::from_scalar(value);
        Self::build(shape, FillKind::Full, |_| lane)
    }

    /// Creates a tensor from a slice of scalar values in linear order.
    ///
    /// # Errors
    /// [`TensorError::BufferSizeMismatch`] if `values.len()` differs from
    /// `shape.num_elements()`.
    pub fn from_values(shape: impl Into<Shape>, values: &[T]) -> Result<Self, TensorError> {
        let shape = shape.into();
        let expected = shape.num_elements();
        if values.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::build(shape, FillKind::Full, |i| {
            ScalarLane::from_scalar(values[i])
        }))
    }

    /// Internal constructor: allocates the buffer and initializes every
    /// slot, establishing the length invariant.
    pub(crate) fn build(
        shape: Shape,
        init: FillKind,
        f: impl FnMut(usize) -> ScalarLane<T>,
    ) -> Self {
        let data = LaneBuffer::from_fn(shape.num_elements(), f);
        Self { shape, data, init }
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the initialization tag (diagnostics only).
    pub fn init(&self) -> FillKind {
        self.init
    }

    /// The elements in linear (row-major) order.
    pub fn lanes(&self) -> &[ScalarLane<T>] {
        self.data.as_slice()
    }

    /// Mutable view of the elements.
    pub fn lanes_mut(&mut self) -> &mut [ScalarLane<T>] {
        self.data.as_mut_slice()
    }

    /// The scalar value at linear index `i`, if in bounds.
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.as_slice().get(i).map(|lane| lane.value())
    }

    /// Copies the scalar values out in linear order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.as_slice().iter().map(|lane| lane.value()).collect()
    }
}

/// Elementwise equality on scalar values, shapes included.
impl<T: LaneElement> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self
                .lanes()
                .iter()
                .zip(other.lanes().iter())
                .all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let t = Tensor::<i32>::new([2, 3]);
        assert_eq!(t.len(), 6);
        assert_eq!(t.shape().dims(), &[2, 3]);
        assert!(t.to_vec().iter().all(|&x| x == 0));
        assert_eq!(t.init(), FillKind::Default);
    }

    #[test]
    fn test_from_value() {
        let t = Tensor::from_value([4], 2.5f64);
        assert_eq!(t.to_vec(), vec![2.5; 4]);
    }

    #[test]
    fn test_from_values() {
        let t = Tensor::from_values([2, 2], &[1i16, 2, 3, 4]).unwrap();
        assert_eq!(t.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_values_size_mismatch() {
        let result = Tensor::from_values([2, 2], &[1i16, 2, 3]);
        assert!(matches!(
            result,
            Err(TensorError::BufferSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_rank_zero_holds_one_element() {
        let t = Tensor::from_value(Shape::scalar(), 9i8);
        assert_eq!(t.rank(), 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(0), Some(9));
    }

    #[test]
    fn test_length_invariant() {
        for dims in [vec![], vec![5], vec![2, 3], vec![2, 0, 4]] {
            let shape = Shape::new(dims);
            let t = Tensor::from_value(shape.clone(), 1.0f32);
            assert_eq!(t.len(), shape.num_elements());
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let t = Tensor::<f32>::new([2]);
        assert_eq!(t.get(2), None);
    }

    #[test]
    fn test_elementwise_equality() {
        let a = Tensor::from_values([2], &[1.0f32, 2.0]).unwrap();
        let b = Tensor::from_values([2], &[1.0f32, 2.0]).unwrap();
        let c = Tensor::from_values([2], &[1.0f32, 3.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
