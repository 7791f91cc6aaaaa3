// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # lane-buffer
//!
//! An owned, aligned, fixed-capacity contiguous element store.
//!
//! [`LaneBuffer`] is the backing storage for tensors. It guarantees:
//!
//! 1. **Alignment** — the block is aligned to [`LaneBuffer::ALIGN`]
//!    (32 bytes), enough for full-width stores at either supported SIMD
//!    register width.
//! 2. **Move-only ownership** — no `Clone`; the allocation is freed
//!    exactly once when the owning buffer is dropped. The borrow checker
//!    rules out use-after-free and double-free at compile time.
//! 3. **Fixed capacity** — a buffer never grows; every producing tensor
//!    operation allocates a fresh buffer instead of aliasing an old one.
//!
//! Allocation failure is fatal to the process (`handle_alloc_error`);
//! partial-failure recovery inside a single construction is out of scope
//! for a numeric kernel.
//!
//! # Example
//! ```
//! use lane_buffer::LaneBuffer;
//!
//! let buf = LaneBuffer::filled(4, 7i32);
//! assert_eq!(buf.len(), 4);
//! assert_eq!(buf.as_slice(), &[7, 7, 7, 7]);
//! assert_eq!(buf.as_slice().as_ptr() as usize % LaneBuffer::<i32>::ALIGN, 0);
//! ```

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An owned, aligned, contiguous array of `T` with a fixed length.
///
/// `T: Copy` — elements carry no drop glue, so deallocation is a single
/// free of the block.
pub struct LaneBuffer<T: Copy> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: Copy> LaneBuffer<T> {
    /// Alignment of the allocated block, in bytes. Covers 256-bit register
    /// stores; 128-bit builds simply over-align.
    pub const ALIGN: usize = 32;

    /// Allocates a buffer of `len` elements, initializing slot `i` with
    /// `init(i)`.
    ///
    /// A zero-length buffer allocates nothing. Allocation failure aborts
    /// the process via [`alloc::handle_alloc_error`].
    pub fn from_fn(len: usize, mut init: impl FnMut(usize) -> T) -> Self {
        if len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len: 0,
                _marker: PhantomData,
            };
        }

        let layout = Self::layout(len);
        // SAFETY: `layout` has non-zero size (len > 0 and T is inhabited
        // by construction of the init values written below).
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(layout);
        };

        for i in 0..len {
            // SAFETY: `i < len`, within the freshly allocated block.
            unsafe { ptr.as_ptr().add(i).write(init(i)) };
        }

        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_fn(len, |_| value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Immutable view of the elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `len` initialized elements (or
        // dangling with len == 0, which from_raw_parts permits).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn layout(len: usize) -> Layout {
        Layout::array::<T>(len)
            .and_then(|l| l.align_to(Self::ALIGN))
            .expect("buffer layout overflows usize")
    }
}

impl<T: Copy> Drop for LaneBuffer<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // SAFETY: allocated in `from_fn` with the identical layout;
        // move-only ownership means this runs exactly once.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.len)) };
    }
}

// The buffer is an exclusively owned block of Copy data.
unsafe impl<T: Copy + Send> Send for LaneBuffer<T> {}
unsafe impl<T: Copy + Sync> Sync for LaneBuffer<T> {}

impl<T: Copy + std::fmt::Debug> std::fmt::Debug for LaneBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaneBuffer")
            .field("len", &self.len)
            .field("align", &Self::ALIGN)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let buf = LaneBuffer::filled(8, 3i16);
        assert_eq!(buf.len(), 8);
        assert!(buf.as_slice().iter().all(|&x| x == 3));
    }

    #[test]
    fn test_from_fn() {
        let buf = LaneBuffer::from_fn(5, |i| i as i32 * 10);
        assert_eq!(buf.as_slice(), &[0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_alignment() {
        let buf = LaneBuffer::filled(3, 1.0f64);
        let addr = buf.as_slice().as_ptr() as usize;
        assert_eq!(addr % LaneBuffer::<f64>::ALIGN, 0);
    }

    #[test]
    fn test_zero_length() {
        let buf = LaneBuffer::<f32>::from_fn(0, |_| unreachable!());
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice(), &[] as &[f32]);
    }

    #[test]
    fn test_mutation() {
        let mut buf = LaneBuffer::filled(4, 0u8);
        buf.as_mut_slice()[2] = 9;
        assert_eq!(buf.as_slice(), &[0, 0, 9, 0]);
    }

    #[test]
    fn test_move_semantics() {
        let buf = LaneBuffer::filled(2, 5i32);
        let moved = buf;
        // `buf` is gone; `moved` owns the allocation and frees it once.
        assert_eq!(moved.as_slice(), &[5, 5]);
    }

    #[test]
    fn test_large_buffer() {
        let buf = LaneBuffer::from_fn(10_000, |i| i as i32);
        assert_eq!(buf.len(), 10_000);
        assert_eq!(buf.as_slice()[9_999], 9_999);
    }
}
