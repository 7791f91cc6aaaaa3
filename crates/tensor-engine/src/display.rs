// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Textual rendering of tensors.
//!
//! Output opens with `tensor([dims]`, then the elements in nested
//! brackets indented two spaces per level, and elides with `...` after
//! [`PRINT_LIMIT`] scalars.

use crate::Tensor;
use lane_core::LaneElement;
use std::fmt;

/// Scalars printed before the output is elided.
pub const PRINT_LIMIT: usize = 100;

impl<T: LaneElement> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tensor({}\n", self.shape())?;

        // A rank-0 tensor prints its single value inline.
        if self.rank() == 0 {
            return write!(f, "{})", self.lanes()[0].value());
        }

        let mut index = 0;
        let mut printed = 0;
        render(f, self, 0, &mut index, 0, &mut printed)?;
        write!(f, "\n)")
    }
}

fn render<T: LaneElement>(
    f: &mut fmt::Formatter<'_>,
    t: &Tensor<T>,
    dim: usize,
    index: &mut usize,
    indent: usize,
    printed: &mut usize,
) -> fmt::Result {
    if *printed >= PRINT_LIMIT {
        return f.write_str("...");
    }

    let n = t.shape().dims()[dim];

    // Innermost dimension: a flat, comma-separated row.
    if dim == t.rank() - 1 {
        f.write_str("[")?;
        for i in 0..n {
            if *printed >= PRINT_LIMIT {
                f.write_str(", ...")?;
                break;
            }
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", t.lanes()[*index].value())?;
            *index += 1;
            *printed += 1;
        }
        return f.write_str("]");
    }

    f.write_str("[\n")?;
    for i in 0..n {
        write!(f, "{:width$}", "", width = indent + 2)?;
        if *printed >= PRINT_LIMIT {
            f.write_str("...")?;
            break;
        }
        render(f, t, dim + 1, index, indent + 2, printed)?;
        if i + 1 < n {
            f.write_str(",\n")?;
        }
    }
    write!(f, "\n{:width$}]", "", width = indent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn test_display_vector() {
        let t = Tensor::from_values([3], &[1i32, 2, 3]).unwrap();
        assert_eq!(format!("{t}"), "tensor([3]\n[1, 2, 3]\n)");
    }

    #[test]
    fn test_display_matrix() {
        let t = Tensor::from_values([2, 2], &[1i32, 2, 3, 4]).unwrap();
        assert_eq!(
            format!("{t}"),
            "tensor([2, 2]\n[\n  [1, 2],\n  [3, 4]\n]\n)"
        );
    }

    #[test]
    fn test_display_rank_zero() {
        let t = Tensor::from_value(Shape::scalar(), 7i16);
        assert_eq!(format!("{t}"), "tensor([]\n7)");
    }

    #[test]
    fn test_display_elides_past_limit() {
        let t = Tensor::from_value([PRINT_LIMIT + 20], 1i8);
        let out = format!("{t}");
        assert!(out.contains(", ..."));
        assert_eq!(out.matches('1').count() - 1, PRINT_LIMIT);
    }
}
