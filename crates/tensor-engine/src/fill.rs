// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Initialization tags for diagnostics.

use std::fmt;

/// Records which factory produced a tensor.
///
/// Purely diagnostic: operations set [`FillKind::Computed`] on their
/// results, and no behaviour depends on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FillKind {
    /// Default-constructed elements.
    Default,
    /// `full(shape, value)`.
    Full,
    /// `zeros(shape)`.
    Zeros,
    /// `ones(shape)`.
    Ones,
    /// `twos(shape)`.
    Twos,
    /// `rand(shape)` — uniform [0, 1).
    RandUniform,
    /// `randn(shape)` — standard normal.
    RandNormal,
    /// Produced by an operation.
    Computed,
}

impl FillKind {
    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            FillKind::Default => "default",
            FillKind::Full => "full",
            FillKind::Zeros => "zeros",
            FillKind::Ones => "ones",
            FillKind::Twos => "twos",
            FillKind::RandUniform => "rand",
            FillKind::RandNormal => "randn",
            FillKind::Computed => "computed",
        }
    }
}

impl fmt::Display for FillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
