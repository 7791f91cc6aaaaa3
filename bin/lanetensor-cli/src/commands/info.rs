// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `lanetensor info` command: print the compiled SIMD configuration.

use tensor_engine::{LaneElement, BACKEND_NAME, SIMD_WIDTH_BITS};

pub fn execute() -> anyhow::Result<()> {
    println!("lanetensor build configuration");
    println!();
    println!("  Backend:     {BACKEND_NAME}");
    println!("  Width:       {SIMD_WIDTH_BITS} bits");
    println!();
    println!("  Lanes per register");
    println!("   i8:   {}", <i8 as LaneElement>::LANES);
    println!("   i16:  {}", <i16 as LaneElement>::LANES);
    println!("   i32:  {}", <i32 as LaneElement>::LANES);
    println!("   f32:  {}", <f32 as LaneElement>::LANES);
    println!("   f64:  {}", <f64 as LaneElement>::LANES);
    println!();
    println!("  SIMD division");
    println!("   i8/i16/i32: scalar fallback");
    println!(
        "   f32/f64:    {}",
        if <f32 as LaneElement>::SIMD_DIV {
            "vector"
        } else {
            "scalar fallback"
        }
    );
    Ok(())
}
