// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `lanetensor demo` command: drive every operation through one workload.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tensor_engine::{
    add, div, dot, exp, flatten, full, max, mul, ones, rand_with, sub, sum, Tensor,
};

pub fn execute(size: usize, seed: u64) -> anyhow::Result<()> {
    anyhow::ensure!(size > 0, "size must be at least 1");

    println!("lanetensor demo · {size}x{size} f32 workload, seed {seed}");
    println!();

    let mut rng = StdRng::seed_from_u64(seed);
    let a: Tensor<f32> = rand_with([size, size], &mut rng);
    let b = full([size, size], 0.5f32);
    let one = ones::<f32>([size, size]);

    let started = Instant::now();

    let summed = add(&a, &b).context("add")?;
    let diff = sub(&summed, &one).context("sub")?;
    let scaled = mul(&diff, &b).context("mul")?;
    let ratio = div(&scaled, &b).context("div")?;
    let product = dot(&ratio, &one).context("dot")?;
    let total = sum(&product);
    let peak = max(&product).context("max")?;
    let flat = flatten(&product);
    let grown = exp(&b);

    let elapsed = started.elapsed();

    println!("  add/sub/mul/div:  shape {}", ratio.shape());
    println!("  dot:              shape {}", product.shape());
    println!("  sum:              {:?}", total.to_vec());
    println!("  max:              {:?}", peak.to_vec());
    println!("  flatten:          {} elements", flat.len());
    println!(
        "  exp(0.5):         {:.6} (expected {:.6})",
        grown.get(0).unwrap_or_default(),
        0.5f32.exp()
    );
    println!();
    println!("  {} ops in {:.2?}", 9, elapsed);

    tracing::info!(size, seed, ?elapsed, "demo workload complete");
    Ok(())
}
