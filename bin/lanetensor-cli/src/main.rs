// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # lanetensor
//!
//! Command-line interface for the lanetensor engine.
//!
//! ## Usage
//! ```bash
//! # Run the demo workload
//! lanetensor demo --size 64 --seed 42
//!
//! # Print the active SIMD backend
//! lanetensor info
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lanetensor",
    about = "SIMD tensor engine with lane-coherent elements",
    version
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exercise factories and every operation on a square workload.
    Demo {
        /// Matrix edge length for the workload.
        #[arg(short, long, default_value_t = 8)]
        size: usize,

        /// Seed for the random factories.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Print the compiled SIMD backend, width, and element lane counts.
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { size, seed } => commands::demo::execute(size, seed),
        Commands::Info => commands::info::execute(),
    }
}
