// ABOUTME: BioMS CLI - command-line front end for athlete normalization
// ABOUTME: Compares athletes, scores teams, and ranks field tests from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors
//!
//! Usage:
//! ```bash
//! # Compare one athlete against the elite reference
//! bioms-cli compare --reference reference.json --athlete athlete.json
//!
//! # Same, with narrative insight cards
//! bioms-cli compare --reference reference.json --athlete athlete.json --report
//!
//! # Score a team against the reference, or against itself
//! bioms-cli batch --team team.json --reference reference.json
//! bioms-cli batch --team team.json --intra-group --rank-by BioMS_1
//!
//! # Rank a sprint test (lower time is better)
//! bioms-cli rank --input sprint.json --lower-is-better
//! ```
//!
//! Engine settings come from `BIOMS_*` environment variables; logging from
//! `RUST_LOG` and `LOG_FORMAT`. Results are printed as JSON on stdout.

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use bioms_normalizer::{intelligence::NormalizationConfig, logging::LoggingConfig};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bioms-cli",
    about = "BioMS athlete normalization CLI",
    long_about = "Scores athletes' BioMS metrics against a reference population: Z-scores, percentiles, and performance quadrants."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compare one athlete against a reference dataset
    Compare {
        /// Reference dataset (JSON array of row objects)
        #[arg(long)]
        reference: PathBuf,

        /// Athlete metrics (flat JSON object)
        #[arg(long)]
        athlete: PathBuf,

        /// Include narrative insight cards and the cohort used
        #[arg(long)]
        report: bool,
    },

    /// Score a whole team
    Batch {
        /// Team metrics (JSON array of flat athlete objects)
        #[arg(long)]
        team: PathBuf,

        /// Reference dataset for global comparison
        #[arg(long, required_unless_present = "intra_group")]
        reference: Option<PathBuf>,

        /// Compare athletes against the team itself
        #[arg(long, conflicts_with = "reference")]
        intra_group: bool,

        /// Print a team ranking on this metric instead of per-athlete maps
        #[arg(long)]
        rank_by: Option<String>,
    },

    /// Rank a group on one field test by Z-score
    Rank {
        /// Entries (JSON array of {"name", "value"} objects)
        #[arg(long)]
        input: PathBuf,

        /// Smaller values are better (e.g. sprint times)
        #[arg(long)]
        lower_is_better: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let config = NormalizationConfig::from_env();
    config.validate()?;
    debug!(?config, "Normalization configuration loaded");

    match cli.command {
        Command::Compare {
            reference,
            athlete,
            report,
        } => {
            commands::compare::run(&reference, &athlete, report, config)?;
        }
        Command::Batch {
            team,
            reference,
            intra_group: _,
            rank_by,
        } => {
            commands::batch::run(&team, reference.as_deref(), rank_by.as_deref(), &config)?;
        }
        Command::Rank {
            input,
            lower_is_better,
        } => {
            commands::rank::run(&input, lower_is_better)?;
        }
    }

    Ok(())
}
