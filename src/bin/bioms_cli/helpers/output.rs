// ABOUTME: Output formatting helpers for bioms-cli
// ABOUTME: Every command prints exactly one pretty JSON document on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use bioms_normalizer::errors::AppResult;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
