// ABOUTME: Core data models for reference datasets and athlete metrics
// ABOUTME: Re-exports CellValue, ReferenceDataset, and AthleteMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

/// Athlete metric records
mod athlete;
/// Reference dataset and cell coercion
mod dataset;

pub use athlete::AthleteMetrics;
pub use dataset::{CellValue, ReferenceDataset};
