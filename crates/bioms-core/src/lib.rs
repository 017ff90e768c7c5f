// ABOUTME: Core types and constants for the BioMS normalization platform
// ABOUTME: Foundation crate with error handling, data models, and default constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

#![deny(unsafe_code)]

//! # BioMS Core
//!
//! Foundation crate providing shared types and constants for athlete
//! normalization. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Metric identities and default thresholds
//! - **models**: Reference datasets, cell coercion, and athlete metrics

/// Unified error handling system with standard error codes
pub mod errors;

/// Default constants organized by domain
pub mod constants;

/// Core data models (`ReferenceDataset`, `AthleteMetrics`)
pub mod models;
