// ABOUTME: Re-exports command modules for bioms-cli
// ABOUTME: Provides access to the compare, batch, and rank commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

pub mod batch;
pub mod compare;
pub mod rank;
