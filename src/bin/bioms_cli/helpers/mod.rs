// ABOUTME: Re-exports helper modules for bioms-cli
// ABOUTME: Provides access to JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

pub mod output;
