// ABOUTME: JSON file loaders for reference datasets, athletes, teams, and ranking entries
// ABOUTME: Maps file and parse failures onto AppError with the offending path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

use bioms_core::constants::metrics;
use bioms_core::errors::{AppError, AppResult};
use bioms_core::models::{AthleteMetrics, CellValue, ReferenceDataset};
use bioms_intelligence::ranking::ScoreEntry;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

fn read_text(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}

/// Read and parse a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON
pub fn read_json(path: &Path) -> AppResult<Value> {
    serde_json::from_str(&read_text(path)?)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}

/// Load a reference dataset (JSON array of row objects)
///
/// # Errors
///
/// Returns an error if the file is unreadable or not an array of objects
pub fn load_reference(path: &Path) -> AppResult<ReferenceDataset> {
    let dataset = ReferenceDataset::from_json_rows(&read_json(path)?)
        .map_err(|e| e.with_resource_id(path.display().to_string()))?;
    debug!(
        path = %path.display(),
        rows = dataset.len(),
        "Loaded reference dataset"
    );
    Ok(dataset)
}

/// Load one athlete (flat JSON object)
///
/// # Errors
///
/// Returns an error if the file is unreadable or not a JSON object
pub fn load_athlete(path: &Path, sex_column: &str) -> AppResult<AthleteMetrics> {
    AthleteMetrics::from_json_str(&read_text(path)?, metrics::ID_COLUMN, sex_column)
        .map_err(|e| e.with_resource_id(path.display().to_string()))
}

/// Load a team (JSON array of flat athlete objects)
///
/// Elements that are not objects are skipped.
///
/// # Errors
///
/// Returns an error if the file is unreadable or not a JSON array
pub fn load_team(path: &Path, sex_column: &str) -> AppResult<Vec<AthleteMetrics>> {
    let value = read_json(path)?;
    let rows = value.as_array().ok_or_else(|| {
        AppError::invalid_format("Team data must be a JSON array of athlete objects")
            .with_resource_id(path.display().to_string())
    })?;

    let team = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let object = row.as_object();
            if object.is_none() {
                warn!(index, "Skipping team row that is not a JSON object");
            }
            object.map(|object| {
                AthleteMetrics::from_json_object(object, metrics::ID_COLUMN, sex_column)
            })
        })
        .collect();
    Ok(team)
}

/// Load ranking entries (JSON array of `{"name": .., "value": ..}` objects)
///
/// Rows without a name or a numeric value are skipped.
///
/// # Errors
///
/// Returns an error if the file is unreadable or not a JSON array
pub fn load_score_entries(path: &Path) -> AppResult<Vec<ScoreEntry>> {
    let value = read_json(path)?;
    let rows = value.as_array().ok_or_else(|| {
        AppError::invalid_format("Ranking input must be a JSON array of entries")
            .with_resource_id(path.display().to_string())
    })?;

    let entries = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let name = row.get("name").and_then(Value::as_str);
            let number = row
                .get("value")
                .and_then(|cell| CellValue::from(cell).as_finite());
            match (name, number) {
                (Some(name), Some(number)) => Some(ScoreEntry::new(name, number)),
                _ => {
                    warn!(index, "Skipping ranking entry without a name or numeric value");
                    None
                }
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioms_core::errors::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let error = read_json(Path::new("/nonexistent/bioms/reference.json")).unwrap_err();
        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(error.context.resource_id.is_some());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let file = json_file("[{");
        let error = load_reference(file.path()).unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_load_team_skips_non_objects() {
        let file = json_file(r#"[{"ID": "Ana Souza", "SEXO": 0, "BioMS_1": 2.5}, 7, null]"#);
        let team = load_team(file.path(), "SEXO").unwrap();
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].id.as_deref(), Some("Ana Souza"));
        assert_eq!(team[0].value("BioMS_1"), Some(2.5));
    }

    #[test]
    fn test_load_score_entries_skips_incomplete_rows() {
        let file = json_file(
            r#"[{"name": "Ana", "value": 31.2}, {"name": "Bia", "value": "28,0"}, {"value": 30}, {"name": "Caio", "value": "29.5"}]"#,
        );
        let entries = load_score_entries(file.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Caio"]);
    }

    #[test]
    fn test_load_athlete_requires_object() {
        let file = json_file("[1, 2]");
        let error = load_athlete(file.path(), "SEXO").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(error.context.resource_id.is_some());
    }
}
