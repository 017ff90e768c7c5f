// ABOUTME: Comparison cohort selection by sex indicator with minimum-size fallback
// ABOUTME: Cohort is a borrowed row-subset view; every failure path falls back to the full dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioMS Normalizer Contributors

//! Cohort selection
//!
//! Selection never fails. Each fallback is an explicit branch recorded in
//! [`CohortBasis`] so callers and tests can see why a cohort was widened.

use bioms_core::constants::{metrics, normalization};
use bioms_core::models::{CellValue, ReferenceDataset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a cohort was derived from the reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CohortBasis {
    /// Rows sharing the athlete's sex group
    SexFiltered {
        /// Sex group matched
        sex: i64,
    },
    /// Full dataset because too few rows matched the sex group
    UndersizedGroup {
        /// Sex group requested
        sex: i64,
        /// Rows that matched
        matched: usize,
    },
    /// Full dataset because the reference has no sex column
    MissingSexColumn,
    /// Full dataset because a reference sex cell could not be coerced to an integer
    UnreadableSexColumn,
    /// Full dataset because the athlete's sex indicator could not be parsed
    UnknownAthleteSex,
}

impl CohortBasis {
    /// Whether the cohort is the unfiltered reference dataset
    #[must_use]
    pub const fn is_full_dataset(&self) -> bool {
        !matches!(self, Self::SexFiltered { .. })
    }
}

/// Row-subset view of a reference dataset used as the comparison population
#[derive(Debug, Clone)]
pub struct Cohort<'a> {
    dataset: &'a ReferenceDataset,
    rows: Vec<usize>,
    basis: CohortBasis,
}

impl<'a> Cohort<'a> {
    /// Cohort spanning every reference row
    #[must_use]
    pub fn full(dataset: &'a ReferenceDataset, basis: CohortBasis) -> Self {
        Self {
            dataset,
            rows: (0..dataset.len()).collect(),
            basis,
        }
    }

    /// Number of rows in the cohort
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cohort has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How this cohort was selected
    #[must_use]
    pub const fn basis(&self) -> CohortBasis {
        self.basis
    }

    /// Reference row indices included in the cohort
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Cohort cells of a column, `None` if the column does not exist
    #[must_use]
    pub fn cells(&self, column: &str) -> Option<impl Iterator<Item = &'a CellValue> + '_> {
        let cells = self.dataset.column(column)?;
        Some(self.rows.iter().filter_map(move |&row| cells.get(row)))
    }
}

/// Picks the comparison cohort for an athlete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortSelector {
    sex_column: String,
    min_cohort_size: usize,
}

impl Default for CohortSelector {
    fn default() -> Self {
        Self::new(metrics::SEX_COLUMN, normalization::MIN_COHORT_SIZE)
    }
}

impl CohortSelector {
    /// Create a selector filtering on `sex_column`
    #[must_use]
    pub fn new(sex_column: impl Into<String>, min_cohort_size: usize) -> Self {
        Self {
            sex_column: sex_column.into(),
            min_cohort_size,
        }
    }

    /// Select the cohort for an athlete of sex group `sex`
    ///
    /// `None` means the athlete's indicator was unreadable and no filter applies.
    #[must_use]
    pub fn select<'a>(&self, reference: &'a ReferenceDataset, sex: Option<i64>) -> Cohort<'a> {
        let Some(sex) = sex else {
            debug!("Athlete sex indicator unreadable, comparing against full reference");
            return Cohort::full(reference, CohortBasis::UnknownAthleteSex);
        };

        let Some(sex_cells) = reference.column(&self.sex_column) else {
            debug!(
                column = %self.sex_column,
                "Reference has no sex column, comparing against full reference"
            );
            return Cohort::full(reference, CohortBasis::MissingSexColumn);
        };

        let mut rows = Vec::new();
        for (row, cell) in sex_cells.iter().enumerate() {
            match coerce_reference_sex(cell) {
                Some(group) if group == sex => rows.push(row),
                Some(_) => {}
                None => {
                    debug!(
                        column = %self.sex_column,
                        row,
                        "Reference sex cell is not coercible, comparing against full reference"
                    );
                    return Cohort::full(reference, CohortBasis::UnreadableSexColumn);
                }
            }
        }

        if rows.is_empty() || rows.len() < self.min_cohort_size {
            debug!(
                sex,
                matched = rows.len(),
                min_cohort_size = self.min_cohort_size,
                "Sex-filtered cohort too small, comparing against full reference"
            );
            return Cohort::full(
                reference,
                CohortBasis::UndersizedGroup {
                    sex,
                    matched: rows.len(),
                },
            );
        }

        Cohort {
            dataset: reference,
            rows,
            basis: CohortBasis::SexFiltered { sex },
        }
    }
}

/// Select a cohort with the default sex column and minimum size
#[must_use]
pub fn select_cohort(reference: &ReferenceDataset, sex: i64) -> Cohort<'_> {
    CohortSelector::default().select(reference, Some(sex))
}

/// Coerce a reference sex cell to its integer group
///
/// Missing and non-numeric cells count as group 0. Returns `None` only for
/// infinite values, which have no integer group.
fn coerce_reference_sex(cell: &CellValue) -> Option<i64> {
    match cell.as_number() {
        None => Some(normalization::DEFAULT_SEX_GROUP),
        Some(value) if value.is_nan() => Some(normalization::DEFAULT_SEX_GROUP),
        Some(value) if value.is_infinite() => None,
        Some(value) => Some(value.trunc() as i64),
    }
}

/// Resolve an athlete's raw sex indicator to a group
///
/// An absent indicator means the default group; a present indicator that is
/// null, non-numeric, or non-finite is unreadable (`None`).
#[must_use]
pub fn resolve_athlete_sex(indicator: Option<&CellValue>) -> Option<i64> {
    match indicator {
        None => Some(normalization::DEFAULT_SEX_GROUP),
        Some(cell) => cell.as_finite().map(|value| value.trunc() as i64),
    }
}
