//! Result ordering and the ephemeral quick-search refinement.
//!
//! Sorting is stable and non-mutating: ties keep their input order and the
//! caller's sequence is never reordered in place.

use std::str::FromStr;

use thiserror::Error;

use crate::record::Application;

/// Sort key for the visible result list. Single-field only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Earliest due date first.
    #[default]
    DueDate,
    /// Highest completion first.
    PercentComplete,
    /// Highest fit first.
    FitScore,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "dueDate",
            Self::PercentComplete => "percentComplete",
            Self::FitScore => "fitScore",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown sort key: {0} (expected dueDate, percentComplete, or fitScore)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dueDate" | "due-date" => Ok(Self::DueDate),
            "percentComplete" | "percent-complete" => Ok(Self::PercentComplete),
            "fitScore" | "fit-score" => Ok(Self::FitScore),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Return a new sequence ordered by `key`. The input slice keeps its order.
pub fn sort_applications(apps: &[Application], key: SortKey) -> Vec<Application> {
    let mut sorted = apps.to_vec();
    match key {
        SortKey::DueDate => sorted.sort_by_key(|app| app.due_date),
        SortKey::PercentComplete => {
            sorted.sort_by(|a, b| b.percent_complete.cmp(&a.percent_complete));
        }
        SortKey::FitScore => sorted.sort_by(|a, b| b.fit_score.cmp(&a.fit_score)),
    }
    sorted
}

/// Secondary free-text narrowing over title, organisation, and record
/// keywords. Case-insensitive substring; applied after criteria filtering
/// and before sorting; never part of the persisted criteria.
///
/// `summary` is deliberately not searched.
pub fn quick_search(apps: &[Application], term: &str) -> Vec<Application> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return apps.to_vec();
    }
    apps.iter()
        .filter(|app| {
            let haystack = format!(
                "{} {} {}",
                app.title,
                app.organization,
                app.keywords.join(" ")
            )
            .to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect()
}
