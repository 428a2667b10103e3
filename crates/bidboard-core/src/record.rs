//! Application records: the procurement opportunities being filtered.
//!
//! Records are consumed read-only by the predicate engine and ranker; the
//! only mutation the tracker performs is marking an application submitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline stage of an application. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Draft,
    Ready,
    Submitted,
    Awarded,
    Lost,
}

/// One procurement opportunity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub title: String,
    pub organization: String,
    /// Category code (e.g. a NAICS code), matched exactly.
    pub category: String,
    /// Set-aside designations.
    pub tags: Vec<String>,
    pub vehicle: String,
    pub due_date: NaiveDate,
    pub status: ApplicationStatus,
    /// Proposal completion, 0–100.
    pub percent_complete: u8,
    pub fit_score: u32,
    /// Contract ceiling in dollars.
    pub ceiling: f64,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Application {
    /// Record a submission: status moves to Submitted, completion to 100%.
    pub fn mark_submitted(&mut self) {
        self.status = ApplicationStatus::Submitted;
        self.percent_complete = 100;
    }
}
