//! Predicate engine: decides whether a record satisfies a criteria value.
//!
//! Pure and total: no I/O, no clock reads (the reference date is an explicit
//! input), no panics for any well-formed record/criteria pair. All present
//! constraints are AND-combined; absent constraints never reject.

use chrono::{Days, NaiveDate};

use crate::criteria::{Criteria, Period};
use crate::record::Application;

/// True when `app` satisfies every present constraint of `criteria`.
///
/// `today` anchors the relative preset window; due dates strictly before it
/// fail the window even when within the preset length in absolute terms.
pub fn matches(app: &Application, criteria: &Criteria, today: NaiveDate) -> bool {
    if let Some(category) = &criteria.category
        && app.category != *category
    {
        return false;
    }

    if let Some(vehicle) = &criteria.vehicle
        && app.vehicle != *vehicle
    {
        return false;
    }

    if !criteria.tags.is_empty() && !criteria.tags.iter().any(|tag| app.tags.contains(tag)) {
        return false;
    }

    if !criteria.organizations.is_empty() && !criteria.organizations.contains(&app.organization) {
        return false;
    }

    if let Some(period) = &criteria.period
        && !within_period(app.due_date, period, today)
    {
        return false;
    }

    if let Some(min) = criteria.ceiling.min
        && app.ceiling < min
    {
        return false;
    }
    if let Some(max) = criteria.ceiling.max
        && app.ceiling > max
    {
        return false;
    }

    if !criteria.keywords.is_empty() {
        let haystack = keyword_haystack(app);
        if !criteria
            .keywords
            .iter()
            .any(|keyword| haystack.contains(keyword.as_str()))
        {
            return false;
        }
    }

    true
}

/// Filter a record set, preserving input order.
pub fn filter_applications(
    apps: &[Application],
    criteria: &Criteria,
    today: NaiveDate,
) -> Vec<Application> {
    apps.iter()
        .filter(|app| matches(app, criteria, today))
        .cloned()
        .collect()
}

fn within_period(due: NaiveDate, period: &Period, today: NaiveDate) -> bool {
    match period {
        Period::Preset { preset } => {
            if due < today {
                return false;
            }
            match today.checked_add_days(Days::new(preset.days())) {
                Some(end) => due <= end,
                // Window end past the calendar horizon: only the lower bound binds.
                None => true,
            }
        }
        Period::Range { range } => {
            if let Some(start) = range.start
                && due < start
            {
                return false;
            }
            if let Some(end) = range.end
                && due > end
            {
                return false;
            }
            true
        }
    }
}

/// Lowercased searchable text for the keyword rule: title plus the record's
/// own keywords, whitespace-joined.
fn keyword_haystack(app: &Application) -> String {
    let mut parts = Vec::with_capacity(app.keywords.len() + 1);
    parts.push(app.title.as_str());
    parts.extend(app.keywords.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}
