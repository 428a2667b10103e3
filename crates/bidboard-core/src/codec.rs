//! Criteria codec: lossless round-trip encoding of criteria to and from a
//! transportable JSON string, for the share-link query parameter and the
//! persisted key-value store.
//!
//! `encode` is deterministic: the same logical criteria always produces the
//! same string, so draft-vs-applied comparisons reduce to string equality.
//! `decode` never panics; structurally invalid input is a typed failure,
//! and individually invalid sub-values are coerced to their neutral value.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::criteria::{
    CeilingRange, Criteria, Period, PresetWindow, canonical_keywords, canonical_terms,
};

/// Structurally unusable criteria string. The caller falls back to the
/// default criteria; this is never fatal.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("criteria string is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("criteria string is not a JSON object")]
    NotAnObject,
}

/// Encode criteria as a compact JSON string.
///
/// Field order is fixed by the struct definition and set fields are held in
/// canonical order, so equal criteria encode identically.
pub fn encode(criteria: &Criteria) -> String {
    serde_json::to_string(criteria).expect("criteria serialization is infallible")
}

/// Decode a stored or shared criteria string.
///
/// Unknown and missing fields take the empty criteria's value. Sub-values
/// that are individually malformed (non-numeric ceiling bound, out-of-set
/// preset, unparseable date, empty string entries) are dropped rather than
/// failing the decode. A range with both bounds absent collapses to no
/// period constraint, matching construction.
pub fn decode(raw: &str) -> Result<Criteria, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(fields) = value else {
        return Err(DecodeError::NotAnObject);
    };

    Ok(Criteria {
        category: string_or_none(fields.get("category")),
        tags: term_set(fields.get("tags")),
        vehicle: string_or_none(fields.get("vehicle")),
        organizations: term_set(fields.get("organizations")),
        period: period_or_none(fields.get("period")),
        ceiling: ceiling_range(fields.get("ceiling")),
        keywords: keyword_set(fields.get("keywords")),
    })
}

/// Non-empty trimmed string, else absent.
fn string_or_none(value: Option<&Value>) -> Option<String> {
    let raw = value?.as_str()?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// String entries of an array, canonicalised. Non-string entries and
/// non-array values are dropped.
fn term_set(value: Option<&Value>) -> Vec<String> {
    canonical_terms(string_entries(value))
}

fn keyword_set(value: Option<&Value>) -> Vec<String> {
    canonical_keywords(string_entries(value))
}

fn string_entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Finite number, else absent. Numeric strings are coerced, matching what
/// number inputs historically produced in stored state.
fn number_or_none(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn date_or_none(value: Option<&Value>) -> Option<NaiveDate> {
    value?.as_str()?.trim().parse().ok()
}

fn ceiling_range(value: Option<&Value>) -> CeilingRange {
    match value {
        Some(Value::Object(fields)) => CeilingRange {
            min: number_or_none(fields.get("min")),
            max: number_or_none(fields.get("max")),
        },
        _ => CeilingRange::default(),
    }
}

fn period_or_none(value: Option<&Value>) -> Option<Period> {
    let Some(Value::Object(fields)) = value else {
        return None;
    };

    if let Some(preset) = fields.get("preset") {
        let days = preset.as_i64()?;
        let Some(window) = PresetWindow::from_days(days) else {
            debug!(days, "discarding unrecognised period preset");
            return None;
        };
        return Some(Period::preset(window));
    }

    if let Some(Value::Object(range)) = fields.get("range") {
        // Both bounds absent carries no constraint; Period::range collapses it.
        return Period::range(date_or_none(range.get("start")), date_or_none(range.get("end")));
    }

    None
}
