//! Persisted results-view preference.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the result list is rendered. Stored as `"cards"` / `"table"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Table => "table",
        }
    }

    /// Interpret a stored value. Absent or unrecognised values fall back to
    /// the default view.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown view mode: {0} (expected cards or table)")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cards" => Ok(Self::Cards),
            "table" => Ok(Self::Table),
            other => Err(ParseViewModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_roundtrip() {
        assert_eq!(ViewMode::from_stored(Some("cards")), ViewMode::Cards);
        assert_eq!(ViewMode::from_stored(Some("table")), ViewMode::Table);
        assert_eq!(ViewMode::Cards.as_str(), "cards");
        assert_eq!(ViewMode::Table.as_str(), "table");
    }

    #[test]
    fn unknown_or_absent_stored_value_defaults_to_cards() {
        assert_eq!(ViewMode::from_stored(None), ViewMode::Cards);
        assert_eq!(ViewMode::from_stored(Some("grid")), ViewMode::Cards);
        assert_eq!(ViewMode::from_stored(Some("")), ViewMode::Cards);
    }
}
