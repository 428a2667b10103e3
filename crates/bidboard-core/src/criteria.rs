//! Filter criteria model: the canonical representation of a user's search
//! constraints, independent of any single application record.
//!
//! Set-valued fields are canonicalised on insertion (trimmed, empties
//! dropped, deduplicated, sorted; keywords additionally lowercased) so that
//! [`crate::codec::encode`] is deterministic regardless of the order the
//! fields were filled in.

use chrono::NaiveDate;
use serde::Serialize;

/// Relative due-date window, counted forward from "today".
///
/// Only 30, 60, and 90 day windows exist; anything else decoded from a
/// stored string is treated as "no period constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum PresetWindow {
    Days30,
    Days60,
    Days90,
}

impl PresetWindow {
    /// Window length in days.
    pub fn days(self) -> u64 {
        match self {
            Self::Days30 => 30,
            Self::Days60 => 60,
            Self::Days90 => 90,
        }
    }

    /// Recognise a stored preset value. Returns `None` outside {30, 60, 90}.
    pub fn from_days(days: i64) -> Option<Self> {
        match days {
            30 => Some(Self::Days30),
            60 => Some(Self::Days60),
            90 => Some(Self::Days90),
            _ => None,
        }
    }
}

impl From<PresetWindow> for u8 {
    fn from(preset: PresetWindow) -> Self {
        preset.days() as u8
    }
}

/// Explicit due-date range with independently-optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Due-date constraint: a relative preset window or an explicit range.
///
/// Absence of any period constraint is `Option::<Period>::None`; the tag is
/// explicit rather than inferred from which fields happen to be set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Period {
    Preset { preset: PresetWindow },
    Range { range: DateRange },
}

impl Period {
    pub fn preset(window: PresetWindow) -> Self {
        Self::Preset { preset: window }
    }

    /// Build an explicit range constraint.
    ///
    /// A range with both bounds absent carries no constraint and collapses
    /// to `None`. The codec applies the same rule on decode, so the collapse
    /// is uniform across construction paths.
    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        let range = DateRange { start, end };
        if range.is_unbounded() {
            None
        } else {
            Some(Self::Range { range })
        }
    }
}

/// Contract ceiling bounds in dollars. Cross-field rules (ordering,
/// non-negativity) are checked by [`crate::validate::validate_ceiling`],
/// not here and not by the predicate engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CeilingRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl CeilingRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// The full set of user-chosen filter constraints.
///
/// Created empty (all constraints absent), rehydrated by the codec from a
/// stored or shared string, and replaced wholesale on edits. An absent
/// field never rejects a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Category code, exact match.
    pub category: Option<String>,
    /// Set-aside tags; any one overlap with a record's tags suffices.
    pub tags: Vec<String>,
    /// Contract vehicle, exact match.
    pub vehicle: Option<String>,
    /// Owning organisations; a record's organisation must be a member.
    pub organizations: Vec<String>,
    pub period: Option<Period>,
    pub ceiling: CeilingRange,
    /// Lowercased search keywords; any one substring match suffices.
    pub keywords: Vec<String>,
}

impl Criteria {
    /// Replace the tag set, canonicalising it.
    pub fn set_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = canonical_terms(tags);
    }

    /// Replace the organisation set, canonicalising it.
    pub fn set_organizations<I, T>(&mut self, organizations: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.organizations = canonical_terms(organizations);
    }

    /// Replace the keyword set. Keywords are case-folded to lowercase on
    /// insertion; duplicates are silently ignored.
    pub fn set_keywords<I, T>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.keywords = canonical_keywords(keywords);
    }

    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        !self.has_active_constraints()
    }

    /// True when at least one field would reject some record.
    pub fn has_active_constraints(&self) -> bool {
        self.category.is_some()
            || self.vehicle.is_some()
            || !self.tags.is_empty()
            || !self.organizations.is_empty()
            || self.period.is_some()
            || !self.ceiling.is_unbounded()
            || !self.keywords.is_empty()
    }

    /// Combine this criteria with a partial override.
    ///
    /// Every present patch field fully replaces the corresponding base
    /// field: replacing `tags` replaces the whole set, it does not union.
    /// The result owns fresh copies of every list field, so mutating it
    /// never leaks into the base.
    pub fn merge(&self, patch: &CriteriaPatch) -> Criteria {
        let mut next = self.clone();
        if let Some(category) = &patch.category {
            next.category = category.clone();
        }
        if let Some(tags) = &patch.tags {
            next.set_tags(tags.iter().cloned());
        }
        if let Some(vehicle) = &patch.vehicle {
            next.vehicle = vehicle.clone();
        }
        if let Some(organizations) = &patch.organizations {
            next.set_organizations(organizations.iter().cloned());
        }
        if let Some(period) = &patch.period {
            next.period = *period;
        }
        if let Some(ceiling) = &patch.ceiling {
            next.ceiling = *ceiling;
        }
        if let Some(keywords) = &patch.keywords {
            next.set_keywords(keywords.iter().cloned());
        }
        next
    }
}

/// Partial criteria override for [`Criteria::merge`].
///
/// `None` means "leave the base field alone"; `Some` replaces the field
/// outright, including `Some(None)` for clearing a nullable field.
#[derive(Debug, Clone, Default)]
pub struct CriteriaPatch {
    pub category: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub vehicle: Option<Option<String>>,
    pub organizations: Option<Vec<String>>,
    pub period: Option<Option<Period>>,
    pub ceiling: Option<CeilingRange>,
    pub keywords: Option<Vec<String>>,
}

/// Canonicalise a term set: trim, drop empties, dedupe, sort.
pub(crate) fn canonical_terms<I, T>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut out: Vec<String> = terms
        .into_iter()
        .map(|t| t.into().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Canonicalise a keyword set: lowercase, then as [`canonical_terms`].
pub(crate) fn canonical_keywords<I, T>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    canonical_terms(keywords.into_iter().map(|k| k.into().to_lowercase()))
}
