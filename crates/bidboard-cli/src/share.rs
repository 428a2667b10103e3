//! Share-link query strings: the criteria travel as a single `filters`
//! query parameter holding the codec's JSON form.

use bidboard_core::{Criteria, codec};
use url::form_urlencoded;

/// Query parameter carrying the encoded criteria.
pub const FILTER_QUERY_KEY: &str = "filters";

/// Build the query-string fragment for a share link (no leading `?`).
pub fn build_share_query(criteria: &Criteria) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(FILTER_QUERY_KEY, &codec::encode(criteria))
        .finish()
}

/// Extract criteria from a query string, if it carries a usable `filters`
/// parameter. An absent parameter or an undecodable value means "no usable
/// criteria" and the caller falls back elsewhere.
pub fn criteria_from_query(query: &str) -> Option<Criteria> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == FILTER_QUERY_KEY)
        .map(|(_, value)| value.into_owned())?;
    codec::decode(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidboard_core::{Period, PresetWindow};

    #[test]
    fn share_query_roundtrips() {
        let mut criteria = Criteria::default();
        criteria.category = Some("541512".into());
        criteria.set_keywords(["cloud", "zero trust"]);
        criteria.period = Some(Period::preset(PresetWindow::Days60));

        let query = build_share_query(&criteria);
        assert!(query.starts_with("filters="));
        assert_eq!(criteria_from_query(&query), Some(criteria));
    }

    #[test]
    fn json_punctuation_is_percent_encoded() {
        let mut criteria = Criteria::default();
        criteria.set_tags(["8(a)"]);
        let query = build_share_query(&criteria);
        assert!(!query.contains('{'));
        assert!(!query.contains('"'));
        assert_eq!(criteria_from_query(&query), Some(criteria));
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let query = format!("?{}", build_share_query(&Criteria::default()));
        assert_eq!(criteria_from_query(&query), Some(Criteria::default()));
    }

    #[test]
    fn absent_or_unusable_parameter_yields_none() {
        assert_eq!(criteria_from_query(""), None);
        assert_eq!(criteria_from_query("sort=dueDate"), None);
        assert_eq!(criteria_from_query("filters=not%20json"), None);
    }

    #[test]
    fn other_parameters_are_ignored() {
        let query = format!("view=table&{}&sort=fitScore", build_share_query(&Criteria::default()));
        assert_eq!(criteria_from_query(&query), Some(Criteria::default()));
    }
}
