//! Distinct field values across a record set, for building filter option
//! lists (category/vehicle pickers, tag and organisation choices).

use std::collections::BTreeSet;

use crate::record::Application;

/// Distinct, sorted field values over a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub vehicles: Vec<String>,
    pub tags: Vec<String>,
    pub organizations: Vec<String>,
}

/// Collect the facet values of `apps`.
pub fn facets(apps: &[Application]) -> Facets {
    let mut categories = BTreeSet::new();
    let mut vehicles = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut organizations = BTreeSet::new();

    for app in apps {
        categories.insert(app.category.clone());
        vehicles.insert(app.vehicle.clone());
        tags.extend(app.tags.iter().cloned());
        organizations.insert(app.organization.clone());
    }

    Facets {
        categories: categories.into_iter().collect(),
        vehicles: vehicles.into_iter().collect(),
        tags: tags.into_iter().collect(),
        organizations: organizations.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ApplicationStatus;

    fn app(org: &str, category: &str, vehicle: &str, tags: &[&str]) -> Application {
        Application {
            id: format!("{org}-{category}"),
            title: "t".into(),
            organization: org.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            vehicle: vehicle.into(),
            due_date: "2025-10-01".parse().unwrap(),
            status: ApplicationStatus::Draft,
            percent_complete: 0,
            fit_score: 0,
            ceiling: 0.0,
            keywords: vec![],
            summary: None,
        }
    }

    #[test]
    fn facets_are_distinct_and_sorted() {
        let apps = vec![
            app("USDA", "541519", "Alliant 2", &["SB"]),
            app("GSA", "541512", "GSA MAS", &["8(a)", "WOSB"]),
            app("GSA", "541512", "GSA MAS", &["SB", "8(a)"]),
        ];
        let facets = facets(&apps);
        assert_eq!(facets.categories, vec!["541512", "541519"]);
        assert_eq!(facets.vehicles, vec!["Alliant 2", "GSA MAS"]);
        assert_eq!(facets.tags, vec!["8(a)", "SB", "WOSB"]);
        assert_eq!(facets.organizations, vec!["GSA", "USDA"]);
    }

    #[test]
    fn empty_record_set_yields_empty_facets() {
        assert_eq!(facets(&[]), Facets::default());
    }
}
