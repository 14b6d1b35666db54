//! Site visibility filtering.
//!
//! A [`FilterState`] combines three independent axes (category, era
//! bucket, free-text search) into a single visibility predicate. The
//! predicate is pure and cheap: the rendering surface re-evaluates it for
//! every site on every keystroke or selection change.

use crate::catalog::Catalog;
use crate::domain::{Category, EraBucket, Site};

/// Category axis of the filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only sites with this category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter value from a UI control.
    ///
    /// `"all"`, empty and unrecognized values all map to `All`: filter
    /// values only ever originate from a closed set of controls, so an
    /// unknown value fails open to maximum visibility rather than
    /// erroring.
    pub fn parse(s: &str) -> CategoryFilter {
        match Category::parse(s) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }

    /// Does `site` pass this axis?
    pub fn matches(&self, site: &Site) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => site.category == *category,
        }
    }
}

/// Era axis of the filter: everything, or one era bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EraFilter {
    /// No era restriction.
    #[default]
    All,
    /// Only sites whose era label classifies into this bucket.
    Only(EraBucket),
}

impl EraFilter {
    /// Parse a filter value from a UI control; unknown values fail open.
    pub fn parse(s: &str) -> EraFilter {
        match EraBucket::parse(s) {
            Some(bucket) => EraFilter::Only(bucket),
            None => EraFilter::All,
        }
    }

    /// Does `site` pass this axis?
    pub fn matches(&self, site: &Site) -> bool {
        match self {
            EraFilter::All => true,
            EraFilter::Only(bucket) => EraBucket::classify(&site.era) == *bucket,
        }
    }
}

/// The combined filter state: three independent axes with "all"/empty as
/// the default member of each.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Category axis.
    pub category: CategoryFilter,
    /// Era bucket axis.
    pub era: EraFilter,
    /// Case-insensitive substring search over site name and era label.
    pub search: String,
}

impl FilterState {
    /// Returns true iff `site` passes all three axes.
    ///
    /// The search axis matches when the search text is empty or is a
    /// case-insensitive substring of the site's name or era label.
    pub fn is_visible(&self, site: &Site) -> bool {
        if !self.category.matches(site) {
            return false;
        }
        if !self.era.matches(site) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        site.name.to_lowercase().contains(&needle) || site.era.to_lowercase().contains(&needle)
    }
}

/// The visibility subset of a catalog, in catalog order.
pub fn visible_sites<'a>(
    catalog: &'a Catalog,
    state: &'a FilterState,
) -> impl Iterator<Item = &'a std::sync::Arc<Site>> {
    catalog.iter().filter(|site| state.is_visible(site))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, SiteDescription, SiteKey};

    fn site(name: &str, category: Category, era: &str) -> Site {
        Site {
            key: SiteKey::parse("test-site").unwrap(),
            name: name.to_string(),
            category,
            era: era.to_string(),
            coordinates: Coordinates::new(13.0, 76.0).unwrap(),
            highlights: vec![],
            description: SiteDescription {
                history: String::new(),
                architecture: String::new(),
                timeline: vec![],
            },
        }
    }

    #[test]
    fn default_state_shows_everything() {
        let state = FilterState::default();
        let s = site("Hampi", Category::Unesco, "Vijayanagara (14th–16th c.)");
        assert!(state.is_visible(&s));
    }

    #[test]
    fn category_mismatch_hides() {
        let state = FilterState {
            category: CategoryFilter::Only(Category::Unesco),
            ..Default::default()
        };
        let s = site("Badami Cave Temples", Category::Heritage, "Chalukya (6th–7th c.)");
        assert!(!state.is_visible(&s));
    }

    #[test]
    fn category_match_shows() {
        let state = FilterState {
            category: CategoryFilter::Only(Category::Unesco),
            ..Default::default()
        };
        let s = site("Hampi", Category::Unesco, "Vijayanagara (14th–16th c.)");
        assert!(state.is_visible(&s));
    }

    #[test]
    fn era_bucket_filtering() {
        let state = FilterState {
            era: EraFilter::Only(EraBucket::Medieval),
            ..Default::default()
        };
        let hoysala = site("Belur", Category::Heritage, "Hoysala (12th c.)");
        let imperial = site("Hampi", Category::Unesco, "Vijayanagara (14th–16th c.)");
        assert!(state.is_visible(&hoysala));
        assert!(!state.is_visible(&imperial));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let state = FilterState {
            search: "hampi".to_string(),
            ..Default::default()
        };
        let s = site("Hampi (Group of Monuments)", Category::Unesco, "Vijayanagara");
        assert!(state.is_visible(&s));
    }

    #[test]
    fn search_matches_era_label() {
        let state = FilterState {
            search: "hoysala".to_string(),
            ..Default::default()
        };
        let s = site("Belur Chennakeshava Temple", Category::Heritage, "Hoysala (12th c.)");
        assert!(state.is_visible(&s));
    }

    #[test]
    fn search_mismatch_hides() {
        let state = FilterState {
            search: "gol gumbaz".to_string(),
            ..Default::default()
        };
        let s = site("Belur Chennakeshava Temple", Category::Heritage, "Hoysala (12th c.)");
        assert!(!state.is_visible(&s));
    }

    #[test]
    fn all_axes_must_pass() {
        let state = FilterState {
            category: CategoryFilter::Only(Category::Unesco),
            era: EraFilter::Only(EraBucket::Empire),
            search: "hampi".to_string(),
        };
        let matches = site("Hampi", Category::Unesco, "Vijayanagara (14th–16th c.)");
        let wrong_category = site("Hampi replica", Category::Heritage, "Vijayanagara");
        let wrong_era = site("Hampi annex", Category::Unesco, "Hoysala (12th c.)");
        let wrong_name = site("Pattadakal", Category::Unesco, "Vijayanagara Empire");

        assert!(state.is_visible(&matches));
        assert!(!state.is_visible(&wrong_category));
        assert!(!state.is_visible(&wrong_era));
        assert!(!state.is_visible(&wrong_name));
    }

    #[test]
    fn parse_fails_open() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("garbage"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("UNESCO"),
            CategoryFilter::Only(Category::Unesco)
        );

        assert_eq!(EraFilter::parse("all"), EraFilter::All);
        assert_eq!(EraFilter::parse("garbage"), EraFilter::All);
        assert_eq!(
            EraFilter::parse("Empire"),
            EraFilter::Only(EraBucket::Empire)
        );
    }

    #[test]
    fn visible_sites_over_catalog() {
        let catalog = crate::catalog::karnataka_catalog().unwrap();

        let everything = FilterState::default();
        assert_eq!(visible_sites(&catalog, &everything).count(), catalog.len());

        let unesco_only = FilterState {
            category: CategoryFilter::Only(Category::Unesco),
            ..Default::default()
        };
        let unesco: Vec<_> = visible_sites(&catalog, &unesco_only)
            .map(|s| s.key.as_str().to_string())
            .collect();
        assert_eq!(unesco, vec!["hampi", "pattadakal", "western_ghats"]);
    }
}
