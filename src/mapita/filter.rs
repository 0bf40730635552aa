//! Derives the visible subset of POIs from a text query and active
//! category filters. Both restrictions compose by conjunction, and the
//! result is always a stable subsequence of the input — the filter never
//! reorders.

use crate::model::Poi;
use std::collections::BTreeSet;

/// The current filter selection: a free-text query and a set of active
/// categories. Empty query and empty set mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeSet<String>,
}

impl FilterState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty()
    }

    pub fn apply<'a>(&self, pois: &'a [Poi]) -> Vec<&'a Poi> {
        filter_pois(pois, &self.query, &self.categories)
    }
}

/// Keeps POIs whose category is in `categories` (when non-empty) and whose
/// title or description contains `query` case-insensitively (when non-blank).
pub fn filter_pois<'a>(
    pois: &'a [Poi],
    query: &str,
    categories: &BTreeSet<String>,
) -> Vec<&'a Poi> {
    let needle = query.trim().to_lowercase();

    pois.iter()
        .filter(|poi| categories.is_empty() || categories.contains(&poi.category))
        .filter(|poi| {
            if needle.is_empty() {
                return true;
            }
            poi.title.to_lowercase().contains(&needle)
                || poi.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_pois, LngLat};

    fn sample() -> Vec<Poi> {
        vec![
            Poi::new(
                "museo-oro",
                "Museo del Oro",
                "Gran colección precolombina de oro.",
                "museum",
                LngLat::new(-74.072, 4.60192),
            ),
            Poi::new(
                "parque-simon",
                "Parque Simón Bolívar",
                "El parque metropolitano más grande de Bogotá.",
                "park",
                LngLat::new(-74.09389, 4.65806),
            ),
        ]
    }

    #[test]
    fn no_restrictions_returns_everything() {
        let pois = sample();
        let visible = filter_pois(&pois, "", &BTreeSet::new());
        assert_eq!(visible.len(), pois.len());
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let pois = sample();
        let visible = filter_pois(&pois, "museo", &BTreeSet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "museo-oro");
    }

    #[test]
    fn query_matches_description_too() {
        let pois = sample();
        let visible = filter_pois(&pois, "metropolitano", &BTreeSet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "parque-simon");
    }

    #[test]
    fn query_is_trimmed() {
        let pois = sample();
        let visible = filter_pois(&pois, "  museo  ", &BTreeSet::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "museo-oro");
    }

    #[test]
    fn categories_and_query_compose_by_conjunction() {
        let pois = default_pois();
        let cats: BTreeSet<String> = ["museum".to_string()].into();

        let visible = filter_pois(&pois, "botero", &cats);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "museo-botero");

        // Query matches but category does not.
        let park_only: BTreeSet<String> = ["park".to_string()].into();
        assert!(filter_pois(&pois, "botero", &park_only).is_empty());
    }

    #[test]
    fn result_is_stable_subsequence() {
        let pois = default_pois();
        let cats: BTreeSet<String> = ["museum".to_string(), "park".to_string()].into();
        let visible = filter_pois(&pois, "", &cats);

        // Relative order of survivors matches the input order.
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| pois.iter().position(|p| p.id == v.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filtering_is_idempotent() {
        let pois = default_pois();
        let cats: BTreeSet<String> = ["plaza".to_string()].into();

        let once: Vec<Poi> = filter_pois(&pois, "plaza", &cats)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Poi> = filter_pois(&once, "plaza", &cats)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_state_toggle() {
        let mut state = FilterState::default();
        assert!(state.is_empty());

        state.toggle_category("museum");
        assert!(state.categories.contains("museum"));
        state.toggle_category("museum");
        assert!(state.categories.is_empty());
    }
}
