//! Per-session browse state: search text, filters, current page, and the
//! open detail view.
//!
//! The session owns [`FilterState`] and the page number and enforces two
//! rules the presentation layer relies on:
//!
//! - any search or filter mutation resets the current page to 1, so a page
//!   number never points past the end of a newly filtered collection;
//! - a homeworld detail response is only accepted while the same character is
//!   still selected (a staleness guard, not a cancellation mechanism).

use tracing::warn;

use crate::application::filter::{
    FilmFilter, FilterState, HomeworldFilter, SpeciesFilter, apply_filters,
};
use crate::application::pagination::{PAGE_SIZE, Page, paginate};
use crate::domain::entities::{Character, Planet};

/// Mutable browse state for one user session.
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    search: String,
    filters: FilterState,
    page: u32,
    /// Canonical URL of the character whose detail view is open.
    selected: Option<String>,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    // Every mutator below represents an explicit user input event, so the
    // page resets unconditionally.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_species(&mut self, species: SpeciesFilter) {
        self.filters.species = species;
        self.page = 1;
    }

    pub fn set_homeworld(&mut self, homeworld: HomeworldFilter) {
        self.filters.homeworld = homeworld;
        self.page = 1;
    }

    pub fn set_film(&mut self, film: FilmFilter) {
        self.filters.film = film;
        self.page = 1;
    }

    /// Moves to `page`, clamped to `[1, total_pages]` for the current filter
    /// output over `records`.
    pub fn go_to_page(&mut self, page: u32, records: &[Character]) {
        let total = self.visible(records).total_pages;
        self.page = page.clamp(1, total);
    }

    pub fn next_page(&mut self, records: &[Character]) {
        self.go_to_page(self.page.saturating_add(1), records);
    }

    pub fn previous_page(&mut self, records: &[Character]) {
        self.go_to_page(self.page.saturating_sub(1).max(1), records);
    }

    /// Filters and paginates `records` for the current state.
    pub fn visible<'a>(&self, records: &'a [Character]) -> Page<&'a Character> {
        let filtered = apply_filters(records, &self.search, &self.filters);
        paginate(&filtered, self.page, PAGE_SIZE)
    }

    /// Opens the detail view for a character.
    pub fn select(&mut self, character_url: impl Into<String>) {
        self.selected = Some(character_url.into());
    }

    /// Closes the detail view.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Accepts a homeworld response only if the detail view still shows the
    /// character it was fetched for. Stale responses (view closed or moved to
    /// another record while the fetch was in flight) are discarded.
    pub fn accept_detail(&self, character_url: &str, planet: Planet) -> Option<Planet> {
        if self.selected.as_deref() == Some(character_url) {
            Some(planet)
        } else {
            warn!(character_url, "discarding stale homeworld response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            hair_color: "blond".to_string(),
            skin_color: "fair".to_string(),
            eye_color: "blue".to_string(),
            birth_year: "19BBY".to_string(),
            gender: "male".to_string(),
            homeworld: "https://swapi.dev/api/planets/1/".to_string(),
            films: vec![],
            species: vec![],
            vehicles: vec![],
            starships: vec![],
            created: Utc::now(),
            edited: Utc::now(),
            url: format!("https://swapi.dev/api/people/{name}/"),
        }
    }

    fn planet(name: &str) -> Planet {
        Planet {
            name: name.to_string(),
            rotation_period: "23".to_string(),
            orbital_period: "304".to_string(),
            diameter: "10465".to_string(),
            climate: "arid".to_string(),
            gravity: "1 standard".to_string(),
            terrain: "desert".to_string(),
            surface_water: "1".to_string(),
            population: "200000".to_string(),
            residents: vec![],
            films: vec![],
            created: Utc::now(),
            edited: Utc::now(),
            url: "https://swapi.dev/api/planets/1/".to_string(),
        }
    }

    fn records(n: usize) -> Vec<Character> {
        (0..n).map(|i| character(&format!("Char {i}"))).collect()
    }

    #[test]
    fn test_new_session_starts_on_page_one() {
        let session = BrowseSession::new();
        assert_eq!(session.page(), 1);
        assert_eq!(session.search(), "");
        assert_eq!(*session.filters(), FilterState::default());
    }

    #[test]
    fn test_every_filter_mutation_resets_page() {
        let data = records(30);

        let mut session = BrowseSession::new();
        session.go_to_page(3, &data);
        assert_eq!(session.page(), 3);
        session.set_search("luke");
        assert_eq!(session.page(), 1);

        session.go_to_page(2, &data);
        session.set_species(SpeciesFilter::Droid);
        assert_eq!(session.page(), 1);

        session.set_species(SpeciesFilter::All);
        session.go_to_page(2, &data);
        session.set_homeworld(HomeworldFilter::Naboo);
        assert_eq!(session.page(), 1);

        session.set_homeworld(HomeworldFilter::All);
        session.go_to_page(2, &data);
        session.set_film(FilmFilter::Episode(1));
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn test_page_navigation_clamps_to_bounds() {
        let data = records(30); // 3 pages of 12
        let mut session = BrowseSession::new();

        session.previous_page(&data);
        assert_eq!(session.page(), 1);

        session.go_to_page(99, &data);
        assert_eq!(session.page(), 3);

        session.next_page(&data);
        assert_eq!(session.page(), 3);

        session.previous_page(&data);
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn test_visible_pages_split_fourteen_records() {
        let data = records(14);
        let mut session = BrowseSession::new();

        let first = session.visible(&data);
        assert_eq!(first.items.len(), 12);
        assert!(first.has_next);
        assert!(!first.has_previous);

        session.next_page(&data);
        let second = session.visible(&data);
        assert_eq!(second.items.len(), 2);
        assert!(!second.has_next);
        assert!(second.has_previous);
    }

    #[test]
    fn test_detail_response_accepted_while_selected() {
        let mut session = BrowseSession::new();
        session.select("https://swapi.dev/api/people/1/");

        let accepted = session.accept_detail("https://swapi.dev/api/people/1/", planet("Tatooine"));
        assert_eq!(accepted.map(|p| p.name), Some("Tatooine".to_string()));
    }

    #[test]
    fn test_stale_detail_response_discarded_after_close() {
        let mut session = BrowseSession::new();
        session.select("https://swapi.dev/api/people/1/");
        session.close_detail();

        let accepted = session.accept_detail("https://swapi.dev/api/people/1/", planet("Tatooine"));
        assert!(accepted.is_none());
    }

    #[test]
    fn test_stale_detail_response_discarded_after_reselect() {
        let mut session = BrowseSession::new();
        session.select("https://swapi.dev/api/people/1/");
        session.select("https://swapi.dev/api/people/2/");

        let accepted = session.accept_detail("https://swapi.dev/api/people/1/", planet("Tatooine"));
        assert!(accepted.is_none());
        assert_eq!(session.selected(), Some("https://swapi.dev/api/people/2/"));
    }
}
