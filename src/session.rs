//! Browse session - collection state, load lifecycle, and facet filtering
//!
//! The session owns the in-memory game collection and the facet list derived
//! from it. Loading replaces the collection wholesale: after `load` returns,
//! the collection is either the full API result or empty, never partially
//! populated. Filter changes re-render from memory; no re-fetch occurs.
//!
//! Load failures are deliberately swallowed here. The error is reported on
//! the UI's diagnostic channel and the session proceeds with an empty
//! collection, so the frontend shows its no-results placeholder instead of
//! an error screen. A failed load is indistinguishable from a successful
//! load of zero games, and there is no retry transition.

use crate::catalog::{Game, GameSource};
use crate::facets::{ALL_GENRES, build_facets};
use crate::ui::CatalogUi;
use crate::view::{cards_for, counter_label};

/// Lifecycle of the one-shot load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load attempted yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch and validation succeeded
    Loaded,
    /// Fetch or validation failed; collection is empty
    LoadFailed,
}

impl LoadState {
    /// Whether the session has settled and filtering may fire
    ///
    /// Both terminal states are ready; `LoadFailed` behaves exactly like
    /// `Loaded` with an empty collection.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Loaded | Self::LoadFailed)
    }
}

/// Owner of the loaded collection and its facet index
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    games: Vec<Game>,
    facets: Vec<String>,
    state: LoadState,
}

impl BrowseSession {
    /// Create an idle session with an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded collection
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// The facet list derived from the collection (synthetic marker first)
    #[must_use]
    pub fn facets(&self) -> &[String] {
        &self.facets
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Fetch the collection and render the full result set
    pub fn load(&mut self, source: &dyn GameSource, ui: &mut dyn CatalogUi) {
        self.load_with_facet(source, ui, ALL_GENRES);
    }

    /// Fetch the collection and render the subset selected by `facet`
    ///
    /// The loading indicator is shown before the fetch and hidden after the
    /// render, exactly once per invocation, for both outcomes. Facet options
    /// and the result set are always refreshed, even after a failure: a
    /// failed load leaves the "all"-only option set and the placeholder on
    /// screen.
    pub fn load_with_facet(&mut self, source: &dyn GameSource, ui: &mut dyn CatalogUi, facet: &str) {
        self.state = LoadState::Loading;
        ui.set_loading(true);

        match source.load() {
            Ok(games) => {
                self.games = games;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                ui.diagnostic(&format!("Catalog fetch failed: {e}"));
                self.games = Vec::new();
                self.state = LoadState::LoadFailed;
            }
        }

        self.facets = build_facets(&self.games);
        ui.set_facets(&self.facets);
        self.on_facet_change(facet, ui);
        ui.set_loading(false);
    }

    /// The subset of the collection selected by a facet value
    ///
    /// The synthetic marker selects everything; any other value matches
    /// genres exactly, case-sensitively. A value absent from the collection
    /// selects nothing.
    #[must_use]
    pub fn filtered(&self, facet: &str) -> Vec<&Game> {
        if facet == ALL_GENRES {
            self.games.iter().collect()
        } else {
            self.games.iter().filter(|game| game.genre == facet).collect()
        }
    }

    /// Re-render the result set for a newly selected facet
    ///
    /// Reads the collection, never mutates it. May fire repeatedly, and may
    /// fire before a load has completed, in which case it renders whatever
    /// collection state exists at that moment.
    pub fn on_facet_change(&self, facet: &str, ui: &mut dyn CatalogUi) {
        let cards = cards_for(self.filtered(facet));
        let counter = counter_label(cards.len());
        ui.show_results(&cards, &counter);
    }
}
