//! Mock UI for testing
//!
//! Records every call made by the session so tests can assert on the exact
//! sequence of renders, facet replacements, and loading toggles without a
//! terminal.

use super::traits::CatalogUi;
use crate::view::GameCard;

/// One recorded `show_results` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    pub cards: Vec<GameCard>,
    pub counter: String,
}

/// Recording UI frontend
#[derive(Debug, Clone, Default)]
pub struct MockUi {
    /// Every `set_loading` argument, in call order
    pub loading_events: Vec<bool>,
    /// The facet option set as of the last `set_facets` call
    pub facets: Vec<String>,
    /// Every rendered frame, in call order
    pub frames: Vec<RenderedFrame>,
    /// Every diagnostic message, in call order
    pub diagnostics: Vec<String>,
}

impl MockUi {
    /// Create an empty recording UI
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame, if any
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderedFrame> {
        self.frames.last()
    }

    /// Whether the loading indicator is currently visible
    #[must_use]
    pub fn loading_visible(&self) -> bool {
        self.loading_events.last().copied().unwrap_or(false)
    }
}

impl CatalogUi for MockUi {
    fn set_loading(&mut self, visible: bool) {
        self.loading_events.push(visible);
    }

    fn set_facets(&mut self, facets: &[String]) {
        self.facets = facets.to_vec();
    }

    fn show_results(&mut self, cards: &[GameCard], counter: &str) {
        self.frames.push(RenderedFrame {
            cards: cards.to_vec(),
            counter: counter.to_string(),
        });
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}
