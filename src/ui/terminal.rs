//! Colored terminal frontend
//!
//! Cards go to stdout; the loading notice and diagnostics go to stderr so
//! piped output stays clean. Quiet mode prints one tab-separated
//! `title<TAB>url` line per card and nothing else, for scripting.

use colored::Colorize;

use super::traits::CatalogUi;
use crate::view::GameCard;

/// Placeholder shown when a render has no cards
const NO_RESULTS: &str = "No games found. The catalog may be unavailable.";

/// Terminal UI frontend
#[derive(Debug, Default)]
pub struct TerminalUi {
    quiet: bool,
    loading: bool,
    facets: Vec<String>,
}

impl TerminalUi {
    /// Create a terminal frontend
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            loading: false,
            facets: Vec::new(),
        }
    }

    /// Current facet option set (for building selection prompts)
    #[must_use]
    pub fn facets(&self) -> &[String] {
        &self.facets
    }

    /// Whether the loading indicator is currently visible
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    fn print_card(card: &GameCard) {
        println!(
            "  {} {}",
            card.title.bold(),
            format!("[{}]", card.genre).cyan()
        );
        println!("    {}", card.detail_url.blue().underline());
        println!("    {}", format!("thumbnail: {}", card.thumbnail_url).dimmed());
    }
}

impl CatalogUi for TerminalUi {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        if visible && !self.quiet {
            eprintln!("{}", "Loading game catalog...".dimmed());
        }
    }

    fn set_facets(&mut self, facets: &[String]) {
        self.facets = facets.to_vec();
    }

    fn show_results(&mut self, cards: &[GameCard], counter: &str) {
        if self.quiet {
            for card in cards {
                println!("{}\t{}", card.title, card.detail_url);
            }
            return;
        }

        if cards.is_empty() {
            println!("{}", NO_RESULTS.yellow());
        } else {
            for card in cards {
                Self::print_card(card);
            }
        }

        println!("\n{}", counter.bold());
    }

    fn diagnostic(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}
