//! View models - the pure half of rendering
//!
//! Rendering is split into a pure mapping from games to card view models
//! (this module) and a thin adapter that puts cards on screen (the `ui`
//! module). Filtering, counting, and pluralization all happen here, away
//! from any terminal concern.

use crate::catalog::Game;

/// Everything a UI needs to draw one result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    /// Card title, also the accessible label for the thumbnail
    pub title: String,
    /// Genre line
    pub genre: String,
    /// Thumbnail image URL
    pub thumbnail_url: String,
    /// Detail page URL the card activates
    pub detail_url: String,
}

impl From<&Game> for GameCard {
    fn from(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            genre: game.genre.clone(),
            thumbnail_url: game.thumbnail.clone(),
            detail_url: game.game_url.clone(),
        }
    }
}

/// Project games into cards, preserving input order
#[must_use]
pub fn cards_for<'a, I>(games: I) -> Vec<GameCard>
where
    I: IntoIterator<Item = &'a Game>,
{
    games.into_iter().map(GameCard::from).collect()
}

/// Counter line for a result set: `"1 game"`, `"7 games"`
#[must_use]
pub fn counter_label(count: usize) -> String {
    let unit = if count == 1 { "game" } else { "games" };
    format!("{count} {unit}")
}
