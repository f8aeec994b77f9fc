//! Shared test fixtures
//!
//! Canned game sources and sample data used by unit tests across modules.

use crate::catalog::{CatalogError, Game, GameSource, Result};

/// A small, realistic collection with duplicate genres
#[must_use]
pub fn sample_games() -> Vec<Game> {
    vec![
        Game::new(
            1,
            "Dauntless",
            "ARPG",
            "https://example.com/thumb/1.jpg",
            "https://example.com/open/dauntless",
        ),
        Game::new(
            2,
            "Warframe",
            "Shooter",
            "https://example.com/thumb/2.jpg",
            "https://example.com/open/warframe",
        ),
        Game::new(
            3,
            "Genshin Impact",
            "RPG",
            "https://example.com/thumb/3.jpg",
            "https://example.com/open/genshin-impact",
        ),
        Game::new(
            4,
            "Destiny 2",
            "Shooter",
            "https://example.com/thumb/4.jpg",
            "https://example.com/open/destiny-2",
        ),
    ]
}

/// A single game with the given id and genre
#[must_use]
pub fn game_with_genre(id: u32, genre: &str) -> Game {
    Game::new(
        id,
        &format!("Game {id}"),
        genre,
        &format!("https://example.com/thumb/{id}.jpg"),
        &format!("https://example.com/open/{id}"),
    )
}

/// Source that always succeeds with a fixed collection
pub struct StaticSource {
    games: Vec<Game>,
}

impl StaticSource {
    #[must_use]
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }
}

impl GameSource for StaticSource {
    fn load(&self) -> Result<Vec<Game>> {
        Ok(self.games.clone())
    }
}

/// Source that always fails with a fixed error
pub struct FailingSource {
    kind: FailureKind,
}

enum FailureKind {
    Status(u16),
    Schema(String),
}

impl FailingSource {
    /// Fail with a non-success HTTP status
    #[must_use]
    pub fn status(code: u16) -> Self {
        Self {
            kind: FailureKind::Status(code),
        }
    }

    /// Fail with a schema validation error
    #[must_use]
    pub fn schema(message: &str) -> Self {
        Self {
            kind: FailureKind::Schema(message.to_string()),
        }
    }
}

impl GameSource for FailingSource {
    fn load(&self) -> Result<Vec<Game>> {
        match &self.kind {
            FailureKind::Status(code) => Err(CatalogError::Status(*code)),
            FailureKind::Schema(message) => Err(CatalogError::Schema(message.clone())),
        }
    }
}
