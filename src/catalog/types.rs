//! Catalog record types
//!
//! Games are externally supplied and read-only: they are received from the
//! API, displayed, and never created or mutated locally. Fields beyond the
//! ones listed here are ignored during deserialization.

use serde::Deserialize;

/// One catalog entry as returned by the FreeToGame API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    /// API-assigned identifier
    #[serde(default)]
    pub id: u32,

    /// Display title
    pub title: String,

    /// Genre, used as the facet value (matched case-sensitively, no
    /// normalization)
    pub genre: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Detail page URL, opened in the system browser on activation
    pub game_url: String,

    /// Short blurb shown by some surfaces (not all API mirrors include it)
    #[serde(default)]
    pub short_description: Option<String>,
}

impl Game {
    /// Create a game record with just the displayed fields (test fixtures)
    #[must_use]
    pub fn new(id: u32, title: &str, genre: &str, thumbnail: &str, game_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            genre: genre.to_string(),
            thumbnail: thumbnail.to_string(),
            game_url: game_url.to_string(),
            short_description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserializes_from_api_shape() {
        let json = r#"{
            "id": 540,
            "title": "Overwatch 2",
            "thumbnail": "https://www.freetogame.com/g/540/thumbnail.jpg",
            "short_description": "A hero-focused team shooter.",
            "game_url": "https://www.freetogame.com/open/overwatch-2",
            "genre": "Shooter",
            "platform": "PC (Windows)",
            "publisher": "Activision Blizzard",
            "release_date": "2022-10-04"
        }"#;

        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 540);
        assert_eq!(game.title, "Overwatch 2");
        assert_eq!(game.genre, "Shooter");
        assert_eq!(game.game_url, "https://www.freetogame.com/open/overwatch-2");
        assert_eq!(
            game.short_description.as_deref(),
            Some("A hero-focused team shooter.")
        );
    }

    #[test]
    fn test_game_missing_title_is_an_error() {
        let json = r#"{"id": 1, "genre": "MMORPG", "thumbnail": "t", "game_url": "u"}"#;
        assert!(serde_json::from_str::<Game>(json).is_err());
    }

    #[test]
    fn test_game_optional_fields_default() {
        let json = r#"{"title": "Rift", "genre": "MMORPG", "thumbnail": "t", "game_url": "u"}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 0);
        assert_eq!(game.short_description, None);
    }
}
