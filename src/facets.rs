//! Facet index - distinct genres derived from the loaded collection
//!
//! The facet set is recomputed from scratch whenever the collection is
//! replaced. It always starts with the synthetic "all" marker, which is not
//! derived from data and selects the whole collection.

use std::collections::BTreeSet;

use crate::catalog::Game;

/// Synthetic facet value selecting the entire collection
pub const ALL_GENRES: &str = "all";

/// Build the facet list for a collection: the synthetic marker followed by
/// every distinct genre in lexicographic order
#[must_use]
pub fn build_facets(games: &[Game]) -> Vec<String> {
    let unique: BTreeSet<&str> = games.iter().map(|game| game.genre.as_str()).collect();

    let mut facets = Vec::with_capacity(unique.len() + 1);
    facets.push(ALL_GENRES.to_string());
    facets.extend(unique.into_iter().map(String::from));
    facets
}

/// Human-readable label for a facet value
///
/// Every genre labels itself; only the synthetic marker gets a display name.
#[must_use]
pub fn facet_label(facet: &str) -> &str {
    if facet == ALL_GENRES {
        "All genres"
    } else {
        facet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::game_with_genre;

    #[test]
    fn test_facets_deduplicated_and_sorted() {
        let games = vec![
            game_with_genre(1, "RPG"),
            game_with_genre(2, "Shooter"),
            game_with_genre(3, "RPG"),
        ];

        assert_eq!(build_facets(&games), vec!["all", "RPG", "Shooter"]);
    }

    #[test]
    fn test_facets_of_empty_collection() {
        assert_eq!(build_facets(&[]), vec!["all"]);
    }

    #[test]
    fn test_facets_lexicographic_order() {
        let games = vec![
            game_with_genre(1, "Strategy"),
            game_with_genre(2, "ARPG"),
            game_with_genre(3, "MOBA"),
            game_with_genre(4, "Fighting"),
        ];

        assert_eq!(
            build_facets(&games),
            vec!["all", "ARPG", "Fighting", "MOBA", "Strategy"]
        );
    }

    #[test]
    fn test_facets_recompute_is_idempotent() {
        let games = vec![game_with_genre(1, "MMORPG"), game_with_genre(2, "Racing")];
        assert_eq!(build_facets(&games), build_facets(&games));
    }

    #[test]
    fn test_facet_labels() {
        assert_eq!(facet_label(ALL_GENRES), "All genres");
        assert_eq!(facet_label("Shooter"), "Shooter");
    }
}
