//! Catalog module - fetching and validating the game list
//!
//! This module is the data source boundary of gamedex. It issues a single
//! HTTP GET to the FreeToGame API (optionally through a relay prefix, as the
//! public API sits behind CORS restrictions when consumed from a browser and
//! the relay endpoint is what the catalog publishes) and validates the body
//! against the expected array-of-games shape.
//!
//! The `GameSource` trait is the seam used by tests and by the browse session:
//! anything that can produce a `Vec<Game>` or a `CatalogError` can stand in
//! for the network client.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CatalogClient, parse_games};
pub use error::{CatalogError, Result};
pub use types::Game;

/// A source of catalog items
///
/// Implemented by [`CatalogClient`] for the real API and by canned sources in
/// tests. A source is invoked once per load; callers own the error-swallowing
/// policy.
pub trait GameSource {
    /// Load the full game collection
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the transport fails, the server answers
    /// with a non-success status, or the body does not match the expected
    /// shape.
    fn load(&self) -> Result<Vec<Game>>;
}
