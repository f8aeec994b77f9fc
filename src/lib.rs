//! Gamedex - a terminal browser for the FreeToGame catalog
//!
//! This library provides the building blocks of the gamedex CLI: a catalog
//! client that fetches the game list over HTTP, a facet index derived from
//! game genres, and a browse session that filters and renders the collection
//! through a UI abstraction.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod facets;
pub mod session;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GamedexError {
    /// Catalog fetch or validation error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
