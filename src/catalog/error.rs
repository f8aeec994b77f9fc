use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Non-success HTTP status from the catalog endpoint
    #[error("Catalog endpoint answered with HTTP status {0}")]
    Status(u16),

    /// Transport-level failure before a status was available
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body does not match the expected array-of-games shape
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl CatalogError {
    /// Whether this is a transport-layer failure (status or connection)
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Http(_))
    }

    /// Whether this is a schema validation failure
    #[must_use]
    pub const fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, CatalogError>;
