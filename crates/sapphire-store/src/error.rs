//! Error types for the storefront layer

use sapphire_cart::CartError;
use sapphire_catalog::{DataLoadError, ItemId};
use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("invalid config{}: {source}", display_path(.path))]
    Parse {
        /// Config file path, if parsed from a file
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Combined storefront error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Catalog failed to load
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] DataLoadError),

    /// Cart rejected the operation
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No catalog row has this id
    #[error("no catalog item with id {0}")]
    UnknownItem(ItemId),
}

/// Result type alias for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
