//! Storefront configuration
//!
//! Every field has a default matching the stock deployment, so an empty
//! TOML file (or no file at all) is a valid configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Collection source
pub const DEFAULT_COLLECTION_PATH: &str = "sapphire_collection_extended.csv";
/// Default Products source
pub const DEFAULT_PRODUCTS_PATH: &str = "sapphire_products.csv";
/// Default directory holding Collection images
pub const DEFAULT_IMAGE_DIR: &str = ".";
/// Default landing page banner
pub const DEFAULT_BANNER_IMAGE: &str = "static/product_1.jpg";
/// Default currency symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Collection CSV path
    pub collection_path: PathBuf,
    /// Products CSV path
    pub products_path: PathBuf,
    /// Directory searched for `product_<n>.jpg` Collection images
    pub image_dir: PathBuf,
    /// Banner shown on the landing page
    pub banner_image: PathBuf,
    /// Symbol printed before prices
    pub currency_symbol: String,
    /// Directory that relative asset references resolve against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on invalid TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: None,
            source,
        })
    }

    /// Read from a TOML file
    ///
    /// Relative paths in the file are resolved against the file's directory.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(config = %path.display(), "loaded store config");
        Ok(config.relative_to(base))
    }

    /// With Collection CSV path
    #[inline]
    #[must_use]
    pub fn with_collection_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.collection_path = path.into();
        self
    }

    /// With Products CSV path
    #[inline]
    #[must_use]
    pub fn with_products_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.products_path = path.into();
        self
    }

    /// With image directory
    #[inline]
    #[must_use]
    pub fn with_image_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_dir = path.into();
        self
    }

    /// With banner image
    #[inline]
    #[must_use]
    pub fn with_banner_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.banner_image = path.into();
        self
    }

    /// With base directory for relative asset references
    #[inline]
    #[must_use]
    pub fn with_base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = path.into();
        self
    }

    /// With currency symbol
    #[inline]
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Resolve relative paths against `base`
    ///
    /// `base` is also kept as [`StoreConfig::base_dir`] so asset references
    /// read from the catalog resolve the same way.
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.collection_path,
            &mut self.products_path,
            &mut self.image_dir,
            &mut self.banner_image,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self.base_dir = base.to_path_buf();
        self
    }

    /// Resolve an asset reference such as a Products `Image` value
    ///
    /// Absolute references are returned unchanged.
    #[must_use]
    pub fn resolve_asset(&self, reference: impl AsRef<Path>) -> PathBuf {
        let reference = reference.as_ref();
        if reference.is_relative() {
            self.base_dir.join(reference)
        } else {
            reference.to_path_buf()
        }
    }

    /// Format a price with the currency symbol
    #[must_use]
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection_path: PathBuf::from(DEFAULT_COLLECTION_PATH),
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            banner_image: PathBuf::from(DEFAULT_BANNER_IMAGE),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            base_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(StoreConfig::from_toml_str("").unwrap(), StoreConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = StoreConfig::from_toml_str("currency_symbol = \"Rs. \"\n").unwrap();
        assert_eq!(config.currency_symbol, "Rs. ");
        assert_eq!(config.products_path, PathBuf::from(DEFAULT_PRODUCTS_PATH));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = StoreConfig::from_toml_str("colection_path = \"x.csv\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn file_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.toml");
        std::fs::write(
            &file,
            "collection_path = \"data/collection.csv\"\nproducts_path = \"/abs/products.csv\"\n",
        )
        .unwrap();

        let config = StoreConfig::from_file(&file).unwrap();
        assert_eq!(config.collection_path, dir.path().join("data/collection.csv"));
        assert_eq!(config.products_path, PathBuf::from("/abs/products.csv"));
        assert_eq!(config.image_dir, dir.path().join(DEFAULT_IMAGE_DIR));
        assert_eq!(config.banner_image, dir.path().join(DEFAULT_BANNER_IMAGE));
        assert_eq!(config.base_dir, dir.path());
    }

    #[test]
    fn asset_references_follow_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.toml");
        std::fs::write(&file, "").unwrap();

        let config = StoreConfig::from_file(&file).unwrap();
        assert_eq!(
            config.resolve_asset("static/product_1.jpg"),
            dir.path().join("static/product_1.jpg")
        );
        assert_eq!(
            config.resolve_asset("/srv/img/a.jpg"),
            PathBuf::from("/srv/img/a.jpg")
        );
    }

    #[test]
    fn default_assets_resolve_from_working_dir() {
        let config = StoreConfig::default();
        assert_eq!(config.resolve_asset("static/a.jpg"), PathBuf::from("static/a.jpg"));
        assert_eq!(
            config.image_dir.join("product_1.jpg"),
            Path::new(".").join("product_1.jpg")
        );
    }

    #[test]
    fn base_dir_is_not_a_config_key() {
        let err = StoreConfig::from_toml_str("base_dir = \"/tmp\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StoreConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builder_and_price_format() {
        let config = StoreConfig::new()
            .with_collection_path("c.csv")
            .with_products_path("p.csv")
            .with_image_dir("img")
            .with_currency_symbol("$");
        assert_eq!(config.collection_path, PathBuf::from("c.csv"));
        assert_eq!(config.format_price(1200.0), "$1200");
        assert_eq!(config.format_price(99.5), "$99.5");
        assert_eq!(StoreConfig::default().format_price(500.0), "₹500");
    }
}
