//! Sapphire Store
//!
//! Wires the catalog and the cart together for a front end:
//! - **StoreConfig**: source paths, image directory and currency, from TOML
//! - **Storefront**: process-wide catalog access and add-to-cart by item id
//!
//! # Example
//!
//! ```rust,ignore
//! use sapphire_cart::Session;
//! use sapphire_store::{StoreConfig, Storefront};
//!
//! let config = StoreConfig::from_file("store.toml")?;
//! let store = Storefront::global(config)?;
//!
//! let mut session = Session::new();
//! let first = store.catalog().collection().items()[0].id;
//! store.add_to_cart(&mut session, first)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod storefront;

// Re-exports for convenience
pub use config::StoreConfig;
pub use error::{ConfigError, StoreError, StoreResult};
pub use storefront::Storefront;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
