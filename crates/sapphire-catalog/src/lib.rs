//! Sapphire Catalog
//!
//! Read-only catalog tables with a small query engine.
//!
//! # Overview
//!
//! The catalog provides:
//! - **CatalogStore**: the Collection and Products tables, loaded once from CSV
//! - **CatalogQuery**: name search, category filter and stable price sort
//! - **ItemId**: a stable row identifier assigned at load time
//!
//! # Example
//!
//! ```rust
//! use sapphire_catalog::{CatalogQuery, CatalogStore, CategoryFilter, SortOrder, TableKind};
//!
//! let collection = "Name,Price,Stock,Category\n\
//!                   Scarf,500,3,Accessories\n\
//!                   Dress,1200,1,Clothing\n\
//!                   Belt,500,9,Accessories\n";
//! let products = "Name,Price,Stock,Image\n";
//!
//! let store = CatalogStore::from_readers(collection.as_bytes(), products.as_bytes()).unwrap();
//!
//! let query = CatalogQuery::new()
//!     .with_category(CategoryFilter::from_label("Accessories"))
//!     .with_sort(SortOrder::LowToHigh);
//! let names: Vec<_> = store
//!     .query(TableKind::Collection, &query)
//!     .iter()
//!     .map(|item| item.name.as_str())
//!     .collect();
//!
//! assert_eq!(names, ["Scarf", "Belt"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod item;
pub mod loader;
pub mod query;
pub mod store;
pub mod table;

// Re-exports
pub use error::{DataLoadError, QueryParseError};
pub use item::{CatalogItem, ItemId, TableKind};
pub use loader::read_table;
pub use query::{CatalogQuery, CategoryFilter, SortOrder};
pub use store::CatalogStore;
pub use table::Table;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog queries
    pub use crate::{
        CatalogItem, CatalogQuery, CatalogStore, CategoryFilter, DataLoadError, ItemId,
        SortOrder, TableKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
