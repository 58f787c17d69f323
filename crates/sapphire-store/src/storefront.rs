//! Storefront: catalog plus configuration
//!
//! Front ends hold a [`Storefront`] for reading the catalog and pass each
//! user's [`Session`] into the cart operations. The storefront itself holds
//! no per-user state.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use sapphire_cart::{Checkout, Notification, Session};
use sapphire_catalog::{CatalogItem, CatalogQuery, CatalogStore, ItemId, TableKind};

/// Read-only catalog access plus cart wiring
#[derive(Debug, Clone)]
pub struct Storefront<'c> {
    catalog: &'c CatalogStore,
    config: StoreConfig,
}

impl Storefront<'static> {
    /// Storefront over the process-wide catalog
    ///
    /// Loads the catalog from the configured paths on first use; later
    /// calls share the already loaded catalog.
    ///
    /// # Errors
    /// Returns [`StoreError::Catalog`] if the first load fails.
    pub fn global(config: StoreConfig) -> StoreResult<Self> {
        let catalog = CatalogStore::global(&config.collection_path, &config.products_path)?;
        Ok(Self { catalog, config })
    }
}

impl<'c> Storefront<'c> {
    /// Storefront over an existing catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: &'c CatalogStore, config: StoreConfig) -> Self {
        Self { catalog, config }
    }

    /// Underlying catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'c CatalogStore {
        self.catalog
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Collection categories in first-occurrence order
    #[inline]
    #[must_use]
    pub fn categories(&self) -> Vec<&'c str> {
        self.catalog.list_categories()
    }

    /// Query one table
    #[inline]
    #[must_use]
    pub fn query(&self, table: TableKind, query: &CatalogQuery) -> Vec<&'c CatalogItem> {
        self.catalog.query(table, query)
    }

    /// Look up a catalog row
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownItem`] if no row has this id.
    pub fn item(&self, id: ItemId) -> StoreResult<&'c CatalogItem> {
        self.catalog.get(id).ok_or(StoreError::UnknownItem(id))
    }

    /// Add a catalog row to the session's cart
    ///
    /// The cart receives a copy of the row's name and price.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownItem`] for an unknown id, or
    /// [`StoreError::Cart`] if the cart rejects the price.
    pub fn add_to_cart(&self, session: &mut Session, id: ItemId) -> StoreResult<Notification> {
        let item = self.item(id)?;
        let notification = session.cart_mut().add_item(item.name.clone(), item.price)?;
        tracing::debug!(session = %session.id(), item = %id, "added catalog item to cart");
        Ok(notification)
    }

    /// Check out the session's cart
    pub fn checkout(&self, session: &mut Session) -> Checkout {
        tracing::debug!(session = %session.id(), "checkout requested");
        session.cart_mut().checkout()
    }
}
