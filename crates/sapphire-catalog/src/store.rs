//! Catalog store holding both source tables
//!
//! The store is built once and never mutated afterwards. [`CatalogStore::global`]
//! keeps a single process-wide instance that can be shared by reference
//! across sessions without locking.

use crate::error::DataLoadError;
use crate::item::{CatalogItem, ItemId, TableKind};
use crate::loader::read_table;
use crate::query::CatalogQuery;
use crate::table::Table;
use indexmap::IndexSet;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static GLOBAL: OnceCell<CatalogStore> = OnceCell::new();

/// Both catalog tables, loaded and immutable
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    collection: Table,
    products: Table,
}

impl CatalogStore {
    /// Load both tables from CSV files
    ///
    /// # Errors
    /// Returns [`DataLoadError`] if either file is missing or malformed.
    pub fn load(
        collection_path: impl AsRef<Path>,
        products_path: impl AsRef<Path>,
    ) -> Result<Self, DataLoadError> {
        let collection = open(TableKind::Collection, collection_path.as_ref())?;
        let products = open(TableKind::Products, products_path.as_ref())?;
        let store = Self::from_readers(collection, products)?;

        tracing::info!(
            collection = %collection_path.as_ref().display(),
            products = %products_path.as_ref().display(),
            collection_rows = store.collection.len(),
            product_rows = store.products.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Load both tables from CSV readers
    ///
    /// # Errors
    /// Returns [`DataLoadError`] if either source is malformed.
    pub fn from_readers<C: Read, P: Read>(collection: C, products: P) -> Result<Self, DataLoadError> {
        Ok(Self {
            collection: read_table(TableKind::Collection, collection)?,
            products: read_table(TableKind::Products, products)?,
        })
    }

    /// Process-wide store, loaded on first call
    ///
    /// The first successful call loads from the given paths; every later
    /// call returns that same store and ignores its arguments. A failed load
    /// leaves nothing cached.
    ///
    /// # Errors
    /// Returns [`DataLoadError`] if the first load fails.
    pub fn global(
        collection_path: impl AsRef<Path>,
        products_path: impl AsRef<Path>,
    ) -> Result<&'static Self, DataLoadError> {
        GLOBAL.get_or_try_init(|| Self::load(collection_path, products_path))
    }

    /// Process-wide store, if already loaded
    #[inline]
    #[must_use]
    pub fn try_global() -> Option<&'static Self> {
        GLOBAL.get()
    }

    /// Table by kind
    #[inline]
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Collection => &self.collection,
            TableKind::Products => &self.products,
        }
    }

    /// Collection table
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &Table {
        &self.collection
    }

    /// Distinct Collection categories in order of first appearance
    #[must_use]
    pub fn list_categories(&self) -> Vec<&str> {
        self.collection
            .items()
            .iter()
            .filter_map(|item| item.category.as_deref())
            .collect::<IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    /// Run a query against one table
    #[inline]
    #[must_use]
    pub fn query(&self, kind: TableKind, query: &CatalogQuery) -> Vec<&CatalogItem> {
        query.run(self.table(kind))
    }

    /// Row by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.table(id.table()).get(id)
    }
}

fn open(table: TableKind, path: &Path) -> Result<BufReader<File>, DataLoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DataLoadError::open_error(table, path, source))
}
