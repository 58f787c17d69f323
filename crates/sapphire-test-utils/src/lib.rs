//! Testing utilities for Sapphire workspace
//!
//! Shared catalog fixtures and helpers for writing them to disk.

#![allow(missing_docs)]

use sapphire_catalog::{CatalogItem, CatalogStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three-row collection with a price tie inside one category
pub const TIE_COLLECTION_CSV: &str = "Name,Price,Stock,Category\n\
    Scarf,500,10,Accessories\n\
    Dress,1200,4,Clothing\n\
    Belt,500,7,Accessories\n";

/// Collection with an extra descriptive column
pub const COLLECTION_CSV: &str = "Name,Description,Price,Stock,Category\n\
    Embroidered Lawn Shirt,Three-piece,3490,12,Clothing\n\
    Silk Scarf,Hand-dyed,1290,25,Accessories\n\
    Khaddar Kurta,Winter,2990,8,Clothing\n\
    Leather Belt,Brown,1290,30,Accessories\n\
    Beaded Clutch,Evening,4590,5,Bags\n\
    Printed Dupatta,Chiffon,1790,0,Accessories\n";

/// Four products with image references under `static/`
pub const PRODUCTS_CSV: &str = "Name,Price,Stock,Image\n\
    Cambric Suit,5490,6,static/product_1.jpg\n\
    Lawn Scarf,990,14,static/product_2.jpg\n\
    Velvet Shawl,7990,2,static/product_3.jpg\n\
    Cotton Trousers,1990,20,static/product_4.jpg\n";

/// Store built from [`COLLECTION_CSV`] and [`PRODUCTS_CSV`]
pub fn sample_store() -> CatalogStore {
    CatalogStore::from_readers(COLLECTION_CSV.as_bytes(), PRODUCTS_CSV.as_bytes())
        .expect("fixture CSV must load")
}

/// Store whose collection is [`TIE_COLLECTION_CSV`]
pub fn tie_store() -> CatalogStore {
    CatalogStore::from_readers(TIE_COLLECTION_CSV.as_bytes(), PRODUCTS_CSV.as_bytes())
        .expect("fixture CSV must load")
}

/// Fixture files on disk, removed on drop
pub struct FixtureDir {
    dir: TempDir,
    pub collection: PathBuf,
    pub products: PathBuf,
}

impl FixtureDir {
    /// Write the sample collection and products CSV files
    pub fn sample() -> Self {
        Self::with_sources(COLLECTION_CSV, PRODUCTS_CSV)
    }

    /// Write arbitrary collection and products CSV text
    pub fn with_sources(collection: &str, products: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let collection_path = dir.path().join("sapphire_collection_extended.csv");
        let products_path = dir.path().join("sapphire_products.csv");
        fs::write(&collection_path, collection).expect("write collection fixture");
        fs::write(&products_path, products).expect("write products fixture");
        Self {
            dir,
            collection: collection_path,
            products: products_path,
        }
    }

    /// Fixture directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file under the fixture directory
    pub fn touch(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture subdir");
        }
        fs::write(&path, b"").expect("touch fixture file");
        path
    }
}

/// Names of the given items, in order
pub fn names(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}
