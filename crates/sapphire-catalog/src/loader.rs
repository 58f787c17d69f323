//! CSV ingestion for the two source tables
//!
//! Columns are matched by header name, so extra descriptive columns and
//! column order do not matter. A missing required column, an unparsable
//! value, or a negative price rejects the whole table.

use crate::error::DataLoadError;
use crate::item::{CatalogItem, ItemId, TableKind};
use crate::table::Table;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CollectionRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Stock")]
    stock: u32,
    #[serde(rename = "Category")]
    category: String,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Stock")]
    stock: u32,
    #[serde(rename = "Image")]
    image: String,
}

impl CollectionRow {
    fn into_item(self, id: ItemId) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: Some(self.category),
            image_path: None,
        }
    }
}

impl ProductRow {
    fn into_item(self, id: ItemId) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: None,
            image_path: Some(self.image),
        }
    }
}

/// Parse a table of the given kind from CSV text
///
/// # Errors
/// Returns [`DataLoadError`] if the header lacks a required column, a row
/// has the wrong number of fields, a value does not parse, or a price is
/// negative or not finite.
pub fn read_table<R: Read>(kind: TableKind, source: R) -> Result<Table, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let csv_err = |source| DataLoadError::Csv { table: kind, source };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let mut items = Vec::new();

    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map_or(0, csv::Position::line);
        let id = ItemId::new(kind, items.len());

        let item = match kind {
            TableKind::Collection => record
                .deserialize::<CollectionRow>(Some(&headers))
                .map(|row| row.into_item(id)),
            TableKind::Products => record
                .deserialize::<ProductRow>(Some(&headers))
                .map(|row| row.into_item(id)),
        }
        .map_err(csv_err)?;

        if !item.price.is_finite() || item.price < 0.0 {
            return Err(DataLoadError::invalid_row(
                kind,
                line,
                format!("price of '{}' must be a non-negative number, got {}", item.name, item.price),
            ));
        }

        items.push(item);
    }

    tracing::debug!(table = %kind, rows = items.len(), "parsed catalog table");
    Ok(Table::new(kind, items))
}
