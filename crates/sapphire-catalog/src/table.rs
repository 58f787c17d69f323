//! Immutable in-memory table
//!
//! Both source tables share one representation; which optional columns are
//! populated depends on [`TableKind`].

use crate::item::{CatalogItem, ItemId, TableKind};

/// Rows of one source table in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    kind: TableKind,
    items: Vec<CatalogItem>,
}

impl Table {
    /// Wrap loaded rows
    ///
    /// Row `n` of `items` must carry `ItemId::new(kind, n)`.
    #[must_use]
    pub(crate) fn new(kind: TableKind, items: Vec<CatalogItem>) -> Self {
        debug_assert!(items
            .iter()
            .enumerate()
            .all(|(row, item)| item.id == ItemId::new(kind, row)));
        Self { kind, items }
    }

    /// Table kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// All rows in source order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Row by id, if it belongs to this table
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        if id.table() != self.kind {
            return None;
        }
        self.items.get(id.row())
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: TableKind, row: usize, name: &str) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(kind, row),
            name: name.to_string(),
            price: 10.0,
            stock: 1,
            category: None,
            image_path: None,
        }
    }

    #[test]
    fn get_rejects_foreign_ids() {
        let table = Table::new(
            TableKind::Products,
            vec![item(TableKind::Products, 0, "Kurta")],
        );

        assert_eq!(
            table.get(ItemId::new(TableKind::Products, 0)).map(|i| i.name.as_str()),
            Some("Kurta")
        );
        assert!(table.get(ItemId::new(TableKind::Collection, 0)).is_none());
        assert!(table.get(ItemId::new(TableKind::Products, 1)).is_none());
    }

    #[test]
    fn empty_table() {
        let table = Table::new(TableKind::Collection, Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
