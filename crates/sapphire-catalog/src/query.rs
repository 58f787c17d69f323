//! Catalog queries: search, category filter and price sort
//!
//! A [`CatalogQuery`] is applied to a [`Table`] in a fixed order:
//! name search, then category filter, then price sort. The table is never
//! touched; results borrow from it.

use crate::error::QueryParseError;
use crate::item::CatalogItem;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price ordering for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep source order
    #[default]
    None,
    /// Ascending by price
    LowToHigh,
    /// Descending by price
    HighToLow,
}

impl SortOrder {
    /// All orders, in menu order
    pub const ALL: [SortOrder; 3] = [SortOrder::None, SortOrder::LowToHigh, SortOrder::HighToLow];

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::None => "None",
            SortOrder::LowToHigh => "Low to High",
            SortOrder::HighToLow => "High to Low",
        }
    }

    /// Stable sort by price; ties keep their relative order
    pub fn apply(self, rows: &mut [&CatalogItem]) {
        match self {
            SortOrder::None => {}
            SortOrder::LowToHigh => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::HighToLow => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = QueryParseError;

    /// Accepts the display labels and their kebab-case forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "none" | "" => Ok(SortOrder::None),
            "low to high" => Ok(SortOrder::LowToHigh),
            "high to low" => Ok(SortOrder::HighToLow),
            _ => Err(QueryParseError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Category restriction for the Collection table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    All,
    /// Exact category match
    Only(String),
}

impl CategoryFilter {
    /// Label that disables the filter
    pub const ALL_LABEL: &'static str = "All";

    /// Build from a menu label; `"All"` disables the filter
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Menu label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Whether the item passes the filter
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category.as_deref() == Some(category.as_str()),
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(label: Option<&str>) -> Self {
        label.map_or(CategoryFilter::All, CategoryFilter::from_label)
    }
}

/// Search, filter and sort parameters
///
/// The default query returns a table unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Name substring; empty means no search
    pub search: String,
    /// Category restriction (Collection only)
    pub category: CategoryFilter,
    /// Price ordering
    pub sort: SortOrder,
}

impl CatalogQuery {
    /// Query that matches everything in source order
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// With category filter
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// With sort order
    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Run against a table
    ///
    /// The category filter is ignored for tables without categories.
    #[must_use]
    pub fn run<'t>(&self, table: &'t Table) -> Vec<&'t CatalogItem> {
        let needle = self.search.to_lowercase();
        let filter_category = table.kind().has_categories();

        let mut rows: Vec<&CatalogItem> = table
            .items()
            .iter()
            .filter(|item| needle.is_empty() || item.name_contains_lowercase(&needle))
            .filter(|item| !filter_category || self.category.matches(item))
            .collect();

        self.sort.apply(&mut rows);

        tracing::debug!(
            table = %table.kind(),
            search = %self.search,
            category = self.category.label(),
            sort = self.sort.label(),
            matched = rows.len(),
            "catalog query"
        );
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, TableKind};
    use pretty_assertions::assert_eq;

    fn collection(rows: &[(&str, f64, &str)]) -> Table {
        let items = rows
            .iter()
            .enumerate()
            .map(|(row, (name, price, category))| CatalogItem {
                id: ItemId::new(TableKind::Collection, row),
                name: (*name).to_string(),
                price: *price,
                stock: 1,
                category: Some((*category).to_string()),
                image_path: None,
            })
            .collect();
        Table::new(TableKind::Collection, items)
    }

    fn products(rows: &[(&str, f64)]) -> Table {
        let items = rows
            .iter()
            .enumerate()
            .map(|(row, (name, price))| CatalogItem {
                id: ItemId::new(TableKind::Products, row),
                name: (*name).to_string(),
                price: *price,
                stock: 1,
                category: None,
                image_path: Some(format!("static/product_{}.jpg", row + 1)),
            })
            .collect();
        Table::new(TableKind::Products, items)
    }

    fn names(rows: &[&CatalogItem]) -> Vec<String> {
        rows.iter().map(|item| item.name.clone()).collect()
    }

    fn sample() -> Table {
        collection(&[
            ("Scarf", 500.0, "Accessories"),
            ("Dress", 1200.0, "Clothing"),
            ("Belt", 500.0, "Accessories"),
        ])
    }

    #[test]
    fn default_query_is_identity() {
        let table = sample();
        let rows = CatalogQuery::new().run(&table);
        assert_eq!(names(&rows), vec!["Scarf", "Dress", "Belt"]);
    }

    #[test]
    fn category_then_stable_sort() {
        let table = sample();
        let rows = CatalogQuery::new()
            .with_category(CategoryFilter::from_label("Accessories"))
            .with_sort(SortOrder::LowToHigh)
            .run(&table);
        assert_eq!(names(&rows), vec!["Scarf", "Belt"]);
    }

    #[test]
    fn high_to_low_keeps_ties_in_source_order() {
        let table = sample();
        let rows = CatalogQuery::new().with_sort(SortOrder::HighToLow).run(&table);
        assert_eq!(names(&rows), vec!["Dress", "Scarf", "Belt"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = collection(&[
            ("Silk SCARF", 500.0, "Accessories"),
            ("Lawn Dress", 1200.0, "Clothing"),
            ("scarf ring", 150.0, "Accessories"),
        ]);
        let rows = CatalogQuery::new().with_search("ScArF").run(&table);
        assert_eq!(names(&rows), vec!["Silk SCARF", "scarf ring"]);
    }

    #[test]
    fn search_does_not_tokenize() {
        let table = sample();
        let rows = CatalogQuery::new().with_search("Scarf Belt").run(&table);
        assert!(rows.is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let table = sample();
        let rows = CatalogQuery::new()
            .with_category(CategoryFilter::from_label("Footwear"))
            .run(&table);
        assert!(rows.is_empty());
    }

    #[test]
    fn category_filter_is_ignored_for_products() {
        let table = products(&[("Kurta", 2500.0), ("Shawl", 1800.0)]);
        let rows = CatalogQuery::new()
            .with_category(CategoryFilter::from_label("Accessories"))
            .with_sort(SortOrder::LowToHigh)
            .run(&table);
        assert_eq!(names(&rows), vec!["Shawl", "Kurta"]);
    }

    #[test]
    fn results_keep_their_ids() {
        let table = sample();
        let rows = CatalogQuery::new().with_sort(SortOrder::HighToLow).run(&table);
        assert_eq!(rows[0].id, ItemId::new(TableKind::Collection, 1));
    }

    #[test]
    fn sort_order_labels_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(order.label().parse::<SortOrder>().unwrap(), order);
        }
        assert_eq!("low-to-high".parse::<SortOrder>().unwrap(), SortOrder::LowToHigh);
        assert_eq!("HIGH_TO_LOW".parse::<SortOrder>().unwrap(), SortOrder::HighToLow);
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn category_filter_labels() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from(Some("Clothing")),
            CategoryFilter::Only("Clothing".to_string())
        );
        assert_eq!(CategoryFilter::Only("Clothing".into()).label(), "Clothing");
    }
}
