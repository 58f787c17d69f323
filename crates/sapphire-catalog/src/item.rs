//! Catalog rows and their identifiers

use crate::error::QueryParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which source table a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Curated subset carrying category metadata
    Collection,
    /// Full catalog carrying an image reference per row
    Products,
}

impl TableKind {
    /// Lowercase table name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Collection => "collection",
            TableKind::Products => "products",
        }
    }

    /// Whether rows of this table carry a category
    #[inline]
    #[must_use]
    pub fn has_categories(self) -> bool {
        matches!(self, TableKind::Collection)
    }

    fn id_prefix(self) -> char {
        match self {
            TableKind::Collection => 'C',
            TableKind::Products => 'P',
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collection" => Ok(TableKind::Collection),
            "products" | "product" => Ok(TableKind::Products),
            _ => Err(QueryParseError::UnknownTable(s.to_string())),
        }
    }
}

/// Stable identifier assigned to a row at load time
///
/// Holds the source table and the zero-based position of the row in its
/// source file. Query results carry it along, so an item keeps its id no
/// matter how the result was filtered or sorted.
///
/// Displayed as `C<n>` or `P<n>` with a one-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId {
    table: TableKind,
    row: usize,
}

impl ItemId {
    /// Create id for a zero-based source row
    #[inline]
    #[must_use]
    pub fn new(table: TableKind, row: usize) -> Self {
        Self { table, row }
    }

    /// Source table
    #[inline]
    #[must_use]
    pub fn table(&self) -> TableKind {
        self.table
    }

    /// Zero-based source row
    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.table.id_prefix(), self.row + 1)
    }
}

impl FromStr for ItemId {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QueryParseError::InvalidItemId(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let table = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => TableKind::Collection,
            Some('P') => TableKind::Products,
            _ => return Err(invalid()),
        };
        let number: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if number == 0 {
            return Err(invalid());
        }
        Ok(Self::new(table, number - 1))
    }
}

/// One row of either table
///
/// `category` is only present on Collection rows and `image_path` only on
/// Products rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Identifier assigned at load time
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    /// Category (Collection only)
    pub category: Option<String>,
    /// Image file reference (Products only)
    pub image_path: Option<String>,
}

impl CatalogItem {
    /// Case-insensitive substring match on the name
    ///
    /// `needle` must already be lowercase.
    #[inline]
    #[must_use]
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
