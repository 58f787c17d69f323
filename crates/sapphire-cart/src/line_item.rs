//! Cart line items

use serde::{Deserialize, Serialize};

/// One add-to-cart action
///
/// A value copy of the product name and price at the time it was added.
/// Adding the same product twice yields two equal line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product name
    #[serde(rename = "Product")]
    pub product_name: String,
    /// Unit price, never negative
    #[serde(rename = "Price")]
    pub price: f64,
}

impl CartLineItem {
    /// Create line item; price must already be validated
    #[inline]
    #[must_use]
    pub(crate) fn new(product_name: String, price: f64) -> Self {
        Self { product_name, price }
    }
}
