//! Error types for cart operations

/// Errors raised by cart operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    /// Price is negative or not a number
    #[error("invalid price for '{name}': {price} (must be a non-negative number)")]
    InvalidPrice {
        /// Product name
        name: String,
        /// Rejected price
        price: f64,
    },
}

impl CartError {
    /// Create invalid price error
    pub fn invalid_price(name: impl Into<String>, price: f64) -> Self {
        Self::InvalidPrice {
            name: name.into(),
            price,
        }
    }
}
