//! Session cart
//!
//! An ordered, append-only list of line items that checkout clears in one
//! step. The total is recomputed on every read.

use crate::error::CartError;
use crate::line_item::CartLineItem;
use crate::notification::Notification;
use crate::state::{transition, CartEvent, CartState};
use serde::{Deserialize, Serialize};

/// Line items purchased by one checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Items in the order they were added
    pub items: Vec<CartLineItem>,
    /// Sum of item prices
    pub total: f64,
}

/// Result of [`Cart::checkout`]
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    /// Message for the front end
    pub notification: Notification,
    /// What was purchased
    pub receipt: Receipt,
}

/// Shopping cart owned by one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item
    ///
    /// # Errors
    /// Returns [`CartError::InvalidPrice`] if `price` is negative or not finite.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) -> Result<Notification, CartError> {
        let name = name.into();
        if !price.is_finite() || price < 0.0 {
            tracing::warn!(item = %name, price, "rejected cart item with invalid price");
            return Err(CartError::invalid_price(name, price));
        }

        let from = self.state();
        let notification = Notification::item_added(&name);
        self.items.push(CartLineItem::new(name, price));
        self.log_transition(from, CartEvent::AddItem);

        Ok(notification)
    }

    /// Current line items, oldest first
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of prices; zero when empty
    #[must_use]
    pub fn total(&self) -> f64 {
        sum_prices(&self.items)
    }

    /// Number of line items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> CartState {
        CartState::for_len(self.items.len())
    }

    /// Clear the cart and return what was in it
    ///
    /// Checking out an empty cart is a no-op that still succeeds.
    pub fn checkout(&mut self) -> Checkout {
        let from = self.state();
        let items = std::mem::take(&mut self.items);
        let total = sum_prices(&items);
        self.log_transition(from, CartEvent::Checkout);

        tracing::info!(items = items.len(), total, "checkout completed");
        Checkout {
            notification: Notification::checked_out(),
            receipt: Receipt { items, total },
        }
    }

    fn log_transition(&self, from: CartState, event: CartEvent) {
        let to = transition(from, event);
        debug_assert_eq!(to, self.state(), "cart contents disagree with state machine");
        tracing::debug!(?from, ?event, ?to, items = self.items.len(), "cart transition");
    }
}

// Folds from +0.0 so an empty cart never reports -0.
fn sum_prices(items: &[CartLineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.price)
}
