//! Sapphire Cart
//!
//! Per-session shopping cart.
//!
//! # Overview
//!
//! - **Session**: one user's interaction, owning exactly one cart
//! - **Cart**: append-only line items, cleared atomically on checkout
//! - **CartState**: the `Empty`/`NonEmpty` state machine behind the cart
//!
//! # Example
//!
//! ```rust
//! use sapphire_cart::Session;
//!
//! let mut session = Session::new();
//! let cart = session.cart_mut();
//!
//! cart.add_item("Scarf", 500.0).unwrap();
//! cart.add_item("Dress", 1200.0).unwrap();
//! assert_eq!(cart.total(), 1700.0);
//!
//! let checkout = cart.checkout();
//! assert_eq!(checkout.receipt.total, 1700.0);
//! assert_eq!(cart.total(), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cart;
pub mod error;
pub mod line_item;
pub mod notification;
pub mod session;
pub mod state;

// Re-exports
pub use cart::{Cart, Checkout, Receipt};
pub use error::CartError;
pub use line_item::CartLineItem;
pub use notification::{Notification, NotificationLevel};
pub use session::{Session, SessionId};
pub use state::{allowed_transitions, transition, CartEvent, CartState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for cart operations
    pub use crate::{Cart, CartError, CartLineItem, CartState, Checkout, Notification, Session};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
