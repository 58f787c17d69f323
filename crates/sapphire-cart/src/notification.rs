//! Notifications handed back to the front end

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Operation completed
    Success,
    /// Neutral information
    Info,
}

/// Message the front end shows after a cart operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,
    /// Text to display
    pub message: String,
}

impl Notification {
    /// Success notification
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Info notification
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Confirmation for an added item
    #[must_use]
    pub fn item_added(name: &str) -> Self {
        Self::success(format!("Added {name} to cart!"))
    }

    /// Confirmation for a completed checkout
    #[must_use]
    pub fn checked_out() -> Self {
        Self::success("Thank you for your purchase! Your cart is now empty.")
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
