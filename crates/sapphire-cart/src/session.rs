//! User sessions
//!
//! A session is one user's interaction lifetime and owns exactly one cart.
//! Front ends pass the session explicitly into every cart operation.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's session
#[derive(Debug, Clone, Default)]
pub struct Session {
    id: SessionId,
    cart: Cart,
}

impl Session {
    /// Start a session with an empty cart
    #[must_use]
    pub fn new() -> Self {
        let session = Self::default();
        tracing::debug!(session = %session.id, "session started");
        session
    }

    /// Session identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// This session's cart
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// This session's cart, mutably
    #[inline]
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
