//! Cart state machine
//!
//! Two states and two events. Every event is accepted in every state, so
//! the machine is a total function; there is no terminal state.

use serde::{Deserialize, Serialize};

/// Cart state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CartState {
    /// No line items
    #[default]
    Empty,
    /// At least one line item
    NonEmpty,
}

impl CartState {
    /// State for a cart holding `len` items
    #[inline]
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }
}

/// Cart event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartEvent {
    /// A line item was appended
    AddItem,
    /// The cart was cleared by checkout
    Checkout,
}

/// Next state after `event`
#[inline]
#[must_use]
pub fn transition(_from: CartState, event: CartEvent) -> CartState {
    match event {
        CartEvent::AddItem => CartState::NonEmpty,
        CartEvent::Checkout => CartState::Empty,
    }
}

/// Every (event, next state) pair reachable from `from`
#[must_use]
pub fn allowed_transitions(from: CartState) -> Vec<(CartEvent, CartState)> {
    [CartEvent::AddItem, CartEvent::Checkout]
        .into_iter()
        .map(|event| (event, transition(from, event)))
        .collect()
}
