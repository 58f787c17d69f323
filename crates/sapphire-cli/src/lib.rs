//! Sapphire CLI
//!
//! Terminal front end for the storefront: one-shot `categories` and
//! `browse` commands plus an interactive `shop` shell.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod shell;
pub mod view;

pub use cli::{browse_query, command, print_browse, print_categories, resolve_config};
pub use shell::{Flow, Shell};
pub use view::{render_card, render_cards, render_cart, render_home, ImageStatus};
