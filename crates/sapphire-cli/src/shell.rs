//! Interactive shopping shell
//!
//! Holds one session and the current search, category and sort settings.
//! Each input line is one synchronous turn against the storefront.

use crate::view::{render_cards, render_cart, render_home};
use sapphire_cart::{Notification, NotificationLevel, Session};
use sapphire_catalog::{CatalogQuery, CategoryFilter, ItemId, SortOrder, TableKind};
use sapphire_store::Storefront;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  home                  show the landing page
  collection            list the collection with current filters
  products              list all products with current filters
  categories            list collection categories
  search <text>         filter by name (no text clears the search)
  category <name|All>   filter the collection by category
  sort <order>          None, Low to High, High to Low
  filters               show current filters
  add <id>              add an item to the cart, e.g. add C3
  cart                  show the cart
  checkout              buy everything in the cart
  help                  show this help
  quit                  leave the shop
";

/// Whether the shell keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop
    Quit,
}

/// Shell state for one user
#[derive(Debug)]
pub struct Shell<'s, 'c> {
    store: &'s Storefront<'c>,
    session: Session,
    query: CatalogQuery,
}

impl<'s, 'c> Shell<'s, 'c> {
    /// Start a shell with a fresh session
    #[must_use]
    pub fn new(store: &'s Storefront<'c>) -> Self {
        Self {
            store,
            session: Session::new(),
            query: CatalogQuery::new(),
        }
    }

    /// This shell's session
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current query settings
    #[inline]
    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Read commands until `quit` or end of input
    ///
    /// # Errors
    /// Returns any I/O error from `input` or `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Welcome to Sapphire Online Store. Type 'help' for commands.")?;
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                return Ok(());
            };
            if self.execute(&line?, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one command line
    ///
    /// # Errors
    /// Returns any I/O error from `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, arg)| (command, arg.trim()));

        match command.to_ascii_lowercase().as_str() {
            "" => {}
            "help" => write!(out, "{HELP}")?,
            "home" => write!(out, "{}", render_home(self.store.config()))?,
            "quit" | "exit" => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
            "collection" => self.list(TableKind::Collection, out)?,
            "products" => self.list(TableKind::Products, out)?,
            "categories" => {
                for category in self.store.categories() {
                    writeln!(out, "{category}")?;
                }
            }
            "search" => {
                self.query.search = arg.to_string();
                self.show_filters(out)?;
            }
            "category" => {
                self.query.category = if arg.is_empty()
                    || arg.eq_ignore_ascii_case(CategoryFilter::ALL_LABEL)
                {
                    CategoryFilter::All
                } else {
                    CategoryFilter::from_label(arg)
                };
                self.show_filters(out)?;
            }
            "sort" => match arg.parse::<SortOrder>() {
                Ok(sort) => {
                    self.query.sort = sort;
                    self.show_filters(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "filters" => self.show_filters(out)?,
            "add" => self.add(arg, out)?,
            "cart" => write!(
                out,
                "{}",
                render_cart(self.session.cart(), self.store.config())
            )?,
            "checkout" => self.checkout(out)?,
            other => writeln!(out, "unknown command: {other} (type 'help')")?,
        }
        Ok(Flow::Continue)
    }

    fn list<W: Write>(&self, table: TableKind, out: &mut W) -> io::Result<()> {
        let items = self.store.query(table, &self.query);
        write!(out, "{}", render_cards(&items, self.store.config()))
    }

    fn show_filters<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let search = if self.query.search.is_empty() {
            "(none)"
        } else {
            self.query.search.as_str()
        };
        writeln!(
            out,
            "search: {search} | category: {} | sort: {}",
            self.query.category.label(),
            self.query.sort
        )
    }

    fn add<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<()> {
        let id = match arg.parse::<ItemId>() {
            Ok(id) => id,
            Err(err) => return writeln!(out, "error: {err}"),
        };
        match self.store.add_to_cart(&mut self.session, id) {
            Ok(notification) => print_notification(out, &notification),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn checkout<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.session.cart().is_empty() {
            return print_notification(out, &Notification::info("Your cart is empty."));
        }
        let checkout = self.store.checkout(&mut self.session);
        writeln!(
            out,
            "Purchased {} item(s) for {}",
            checkout.receipt.items.len(),
            self.store.config().format_price(checkout.receipt.total)
        )?;
        print_notification(out, &checkout.notification)
    }
}

fn print_notification<W: Write>(out: &mut W, notification: &Notification) -> io::Result<()> {
    let marker = match notification.level {
        NotificationLevel::Success => "[ok]",
        NotificationLevel::Info => "[info]",
    };
    writeln!(out, "{marker} {notification}")
}
