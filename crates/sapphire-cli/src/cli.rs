//! Command line definition and one-shot commands

use crate::view::render_cards;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sapphire_catalog::{CatalogQuery, CategoryFilter, SortOrder, TableKind};
use sapphire_store::{StoreConfig, Storefront};
use std::io::Write;
use std::path::PathBuf;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "store.toml";

/// Build the `sapphire` command
#[must_use]
pub fn command() -> Command {
    Command::new("sapphire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sapphire Online Store")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to store.toml (default: ./store.toml if present)"),
        )
        .arg(
            Arg::new("collection")
                .long("collection")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Collection CSV, overrides the config file"),
        )
        .arg(
            Arg::new("products")
                .long("products")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Products CSV, overrides the config file"),
        )
        .arg(
            Arg::new("images")
                .long("images")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding collection images"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("categories").about("List collection categories"))
        .subcommand(
            Command::new("browse")
                .about("List catalog items as cards")
                .arg(
                    Arg::new("table")
                        .required(true)
                        .value_parser(value_parser!(TableKind))
                        .help("collection or products"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .default_value("")
                        .help("Case-insensitive name substring"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value(CategoryFilter::ALL_LABEL)
                        .help("Collection category, or All"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .default_value("none")
                        .value_parser(value_parser!(SortOrder))
                        .help("none, low-to-high or high-to-low"),
                ),
        )
        .subcommand(Command::new("shop").about("Interactive shopping session"))
}

/// Resolve configuration from `--config`, `./store.toml` and overrides
///
/// # Errors
/// Returns an error if a config file exists but cannot be loaded.
pub fn resolve_config(matches: &ArgMatches) -> anyhow::Result<StoreConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StoreConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() => {
            StoreConfig::from_file(DEFAULT_CONFIG_FILE).context("loading ./store.toml")?
        }
        None => StoreConfig::default(),
    };

    if let Some(path) = matches.get_one::<PathBuf>("collection") {
        config = config.with_collection_path(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("products") {
        config = config.with_products_path(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("images") {
        config = config.with_image_dir(path);
    }
    Ok(config)
}

/// Query described by `browse` arguments
#[must_use]
pub fn browse_query(matches: &ArgMatches) -> CatalogQuery {
    let search = matches.get_one::<String>("search").cloned().unwrap_or_default();
    let category = CategoryFilter::from(matches.get_one::<String>("category").map(String::as_str));
    let sort = matches.get_one::<SortOrder>("sort").copied().unwrap_or_default();
    CatalogQuery::new()
        .with_search(search)
        .with_category(category)
        .with_sort(sort)
}

/// Print collection categories, one per line
///
/// # Errors
/// Returns any write error.
pub fn print_categories<W: Write>(store: &Storefront<'_>, out: &mut W) -> anyhow::Result<()> {
    for category in store.categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Print matching items as cards
///
/// # Errors
/// Returns any write error.
pub fn print_browse<W: Write>(
    store: &Storefront<'_>,
    table: TableKind,
    query: &CatalogQuery,
    out: &mut W,
) -> anyhow::Result<()> {
    let items = store.query(table, query);
    write!(out, "{}", render_cards(&items, store.config()))?;
    Ok(())
}
