//! Text rendering of catalog cards and the cart

use sapphire_cart::Cart;
use sapphire_catalog::{CatalogItem, TableKind};
use sapphire_store::StoreConfig;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Where a card's image lives and whether it exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    /// Image file exists
    Found(PathBuf),
    /// Image file is missing
    Missing(PathBuf),
}

impl ImageStatus {
    /// Check the image for an item
    ///
    /// Collection row `n` uses `product_<n+1>.jpg` in the image directory.
    /// Products rows use their own image reference, resolved like the
    /// config's other paths.
    #[must_use]
    pub fn for_item(item: &CatalogItem, config: &StoreConfig) -> Self {
        let path = match item.id.table() {
            TableKind::Collection => config
                .image_dir
                .join(format!("product_{}.jpg", item.id.row() + 1)),
            TableKind::Products => {
                config.resolve_asset(item.image_path.as_deref().unwrap_or_default())
            }
        };
        Self::check(path)
    }

    /// Check an arbitrary image path
    #[must_use]
    pub fn check(path: PathBuf) -> Self {
        if path.is_file() {
            ImageStatus::Found(path)
        } else {
            ImageStatus::Missing(path)
        }
    }

    fn render(&self, out: &mut String, indent: &str) {
        let _ = match self {
            ImageStatus::Found(path) => writeln!(out, "{indent}Image: {}", path.display()),
            ImageStatus::Missing(path) => {
                writeln!(out, "{indent}image not found: {}", path.display())
            }
        };
    }
}

/// Render the landing page
#[must_use]
pub fn render_home(config: &StoreConfig) -> String {
    let mut page = String::from(
        "Sapphire Online Store\n\
         Explore our latest collection of clothing and accessories.\n",
    );
    ImageStatus::check(config.banner_image.clone()).render(&mut page, "");
    page
}

/// Render one item as a card
#[must_use]
pub fn render_card(item: &CatalogItem, config: &StoreConfig) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "[{}] {}", item.id, item.name);
    let _ = writeln!(card, "  Price: {}", config.format_price(item.price));
    let _ = writeln!(card, "  Stock: {}", item.stock);
    if let Some(category) = &item.category {
        let _ = writeln!(card, "  Category: {category}");
    }
    ImageStatus::for_item(item, config).render(&mut card, "  ");
    card
}

/// Render a list of cards, or a placeholder when empty
#[must_use]
pub fn render_cards(items: &[&CatalogItem], config: &StoreConfig) -> String {
    if items.is_empty() {
        return "No items match the current filters.\n".to_string();
    }
    items
        .iter()
        .map(|item| render_card(item, config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the cart contents and total
#[must_use]
pub fn render_cart(cart: &Cart, config: &StoreConfig) -> String {
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }
    let mut out = String::from("Here are the items in your cart:\n");
    for item in cart.items() {
        let _ = writeln!(out, "  {} - {}", item.product_name, config.format_price(item.price));
    }
    let _ = writeln!(out, "Total Price: {}", config.format_price(cart.total()));
    out
}
