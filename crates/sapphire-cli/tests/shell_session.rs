use pretty_assertions::assert_eq;
use sapphire_catalog::{CategoryFilter, SortOrder, TableKind};
use sapphire_cli::{print_browse, print_categories, Flow, Shell};
use sapphire_store::{StoreConfig, Storefront};
use sapphire_test_utils::{sample_store, tie_store, FixtureDir};
use std::io::Cursor;

fn run_script<'s, 'c>(store: &'s Storefront<'c>, script: &str) -> (String, Shell<'s, 'c>) {
    let mut shell = Shell::new(store);
    let mut out = Vec::new();
    shell.run(Cursor::new(script), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), shell)
}

#[test]
fn browse_add_and_checkout() {
    let catalog = tie_store();
    let store = Storefront::new(&catalog, StoreConfig::default());

    let script = "category Accessories\n\
                  sort low to high\n\
                  collection\n\
                  add C1\n\
                  add C2\n\
                  cart\n\
                  checkout\n\
                  cart\n\
                  quit\n";
    let (output, shell) = run_script(&store, script);

    assert!(output.contains("search: (none) | category: Accessories | sort: Low to High"));
    let scarf = output.find("[C1] Scarf").unwrap();
    let belt = output.find("[C3] Belt").unwrap();
    assert!(scarf < belt);
    assert!(!output.contains("[C2] Dress"));

    assert!(output.contains("[ok] Added Scarf to cart!"));
    assert!(output.contains("[ok] Added Dress to cart!"));
    assert!(output.contains("  Scarf - ₹500\n  Dress - ₹1200\nTotal Price: ₹1700\n"));
    assert!(output.contains("Purchased 2 item(s) for ₹1700"));
    assert!(output.contains("[ok] Thank you for your purchase! Your cart is now empty."));
    assert!(output.ends_with("Your cart is empty.\n> Goodbye!\n"));

    assert!(shell.session().cart().is_empty());
}

#[test]
fn checkout_of_empty_cart_is_gated() {
    let catalog = sample_store();
    let store = Storefront::new(&catalog, StoreConfig::default());

    let (output, _) = run_script(&store, "checkout\n");
    assert!(output.contains("[info] Your cart is empty."));
    assert!(!output.contains("Thank you for your purchase!"));
}

#[test]
fn bad_input_is_reported_and_shell_continues() {
    let catalog = sample_store();
    let store = Storefront::new(&catalog, StoreConfig::default());

    let (output, shell) = run_script(
        &store,
        "add X9\nadd P99\nsort cheapest\ndance\nadd P2\n",
    );

    assert!(output.contains("error: invalid item id: 'X9'"));
    assert!(output.contains("error: no catalog item with id P99"));
    assert!(output.contains("error: unknown sort order: 'cheapest'"));
    assert!(output.contains("unknown command: dance (type 'help')"));
    assert!(output.contains("Added Lawn Scarf to cart!"));
    assert_eq!(shell.session().cart().len(), 1);
}

#[test]
fn filters_persist_between_listings() {
    let catalog = sample_store();
    let store = Storefront::new(&catalog, StoreConfig::default());
    let mut shell = Shell::new(&store);
    let mut out = Vec::new();

    for line in ["search SCARF", "category Clothing", "sort high-to-low"] {
        assert_eq!(shell.execute(line, &mut out).unwrap(), Flow::Continue);
    }
    assert_eq!(shell.query().search, "SCARF");
    assert_eq!(shell.query().category, CategoryFilter::Only("Clothing".into()));
    assert_eq!(shell.query().sort, SortOrder::HighToLow);

    out.clear();
    shell.execute("collection", &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out.clone()).unwrap(),
        "No items match the current filters.\n"
    );

    // Products ignore the category filter
    out.clear();
    shell.execute("products", &mut out).unwrap();
    let listing = String::from_utf8(out.clone()).unwrap();
    assert!(listing.starts_with("[P2] Lawn Scarf\n"));

    out.clear();
    shell.execute("category All", &mut out).unwrap();
    shell.execute("search", &mut out).unwrap();
    assert_eq!(shell.query().category, CategoryFilter::All);
    assert!(shell.query().search.is_empty());

    shell.execute("category Bags", &mut out).unwrap();
    shell.execute("category all", &mut out).unwrap();
    assert_eq!(shell.query().category, CategoryFilter::All);

    assert_eq!(shell.execute("exit", &mut out).unwrap(), Flow::Quit);
}

#[test]
fn home_page_shows_banner() {
    let fixtures = FixtureDir::sample();
    let banner = fixtures.touch("static/product_1.jpg");
    let catalog = sample_store();
    let store = Storefront::new(&catalog, StoreConfig::new().with_banner_image(&banner));

    let (output, _) = run_script(&store, "home\n");
    assert!(output.contains("Explore our latest collection of clothing and accessories.\n"));
    assert!(output.contains(&format!("Image: {}\n", banner.display())));
}

#[test]
fn config_dir_locates_product_images() {
    let fixtures = FixtureDir::sample();
    let image = fixtures.touch("static/product_2.jpg");
    let config_file = fixtures.touch("store.toml");
    let config = StoreConfig::from_file(&config_file).unwrap();
    let catalog = sample_store();
    let store = Storefront::new(&catalog, config);

    let mut out = Vec::new();
    print_browse(
        &store,
        TableKind::Products,
        &sapphire_catalog::CatalogQuery::new().with_search("lawn"),
        &mut out,
    )
    .unwrap();
    let listing = String::from_utf8(out).unwrap();
    assert!(listing.starts_with("[P2] Lawn Scarf\n"));
    assert!(listing.ends_with(&format!("  Image: {}\n", image.display())));
}

#[test]
fn one_shot_commands() {
    let fixtures = FixtureDir::sample();
    fixtures.touch("static/product_2.jpg");
    let catalog = sample_store();
    let config = StoreConfig::new().with_image_dir(fixtures.path().join("static"));
    let store = Storefront::new(&catalog, config);

    let mut out = Vec::new();
    print_categories(&store, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Clothing\nAccessories\nBags\n");

    let mut out = Vec::new();
    print_browse(
        &store,
        TableKind::Collection,
        &sapphire_catalog::CatalogQuery::new().with_search("silk"),
        &mut out,
    )
    .unwrap();
    let listing = String::from_utf8(out).unwrap();
    assert!(listing.starts_with("[C2] Silk Scarf\n  Price: ₹1290\n  Stock: 25\n  Category: Accessories\n  Image: "));
    assert!(listing.trim_end().ends_with("product_2.jpg"));
}
