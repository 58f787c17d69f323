use anyhow::Context;
use sapphire_catalog::TableKind;
use sapphire_cli::{browse_query, command, print_browse, print_categories, resolve_config, Shell};
use sapphire_store::Storefront;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    let config = resolve_config(&matches)?;
    let store = Storefront::global(config).context("loading catalog")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("categories", _)) => print_categories(&store, &mut out)?,
        Some(("browse", args)) => {
            let table = args
                .get_one::<TableKind>("table")
                .copied()
                .context("missing table argument")?;
            print_browse(&store, table, &browse_query(args), &mut out)?;
        }
        Some(("shop", _)) => {
            let stdin = std::io::stdin();
            Shell::new(&store).run(stdin.lock(), &mut out)?;
        }
        _ => unreachable!("clap requires a subcommand"),
    }
    Ok(())
}
