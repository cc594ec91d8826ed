use clap::{ArgAction, Parser};
use moonbase_page_context::{HttpFetch, HttpFetchConfig, LoadOrder, PageContextLoader};
use tracing::{info, Level};

/// Load the MoonBase page context from a device and print it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base url of the device's web server
    #[arg(long, env = "MOONBASE_URL", default_value = moonbase_page_context::fetch::http::DEFAULT_BASE_URL)]
    base_url: String,
    /// Request both endpoints at once instead of one after the other
    #[arg(long)]
    concurrent: bool,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = HttpFetchConfig {
        base_url: args.base_url.clone(),
        ..HttpFetchConfig::default()
    };
    let fetch = match HttpFetch::new(&config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let order = if args.concurrent { LoadOrder::Concurrent } else { LoadOrder::Sequential };
    info!(base_url = %fetch.base_url(), ?order, "loading page context");

    let ctx = match PageContextLoader::new(fetch).with_order(order).load().await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Load failed: {e}");
            std::process::exit(1);
        }
    };

    let out = if args.compact {
        serde_json::to_string(&ctx)
    } else {
        serde_json::to_string_pretty(&ctx)
    };
    match out {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not serialize page context: {e}");
            std::process::exit(1);
        }
    }
}
