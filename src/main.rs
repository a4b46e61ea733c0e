// src/main.rs
mod extractors;
mod site;
mod storage;
mod utils;

use clap::{Parser, ValueEnum};
use extractors::{render_selection, Selection};
use scraper::Html;
use site::{client, SiteConfig};
use std::process::ExitCode;
use std::time::Duration;
use storage::StorageManager;
use utils::AppError;

/// Lists the free GNU/Linux distributions endorsed by the GNU project
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which distributions to list
    #[arg(short, long, value_enum, default_value_t = CategoryArg::All)]
    category: CategoryArg,

    /// Directory the results file is written to
    #[arg(short, long, default_value = "results/")]
    save_path: String,

    /// Do not print the results to the terminal
    #[arg(short, long)]
    quiet: bool,

    /// Do not write a results file
    #[arg(long, conflicts_with = "quiet")]
    no_save: bool,

    /// Page listing the distributions
    #[arg(short, long, env = "FREE_DISTROS_URL", default_value = site::DEFAULT_PAGE_URL)]
    url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Debug mode - also save the fetched HTML page
    #[arg(short, long)]
    debug: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    ForPc,
    Small,
    Historical,
    All,
}

impl From<CategoryArg> for Selection {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::ForPc => Selection::ForPc,
            CategoryArg::Small => Selection::Small,
            CategoryArg::Historical => Selection::Historical,
            CategoryArg::All => Selection::All,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let selection = Selection::from(args.category);

    // 3. Resolve the page location
    let config = SiteConfig::from_page_url(&args.url, Duration::from_secs(args.timeout))?;

    // 4. Fetch the page (the only network call)
    let html = client::fetch_page(&config).await?;

    // 5. Extract the selected categories
    let document = Html::parse_document(&html);
    let output = render_selection(&document, selection, &config.origin);

    // 6. Print before touching the filesystem; a failed save must not hide results
    if !args.quiet {
        println!("{}", output);
    }

    // 7. Save snapshot and results, if asked for
    if args.no_save && !args.debug {
        return Ok(());
    }
    let storage = StorageManager::new(&args.save_path)?;

    if args.debug {
        storage.save_raw_page(&html)?;
    }

    if !args.no_save {
        let prefix = format!("{}_distros", selection.name());
        let path = storage.save_results(&prefix, &output)?;
        tracing::info!("Results written to {}", path.display());
    }

    Ok(())
}
