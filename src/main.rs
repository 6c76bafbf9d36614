use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use newsreel::config::Config;
use newsreel::crawler::Crawler;
use newsreel::query;
use newsreel::source::HttpSource;

#[derive(Parser, Debug)]
#[command(
    name = "newsreel",
    version,
    about = "Concurrent RSS news aggregator with an interactive search index"
)]
struct Cli {
    /// Root feed-list URL
    #[arg(short, long, default_value = "small-feed.xml")]
    url: String,

    /// Emit per-item progress logs
    #[arg(short, long)]
    verbose: bool,

    /// Suppress per-item progress logs (default)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    });

    // Quiet wins when both flags are given.
    setup_tracing(cli.verbose && !cli.quiet);

    let config = Config::from_env()?;
    let source = Arc::new(HttpSource::new(&config)?);
    let crawler = Crawler::new(source, &config);

    let index = match crawler.crawl(&cli.url).await {
        Ok(index) => index,
        Err(err) => {
            tracing::error!(url = %cli.url, error = %err, "unable to process the feed list; no index built");
            std::process::exit(1);
        }
    };

    query::run(&index)?;
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("newsreel=debug,info")
    } else {
        EnvFilter::new("newsreel=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
