//! ebay-listings - Fetch eBay bestseller listings and export them to CSV

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebay_listings::commands::FetchCommand;
use ebay_listings::config::{Config, OutputFormat};
use ebay_listings::ebay::{ListingApi, Marketplace};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ebay-listings",
    version,
    about = "Fetch eBay bestseller listings and export them to CSV",
    long_about = "Searches the eBay Browse or Finding API for one region, normalizes the results \
                  into a five-column table, and prints it or saves it as CSV."
)]
struct Cli {
    /// eBay marketplace for Finding queries (overrides EBAY_MARKETPLACE)
    #[arg(short, long, global = true)]
    marketplace: Option<Marketplace>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "EBAY_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format for stdout
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the Browse API for items deliverable to a country
    #[command(alias = "b")]
    Browse {
        /// Delivery country code (e.g. US, GB)
        region: String,

        /// Write results to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Search keywords
        #[arg(short, long)]
        keywords: Option<String>,

        /// Number of listings to request
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Search the Finding API for items located in a country
    #[command(alias = "f")]
    Finding {
        /// Location country code (e.g. US, GB)
        region: String,

        /// Write results to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Search keywords
        #[arg(short, long)]
        keywords: Option<String>,

        /// Number of listings to request
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List supported marketplaces
    Marketplaces,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    // File, then environment, then CLI flags
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(marketplace) = cli.marketplace {
        config.marketplace = marketplace;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let (api, region, output, keywords, limit) = match cli.command {
        Commands::Browse { region, output, keywords, limit } => {
            (ListingApi::Browse, region, output, keywords, limit)
        }
        Commands::Finding { region, output, keywords, limit } => {
            (ListingApi::Finding, region, output, keywords, limit)
        }
        Commands::Marketplaces => {
            println!("Supported eBay marketplaces:\n");
            println!("{:<6} {:<12} {:<14} {:<10}", "Code", "Global ID", "Domain", "Currency");
            println!("{:-<6} {:-<12} {:-<14} {:-<10}", "", "", "", "");

            for marketplace in Marketplace::all() {
                println!(
                    "{:<6} {:<12} {:<14} {:<10}",
                    marketplace.to_string(),
                    marketplace.global_id(),
                    marketplace.domain(),
                    marketplace.currency()
                );
            }
            return Ok(());
        }
    };

    if let Some(keywords) = keywords {
        config.keywords = keywords;
    }
    if let Some(limit) = limit {
        config.limit = limit;
    }

    let cmd = FetchCommand::new(config);
    let output = cmd.execute(api, &region, output.as_deref()).await?;
    println!("{}", output);

    Ok(())
}
