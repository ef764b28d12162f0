//! Fetch command: search one API, normalize, then save or print.

use crate::config::Config;
use crate::ebay::{parser, EbayClient, ListingApi, ListingSource};
use crate::export;
use crate::format::Formatter;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Runs a single-region search against one of the eBay APIs.
pub struct FetchCommand {
    config: Config,
}

impl FetchCommand {
    /// Creates a new fetch command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the fetch and returns what should be printed.
    pub async fn execute(
        &self,
        api: ListingApi,
        region: &str,
        output: Option<&Path>,
    ) -> Result<String> {
        let client = EbayClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, api, region, output).await
    }

    /// Executes the fetch with a provided client (for testing).
    ///
    /// With `output` set the table is written there as CSV and a one-line
    /// summary is returned; otherwise the formatted table is returned.
    pub async fn execute_with_client(
        &self,
        client: &impl ListingSource,
        api: ListingApi,
        region: &str,
        output: Option<&Path>,
    ) -> Result<String> {
        let items = client
            .fetch(api, region)
            .await
            .with_context(|| format!("Failed to fetch {} listings for {}", api, region))?;

        let table = parser::parse(api, &items);
        info!("Found {} listings via {} API for {}", table.len(), api, region);

        match output {
            Some(path) => {
                export::save_csv(&table, path)?;
                Ok(format!("Saved {} listings to {}", table.len(), path.display()))
            }
            None => Ok(Formatter::new(self.config.format).format_table(&table)),
        }
    }
}
