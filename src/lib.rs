//! ebay-listings - Fetch eBay bestseller listings and export them to CSV
//!
//! Searches the Browse and Finding APIs for one delivery or location region,
//! normalizes both response shapes into the same five-column table, and
//! writes the table out as CSV.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod error;
pub mod export;
pub mod format;

pub use config::{Config, Credentials};
pub use ebay::{EbayClient, ListingApi, ListingRow, ListingSource, ListingTable, Marketplace};
pub use error::{ExportError, FetchError};
pub use export::save_csv;
