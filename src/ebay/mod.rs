//! eBay-specific modules for HTTP access, parsing, and data models.

pub mod client;
pub mod json_path;
pub mod marketplaces;
pub mod models;
pub mod parser;

pub use client::{EbayClient, Endpoints, ListingSource};
pub use marketplaces::Marketplace;
pub use models::{ListingApi, ListingRow, ListingTable};
pub use parser::{parse_browse, parse_finding};
