//! HTTP client for the eBay Browse and Finding search APIs.

use crate::config::{Config, Credentials};
use crate::ebay::json_path::{array_at, lookup, text_at, Step};
use crate::ebay::marketplaces::Marketplace;
use crate::ebay::models::ListingApi;
use crate::error::FetchError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

use Step::{Index, Key};

const EBAY_API_BASE: &str = "https://api.ebay.com";
const EBAY_SVCS_BASE: &str = "https://svcs.ebay.com";
const BROWSE_PATH: &str = "/buy/browse/v1/item_summary/search";
const FINDING_PATH: &str = "/services/search/FindingService/v1";

const BROWSE_ITEMS: &[Step] = &[Key("itemSummaries")];
const BROWSE_ERROR: &[Step] = &[Key("errors"), Index(0), Key("message")];

const FINDING_RESPONSE: &[Step] = &[Key("findItemsByKeywordsResponse")];
const FINDING_ITEMS: &[Step] =
    &[Key("findItemsByKeywordsResponse"), Index(0), Key("searchResult"), Index(0), Key("item")];
const FINDING_ACK: &[Step] = &[Key("findItemsByKeywordsResponse"), Index(0), Key("ack")];
const FINDING_ACK_ERROR: &[Step] = &[
    Key("findItemsByKeywordsResponse"),
    Index(0),
    Key("errorMessage"),
    Index(0),
    Key("error"),
    Index(0),
    Key("message"),
];
const FINDING_ERROR: &[Step] =
    &[Key("errorMessage"), Index(0), Key("error"), Index(0), Key("message")];

/// Listing fetches against the two eBay search APIs - enables mocking for tests.
///
/// The strict methods report why nothing came back; the `fetch_*` methods
/// log the failure and degrade to an empty list.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Searches the Browse API for items deliverable to `region`.
    async fn browse(&self, region: &str) -> Result<Vec<Value>, FetchError>;

    /// Searches the Finding API for items located in `region`.
    async fn finding(&self, region: &str) -> Result<Vec<Value>, FetchError>;

    /// Runs the strict search for `api`.
    async fn fetch(&self, api: ListingApi, region: &str) -> Result<Vec<Value>, FetchError> {
        match api {
            ListingApi::Browse => self.browse(region).await,
            ListingApi::Finding => self.finding(region).await,
        }
    }

    /// Browse search that logs any failure and returns no items.
    async fn fetch_browse(&self, region: &str) -> Vec<Value> {
        self.browse(region).await.unwrap_or_else(|e| {
            warn!("Error fetching eBay Browse API data: {}", e);
            Vec::new()
        })
    }

    /// Finding search that logs any failure and returns no items.
    async fn fetch_finding(&self, region: &str) -> Vec<Value> {
        self.finding(region).await.unwrap_or_else(|e| {
            warn!("Error fetching eBay Finding API data: {}", e);
            Vec::new()
        })
    }
}

/// Full URLs of the two search endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub browse: String,
    pub finding: String,
}

impl Endpoints {
    /// Both endpoints under one base URL (for testing against a mock server).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            browse: format!("{}{}", base, BROWSE_PATH),
            finding: format!("{}{}", base, FINDING_PATH),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            browse: format!("{}{}", EBAY_API_BASE, BROWSE_PATH),
            finding: format!("{}{}", EBAY_SVCS_BASE, FINDING_PATH),
        }
    }
}

/// eBay search client. Holds one connection pool reused across calls.
pub struct EbayClient {
    client: Client,
    credentials: Credentials,
    marketplace: Marketplace,
    keywords: String,
    limit: u32,
    endpoints: Endpoints,
}

impl EbayClient {
    /// Creates a client against the production endpoints.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoints(config, Endpoints::default())
    }

    /// Creates a client against custom endpoints (for testing).
    pub fn with_endpoints(config: &Config, endpoints: Endpoints) -> Result<Self> {
        let mut builder =
            Client::builder().gzip(true).brotli(true).connect_timeout(Duration::from_secs(10));

        // 0 disables the whole-request timeout
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
            marketplace: config.marketplace,
            keywords: config.keywords.clone(),
            limit: config.limit,
            endpoints,
        })
    }

    fn browse_url(&self, region: &str) -> String {
        let limit = self.limit.to_string();
        let filter = format!("deliveryCountry:{}", region);
        let query = encode_query(&[
            ("q", self.keywords.as_str()),
            ("limit", limit.as_str()),
            ("filter", filter.as_str()),
        ]);
        format!("{}?{}", self.endpoints.browse, query)
    }

    fn finding_url(&self, region: &str) -> String {
        let limit = self.limit.to_string();
        let query = encode_query(&[
            ("OPERATION-NAME", "findItemsByKeywords"),
            ("SERVICE-VERSION", "1.0.0"),
            ("SECURITY-APPNAME", self.credentials.app_id.as_deref().unwrap_or_default()),
            ("RESPONSE-DATA-FORMAT", "JSON"),
            ("REST-PAYLOAD", ""),
            ("keywords", self.keywords.as_str()),
            ("GLOBAL-ID", self.marketplace.global_id()),
            ("paginationInput.entriesPerPage", limit.as_str()),
            ("itemFilter(0).name", "LocatedIn"),
            ("itemFilter(0).value", region),
        ]);
        format!("{}?{}", self.endpoints.finding, query)
    }

    /// Sends a GET and decodes the JSON body, classifying every failure.
    async fn get_json(
        &self,
        api: ListingApi,
        url: &str,
        headers: Vec<(&'static str, String)>,
    ) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport { api, message: e.to_string() })?;

        let status = response.status();
        debug!("{} response status: {}", api, status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport { api, message: e.to_string() })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                api,
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { api, source })
    }
}

#[async_trait]
impl ListingSource for EbayClient {
    async fn browse(&self, region: &str) -> Result<Vec<Value>, FetchError> {
        let url = self.browse_url(region);

        let mut headers = vec![("Content-Type", "application/json".to_string())];
        match &self.credentials.auth_token {
            Some(token) => headers.push(("Authorization", format!("Bearer {}", token))),
            None => warn!("No EBAY_AUTH_TOKEN configured, Browse request will be unauthenticated"),
        }

        info!("Searching Browse API: {} (deliveryCountry:{})", self.keywords, region);
        let body = self.get_json(ListingApi::Browse, &url, headers).await?;

        let items = array_at(&body, BROWSE_ITEMS);
        debug!("Browse API returned {} items", items.len());
        Ok(items)
    }

    async fn finding(&self, region: &str) -> Result<Vec<Value>, FetchError> {
        if self.credentials.app_id.is_none() {
            warn!("No EBAY_APP_ID configured, Finding request will be unauthenticated");
        }

        let url = self.finding_url(region);

        info!("Searching Finding API: {} (LocatedIn {})", self.keywords, region);
        let body = self.get_json(ListingApi::Finding, &url, Vec::new()).await?;

        if lookup(&body, FINDING_RESPONSE).is_none() {
            let message = text_at(&body, FINDING_ERROR);
            if !message.is_empty() {
                return Err(FetchError::Api { api: ListingApi::Finding, message });
            }
            debug!("Finding response has no findItemsByKeywordsResponse, treating as empty");
            return Ok(Vec::new());
        }

        if text_at(&body, FINDING_ACK) == "Failure" {
            let mut message = text_at(&body, FINDING_ACK_ERROR);
            if message.is_empty() {
                message = "ack=Failure".to_string();
            }
            return Err(FetchError::Api { api: ListingApi::Finding, message });
        }

        let items = array_at(&body, FINDING_ITEMS);
        debug!("Finding API returned {} items", items.len());
        Ok(items)
    }
}

/// Percent-encodes key/value pairs into a query string.
fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Pulls a human-readable message out of an error body from either API.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return String::new();
    };

    let browse = text_at(&value, BROWSE_ERROR);
    if !browse.is_empty() {
        return browse;
    }
    text_at(&value, FINDING_ERROR)
}
