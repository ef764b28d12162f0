//! Normalized listing rows and tables.

use std::fmt;

/// The eBay search API a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingApi {
    /// Browse API (`/buy/browse/v1/item_summary/search`)
    Browse,
    /// Finding API (`/services/search/FindingService/v1`)
    Finding,
}

impl ListingApi {
    /// Column headers of a table produced from this API, in output order.
    pub fn columns(&self) -> [&'static str; 5] {
        ["Product Title", "Price", "Currency", self.detail_column(), "Item URL"]
    }

    /// Header of the fourth column, which differs between the two APIs.
    pub fn detail_column(&self) -> &'static str {
        match self {
            ListingApi::Browse => "Condition",
            ListingApi::Finding => "Location",
        }
    }
}

impl fmt::Display for ListingApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingApi::Browse => write!(f, "Browse"),
            ListingApi::Finding => write!(f, "Finding"),
        }
    }
}

/// One listing, normalized to string fields. Missing source data is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRow {
    /// Product title
    pub title: String,
    /// Price exactly as the API reported it
    pub price: String,
    /// Currency code
    pub currency: String,
    /// Condition (Browse) or item location (Finding)
    pub detail: String,
    /// Listing page URL
    pub item_url: String,
}

impl ListingRow {
    /// Field values in column order.
    pub fn record(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.price.as_str(),
            self.currency.as_str(),
            self.detail.as_str(),
            self.item_url.as_str(),
        ]
    }
}

/// An ordered set of rows sharing the columns of one API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTable {
    api: ListingApi,
    rows: Vec<ListingRow>,
}

impl ListingTable {
    /// Creates a table for the given API.
    pub fn new(api: ListingApi, rows: Vec<ListingRow>) -> Self {
        Self { api, rows }
    }

    /// Returns the API the rows came from.
    pub fn api(&self) -> ListingApi {
        self.api
    }

    /// Column headers, in output order.
    pub fn columns(&self) -> [&'static str; 5] {
        self.api.columns()
    }

    pub fn rows(&self) -> &[ListingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as column-name keyed JSON objects, preserving column order.
    pub fn to_json_records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        let columns = self.columns();
        self.rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row.record())
                    .map(|(col, val)| (col.to_string(), serde_json::Value::from(val)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row() -> ListingRow {
        ListingRow {
            title: "Widget".to_string(),
            price: "9.99".to_string(),
            currency: "USD".to_string(),
            detail: "NEW".to_string(),
            item_url: "http://x/1".to_string(),
        }
    }

    #[test]
    fn test_columns_per_api() {
        assert_eq!(
            ListingApi::Browse.columns(),
            ["Product Title", "Price", "Currency", "Condition", "Item URL"]
        );
        assert_eq!(
            ListingApi::Finding.columns(),
            ["Product Title", "Price", "Currency", "Location", "Item URL"]
        );
    }

    #[test]
    fn test_api_display() {
        assert_eq!(ListingApi::Browse.to_string(), "Browse");
        assert_eq!(ListingApi::Finding.to_string(), "Finding");
    }

    #[test]
    fn test_row_record_order() {
        assert_eq!(make_row().record(), ["Widget", "9.99", "USD", "NEW", "http://x/1"]);
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = ListingTable::new(ListingApi::Finding, Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.columns()[3], "Location");
    }

    #[test]
    fn test_json_records() {
        let table = ListingTable::new(ListingApi::Browse, vec![make_row()]);
        let records = table.to_json_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Product Title"], "Widget");
        assert_eq!(records[0]["Condition"], "NEW");
        assert_eq!(records[0]["Item URL"], "http://x/1");
    }
}
