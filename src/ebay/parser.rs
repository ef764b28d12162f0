//! Normalizes raw Browse and Finding items into listing tables.
//!
//! Both parsers are total: any missing field becomes an empty string and
//! input order is preserved.

use crate::ebay::json_path::{first_text_at, text_at};
use crate::ebay::models::{ListingApi, ListingRow, ListingTable};
use serde_json::Value;
use tracing::debug;

mod browse {
    use crate::ebay::json_path::Step::{self, Key};

    pub const TITLE: &[Step] = &[Key("title")];
    pub const PRICE: &[Step] = &[Key("price"), Key("value")];
    pub const CURRENCY: &[Step] = &[Key("price"), Key("currency")];
    pub const CONDITION: &[Step] = &[Key("condition")];
    pub const ITEM_URL: &[Step] = &[Key("itemWebUrl")];
}

// Finding items wrap every scalar in a single-element array.
mod finding {
    use crate::ebay::json_path::Step::{self, Index, Key};

    pub const TITLE: &[Step] = &[Key("title"), Index(0), Key("value")];
    // Live responses send the title as a bare string inside the array.
    pub const TITLE_BARE: &[Step] = &[Key("title"), Index(0)];
    pub const PRICE: &[Step] =
        &[Key("sellingStatus"), Index(0), Key("currentPrice"), Index(0), Key("__value__")];
    pub const CURRENCY: &[Step] =
        &[Key("sellingStatus"), Index(0), Key("currentPrice"), Index(0), Key("@currencyId")];
    pub const LOCATION: &[Step] = &[Key("location")];
    pub const ITEM_URL: &[Step] = &[Key("viewItemURL"), Index(0)];
}

/// Maps Browse `itemSummaries` entries to a table with a Condition column.
pub fn parse_browse(items: &[Value]) -> ListingTable {
    let rows: Vec<ListingRow> = items
        .iter()
        .map(|item| ListingRow {
            title: text_at(item, browse::TITLE),
            price: text_at(item, browse::PRICE),
            currency: text_at(item, browse::CURRENCY),
            detail: text_at(item, browse::CONDITION),
            item_url: text_at(item, browse::ITEM_URL),
        })
        .collect();

    debug!("Parsed {} Browse listings", rows.len());
    ListingTable::new(ListingApi::Browse, rows)
}

/// Maps Finding `searchResult.item` entries to a table with a Location column.
pub fn parse_finding(items: &[Value]) -> ListingTable {
    let rows: Vec<ListingRow> = items
        .iter()
        .map(|item| ListingRow {
            title: first_text_at(item, &[finding::TITLE, finding::TITLE_BARE]),
            price: text_at(item, finding::PRICE),
            currency: text_at(item, finding::CURRENCY),
            detail: text_at(item, finding::LOCATION),
            item_url: text_at(item, finding::ITEM_URL),
        })
        .collect();

    debug!("Parsed {} Finding listings", rows.len());
    ListingTable::new(ListingApi::Finding, rows)
}

/// Dispatches to the parser for `api`.
pub fn parse(api: ListingApi, items: &[Value]) -> ListingTable {
    match api {
        ListingApi::Browse => parse_browse(items),
        ListingApi::Finding => parse_finding(items),
    }
}
