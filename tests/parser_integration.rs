//! Integration tests for the listing parsers using fixture files.

use ebay_listings::ebay::parser::{parse_browse, parse_finding};
use ebay_listings::ebay::ListingApi;
use serde_json::Value;

const BROWSE_FIXTURE: &str = include_str!("fixtures/browse_search.json");
const FINDING_FIXTURE: &str = include_str!("fixtures/finding_search.json");

fn items_at(fixture: &str, pointer: &str) -> Vec<Value> {
    let body: Value = serde_json::from_str(fixture).unwrap();
    body.pointer(pointer).and_then(Value::as_array).cloned().unwrap()
}

#[test]
fn test_parse_browse_fixture() {
    let items = items_at(BROWSE_FIXTURE, "/itemSummaries");
    let table = parse_browse(&items);

    assert_eq!(table.api(), ListingApi::Browse);
    assert_eq!(table.len(), 3);

    let first = &table.rows()[0];
    assert_eq!(first.title, "Bestseller Hardback Novel, Signed First Edition");
    assert_eq!(first.price, "24.99");
    assert_eq!(first.currency, "GBP");
    assert_eq!(first.detail, "New");
    assert_eq!(first.item_url, "https://www.ebay.co.uk/itm/204583829011");

    // Third listing has no fixed price
    let third = &table.rows()[2];
    assert_eq!(third.price, "");
    assert_eq!(third.currency, "");
    assert_eq!(third.detail, "New");
}

#[test]
fn test_parse_finding_fixture() {
    let items = items_at(FINDING_FIXTURE, "/findItemsByKeywordsResponse/0/searchResult/0/item");
    let table = parse_finding(&items);

    assert_eq!(table.api(), ListingApi::Finding);
    assert_eq!(table.len(), 2);

    let first = &table.rows()[0];
    assert_eq!(first.title, "Bestseller Board Game Family Edition");
    assert_eq!(first.price, "31.5");
    assert_eq!(first.currency, "USD");
    assert_eq!(first.detail, "Leeds,United Kingdom");
    assert_eq!(first.item_url, "https://www.ebay.com/itm/226011385417");

    // Second listing carries no sellingStatus
    let second = &table.rows()[1];
    assert_eq!(second.title, "Vintage Poster, Limited Print");
    assert_eq!(second.price, "");
    assert_eq!(second.currency, "");
    assert_eq!(second.detail, "Bristol,United Kingdom");
}

#[test]
fn test_parse_empty_inputs_keep_columns() {
    assert_eq!(
        parse_browse(&[]).columns(),
        ["Product Title", "Price", "Currency", "Condition", "Item URL"]
    );
    assert_eq!(
        parse_finding(&[]).columns(),
        ["Product Title", "Price", "Currency", "Location", "Item URL"]
    );
}
