//! eBay sites and their Finding API global IDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported eBay marketplaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    #[default]
    Us,
    Gb,
    De,
    Fr,
    It,
    Es,
    Ca,
    Au,
    Ie,
    At,
    Ch,
    Nl,
    Pl,
    In,
}

impl Marketplace {
    /// Returns the `GLOBAL-ID` value the Finding API expects.
    pub fn global_id(&self) -> &'static str {
        match self {
            Marketplace::Us => "EBAY-US",
            Marketplace::Gb => "EBAY-GB",
            Marketplace::De => "EBAY-DE",
            Marketplace::Fr => "EBAY-FR",
            Marketplace::It => "EBAY-IT",
            Marketplace::Es => "EBAY-ES",
            Marketplace::Ca => "EBAY-ENCA",
            Marketplace::Au => "EBAY-AU",
            Marketplace::Ie => "EBAY-IE",
            Marketplace::At => "EBAY-AT",
            Marketplace::Ch => "EBAY-CH",
            Marketplace::Nl => "EBAY-NL",
            Marketplace::Pl => "EBAY-PL",
            Marketplace::In => "EBAY-IN",
        }
    }

    /// Returns the eBay domain for this marketplace.
    pub fn domain(&self) -> &'static str {
        match self {
            Marketplace::Us => "ebay.com",
            Marketplace::Gb => "ebay.co.uk",
            Marketplace::De => "ebay.de",
            Marketplace::Fr => "ebay.fr",
            Marketplace::It => "ebay.it",
            Marketplace::Es => "ebay.es",
            Marketplace::Ca => "ebay.ca",
            Marketplace::Au => "ebay.com.au",
            Marketplace::Ie => "ebay.ie",
            Marketplace::At => "ebay.at",
            Marketplace::Ch => "ebay.ch",
            Marketplace::Nl => "ebay.nl",
            Marketplace::Pl => "ebay.pl",
            Marketplace::In => "ebay.in",
        }
    }

    /// Returns the listing currency of this marketplace.
    pub fn currency(&self) -> &'static str {
        match self {
            Marketplace::Us => "USD",
            Marketplace::Gb => "GBP",
            Marketplace::De
            | Marketplace::Fr
            | Marketplace::It
            | Marketplace::Es
            | Marketplace::Ie
            | Marketplace::At
            | Marketplace::Nl => "EUR",
            Marketplace::Ca => "CAD",
            Marketplace::Au => "AUD",
            Marketplace::Ch => "CHF",
            Marketplace::Pl => "PLN",
            Marketplace::In => "INR",
        }
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [Marketplace] {
        &[
            Marketplace::Us,
            Marketplace::Gb,
            Marketplace::De,
            Marketplace::Fr,
            Marketplace::It,
            Marketplace::Es,
            Marketplace::Ca,
            Marketplace::Au,
            Marketplace::Ie,
            Marketplace::At,
            Marketplace::Ch,
            Marketplace::Nl,
            Marketplace::Pl,
            Marketplace::In,
        ]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Marketplace::Us => "us",
            Marketplace::Gb => "gb",
            Marketplace::De => "de",
            Marketplace::Fr => "fr",
            Marketplace::It => "it",
            Marketplace::Es => "es",
            Marketplace::Ca => "ca",
            Marketplace::Au => "au",
            Marketplace::Ie => "ie",
            Marketplace::At => "at",
            Marketplace::Ch => "ch",
            Marketplace::Nl => "nl",
            Marketplace::Pl => "pl",
            Marketplace::In => "in",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Marketplace {
    type Err = MarketplaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let code = normalized.strip_prefix("ebay-").unwrap_or(&normalized);
        match code {
            "us" | "usa" => Ok(Marketplace::Us),
            "gb" | "uk" => Ok(Marketplace::Gb),
            "de" => Ok(Marketplace::De),
            "fr" => Ok(Marketplace::Fr),
            "it" => Ok(Marketplace::It),
            "es" => Ok(Marketplace::Es),
            "ca" | "enca" => Ok(Marketplace::Ca),
            "au" => Ok(Marketplace::Au),
            "ie" => Ok(Marketplace::Ie),
            "at" => Ok(Marketplace::At),
            "ch" => Ok(Marketplace::Ch),
            "nl" => Ok(Marketplace::Nl),
            "pl" => Ok(Marketplace::Pl),
            "in" => Ok(Marketplace::In),
            _ => Err(MarketplaceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceParseError(String);

impl fmt::Display for MarketplaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown marketplace '{}'. Valid marketplaces: us, gb, de, fr, it, es, ca, au, ie, at, ch, nl, pl, in",
            self.0
        )
    }
}

impl std::error::Error for MarketplaceParseError {}
