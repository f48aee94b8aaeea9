use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Coin identifiers offered by the options form, as CoinGecko ids.
///
/// `dogecoin` appears twice. The list is kept verbatim; the form shows
/// [`distinct_coin_options`] instead.
pub const COIN_OPTIONS: [&str; 15] = [
    "bitcoin",
    "ethereum",
    "litecoin",
    "dogecoin",
    "cardano",
    "binancecoin",
    "solana",
    "polkadot",
    "ripple",
    "dogecoin",
    "uniswap",
    "chainlink",
    "shiba-inu",
    "avalanche",
    "tron",
];

/// [`COIN_OPTIONS`] with repeated entries removed, first occurrence wins.
pub fn distinct_coin_options() -> Vec<&'static str> {
    let mut seen = Vec::with_capacity(COIN_OPTIONS.len());
    for coin in COIN_OPTIONS {
        if !seen.contains(&coin) {
            seen.push(coin);
        }
    }
    seen
}

/// Display currency (`vs_currency` on the CoinGecko API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VsCurrency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Inr,
    Brl,
}

impl VsCurrency {
    pub fn options() -> Vec<&'static str> {
        Self::iter().map(|c| c.into()).collect()
    }
}

/// History window in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, IntoStaticStr, Serialize, Deserialize)]
pub enum DayRange {
    #[strum(serialize = "7")]
    #[serde(rename = "7")]
    Week,

    #[strum(serialize = "14")]
    #[serde(rename = "14")]
    TwoWeeks,

    #[strum(serialize = "30")]
    #[serde(rename = "30")]
    Month,

    #[strum(serialize = "90")]
    #[serde(rename = "90")]
    Quarter,

    #[strum(serialize = "180")]
    #[serde(rename = "180")]
    HalfYear,

    #[strum(serialize = "365")]
    #[serde(rename = "365")]
    Year,
}

impl DayRange {
    pub fn options() -> Vec<&'static str> {
        Self::iter().map(|d| d.as_str()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// The (coin, currency, days) tuple driving both the form and the fetch.
///
/// Fields are plain strings: the store accepts whatever the caller hands it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}/{}d", coin, currency, days)]
#[serde(default)]
pub struct Selection {
    pub coin: String,
    pub currency: String,
    pub days: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new("bitcoin", VsCurrency::Usd.as_ref(), DayRange::Week.as_str())
    }
}

impl Selection {
    pub fn new(coin: impl Into<String>, currency: impl Into<String>, days: impl Into<String>) -> Self {
        Self { coin: coin.into(), currency: currency.into(), days: days.into() }
    }

    /// CoinGecko `market_chart` URL for this selection
    pub fn market_chart_url(&self, base_url: &str) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            base_url.trim_end_matches('/'),
            self.coin,
            self.currency,
            self.days
        )
    }

    /// Legend text of the price dataset
    pub fn series_label(&self) -> String {
        format!("{} price ({})", self.coin, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_selection_is_bitcoin_usd_week() {
        let s = Selection::default();
        assert_eq!(s, Selection::new("bitcoin", "usd", "7"));
        assert_eq!(s.to_string(), "bitcoin/usd/7d");
    }

    #[test]
    fn url_ignores_trailing_slash_on_base() {
        let s = Selection::new("ethereum", "eur", "30");
        assert_eq!(
            s.market_chart_url("http://localhost:8080/api/"),
            "http://localhost:8080/api/coins/ethereum/market_chart?vs_currency=eur&days=30"
        );
    }

    #[test]
    fn option_lists_match_form_values() {
        assert_eq!(COIN_OPTIONS.len(), 15);
        assert_eq!(distinct_coin_options().len(), 14);
        assert_eq!(
            VsCurrency::options(),
            vec!["usd", "eur", "gbp", "jpy", "aud", "cad", "chf", "cny", "inr", "brl"]
        );
        assert_eq!(DayRange::options(), vec!["7", "14", "30", "90", "180", "365"]);
    }

    #[test]
    fn string_forms_round_trip_through_strum() {
        assert_eq!(VsCurrency::from_str("jpy").unwrap(), VsCurrency::Jpy);
        assert_eq!(DayRange::from_str("180").unwrap(), DayRange::HalfYear);
        assert!(DayRange::from_str("1").is_err());
    }
}
