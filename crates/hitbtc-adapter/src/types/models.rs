/*
[INPUT]:  Exchange JSON payloads (numeric formatting requested)
[OUTPUT]: Typed Rust structs, raw and normalized shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new normalized shapes are added
*/

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// A `[price, volume]` pair as the exchange sends it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBookLevel(pub Decimal, pub Decimal);

/// Order book keyed by side (`bid`/`ask`) before normalization
pub type RawOrderBook = BTreeMap<String, Vec<RawBookLevel>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub price: Decimal,
    pub volume: Decimal,
}

/// Order book keyed by side, each level labelled
pub type OrderBook = BTreeMap<String, Vec<BookEntry>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub currency_code: String,
    #[serde(default)]
    pub cash: Decimal,
    #[serde(default)]
    pub reserved: Decimal,
}

/// Balance records grouped by account kind, as returned
pub type RawBalances = BTreeMap<String, Vec<BalanceRecord>>;

/// Balance records grouped by account kind, then indexed by currency code
pub type Balances = BTreeMap<String, BTreeMap<String, BalanceRecord>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_order_book_accepts_numeric_levels() {
        let raw: RawOrderBook =
            serde_json::from_str(r#"{"bid": [[100, 2], [99.5, 0.25]], "ask": []}"#)
                .expect("order book");

        assert_eq!(
            raw["bid"][1],
            RawBookLevel("99.5".parse().expect("p"), "0.25".parse().expect("v"))
        );
        assert!(raw["ask"].is_empty());
    }

    #[test]
    fn test_balance_record_defaults_missing_amounts() {
        let record: BalanceRecord =
            serde_json::from_str(r#"{"currency_code": "BTC", "cash": 0.5}"#).expect("record");
        assert_eq!(record.reserved, Decimal::ZERO);
        assert_eq!(record.cash, "0.5".parse::<Decimal>().expect("cash"));
    }
}
