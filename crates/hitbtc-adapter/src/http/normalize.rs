/*
[INPUT]:  Raw order-book and balance payloads
[OUTPUT]: Labelled book levels and currency-indexed balances
[POS]:    HTTP layer - response reshaping (pure, no I/O)
[UPDATE]: When the exchange changes array layouts or balance keys
*/

use crate::types::{Balances, BookEntry, OrderBook, RawBalances, RawOrderBook};

/// Replace each `[price, volume]` pair with a labelled entry, per side.
pub fn label_order_book(raw: RawOrderBook) -> OrderBook {
    raw.into_iter()
        .map(|(side, levels)| {
            let entries = levels
                .into_iter()
                .map(|level| BookEntry {
                    price: level.0,
                    volume: level.1,
                })
                .collect();
            (side, entries)
        })
        .collect()
}

/// Index each account's balance records by `currency_code`.
///
/// Duplicate codes collapse to a single entry; the later record wins.
pub fn index_balances(raw: RawBalances) -> Balances {
    raw.into_iter()
        .map(|(account, records)| {
            let indexed = records
                .into_iter()
                .map(|record| (record.currency_code.clone(), record))
                .collect();
            (account, indexed)
        })
        .collect()
}
