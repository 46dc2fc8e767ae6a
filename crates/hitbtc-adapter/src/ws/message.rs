/*
[INPUT]:  Raw market-stream text frames
[OUTPUT]: Parsed FeedMessage values keyed by symbol
[POS]:    WebSocket layer - message parsing
[UPDATE]: When the stream adds message kinds or changes envelopes
*/

use serde_json::Value;

const SNAPSHOT_KEY: &str = "MarketDataSnapshotFullRefresh";
const INCREMENTAL_KEY: &str = "MarketDataIncrementalRefresh";

/// One message from the market-data stream
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMessage {
    /// Full order-book snapshot for a symbol
    SnapshotFullRefresh { symbol: String, data: Value },
    /// Book/trade delta for a symbol
    IncrementalRefresh { symbol: String, data: Value },
    Other,
}

impl FeedMessage {
    /// Parse a text frame. Unknown envelopes become `Other`.
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        if let Some((symbol, data)) = extract(&value, SNAPSHOT_KEY) {
            return Ok(FeedMessage::SnapshotFullRefresh { symbol, data });
        }
        if let Some((symbol, data)) = extract(&value, INCREMENTAL_KEY) {
            return Ok(FeedMessage::IncrementalRefresh { symbol, data });
        }
        Ok(FeedMessage::Other)
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            FeedMessage::SnapshotFullRefresh { symbol, .. }
            | FeedMessage::IncrementalRefresh { symbol, .. } => Some(symbol),
            FeedMessage::Other => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FeedMessage::SnapshotFullRefresh { .. } => "snapshot",
            FeedMessage::IncrementalRefresh { .. } => "incremental",
            FeedMessage::Other => "other",
        }
    }
}

fn extract(value: &Value, key: &str) -> Option<(String, Value)> {
    let data = value.get(key)?;
    let symbol = data.get("symbol")?.as_str()?.to_string();
    Some((symbol, data.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let text = r#"{"MarketDataSnapshotFullRefresh": {"snapshotSeqNo": 1, "symbol": "ETHBTC", "ask": [], "bid": []}}"#;
        let message = FeedMessage::parse(text).expect("parse");

        assert_eq!(message.symbol(), Some("ETHBTC"));
        assert_eq!(message.kind(), "snapshot");
    }

    #[test]
    fn test_parse_incremental() {
        let text = r#"{"MarketDataIncrementalRefresh": {"seqNo": 7, "symbol": "BTCUSD", "trade": []}}"#;
        match FeedMessage::parse(text).expect("parse") {
            FeedMessage::IncrementalRefresh { symbol, data } => {
                assert_eq!(symbol, "BTCUSD");
                assert_eq!(data["seqNo"], 7);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_and_symbolless() {
        assert_eq!(
            FeedMessage::parse(r#"{"Heartbeat": {}}"#).expect("parse"),
            FeedMessage::Other
        );
        assert_eq!(
            FeedMessage::parse(r#"{"MarketDataIncrementalRefresh": {"seqNo": 1}}"#).expect("parse"),
            FeedMessage::Other
        );
        assert!(FeedMessage::parse("not json").is_err());
    }
}
