/*
[INPUT]:  Symbol identifiers and caller parameter overrides
[OUTPUT]: Market data (server time, symbols, tickers, order book, trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing default parameters
*/

use serde_json::Value;

use crate::http::HitbtcClient;
use crate::http::canonical::encode_segment;
use crate::http::normalize::label_order_book;
use crate::types::{
    ApiResult, OrderBook, OrderBookQuery, ParameterMap, RawOrderBook, RecentTradesQuery,
    ServerTime, TradesQuery,
};

impl HitbtcClient {
    /// Exchange server time
    ///
    /// GET /api/1/public/time
    pub async fn get_server_time(&self) -> ApiResult<ServerTime> {
        self.request_public("/time", &ParameterMap::new()).await
    }

    /// Trading symbols and their lot/step sizes
    ///
    /// GET /api/1/public/symbols
    pub async fn get_symbols(&self) -> ApiResult<Value> {
        self.request_public("/symbols", &ParameterMap::new()).await
    }

    /// Ticker for one symbol
    ///
    /// GET /api/1/public/{symbol}/ticker
    pub async fn get_ticker(&self, symbol: &str) -> ApiResult<Value> {
        let endpoint = format!("/{}/ticker", encode_segment(symbol));
        self.request_public(&endpoint, &ParameterMap::new()).await
    }

    /// Tickers for every symbol
    ///
    /// GET /api/1/public/ticker
    pub async fn get_all_tickers(&self) -> ApiResult<Value> {
        self.request_public("/ticker", &ParameterMap::new()).await
    }

    /// Order book with numeric levels, labelled as `{price, volume}`
    ///
    /// GET /api/1/public/{symbol}/orderbook?format_amount=number&format_price=number
    pub async fn get_order_book(&self, symbol: &str) -> ApiResult<OrderBook> {
        let params = OrderBookQuery::default().to_params();
        let endpoint = format!("/{}/orderbook", encode_segment(symbol));
        self.request_public::<RawOrderBook>(&endpoint, &params)
            .await
            .map(label_order_book)
    }

    /// Trades for a symbol; `params` override [`TradesQuery`] defaults
    ///
    /// GET /api/1/public/{symbol}/trades
    pub async fn get_trades(&self, symbol: &str, params: ParameterMap) -> ApiResult<Value> {
        let params = TradesQuery::default().to_params().merge(&params);
        let endpoint = format!("/{}/trades", encode_segment(symbol));
        self.request_public(&endpoint, &params).await
    }

    /// Most recent trades; `params` override [`RecentTradesQuery`] defaults
    ///
    /// GET /api/1/public/{symbol}/trades/recent
    pub async fn get_recent_trades(&self, symbol: &str, params: ParameterMap) -> ApiResult<Value> {
        let params = RecentTradesQuery::default().to_params().merge(&params);
        let endpoint = format!("/{}/trades/recent", encode_segment(symbol));
        self.request_public(&endpoint, &params).await
    }
}
