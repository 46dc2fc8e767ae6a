/*
[INPUT]:  Query parameters and signed credentials
[OUTPUT]: Account data (balances, orders, trade history)
[POS]:    HTTP layer - private read endpoints (signed GET)
[UPDATE]: When adding new account endpoints or changing default parameters
*/

use serde_json::Value;

use crate::http::normalize::index_balances;
use crate::http::request::HttpMethod;
use crate::http::{HitbtcClient, Result};
use crate::types::{
    AllTradesQuery, ApiResult, Balances, ParameterMap, RawBalances, RecentOrdersQuery,
};

impl HitbtcClient {
    /// Trading balance, indexed by currency code
    ///
    /// GET /api/1/trading/balance
    pub async fn get_my_balance(&self) -> Result<ApiResult<Balances>> {
        let params = ParameterMap::new();
        let result = self
            .request_private::<RawBalances>("/trading/balance", HttpMethod::Get, params)
            .await?;
        Ok(result.map(index_balances))
    }

    /// Open orders
    ///
    /// GET /api/1/trading/orders/active
    pub async fn get_my_active_orders(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/trading/orders/active", HttpMethod::Get, params)
            .await
    }

    /// Recently closed orders; `params` override [`RecentOrdersQuery`] defaults
    ///
    /// GET /api/1/trading/orders/recent
    pub async fn get_my_recent_orders(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        let params = RecentOrdersQuery::default().to_params().merge(&params);
        self.request_private("/trading/orders/recent", HttpMethod::Get, params)
            .await
    }

    /// One order by `clientOrderId`
    ///
    /// GET /api/1/trading/order
    pub async fn get_my_order(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/trading/order", HttpMethod::Get, params)
            .await
    }

    /// Trades belonging to an order
    ///
    /// GET /api/1/trading/trades/by/order
    pub async fn get_my_trades_by_order(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/trading/trades/by/order", HttpMethod::Get, params)
            .await
    }

    /// Trade history; `params` override [`AllTradesQuery`] defaults
    ///
    /// GET /api/1/trading/trades
    pub async fn get_all_my_trades(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        let params = AllTradesQuery::default().to_params().merge(&params);
        self.request_private("/trading/trades", HttpMethod::Get, params)
            .await
    }
}
