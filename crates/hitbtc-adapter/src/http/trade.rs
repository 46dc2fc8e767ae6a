/*
[INPUT]:  Order parameters (typed or raw) and signed credentials
[OUTPUT]: Execution reports and cancel confirmations
[POS]:    HTTP layer - order placement/cancellation (signed POST, form body)
[UPDATE]: When adding new trading endpoints or changing order identifiers
*/

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde_json::Value;

use crate::http::request::HttpMethod;
use crate::http::{HitbtcClient, Result};
use crate::types::{ApiResult, ParameterMap};

/// Length of generated client-side order identifiers
pub const CLIENT_ORDER_ID_LEN: usize = 16;

/// Short random alphanumeric token used as a client-side request id
pub fn generate_client_order_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CLIENT_ORDER_ID_LEN)
        .map(char::from)
        .collect()
}

impl HitbtcClient {
    /// Place an order.
    ///
    /// A `clientOrderId` is generated unless the caller supplies one.
    ///
    /// POST /api/1/trading/new_order
    pub async fn place_order(&self, params: impl Into<ParameterMap>) -> Result<ApiResult<Value>> {
        let params = ParameterMap::new()
            .with("clientOrderId", generate_client_order_id())
            .merge(&params.into());
        self.request_private("/trading/new_order", HttpMethod::Post, params)
            .await
    }

    /// Cancel an order.
    ///
    /// A `cancelRequestClientOrderId` is generated unless the caller supplies one.
    ///
    /// POST /api/1/trading/cancel_order
    pub async fn cancel_order(&self, params: impl Into<ParameterMap>) -> Result<ApiResult<Value>> {
        let params = ParameterMap::new()
            .with("cancelRequestClientOrderId", generate_client_order_id())
            .merge(&params.into());
        self.request_private("/trading/cancel_order", HttpMethod::Post, params)
            .await
    }

    /// Cancel every open order, optionally filtered by `symbol`/`side`
    ///
    /// POST /api/1/trading/cancel_orders
    pub async fn cancel_all_orders(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/trading/cancel_orders", HttpMethod::Post, params)
            .await
    }
}
