/*
[INPUT]:  Payment parameters (currency, amount, address) and credentials
[OUTPUT]: Payment balances, deposit addresses, transactions, transfers
[POS]:    HTTP layer - payment endpoints (signed GET and POST)
[UPDATE]: When adding payment endpoints or changing their path layout
*/

use serde_json::Value;

use crate::http::canonical::encode_segment;
use crate::http::request::HttpMethod;
use crate::http::{HitbtcClient, HitbtcError, Result};
use crate::types::{ApiResult, ParameterMap, PaymentTransactionsQuery};

impl HitbtcClient {
    /// Main-account balances
    ///
    /// GET /api/1/payment/balance
    pub async fn get_payment_balance(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/payment/balance", HttpMethod::Get, params)
            .await
    }

    /// Last deposit address for a currency
    ///
    /// GET /api/1/payment/address/{currency}
    pub async fn get_payment_address(
        &self,
        currency: &str,
        params: ParameterMap,
    ) -> Result<ApiResult<Value>> {
        let (endpoint, params) = address_request(currency, params)?;
        self.request_private(&endpoint, HttpMethod::Get, params)
            .await
    }

    /// Create a new deposit address for a currency
    ///
    /// POST /api/1/payment/address/{currency}
    pub async fn create_payment_address(
        &self,
        currency: &str,
        params: ParameterMap,
    ) -> Result<ApiResult<Value>> {
        let (endpoint, params) = address_request(currency, params)?;
        self.request_private(&endpoint, HttpMethod::Post, params)
            .await
    }

    /// Payment transactions; `params` override [`PaymentTransactionsQuery`] defaults
    ///
    /// GET /api/1/payment/transactions
    pub async fn get_all_payment_transactions(
        &self,
        params: ParameterMap,
    ) -> Result<ApiResult<Value>> {
        let params = PaymentTransactionsQuery::default().to_params().merge(&params);
        self.request_private("/payment/transactions", HttpMethod::Get, params)
            .await
    }

    /// One payment transaction
    ///
    /// GET /api/1/payment/transactions/{id}
    pub async fn get_payment_transaction(
        &self,
        id: &str,
        params: ParameterMap,
    ) -> Result<ApiResult<Value>> {
        let (endpoint, params) = path_request("/payment/transactions", "id", id, params)?;
        self.request_private(&endpoint, HttpMethod::Get, params)
            .await
    }

    /// Move funds from the main account to the trading account.
    /// Requires `amount` and `currency_code`.
    ///
    /// POST /api/1/payment/transfer_to_trading
    pub async fn transfer_to_trading(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/payment/transfer_to_trading", HttpMethod::Post, params)
            .await
    }

    /// Move funds from the trading account to the main account.
    /// Requires `amount` and `currency_code`.
    ///
    /// POST /api/1/payment/transfer_to_main
    pub async fn transfer_to_main(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/payment/transfer_to_main", HttpMethod::Post, params)
            .await
    }

    /// Withdraw to an external address.
    /// Requires `amount`, `currency_code` and `address`.
    ///
    /// POST /api/1/payment/payout
    pub async fn withdraw_to_address(&self, params: ParameterMap) -> Result<ApiResult<Value>> {
        self.request_private("/payment/payout", HttpMethod::Post, params)
            .await
    }
}

fn address_request(currency: &str, params: ParameterMap) -> Result<(String, ParameterMap)> {
    path_request("/payment/address", "currency", currency, params)
}

/// Endpoint `{prefix}/{value}` with `name` leading the params.
///
/// The path value wins over a caller-supplied `name` so the signed path and
/// parameters never disagree.
fn path_request(
    prefix: &str,
    name: &str,
    value: &str,
    params: ParameterMap,
) -> Result<(String, ParameterMap)> {
    if value.is_empty() {
        return Err(HitbtcError::InvalidParameter(format!(
            "{name} must be a non-empty path segment"
        )));
    }
    let endpoint = format!("{prefix}/{}", encode_segment(value));
    let mut params = ParameterMap::new().with(name, value).merge(&params);
    params.insert(name, value);
    Ok((endpoint, params))
}
