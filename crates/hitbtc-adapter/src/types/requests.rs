/*
[INPUT]:  Endpoint defaults and typed order parameters
[OUTPUT]: ParameterMaps in the exchange's expected key order
[POS]:    Data layer - request parameter builders
[UPDATE]: When endpoint defaults change or new request shapes are added
*/

use rust_decimal::Decimal;

use super::enums::{ItemFormat, NumberFormat, OrderType, Side, SortOrder, TimeInForce, TradesBy};
use super::params::ParameterMap;

/// Defaults for `GET /public/{symbol}/orderbook`.
///
/// Numeric formatting is requested so book levels decode straight into
/// decimals instead of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBookQuery {
    pub format_amount: NumberFormat,
    pub format_price: NumberFormat,
}

impl Default for OrderBookQuery {
    fn default() -> Self {
        Self {
            format_amount: NumberFormat::Number,
            format_price: NumberFormat::Number,
        }
    }
}

impl OrderBookQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("format_amount", self.format_amount)
            .with("format_price", self.format_price)
    }
}

/// Defaults for `GET /public/{symbol}/trades`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradesQuery {
    pub format_amount: NumberFormat,
    pub format_item: ItemFormat,
    pub format_price: NumberFormat,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self {
            format_amount: NumberFormat::Number,
            format_item: ItemFormat::Object,
            format_price: NumberFormat::Number,
        }
    }
}

impl TradesQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("format_amount", self.format_amount)
            .with("format_item", self.format_item)
            .with("format_price", self.format_price)
    }
}

/// Defaults for `GET /public/{symbol}/trades/recent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentTradesQuery {
    pub max_results: u32,
    pub format_item: ItemFormat,
}

impl Default for RecentTradesQuery {
    fn default() -> Self {
        Self {
            max_results: 100,
            format_item: ItemFormat::Object,
        }
    }
}

impl RecentTradesQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("max_results", self.max_results)
            .with("format_item", self.format_item)
    }
}

/// Defaults for `GET /trading/orders/recent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentOrdersQuery {
    pub max_results: u32,
    pub sort: SortOrder,
}

impl Default for RecentOrdersQuery {
    fn default() -> Self {
        Self {
            max_results: 100,
            sort: SortOrder::Desc,
        }
    }
}

impl RecentOrdersQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("max_results", self.max_results)
            .with("sort", self.sort)
    }
}

/// Defaults for `GET /trading/trades`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllTradesQuery {
    pub by: TradesBy,
    pub max_results: u32,
    pub start_index: u32,
    pub sort: SortOrder,
}

impl Default for AllTradesQuery {
    fn default() -> Self {
        Self {
            by: TradesBy::TradeId,
            max_results: 100,
            start_index: 0,
            sort: SortOrder::Desc,
        }
    }
}

impl AllTradesQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("by", self.by)
            .with("max_results", self.max_results)
            .with("start_index", self.start_index)
            .with("sort", self.sort)
    }
}

/// Defaults for `GET /payment/transactions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTransactionsQuery {
    pub limit: u32,
}

impl Default for PaymentTransactionsQuery {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

impl PaymentTransactionsQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new().with("limit", self.limit)
    }
}

/// Typed parameters for `POST /trading/new_order`.
///
/// `quantity` is expressed in lots. Leaving `client_order_id` unset lets the
/// client generate one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub order_type: Option<OrderType>,
    pub time_in_force: Option<TimeInForce>,
    pub client_order_id: Option<String>,
}

impl NewOrder {
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            price: Some(price),
            order_type: Some(OrderType::Limit),
            time_in_force: None,
            client_order_id: None,
        }
    }

    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            price: None,
            order_type: Some(OrderType::Market),
            time_in_force: None,
            client_order_id: None,
        }
    }
}

impl From<NewOrder> for ParameterMap {
    fn from(order: NewOrder) -> Self {
        let mut params = ParameterMap::new();
        if let Some(id) = order.client_order_id {
            params.insert("clientOrderId", id);
        }
        params.insert("symbol", order.symbol);
        params.insert("side", order.side);
        params.insert("quantity", order.quantity);
        if let Some(price) = order.price {
            params.insert("price", price);
        }
        if let Some(order_type) = order.order_type {
            params.insert("type", order_type);
        }
        if let Some(tif) = order.time_in_force {
            params.insert("timeInForce", tif);
        }
        params
    }
}

/// Typed parameters for `POST /trading/cancel_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelOrder {
    pub client_order_id: String,
    pub cancel_request_client_order_id: Option<String>,
    pub symbol: Option<String>,
    pub side: Option<Side>,
}

impl CancelOrder {
    pub fn new(client_order_id: impl Into<String>) -> Self {
        Self {
            client_order_id: client_order_id.into(),
            cancel_request_client_order_id: None,
            symbol: None,
            side: None,
        }
    }
}

impl From<CancelOrder> for ParameterMap {
    fn from(cancel: CancelOrder) -> Self {
        let mut params = ParameterMap::new();
        if let Some(id) = cancel.cancel_request_client_order_id {
            params.insert("cancelRequestClientOrderId", id);
        }
        params.insert("clientOrderId", cancel.client_order_id);
        if let Some(symbol) = cancel.symbol {
            params.insert("symbol", symbol);
        }
        if let Some(side) = cancel.side {
            params.insert("side", side);
        }
        params
    }
}
