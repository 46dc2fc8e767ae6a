/*
[INPUT]:  Exchange vocabulary for orders and listings
[OUTPUT]: Typed enums with serde support and wire spellings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds order types or listing options
*/

use serde::{Deserialize, Serialize};

use super::params::ParamValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    Gtc,
    Ioc,
    Fok,
    Day,
    Gtd,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Day => "DAY",
            TimeInForce::Gtd => "GTD",
        }
    }
}

/// Listing order for paginated endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Number formatting requested from market-data endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    Number,
    String,
}

impl NumberFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormat::Number => "number",
            NumberFormat::String => "string",
        }
    }
}

/// Shape of each item in trade listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemFormat {
    Array,
    Object,
}

impl ItemFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemFormat::Array => "array",
            ItemFormat::Object => "object",
        }
    }
}

/// Pagination key for the trade history endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradesBy {
    TradeId,
    Ts,
}

impl TradesBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradesBy::TradeId => "trade_id",
            TradesBy::Ts => "ts",
        }
    }
}

macro_rules! impl_param_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Str(value.as_str().to_string())
                }
            }
        )*
    };
}

impl_param_value!(Side, OrderType, TimeInForce, SortOrder, NumberFormat, ItemFormat, TradesBy);
