/*
[INPUT]:  Transport outcomes (decoded bodies, error bodies, I/O failures)
[OUTPUT]: ApiResult values that carry success or a forwarded failure
[POS]:    Data layer - uniform result shape for every endpoint
[UPDATE]: When the failure payload contract changes
*/

use serde::{Deserialize, Serialize};

/// Failure payload forwarded from the transport or the exchange.
///
/// `Exchange` carries whatever JSON body the exchange sent, untouched.
/// `Transport` is used when there is no JSON body to forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiFailure {
    Exchange {
        status: u16,
        body: serde_json::Value,
    },
    Transport {
        status: Option<u16>,
        message: String,
    },
}

impl ApiFailure {
    /// HTTP status if a response was received at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::Exchange { status, .. } => Some(*status),
            ApiFailure::Transport { status, .. } => *status,
        }
    }

    pub fn is_exchange_error(&self) -> bool {
        matches!(self, ApiFailure::Exchange { .. })
    }

    /// The exchange's error body, if one was returned
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiFailure::Exchange { body, .. } => Some(body),
            ApiFailure::Transport { .. } => None,
        }
    }
}

/// Outcome of one exchange call.
///
/// Callers branch on the variant; failures never travel through `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<ApiFailure> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, ApiFailure> {
        match self {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Failure(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_leaves_failure_untouched() {
        let failure = ApiFailure::Exchange {
            status: 400,
            body: serde_json::json!({"code": "InvalidNonce"}),
        };
        let result: ApiResult<u32> = ApiResult::Failure(failure.clone());

        assert_eq!(result.map(|value| value + 1).failure(), Some(failure));
    }

    #[test]
    fn test_into_result_splits_variants() {
        assert_eq!(ApiResult::Success(7).into_result(), Ok(7));

        let failure = ApiFailure::Transport {
            status: Some(502),
            message: "bad gateway".to_string(),
        };
        let result: ApiResult<u32> = ApiResult::Failure(failure.clone());
        assert_eq!(result.into_result(), Err(failure));
    }

    #[test]
    fn test_failure_serializes_with_kind_tag() {
        let failure = ApiFailure::Transport {
            status: None,
            message: "connection refused".to_string(),
        };
        let json = serde_json::to_value(&failure).expect("serialize");
        assert_eq!(json["kind"], "transport");
        assert_eq!(failure.status(), None);
        assert!(!failure.is_exchange_error());
    }
}
