/*
[INPUT]:  Transport requests and the configured Transport
[OUTPUT]: ApiResult values (decoded success or forwarded failure)
[POS]:    HTTP layer - funnels every outcome into one result channel
[UPDATE]: When the failure payload contract changes
*/

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::transport::{Transport, TransportRequest, TransportResponse};
use crate::types::{ApiFailure, ApiResult};

/// Sends one request and interprets the outcome. Never retries.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn dispatch<T: DeserializeOwned>(&self, request: TransportRequest) -> ApiResult<T> {
        let method = request.method.as_str();
        // The query carries the api key and nonce; log the path only
        let path = strip_query(&request.url).to_string();
        debug!(method, path = %path, "dispatching request");

        match self.transport.send(request).await {
            Ok(response) => {
                let result = interpret(response);
                if let ApiResult::Failure(failure) = &result {
                    debug!(method, path = %path, status = ?failure.status(), "request failed");
                }
                result
            }
            Err(err) => {
                warn!(
                    method,
                    path = %path,
                    timed_out = err.timed_out,
                    error = %err,
                    "transport failure"
                );
                ApiResult::Failure(ApiFailure::Transport {
                    status: None,
                    message: err.message,
                })
            }
        }
    }
}

/// Map a raw response onto the result contract.
///
/// - 2xx whose body decodes as `T`: success.
/// - Any other JSON body: forwarded unmodified as an exchange failure.
/// - No JSON body: transport failure carrying the status and raw text.
pub fn interpret<T: DeserializeOwned>(response: TransportResponse) -> ApiResult<T> {
    let status = response.status;

    if response.is_success() {
        let decode_err = match serde_json::from_str::<T>(&response.body) {
            Ok(value) => return ApiResult::Success(value),
            Err(err) => err,
        };
        return match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(body) => ApiResult::Failure(ApiFailure::Exchange { status, body }),
            Err(_) => ApiResult::Failure(ApiFailure::Transport {
                status: Some(status),
                message: format!("Invalid response body: {decode_err}"),
            }),
        };
    }

    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(body) => ApiResult::Failure(ApiFailure::Exchange { status, body }),
        Err(_) => {
            let message = if response.body.trim().is_empty() {
                format!("HTTP status {status}")
            } else {
                response.body
            };
            ApiResult::Failure(ApiFailure::Transport {
                status: Some(status),
                message,
            })
        }
    }
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
