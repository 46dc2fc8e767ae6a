/*
[INPUT]:  Transport-ready requests (method, URL, optional body, headers)
[OUTPUT]: Raw status + body, or a transport-level failure
[POS]:    HTTP layer - pluggable HTTP collaborator (reqwest by default)
[UPDATE]: When adding transport options or alternative HTTP backends
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::http::Result;
use crate::http::client::ClientConfig;
use crate::http::request::{HttpMethod, PublicRequest, SignedRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl From<PublicRequest> for TransportRequest {
    fn from(request: PublicRequest) -> Self {
        Self {
            method: HttpMethod::Get,
            url: request.url,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl From<SignedRequest> for TransportRequest {
    fn from(request: SignedRequest) -> Self {
        Self {
            method: request.method,
            url: request.url,
            body: request.body,
            headers: request.headers,
        }
    }
}

/// Raw HTTP response; any status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before a complete response was read (connect, timeout, I/O)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// HTTP collaborator used by the dispatcher.
///
/// Implementations perform exactly one attempt; retries, if any, belong to
/// the caller.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reqwest_transport_sends_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1/trading/new_order"))
            .and(query_param("apikey", "key"))
            .and(header("X-Signature", "abc"))
            .and(body_string("symbol=ETHBTC"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).expect("transport");
        let response = transport
            .send(TransportRequest {
                method: HttpMethod::Post,
                url: format!("{}/api/1/trading/new_order?apikey=key&nonce=1", server.uri()),
                body: Some("symbol=ETHBTC".to_string()),
                headers: vec![("X-Signature".to_string(), "abc".to_string())],
            })
            .await
            .expect("send");

        assert_eq!(response, TransportResponse::new(200, r#"{"ok":true}"#));
    }

    #[tokio::test]
    async fn test_reqwest_transport_returns_non_2xx_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default()).expect("transport");
        let response = transport
            .send(TransportRequest {
                method: HttpMethod::Get,
                url: format!("{}/api/1/public/time", server.uri()),
                body: None,
                headers: Vec::new(),
            })
            .await
            .expect("send");

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_failure() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).expect("transport");
        let err = transport
            .send(TransportRequest {
                method: HttpMethod::Get,
                url: "http://127.0.0.1:1/api/1/public/time".to_string(),
                body: None,
                headers: Vec::new(),
            })
            .await
            .unwrap_err();

        assert!(!err.message.is_empty());
    }
}
