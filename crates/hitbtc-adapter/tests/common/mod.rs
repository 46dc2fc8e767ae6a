/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and stub transports
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for hitbtc-adapter tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hitbtc_adapter::{
    ClientOptions, FixedNonce, HitbtcClient, Transport, TransportError, TransportRequest,
    TransportResponse,
};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "key";
pub const TEST_API_SECRET: &str = "s3cr3t";
pub const TEST_NONCE: u64 = 1_000_000_000_000;
pub const TEST_BASE_URL: &str = "http://api.hitbtc.com";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Transport that records every request and replays canned outcomes.
///
/// When the queue is empty it answers `200 {}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<TransportRequest>>,
    outcomes: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, status: u16, body: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
    }

    pub fn fail_with(&self, error: TransportError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "{}")))
    }
}

/// Client with test credentials and a fixed nonce on top of `transport`
pub fn signed_client(transport: Arc<RecordingTransport>) -> HitbtcClient {
    HitbtcClient::with_transport(
        ClientOptions::with_credentials(TEST_API_KEY, TEST_API_SECRET),
        TEST_BASE_URL,
        transport,
    )
    .expect("client should build")
    .with_nonce_source(Arc::new(FixedNonce(TEST_NONCE)))
}

/// Client without credentials on top of `transport`
pub fn public_client(transport: Arc<RecordingTransport>) -> HitbtcClient {
    HitbtcClient::with_transport(ClientOptions::public(), TEST_BASE_URL, transport)
        .expect("client should build")
}
