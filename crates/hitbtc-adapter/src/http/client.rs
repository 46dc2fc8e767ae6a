/*
[INPUT]:  Client options (credentials, sandbox flag), HTTP configuration
[OUTPUT]: Configured exchange client ready for public and private calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{Credentials, NonceSource, SystemClockNonce};
use crate::http::dispatch::Dispatcher;
use crate::http::request::{
    AuthenticatedRequestBuilder, HttpMethod, PublicRequestBuilder, RequestIntent, SignedRequest,
};
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::{HitbtcError, Result};
use crate::types::{ApiResult, ParameterMap};

/// Base URLs for the HitBTC API
pub const PRODUCTION_BASE_URL: &str = "http://api.hitbtc.com";
pub const SANDBOX_BASE_URL: &str = "http://demo-api.hitbtc.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn from_sandbox_flag(use_sandbox: bool) -> Self {
        if use_sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// Construction parameters
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub use_sandbox: bool,
}

impl ClientOptions {
    /// Options for public endpoints only
    pub fn public() -> Self {
        Self::default()
    }

    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(api_secret.into()),
            use_sandbox: false,
        }
    }

    pub fn sandbox(mut self, use_sandbox: bool) -> Self {
        self.use_sandbox = use_sandbox;
        self
    }

    fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.api_key.as_deref(), self.api_secret.as_deref())
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("hitbtc-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the HitBTC API.
///
/// Credentials and base URL are fixed at construction; every call builds its
/// own request, so the client can be shared across tasks.
#[derive(Debug, Clone)]
pub struct HitbtcClient {
    base_url: String,
    credentials: Option<Credentials>,
    nonce_source: Arc<dyn NonceSource>,
    dispatcher: Dispatcher,
}

impl HitbtcClient {
    /// Create a new client with default configuration
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_config(options, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(options: ClientOptions, config: ClientConfig) -> Result<Self> {
        let base_url = Environment::from_sandbox_flag(options.use_sandbox).base_url();
        Self::with_config_and_base_url(options, config, base_url)
    }

    /// Create a client against an explicit base URL (e.g. a mock server)
    pub fn with_config_and_base_url(
        options: ClientOptions,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(options, base_url, Arc::new(transport))
    }

    /// Create a client on top of any transport
    pub fn with_transport(
        options: ClientOptions,
        base_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            credentials: options.credentials(),
            nonce_source: Arc::new(SystemClockNonce::new()),
            dispatcher: Dispatcher::new(transport),
        })
    }

    /// Replace the nonce source (deterministic nonces in tests)
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.nonce_source = nonce_source;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build and sign a private request without sending it.
    ///
    /// Fails with [`HitbtcError::MissingCredentials`] when the client has no
    /// credentials.
    pub fn prepare_private(&self, intent: &RequestIntent) -> Result<SignedRequest> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(HitbtcError::MissingCredentials)?;
        let builder = AuthenticatedRequestBuilder::new(&self.base_url, self.nonce_source.as_ref());
        Ok(builder.build(intent, credentials))
    }

    /// GET a public endpoint
    pub(crate) async fn request_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &ParameterMap,
    ) -> ApiResult<T> {
        let request = PublicRequestBuilder::new(&self.base_url).build(endpoint, params);
        self.dispatcher.dispatch(request.into()).await
    }

    /// Sign and send a private request.
    ///
    /// The credential check happens before any I/O.
    pub(crate) async fn request_private<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        params: ParameterMap,
    ) -> Result<ApiResult<T>> {
        let intent = RequestIntent::new(endpoint, method, params);
        let request = self.prepare_private(&intent)?;
        debug!(endpoint, nonce = request.nonce, "signed private request");
        Ok(self.dispatcher.dispatch(request.into()).await)
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url)?;
    if parsed.cannot_be_a_base() {
        return Err(HitbtcError::Config(format!(
            "Base URL cannot be used as a base: {base_url}"
        )));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}
