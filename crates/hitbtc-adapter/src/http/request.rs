/*
[INPUT]:  Endpoint paths, parameters, credentials and a nonce source
[OUTPUT]: Transport-ready public and signed requests
[POS]:    HTTP layer - URL/body/header assembly for both endpoint classes
[UPDATE]: When URL layout or the GET/POST parameter split changes
*/

use crate::auth::{Credentials, NonceSource};
use crate::http::canonical::encode;
use crate::http::signature::RequestSigner;
use crate::types::ParameterMap;

/// Version prefix shared by every REST endpoint
pub const API_PREFIX: &str = "/api/1";

/// Header carrying the hex HMAC-SHA512 signature
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Body content type for signed POST requests
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Logical description of a private call before signing
#[derive(Debug, Clone, PartialEq)]
pub struct RequestIntent {
    /// Endpoint path below `/api/1`, e.g. `/trading/balance`
    pub path: String,
    pub method: HttpMethod,
    pub params: ParameterMap,
}

impl RequestIntent {
    pub fn new(path: impl Into<String>, method: HttpMethod, params: ParameterMap) -> Self {
        Self {
            path: path.into(),
            method,
            params,
        }
    }

    pub fn get(path: impl Into<String>, params: ParameterMap) -> Self {
        Self::new(path, HttpMethod::Get, params)
    }

    pub fn post(path: impl Into<String>, params: ParameterMap) -> Self {
        Self::new(path, HttpMethod::Post, params)
    }
}

/// Fully prepared private request. Built per call and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Form-encoded business parameters (POST only)
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    /// Nonce the signature covers
    pub nonce: u64,
}

impl SignedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn signature(&self) -> Option<&str> {
        self.header(SIGNATURE_HEADER)
    }
}

/// Unsigned market-data request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicRequest {
    pub url: String,
}

/// Builds `{base}/api/1/public{endpoint}[?{query}]` URLs
#[derive(Debug, Clone, Copy)]
pub struct PublicRequestBuilder<'a> {
    base_url: &'a str,
}

impl<'a> PublicRequestBuilder<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }

    pub fn build(&self, endpoint: &str, params: &ParameterMap) -> PublicRequest {
        let mut url = format!("{}{API_PREFIX}/public{endpoint}", self.base_url);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&encode(params));
        }
        PublicRequest { url }
    }
}

/// Assembles signed requests for private endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedRequestBuilder<'a> {
    base_url: &'a str,
    nonce_source: &'a dyn NonceSource,
}

impl<'a> AuthenticatedRequestBuilder<'a> {
    pub fn new(base_url: &'a str, nonce_source: &'a dyn NonceSource) -> Self {
        Self {
            base_url,
            nonce_source,
        }
    }

    /// Sign `intent` with a fresh nonce.
    ///
    /// GET: every parameter is in the URL and there is no body.
    /// POST: the URL carries only `apikey` and `nonce`; business parameters
    /// are the form body.
    pub fn build(&self, intent: &RequestIntent, credentials: &Credentials) -> SignedRequest {
        let nonce = self.nonce_source.next_nonce();
        let signed = RequestSigner::new(credentials).sign(intent, nonce);

        let body = match intent.method {
            HttpMethod::Get => None,
            HttpMethod::Post => Some(encode(&intent.params)),
        };

        let mut headers = vec![(SIGNATURE_HEADER.to_string(), signed.signature)];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
        }

        SignedRequest {
            method: intent.method,
            url: format!("{}{}", self.base_url, signed.request_path),
            body,
            headers,
            nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FixedNonce, SequenceNonce};

    const BASE: &str = "http://api.hitbtc.com";

    fn credentials() -> Credentials {
        Credentials::new("key", "s3cr3t").expect("credentials")
    }

    fn params() -> ParameterMap {
        ParameterMap::new()
            .with("symbol", "ETHBTC")
            .with("side", "buy")
            .with("quantity", 1)
    }

    #[test]
    fn test_public_url_without_params() {
        let request = PublicRequestBuilder::new(BASE).build("/time", &ParameterMap::new());
        assert_eq!(request.url, "http://api.hitbtc.com/api/1/public/time");
    }

    #[test]
    fn test_public_url_with_params() {
        let params = ParameterMap::new()
            .with("format_amount", "number")
            .with("format_price", "number");
        let request = PublicRequestBuilder::new(BASE).build("/ETHBTC/orderbook", &params);
        assert_eq!(
            request.url,
            "http://api.hitbtc.com/api/1/public/ETHBTC/orderbook?format_amount=number&format_price=number"
        );
    }

    #[test]
    fn test_get_and_post_split_params_differently() {
        let nonce = FixedNonce(1_000_000_000_000);
        let builder = AuthenticatedRequestBuilder::new(BASE, &nonce);

        let get_intent = RequestIntent::get("/trading/orders/active", params());
        let post_intent = RequestIntent::post("/trading/new_order", params());
        let get = builder.build(&get_intent, &credentials());
        let post = builder.build(&post_intent, &credentials());

        assert_eq!(
            get.url,
            "http://api.hitbtc.com/api/1/trading/orders/active?apikey=key&nonce=1000000000000&symbol=ETHBTC&side=buy&quantity=1"
        );
        assert_eq!(get.body, None);

        assert_eq!(
            post.url,
            "http://api.hitbtc.com/api/1/trading/new_order?apikey=key&nonce=1000000000000"
        );
        assert!(!post.url.contains("symbol"));
        assert_eq!(post.body.as_deref(), Some("symbol=ETHBTC&side=buy&quantity=1"));
        assert_eq!(post.header("content-type"), Some(FORM_CONTENT_TYPE));
    }

    #[test]
    fn test_signature_header_always_present() {
        let nonce = FixedNonce(1_000_000_000_000);
        let builder = AuthenticatedRequestBuilder::new(BASE, &nonce);
        let request = builder.build(
            &RequestIntent::get("/trading/balance", ParameterMap::new()),
            &credentials(),
        );

        assert_eq!(
            request.signature(),
            Some("a207c3d203614b54700bd8b3c1d1eb50bc6a46f41223145cca04f1c1ac7e89645a2b5ac8c1f29265e634c616815df8b3f5800821d6ba1ccd93ccbd01ba13ad0a")
        );
    }

    #[test]
    fn test_each_build_takes_a_fresh_nonce() {
        let nonce = SequenceNonce::starting_at(10);
        let builder = AuthenticatedRequestBuilder::new(BASE, &nonce);
        let intent = RequestIntent::get("/trading/balance", ParameterMap::new());

        let first = builder.build(&intent, &credentials());
        let second = builder.build(&intent, &credentials());

        assert_eq!(first.nonce, 10);
        assert_eq!(second.nonce, 11);
        assert_ne!(first.signature(), second.signature());
    }

    #[test]
    fn test_build_does_not_mutate_intent() {
        let nonce = FixedNonce(1);
        let builder = AuthenticatedRequestBuilder::new(BASE, &nonce);
        let intent = RequestIntent::get("/trading/orders/active", params());
        let before = intent.clone();

        let _ = builder.build(&intent, &credentials());
        assert_eq!(intent, before);
    }
}
