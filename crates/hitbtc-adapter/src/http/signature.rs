/*
[INPUT]:  RequestIntent, credentials and a nonce
[OUTPUT]: Request path, signed message and hex HMAC-SHA512 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing which parameters are covered by the signature
*/

use crate::auth::{Credentials, HmacSigner};
use crate::http::canonical::encode;
use crate::http::request::{API_PREFIX, HttpMethod, RequestIntent};
use crate::types::ParameterMap;

/// Everything derived from one signing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    /// `/api/1{path}?{query}`; also the URL suffix sent on the wire
    pub request_path: String,
    /// Exact bytes fed to the MAC
    pub message: String,
    /// Lowercase hex HMAC-SHA512 of `message`
    pub signature: String,
}

/// Signs private requests with the API secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    api_key: String,
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key().to_string(),
            signer: credentials.signer(),
        }
    }

    /// Sign a request according to the exchange's v1 scheme.
    ///
    /// The query always starts with `apikey` and `nonce`. For GET the business
    /// parameters are merged into that query (later keys win) and the request
    /// path alone is signed. For POST the query holds only the auth pair and
    /// the separately encoded business parameters are appended to the signed
    /// message; they travel in the body, never in the URL.
    pub fn sign(&self, intent: &RequestIntent, nonce: u64) -> SignedMessage {
        let auth_params = ParameterMap::new()
            .with("apikey", self.api_key.as_str())
            .with("nonce", nonce);

        let query = match intent.method {
            HttpMethod::Get => auth_params.merge(&intent.params),
            HttpMethod::Post => auth_params,
        };
        let request_path = format!("{API_PREFIX}{}?{}", intent.path, encode(&query));

        let message = match intent.method {
            HttpMethod::Get => request_path.clone(),
            HttpMethod::Post => format!("{request_path}{}", encode(&intent.params)),
        };

        let signature = self.signer.sign_hex(message.as_bytes());

        SignedMessage {
            request_path,
            message,
            signature,
        }
    }
}
