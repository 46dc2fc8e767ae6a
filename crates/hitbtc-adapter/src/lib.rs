/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public HitBTC adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{Credentials, FixedNonce, HmacSigner, NonceSource, SequenceNonce, SystemClockNonce};

// Re-export commonly used types from http
pub use http::{
    AuthenticatedRequestBuilder,
    ClientConfig,
    ClientOptions,
    Environment,
    HitbtcClient,
    HitbtcError,
    HttpMethod,
    PublicRequest,
    PublicRequestBuilder,
    RequestIntent,
    RequestSigner,
    Result,
    ReqwestTransport,
    SignedMessage,
    SignedRequest,
    Transport,
    TransportError,
    TransportRequest,
    TransportResponse,
    generate_client_order_id,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{FeedMessage, RealtimeFeed};
