/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: Signed/unsigned requests and ApiResult values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod canonical;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod payment;
pub mod public;
pub mod request;
pub mod signature;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{HitbtcError, Result};
pub use signature::{RequestSigner, SignedMessage};

pub use client::{ClientConfig, ClientOptions, Environment, HitbtcClient};
pub use request::{
    AuthenticatedRequestBuilder, HttpMethod, PublicRequest, PublicRequestBuilder, RequestIntent,
    SignedRequest,
};
pub use trade::{CLIENT_ORDER_ID_LEN, generate_client_order_id};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
