/*
[INPUT]:  API key/secret pair and a clock
[OUTPUT]: Credentials, nonces, and HMAC signatures
[POS]:    Auth layer - primitives for signing private requests
[UPDATE]: When auth inputs or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::{FixedNonce, NonceSource, SequenceNonce, SystemClockNonce};
pub use signer::HmacSigner;
