/*
[INPUT]:  Message bytes and API secret bytes
[OUTPUT]: Lowercase hex HMAC-SHA512 signatures
[POS]:    Auth layer - cryptographic primitive behind request signatures
[UPDATE]: When changing the MAC algorithm or signature encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 signer keyed with the API secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha512 {
        HmacSha512::new_from_slice(&self.secret).expect("HMAC can take key of any size")
    }

    /// Sign a message and return the lowercase hex digest
    pub fn sign_hex(&self, message: &[u8]) -> String {
        let mut mac = self.mac();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a hex signature in constant time
    pub fn verify_hex(&self, message: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac();
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
