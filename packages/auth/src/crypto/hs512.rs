//! HMAC-SHA512 (HS512) compact token signing

use super::base64_url_encode;
use crate::error::{AuthTokenError, AuthTokenResult};
use crate::traits::{Header, Signer};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::fmt;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

/// HS512 signer holding the shared secret.
///
/// The secret is wiped from memory when the signer is dropped.
#[derive(Clone)]
pub struct Hs512Signer {
    secret: Zeroizing<Vec<u8>>,
}

impl Hs512Signer {
    /// Signer for the given shared secret
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: Zeroizing::new(secret.to_vec()),
        }
    }

    fn mac(&self, message: &str) -> AuthTokenResult<Vec<u8>> {
        let mut mac = HmacSha512::new_from_slice(&self.secret)
            .map_err(|e| AuthTokenError::signing(&e.to_string()))?;
        mac.update(message.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl fmt::Debug for Hs512Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs512Signer")
            .field("secret", &"[redacted]")
            .finish()
    }
}

impl Signer for Hs512Signer {
    fn sign(&self, header: &Header, payload: &str) -> AuthTokenResult<String> {
        let header_json = serde_json::to_string(header)
            .map_err(|e| AuthTokenError::serialization(&e.to_string()))?;

        let header_b64 = base64_url_encode(header_json.as_bytes());
        let payload_b64 = base64_url_encode(payload.as_bytes());
        let message = format!("{header_b64}.{payload_b64}");

        let signature_b64 = base64_url_encode(&self.mac(&message)?);
        Ok(format!("{message}.{signature_b64}"))
    }

    fn alg(&self) -> &'static str {
        "HS512"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER_PAYLOAD: &str = r#"{"exp":1655383173,"iat":1655383113,"project_id":"1234567890"}"#;

    #[test]
    fn header_segment_is_fixed() {
        let signer = Hs512Signer::new(b"0987654321");
        let token = signer
            .sign(&Header::new(signer.alg()), SERVER_PAYLOAD)
            .expect("sign");
        assert!(token.starts_with("eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9."));
    }

    #[test]
    fn signs_known_payload() {
        let signer = Hs512Signer::new(b"0987654321");
        let token = signer
            .sign(&Header::new(signer.alg()), SERVER_PAYLOAD)
            .expect("sign");
        assert_eq!(
            token,
            "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9.\
             eyJleHAiOjE2NTUzODMxNzMsImlhdCI6MTY1NTM4MzExMywicHJvamVjdF9pZCI6IjEyMzQ1Njc4OTAifQ.\
             viFVl8J-_2reh5PaGgVx2v2wEYsYTwooIkFulg1xp-D1sBTdIxm1mY67xSrKmm1KJlaYXpTuHy50hxuNkUcHrw"
        );
    }

    #[test]
    fn signature_is_512_bits_without_padding() {
        let signer = Hs512Signer::new(b"");
        let token = signer.sign(&Header::new("HS512"), "{}").expect("sign");
        let signature = token.rsplit('.').next().expect("three segments");
        // 64 bytes -> 86 base64url characters, no '='
        assert_eq!(signature.len(), 86);
        assert!(!token.contains('='));
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", Hs512Signer::new(b"super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
