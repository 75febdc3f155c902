//! Signing seam and token header.

use crate::error::AuthTokenResult;
use serde::Serialize;

/// JWT header structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Algorithm used for signing.
    pub alg: &'static str,
    /// Token type (always "JWT").
    pub typ: &'static str,
}

impl Header {
    /// Create a new header for the given algorithm.
    #[must_use]
    pub fn new(alg: &'static str) -> Self {
        Self { alg, typ: "JWT" }
    }
}

/// Signing algorithm interface.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Signer: Send + Sync + 'static {
    /// Sign a JSON payload → compact token (base64url header.payload.signature).
    fn sign(&self, header: &Header, payload: &str) -> AuthTokenResult<String>;

    /// Header `alg` value.
    fn alg(&self) -> &'static str;
}

impl<T: Signer> Signer for std::sync::Arc<T> {
    fn sign(&self, header: &Header, payload: &str) -> AuthTokenResult<String> {
        (**self).sign(header, payload)
    }

    fn alg(&self) -> &'static str {
        (**self).alg()
    }
}
