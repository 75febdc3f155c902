//! Token signing primitives

mod hs512;

pub use hs512::Hs512Signer;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Base64 URL-safe encoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
