//! Signed auth tokens for the Cord APIs
//!
//! This crate builds the short-lived HS512 JWTs Cord expects:
//! - client auth tokens, which authenticate a user to Cord's web components
//!   and can sync user and group details at the same time
//! - server auth tokens for Cord's REST API
//! - project management tokens for the project management REST API
//!
//! Every token is valid for one minute from the moment it is issued.
//!
//! ```no_run
//! use cord_auth::{client_auth_token, ClientAuthTokenData, Status, UserDetails};
//!
//! let data = ClientAuthTokenData::new("user-123").with_user_details(UserDetails {
//!     email: "user@example.com".to_string(),
//!     status: Status::Active,
//!     ..UserDetails::default()
//! });
//! let _token = client_auth_token("my-project-id", b"my-project-secret", &data)?;
//! # Ok::<(), cord_auth::AuthTokenError>(())
//! ```
//!
//! Use [`TokenIssuer`] directly to reuse one secret across calls or to pin
//! the clock.

pub mod claims;
pub mod clock;
pub mod crypto;
mod error;
pub mod issuer;
pub mod traits;
mod types;

pub use claims::{ClaimSet, TOKEN_TTL_SECONDS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use crypto::Hs512Signer;
pub use error::*;
pub use issuer::TokenIssuer;
pub use traits::{Header, Signer};
pub use types::*;

/// Client auth token suitable for authenticating a user to Cord.
pub fn client_auth_token(
    project_id: &str,
    secret: &[u8],
    data: &ClientAuthTokenData,
) -> AuthTokenResult<String> {
    TokenIssuer::new(secret).client_token(project_id, data)
}

/// Server auth token suitable for authenticating requests to Cord's REST API.
pub fn server_auth_token(project_id: &str, secret: &[u8]) -> AuthTokenResult<String> {
    TokenIssuer::new(secret).server_token(project_id)
}

/// Server side token for Cord's project management REST API.
pub fn project_management_auth_token(customer_id: &str, secret: &[u8]) -> AuthTokenResult<String> {
    TokenIssuer::new(secret).management_token(customer_id)
}

/// Former name of [`project_management_auth_token`]; always returns the same token.
#[deprecated(note = "applications are now called projects; use `project_management_auth_token`")]
pub fn application_management_auth_token(
    customer_id: &str,
    secret: &[u8],
) -> AuthTokenResult<String> {
    project_management_auth_token(customer_id, secret)
}
