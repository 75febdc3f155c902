//! Token issuer: validation, claim assembly and signing
//!
//! A [`TokenIssuer`] pairs a signer (HS512 over the shared secret by default)
//! with a clock. Each token is built in one pass: validate the input, assemble
//! the claim set, sign, encode. Nothing is kept between calls, so one issuer
//! can be shared freely across threads.

use crate::claims::ClaimSet;
use crate::clock::{Clock, SystemClock};
use crate::crypto::Hs512Signer;
use crate::error::{AuthTokenError, AuthTokenResult};
use crate::traits::{Header, Signer};
use crate::types::ClientAuthTokenData;

/// Builds signed tokens for one shared secret
#[derive(Debug, Clone)]
pub struct TokenIssuer<S = Hs512Signer, C = SystemClock> {
    signer: S,
    clock: C,
}

impl TokenIssuer {
    /// HS512 issuer over `secret`, reading wall-clock time
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            signer: Hs512Signer::new(secret),
            clock: SystemClock,
        }
    }
}

impl<S: Signer, C: Clock> TokenIssuer<S, C> {
    /// Replace the time source
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TokenIssuer<S, C2> {
        TokenIssuer {
            signer: self.signer,
            clock,
        }
    }

    /// Replace the signer
    #[must_use]
    pub fn with_signer<S2: Signer>(self, signer: S2) -> TokenIssuer<S2, C> {
        TokenIssuer {
            signer,
            clock: self.clock,
        }
    }

    /// Client auth token authenticating a user to Cord's web components.
    ///
    /// Fails before signing when `data.user_id` is empty, or when the group
    /// details that end up in the token have an empty name.
    pub fn client_token(
        &self,
        project_id: &str,
        data: &ClientAuthTokenData,
    ) -> AuthTokenResult<String> {
        if data.user_id.is_empty() {
            return Err(AuthTokenError::missing_field("UserID"));
        }

        let group_details = data.resolved_group_details();
        if let Some(details) = group_details {
            details.validate()?;
        }

        let claims = ClaimSet::for_project(project_id, self.clock.now())
            .with_user_id(&data.user_id)
            .with_group_id(data.resolved_group_id())
            .with_user_details(data.user_details.as_ref())
            .with_group_details(group_details);

        self.sign("client", &claims)
    }

    /// Server auth token for Cord's REST API
    pub fn server_token(&self, project_id: &str) -> AuthTokenResult<String> {
        let claims = ClaimSet::for_project(project_id, self.clock.now());
        self.sign("server", &claims)
    }

    /// Management token for Cord's project management REST API
    pub fn management_token(&self, customer_id: &str) -> AuthTokenResult<String> {
        let claims = ClaimSet::for_customer(customer_id, self.clock.now());
        self.sign("management", &claims)
    }

    fn sign(&self, kind: &'static str, claims: &ClaimSet<'_>) -> AuthTokenResult<String> {
        let payload = claims.to_json()?;
        let alg = self.signer.alg();

        match self.signer.sign(&Header::new(alg), &payload) {
            Ok(token) => {
                tracing::debug!(kind, alg, iat = claims.iat(), exp = claims.exp(), "auth token signed");
                Ok(token)
            }
            Err(e) => {
                tracing::error!(kind, alg, error = %e, "auth token signing failed");
                Err(e)
            }
        }
    }
}
