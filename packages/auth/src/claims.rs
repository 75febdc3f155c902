//! Claim set assembled for a single token

use crate::error::{AuthTokenError, AuthTokenResult};
use crate::types::{GroupDetails, UserDetails};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifetime of every token, in seconds
pub const TOKEN_TTL_SECONDS: i64 = 60;

/// Claims carried by a token.
///
/// Fields are declared in alphabetical order so the payload keys come out
/// sorted. Absent claims are omitted, never sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimSet<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_id: Option<&'a str>,
    exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_details: Option<&'a GroupDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_id: Option<&'a str>,
    iat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_details: Option<&'a UserDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

impl<'a> ClaimSet<'a> {
    /// Claims for a project token issued at `now` (second precision),
    /// expiring [`TOKEN_TTL_SECONDS`] later
    #[must_use]
    pub fn for_project(project_id: &'a str, now: DateTime<Utc>) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::issued_at(now)
        }
    }

    /// Claims for a customer management token issued at `now`
    #[must_use]
    pub fn for_customer(customer_id: &'a str, now: DateTime<Utc>) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::issued_at(now)
        }
    }

    fn issued_at(now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            customer_id: None,
            exp: iat + TOKEN_TTL_SECONDS,
            group_details: None,
            group_id: None,
            iat,
            project_id: None,
            user_details: None,
            user_id: None,
        }
    }

    /// Set the `user_id` claim
    #[inline]
    #[must_use]
    pub fn with_user_id(mut self, user_id: &'a str) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set or clear the `group_id` claim
    #[inline]
    #[must_use]
    pub fn with_group_id(mut self, group_id: Option<&'a str>) -> Self {
        self.group_id = group_id;
        self
    }

    /// Set or clear the `user_details` claim
    #[inline]
    #[must_use]
    pub fn with_user_details(mut self, details: Option<&'a UserDetails>) -> Self {
        self.user_details = details;
        self
    }

    /// Set or clear the `group_details` claim
    #[inline]
    #[must_use]
    pub fn with_group_details(mut self, details: Option<&'a GroupDetails>) -> Self {
        self.group_details = details;
        self
    }

    /// Issued-at, unix seconds
    #[must_use]
    pub fn iat(&self) -> i64 {
        self.iat
    }

    /// Expiry, unix seconds
    #[must_use]
    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Compact JSON payload
    pub fn to_json(&self) -> AuthTokenResult<String> {
        serde_json::to_string(self).map_err(|e| {
            AuthTokenError::serialization(&format!("Failed to serialize claims: {e}"))
        })
    }
}
