//! Input data model for client auth tokens
//!
//! Every optional field left at its zero value (empty string, empty map,
//! empty list, [`Status::Unspecified`]) is left out of the serialized claim.

use crate::error::{AuthTokenError, AuthTokenResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The state of a user or group.
///
/// Deleted users and groups have their authentication attempts refused by Cord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No status is sent
    #[default]
    Unspecified,
    /// Active user or group
    Active,
    /// Deleted user or group
    Deleted,
}

impl Status {
    /// Wire string used by the Cord API; empty for [`Status::Unspecified`]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unspecified => "",
            Status::Active => "active",
            Status::Deleted => "deleted",
        }
    }

    /// Whether this status is left out of serialized details
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Status::Unspecified)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AuthTokenError;

    fn from_str(s: &str) -> AuthTokenResult<Self> {
        match s {
            "" => Ok(Status::Unspecified),
            "active" => Ok(Status::Active),
            "deleted" => Ok(Status::Deleted),
            other => Err(AuthTokenError::invalid_status(other)),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single metadata value.
///
/// Cord only accepts booleans, numbers and strings as metadata values, so
/// nested objects and arrays cannot be expressed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean value
    Bool(bool),
    /// Integer or floating point value
    Number(serde_json::Number),
    /// String value
    String(String),
}

impl MetadataValue {
    /// Floating point value; `None` for NaN and infinities, which JSON cannot carry.
    ///
    /// Whole numbers in `i64` range are stored as integers so `1.0` is sent as `1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn float(value: f64) -> Option<Self> {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Some(MetadataValue::Number((value as i64).into()));
        }
        serde_json::Number::from_f64(value).map(MetadataValue::Number)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::Number(value.into())
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Number(value.into())
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Number(value.into())
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        MetadataValue::Number(value.into())
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

/// Flat metadata map, serialized with sorted keys
pub type Metadata = BTreeMap<String, MetadataValue>;

/// Information about a user to sync to Cord when the token is used.
///
/// Field declaration order is the order fields appear in the token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    /// The user's email address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Full name shown in the user interface
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// URL of the user's profile picture
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_picture_url: String,
    /// Status of this user
    #[serde(skip_serializing_if = "Status::is_unspecified")]
    pub status: Status,
    /// Arbitrary scalar data about this user
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
    /// Deprecated: accepted for compatibility and never sent
    #[serde(skip_serializing)]
    pub first_name: String,
    /// Deprecated: accepted for compatibility and never sent
    #[serde(skip_serializing)]
    pub last_name: String,
}

/// Information about a group to sync to Cord when the token is used.
///
/// `name` is required and always sent; everything else is sent only when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupDetails {
    /// Display name of the group
    pub name: String,
    /// Status of this group
    #[serde(skip_serializing_if = "Status::is_unspecified")]
    pub status: Status,
    /// Identifiers of the group's members, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    /// Arbitrary scalar data about this group
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl GroupDetails {
    /// Group details with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> AuthTokenResult<()> {
        if self.name.is_empty() {
            return Err(AuthTokenError::missing_field("Name"));
        }
        Ok(())
    }
}

/// Organizations are now called groups.
pub type OrganizationDetails = GroupDetails;

/// Data asserted by a client auth token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientAuthTokenData {
    /// The user this token authenticates as. Required.
    pub user_id: String,
    /// Restricts the user to objects in this group when set
    pub group_id: String,
    /// Deprecated alias of `group_id`, used only when `group_id` is empty
    pub organization_id: String,
    /// User profile created or updated when the token is used
    pub user_details: Option<UserDetails>,
    /// Group profile created or updated when the token is used; the user is
    /// made a member of the group
    pub group_details: Option<GroupDetails>,
    /// Deprecated alias of `group_details`, used only when `group_details` is absent
    pub organization_details: Option<OrganizationDetails>,
}

impl ClientAuthTokenData {
    /// Token data for the given user
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Set the group identifier
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Set the user details
    #[must_use]
    pub fn with_user_details(mut self, details: UserDetails) -> Self {
        self.user_details = Some(details);
        self
    }

    /// Set the group details
    #[must_use]
    pub fn with_group_details(mut self, details: GroupDetails) -> Self {
        self.group_details = Some(details);
        self
    }

    /// Group identifier to put in the token, if any
    #[must_use]
    pub fn resolved_group_id(&self) -> Option<&str> {
        prefer_current(
            Some(self.group_id.as_str()).filter(|id| !id.is_empty()),
            Some(self.organization_id.as_str()).filter(|id| !id.is_empty()),
            "organization_id",
        )
    }

    /// Group details to put in the token, if any
    #[must_use]
    pub fn resolved_group_details(&self) -> Option<&GroupDetails> {
        prefer_current(
            self.group_details.as_ref(),
            self.organization_details.as_ref(),
            "organization_details",
        )
    }
}

fn prefer_current<'a, T: ?Sized>(
    current: Option<&'a T>,
    deprecated: Option<&'a T>,
    deprecated_field: &'static str,
) -> Option<&'a T> {
    match (current, deprecated) {
        (Some(value), _) => Some(value),
        (None, Some(value)) => {
            tracing::warn!(
                deprecated = deprecated_field,
                "deprecated organization field used; set the group field instead"
            );
            Some(value)
        }
        (None, None) => None,
    }
}
