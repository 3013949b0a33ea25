//! Registration form field identifiers.
//!
//! The wire name of each field (camelCase) is the stable key used by inbound
//! adapters, submission payloads, and error details.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// One of the eleven text fields collected by the registration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    MiddleName,
    LastName,
    Phone,
    NationalId,
    Email,
    Address1,
    Address2,
    LinkedIn,
    Twitter,
    Facebook,
}

impl FieldName {
    /// Every field in form order.
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::Phone,
        Self::NationalId,
        Self::Email,
        Self::Address1,
        Self::Address2,
        Self::LinkedIn,
        Self::Twitter,
        Self::Facebook,
    ];

    /// Stable camelCase key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::NationalId => "nationalId",
            Self::Email => "email",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::LinkedIn => "linkedIn",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::Phone => "Phone Number",
            Self::NationalId => "National ID",
            Self::Email => "Email",
            Self::Address1 => "Address 1",
            Self::Address2 => "Address 2",
            Self::LinkedIn => "LinkedIn Profile Link",
            Self::Twitter => "Twitter Profile Link",
            Self::Facebook => "Facebook Profile Link",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a wire key does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown registration field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_owned()))
    }
}
