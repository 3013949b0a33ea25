//! Region-aware phone number validity.
//!
//! Numbers may be entered in international form (`+20 100 123 4567`) or in
//! the national form of the default region (`0100 123 4567`).

use phonenumber::country;
use thiserror::Error;

/// Region used when neither configuration nor input names one.
pub const DEFAULT_PHONE_REGION: &str = "EG";

/// Raised when a configured region code is not an ISO 3166-1 alpha-2 code
/// known to the phone metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phone region code: {0}")]
pub struct UnknownRegionError(pub String);

/// Semantic phone check parameterised by a default region.
///
/// In strict mode a number must also belong to the default region, so a
/// valid foreign number is rejected.
///
/// # Examples
/// ```
/// use registration_form::domain::PhonePolicy;
///
/// let policy = PhonePolicy::new("EG", true).expect("known region");
/// assert!(policy.is_valid("+20 100 123 4567"));
/// assert!(!policy.is_valid("12345"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonePolicy {
    region: country::Id,
    strict: bool,
}

impl PhonePolicy {
    /// Build a policy for the given region code.
    pub fn new(region: &str, strict: bool) -> Result<Self, UnknownRegionError> {
        let code = region.trim().to_ascii_uppercase();
        let region = code
            .parse::<country::Id>()
            .map_err(|_| UnknownRegionError(region.to_owned()))?;
        Ok(Self { region, strict })
    }

    /// Whether region membership is enforced.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Return true when `value` parses as a valid phone number.
    pub fn is_valid(&self, value: &str) -> bool {
        let Ok(number) = phonenumber::parse(Some(self.region), value) else {
            return false;
        };
        if !phonenumber::is_valid(&number) {
            return false;
        }
        !self.strict || number.country().id() == Some(self.region)
    }
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self {
            region: country::Id::EG,
            strict: true,
        }
    }
}
