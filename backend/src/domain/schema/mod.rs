//! Declarative field schema and validator.
//!
//! Each field maps to an ordered list of checks. Validation walks the list
//! and stops at the first failing check, returning that check's message.
//! Messages are user visible, so every rule carries its own wording instead
//! of a generic "invalid".

mod patterns;

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use super::field::FieldName;
use super::phone::PhonePolicy;

/// Minimum length for the three name fields.
pub const NAME_MIN: usize = 3;
/// Maximum length for the three name fields.
pub const NAME_MAX: usize = 255;
/// Exact length of a national identifier.
pub const NATIONAL_ID_LEN: usize = 14;
/// Minimum length for the first address line.
pub const ADDRESS_MIN: usize = 4;

/// A single acceptance predicate.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must not be empty.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Value must contain a match for the pattern. Anchor the pattern to
    /// require a full match.
    Pattern(&'static Regex),
    /// Value must have a plausible e-mail shape.
    Email,
    /// Value must be a valid phone number under the policy.
    Phone(PhonePolicy),
    /// Value must contain a Twitter profile link.
    TwitterProfile,
}

impl Rule {
    /// Evaluate the predicate against `value`.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Pattern(regex) => regex.is_match(value),
            Self::Email => patterns::email().is_match(value),
            Self::Phone(policy) => policy.is_valid(value),
            Self::TwitterProfile => patterns::contains_twitter_profile(value),
        }
    }
}

/// A rule paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Check {
    rule: Rule,
    message: &'static str,
}

impl Check {
    /// Pair a rule with its failure message.
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }

    /// The predicate.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The failure message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    field: FieldName,
    message: String,
}

impl FieldError {
    /// Build an error for `field`.
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Field that failed.
    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Message to display next to the field.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Mapping from field to its ordered checks.
///
/// Immutable once built. A field with no checks accepts any value.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    checks: BTreeMap<FieldName, Vec<Check>>,
}

impl FieldSchema {
    /// Rules for the registration form, with phone numbers checked under
    /// `phone`.
    pub fn registration(phone: PhonePolicy) -> Self {
        use Rule::{Email, MaxLength, MinLength, Pattern, Phone, Required, TwitterProfile};

        let mut checks = BTreeMap::new();
        checks.insert(
            FieldName::FirstName,
            name_checks(
                "First name is required",
                "First name is too short",
                "First name is too long",
            ),
        );
        checks.insert(
            FieldName::MiddleName,
            name_checks(
                "Middle name is required",
                "Middle name is too short",
                "Middle name is too long",
            ),
        );
        checks.insert(
            FieldName::LastName,
            name_checks(
                "Last name is required",
                "Last name is too short",
                "Last name is too long",
            ),
        );
        checks.insert(
            FieldName::Phone,
            vec![
                Check::new(Required, "Phone number is required"),
                Check::new(Phone(phone), "Phone number is invalid"),
            ],
        );
        checks.insert(
            FieldName::NationalId,
            vec![
                Check::new(Required, "National ID is required"),
                Check::new(Pattern(patterns::digits()), "Must be only digits"),
                Check::new(MinLength(NATIONAL_ID_LEN), "Must be exactly 14 digits"),
                Check::new(MaxLength(NATIONAL_ID_LEN), "Must be exactly 14 digits"),
            ],
        );
        checks.insert(
            FieldName::Email,
            vec![
                Check::new(Required, "Email is required"),
                Check::new(Email, "Invalid email address"),
            ],
        );
        checks.insert(
            FieldName::Address1,
            vec![
                Check::new(Required, "Address 1 is required"),
                Check::new(MinLength(ADDRESS_MIN), "Address is too short"),
            ],
        );
        checks.insert(FieldName::Address2, Vec::new());
        checks.insert(
            FieldName::LinkedIn,
            vec![
                Check::new(Required, "LinkedIn is required"),
                Check::new(
                    Pattern(patterns::linkedin()),
                    "Must be a valid LinkedIn link",
                ),
            ],
        );
        checks.insert(
            FieldName::Twitter,
            vec![
                Check::new(Required, "Twitter is required"),
                Check::new(TwitterProfile, "Must be a valid Twitter link"),
            ],
        );
        checks.insert(
            FieldName::Facebook,
            vec![
                Check::new(Required, "Facebook is required"),
                Check::new(
                    Pattern(patterns::facebook()),
                    "Must be a valid Facebook link",
                ),
            ],
        );

        Self { checks }
    }

    /// Ordered checks for `field`.
    pub fn checks(&self, field: FieldName) -> &[Check] {
        self.checks.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Whether `field` must be filled in.
    pub fn is_required(&self, field: FieldName) -> bool {
        self.checks(field)
            .iter()
            .any(|check| matches!(check.rule(), Rule::Required))
    }

    /// Validate `value` for `field`, returning the first failing message.
    ///
    /// # Examples
    /// ```
    /// use registration_form::domain::{FieldName, FieldSchema, PhonePolicy};
    ///
    /// let schema = FieldSchema::registration(PhonePolicy::default());
    /// assert!(schema.validate(FieldName::NationalId, "29001011234567").is_ok());
    /// let err = schema.validate(FieldName::NationalId, "12345").unwrap_err();
    /// assert_eq!(err.message(), "Must be exactly 14 digits");
    /// ```
    pub fn validate(&self, field: FieldName, value: &str) -> Result<(), FieldError> {
        match self
            .checks(field)
            .iter()
            .find(|check| !check.rule().accepts(value))
        {
            Some(check) => Err(FieldError::new(field, check.message())),
            None => Ok(()),
        }
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::registration(PhonePolicy::default())
    }
}

fn name_checks(required: &'static str, short: &'static str, long: &'static str) -> Vec<Check> {
    vec![
        Check::new(Rule::Required, required),
        Check::new(Rule::MinLength(NAME_MIN), short),
        Check::new(Rule::MaxLength(NAME_MAX), long),
    ]
}
