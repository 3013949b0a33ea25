//! Flat record handed to the registration sink.

use serde::Serialize;
use utoipa::ToSchema;

use super::course::CourseId;
use super::field::FieldName;
use super::form_state::FormState;

/// Validated form data.
///
/// Only [`crate::domain::RegistrationForm`] builds payloads, and only after
/// every field has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    first_name: String,
    middle_name: String,
    last_name: String,
    phone: String,
    national_id: String,
    email: String,
    address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address2: Option<String>,
    linked_in: String,
    twitter: String,
    facebook: String,
    courses: Vec<CourseId>,
}

impl SubmissionPayload {
    pub(crate) fn from_validated(state: &FormState, courses: Vec<CourseId>) -> Self {
        let take = |field| state.value(field).to_owned();
        let address2 = Some(take(FieldName::Address2)).filter(|value| !value.is_empty());
        Self {
            first_name: take(FieldName::FirstName),
            middle_name: take(FieldName::MiddleName),
            last_name: take(FieldName::LastName),
            phone: take(FieldName::Phone),
            national_id: take(FieldName::NationalId),
            email: take(FieldName::Email),
            address1: take(FieldName::Address1),
            address2,
            linked_in: take(FieldName::LinkedIn),
            twitter: take(FieldName::Twitter),
            facebook: take(FieldName::Facebook),
            courses,
        }
    }

    /// Value submitted for `field`; empty when an optional field was left
    /// blank.
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::MiddleName => &self.middle_name,
            FieldName::LastName => &self.last_name,
            FieldName::Phone => &self.phone,
            FieldName::NationalId => &self.national_id,
            FieldName::Email => &self.email,
            FieldName::Address1 => &self.address1,
            FieldName::Address2 => self.address2.as_deref().unwrap_or_default(),
            FieldName::LinkedIn => &self.linked_in,
            FieldName::Twitter => &self.twitter,
            FieldName::Facebook => &self.facebook,
        }
    }

    /// Registered phone number.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Registered e-mail address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Selected courses.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }
}
