//! Domain types and the registration form controller.
//!
//! Nothing here knows about HTTP. The form talks to its collaborators only
//! through the traits in [`ports`].
//!
//! Public surface:
//! - [`FieldSchema`] and [`FieldError`]: per-field rules and their failures.
//! - [`RegistrationForm`]: the controller owning one form instance.
//! - [`SubmissionPipeline`] and [`SubmissionOutcome`]: forwarding a valid
//!   submission and starting phone verification.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic error payload.

pub mod course;
pub mod error;
pub mod field;
pub mod form_state;
pub mod identity;
pub mod payload;
pub mod phone;
pub mod ports;
pub mod registration_form;
pub mod schema;
pub mod submission;
pub mod trace_id;

pub use self::course::{Course, CourseId, CourseValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::field::{FieldName, UnknownFieldError};
pub use self::form_state::{FieldOrigin, FieldStatus, FormState};
pub use self::identity::{IdentitySnapshot, SplitName};
pub use self::payload::SubmissionPayload;
pub use self::phone::{DEFAULT_PHONE_REGION, PhonePolicy, UnknownRegionError};
pub use self::registration_form::{FormStep, RegistrationForm, UnknownCourseError};
pub use self::schema::{
    ADDRESS_MIN, Check, FieldError, FieldSchema, NAME_MAX, NAME_MIN, NATIONAL_ID_LEN, Rule,
};
pub use self::submission::{SubmissionOutcome, SubmissionPipeline};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
