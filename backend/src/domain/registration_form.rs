//! Registration form controller.
//!
//! Owns the form state for one form instance and applies the three kinds of
//! change the form sees: user edits, identity updates from the sign-in
//! provider, and submission. Each change is an explicit method call.
//!
//! The phone input keeps a working value separate from the registered one.
//! The working value is promoted only when it passes the phone rule, and
//! submission validates the working value, so a half-typed number never
//! passes on the strength of an older valid one.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use super::course::{Course, CourseId};
use super::field::FieldName;
use super::form_state::{FieldOrigin, FormState};
use super::identity::IdentitySnapshot;
use super::payload::SubmissionPayload;
use super::ports::{CourseCatalogue, CourseCatalogueError, IdentityProvider, SignInMethod};
use super::schema::{FieldError, FieldSchema};
use super::submission::{SubmissionOutcome, SubmissionPipeline};

/// Which screen of the registration flow is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    #[default]
    Registration,
    /// Waiting for the one-time phone code.
    Verification,
}

/// Raised when selecting a course the catalogue did not list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("course {0} is not offered")]
pub struct UnknownCourseError(pub CourseId);

#[derive(Debug, Clone, Default)]
struct CourseChoices {
    fetched: bool,
    offered: Vec<Course>,
    selected: BTreeSet<CourseId>,
}

/// Controller for one registration form instance.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    schema: Arc<FieldSchema>,
    state: FormState,
    working_phone: String,
    last_identity: Option<IdentitySnapshot>,
    courses: CourseChoices,
    step: FormStep,
}

impl RegistrationForm {
    /// Empty form validated by `schema`.
    pub fn new(schema: Arc<FieldSchema>) -> Self {
        Self {
            schema,
            state: FormState::new(),
            working_phone: String::new(),
            last_identity: None,
            courses: CourseChoices::default(),
            step: FormStep::default(),
        }
    }

    /// Current per-field state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Phone value as typed, valid or not.
    pub fn working_phone(&self) -> &str {
        self.working_phone.as_str()
    }

    /// Current step of the flow.
    pub fn step(&self) -> FormStep {
        self.step
    }

    /// Courses fetched from the catalogue.
    pub fn offered_courses(&self) -> &[Course] {
        &self.courses.offered
    }

    /// Courses currently ticked.
    pub fn selected_courses(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.selected.iter()
    }

    /// Apply a user edit to `field`.
    ///
    /// Phone edits are routed through [`Self::input_phone`].
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FieldError> {
        if field == FieldName::Phone {
            return self.input_phone(value);
        }
        self.state
            .write(&self.schema, field, value, FieldOrigin::User)
    }

    /// Apply a change to the phone input's working value.
    ///
    /// The value is registered only when it passes the phone rule; otherwise
    /// it is kept for display and the field shows the rule's message.
    pub fn input_phone(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.working_phone = value.into();
        let result = self.schema.validate(FieldName::Phone, &self.working_phone);
        match result {
            Ok(()) => self.state.write(
                &self.schema,
                FieldName::Phone,
                self.working_phone.clone(),
                FieldOrigin::User,
            ),
            Err(err) => {
                self.state.settle(FieldName::Phone, &Err(err.clone()));
                Err(err)
            }
        }
    }

    /// Seed name and e-mail fields from a new identity snapshot.
    ///
    /// Does nothing when `snapshot` equals the last one applied, so a
    /// repeated notification never overwrites later edits. Fields the user
    /// has typed into are left alone. Returns whether the snapshot was new.
    pub fn reconcile_identity(&mut self, snapshot: Option<&IdentitySnapshot>) -> bool {
        if self.last_identity.as_ref() == snapshot {
            return false;
        }
        self.last_identity = snapshot.cloned();
        let Some(snapshot) = snapshot else {
            debug!("identity cleared; form fields kept");
            return true;
        };

        let name = snapshot.split_name();
        let seeds = [
            (FieldName::FirstName, name.first),
            (FieldName::LastName, name.last),
            (FieldName::Email, snapshot.email().map(str::to_owned)),
        ];
        for (field, value) in seeds {
            let Some(value) = value else { continue };
            if self.state.origin(field) == FieldOrigin::User {
                debug!(%field, "keeping user edit over identity value");
                continue;
            }
            // A seeded value may itself fail validation; the error is shown
            // like any other.
            let _ = self
                .state
                .write(&self.schema, field, value, FieldOrigin::Identity);
        }
        true
    }

    /// Run a third-party sign-in and reconcile with the resulting identity.
    ///
    /// A failed attempt is logged; the provider's identity is still read in
    /// case it changed.
    pub async fn sign_in(&mut self, provider: &dyn IdentityProvider, method: SignInMethod) {
        if let Err(err) = provider.sign_in(method).await {
            warn!(error = %err, %method, "sign-in failed");
        }
        let current = provider.current();
        self.reconcile_identity(current.as_ref());
    }

    /// Fetch the course list. Only the first call per form does any work;
    /// later calls return `Ok(())`.
    ///
    /// A failed fetch is logged, leaves the list empty and is returned so
    /// callers can tell an outage from an empty catalogue.
    pub async fn load_courses(
        &mut self,
        catalogue: &dyn CourseCatalogue,
    ) -> Result<(), CourseCatalogueError> {
        if self.courses.fetched {
            return Ok(());
        }
        self.courses.fetched = true;
        match catalogue.list_courses().await {
            Ok(courses) => {
                info!(count = courses.len(), "courses loaded");
                self.courses.offered = courses;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "course catalogue unavailable");
                Err(err)
            }
        }
    }

    /// Tick or untick a course.
    pub fn select_course(&mut self, id: &CourseId, selected: bool) -> Result<(), UnknownCourseError> {
        if !self.courses.offered.iter().any(|course| course.id() == id) {
            return Err(UnknownCourseError(id.clone()));
        }
        if selected {
            self.courses.selected.insert(id.clone());
        } else {
            self.courses.selected.remove(id);
        }
        Ok(())
    }

    /// Validate every field, recording each outcome, and return the
    /// failures in form order.
    pub fn validate_all(&mut self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in FieldName::ALL {
            let candidate = if field == FieldName::Phone {
                self.working_phone.as_str()
            } else {
                self.state.value(field)
            };
            let result = self.schema.validate(field, candidate);
            self.state.settle(field, &result);
            if let Err(err) = result {
                errors.push(err);
            }
        }
        errors
    }

    /// Validate and, when everything passes, build the payload.
    pub fn prepare_submission(&mut self) -> Result<SubmissionPayload, Vec<FieldError>> {
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }
        let courses = self.courses.selected.iter().cloned().collect();
        Ok(SubmissionPayload::from_validated(&self.state, courses))
    }

    /// Submit the form through `pipeline`.
    ///
    /// Nothing is forwarded unless every field passes. When the pipeline
    /// starts verification the form advances to [`FormStep::Verification`];
    /// otherwise it stays where it is.
    pub async fn submit(&mut self, pipeline: &SubmissionPipeline) -> SubmissionOutcome {
        let payload = match self.prepare_submission() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(failed = errors.len(), "submission rejected by validation");
                return SubmissionOutcome::Rejected { errors };
            }
        };
        let phone = Some(self.working_phone.as_str()).filter(|value| !value.is_empty());
        let outcome = pipeline.run(&payload, phone).await;
        if matches!(outcome, SubmissionOutcome::Advanced { .. }) {
            self.step = FormStep::Verification;
        }
        outcome
    }
}
