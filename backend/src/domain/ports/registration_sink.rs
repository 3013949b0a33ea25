//! Driven port receiving validated registration data.
//!
//! Acceptance is synchronous and has no failure path: later steps assume the
//! data has landed once [`RegistrationSink::accept`] returns.

use tracing::info;

use crate::domain::SubmissionPayload;

/// Sink for validated registration payloads.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationSink: Send + Sync {
    /// Take ownership of a copy of the submitted data.
    fn accept(&self, payload: &SubmissionPayload);
}

/// Sink that only logs what it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationSink;

impl RegistrationSink for FixtureRegistrationSink {
    fn accept(&self, payload: &SubmissionPayload) {
        info!(
            email = payload.email(),
            courses = payload.courses().len(),
            "registration data accepted"
        );
    }
}
