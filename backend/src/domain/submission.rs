//! Submission pipeline: forward registration data, then start phone
//! verification.
//!
//! Ordering is fixed. The registration sink always receives the payload
//! before a challenge is requested, because the verification step assumes
//! the data has already landed.
//!
//! A failed challenge is logged and the form stays on the registration step.
//! The user gets no further feedback and nothing is retried.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::SubmissionPayload;
use super::ports::{ChallengeHandle, ChallengeResultSink, PhoneChallenge, RegistrationSink};
use super::schema::FieldError;

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// At least one field failed validation; nothing was forwarded.
    Rejected { errors: Vec<FieldError> },
    /// Data forwarded and verification started.
    Advanced { challenge: ChallengeHandle },
    /// Data forwarded but verification could not start.
    Stalled,
}

/// Collaborators a submission is forwarded to.
#[derive(Clone)]
pub struct SubmissionPipeline {
    registrations: Arc<dyn RegistrationSink>,
    challenges: Arc<dyn PhoneChallenge>,
    challenge_results: Arc<dyn ChallengeResultSink>,
}

impl SubmissionPipeline {
    /// Wire the pipeline to its collaborators.
    pub fn new(
        registrations: Arc<dyn RegistrationSink>,
        challenges: Arc<dyn PhoneChallenge>,
        challenge_results: Arc<dyn ChallengeResultSink>,
    ) -> Self {
        Self {
            registrations,
            challenges,
            challenge_results,
        }
    }

    /// Forward `payload` and, when `phone` is present, start verification.
    pub async fn run(&self, payload: &SubmissionPayload, phone: Option<&str>) -> SubmissionOutcome {
        self.registrations.accept(payload);

        let Some(phone) = phone.filter(|value| !value.is_empty()) else {
            warn!("no phone number to verify; staying on registration step");
            return SubmissionOutcome::Stalled;
        };

        match self.challenges.request(phone).await {
            Ok(challenge) => {
                info!(
                    verification_id = challenge.verification_id(),
                    "phone challenge started"
                );
                self.challenge_results.accept(challenge.clone());
                SubmissionOutcome::Advanced { challenge }
            }
            Err(err) => {
                error!(error = %err, "phone challenge failed; staying on registration step");
                SubmissionOutcome::Stalled
            }
        }
    }
}
