//! Driven port initiating phone-number verification.
//!
//! A successful call yields an opaque [`ChallengeHandle`] that a later step
//! uses to confirm the one-time code sent to the phone.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::define_port_error;

/// Opaque result of a started phone verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeHandle {
    #[schema(example = "7f0c2a5e-3c1b-4a9e-9d55-0f6f1d2b8c11")]
    verification_id: String,
}

impl ChallengeHandle {
    /// Wrap a provider-issued verification id.
    pub fn new(verification_id: impl Into<String>) -> Self {
        Self {
            verification_id: verification_id.into(),
        }
    }

    /// Provider-issued verification id.
    pub fn verification_id(&self) -> &str {
        self.verification_id.as_str()
    }
}

define_port_error! {
    /// Errors raised when a challenge cannot be started.
    pub enum PhoneChallengeError {
        /// The provider refused the number.
        Rejected { message: String } => "phone challenge rejected: {message}",
        /// The provider could not be reached.
        Unavailable { message: String } =>
            "phone challenge provider unavailable: {message}",
    }
}

/// Port for starting phone verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhoneChallenge: Send + Sync {
    /// Send a one-time code to `phone` and return the pending challenge.
    async fn request(&self, phone: &str) -> Result<ChallengeHandle, PhoneChallengeError>;
}

/// Challenge provider that issues random handles without sending anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePhoneChallenge;

#[async_trait]
impl PhoneChallenge for FixturePhoneChallenge {
    async fn request(&self, phone: &str) -> Result<ChallengeHandle, PhoneChallengeError> {
        if phone.trim().is_empty() {
            return Err(PhoneChallengeError::rejected("phone number is empty"));
        }
        Ok(ChallengeHandle::new(Uuid::new_v4().to_string()))
    }
}
