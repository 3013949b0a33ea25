//! Driven port holding the phone challenge for the verification step.

use tracing::info;

use super::ChallengeHandle;

/// Sink for challenge handles awaiting verification.
#[cfg_attr(test, mockall::automock)]
pub trait ChallengeResultSink: Send + Sync {
    /// Store the handle for the next step.
    fn accept(&self, handle: ChallengeHandle);
}

/// Sink that only logs the handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureChallengeResultSink;

impl ChallengeResultSink for FixtureChallengeResultSink {
    fn accept(&self, handle: ChallengeHandle) {
        info!(verification_id = handle.verification_id(), "challenge handle stored");
    }
}
