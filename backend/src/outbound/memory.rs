//! In-memory sinks for registrations and pending phone challenges.
//!
//! Used when the server runs without a downstream registration store, and by
//! the HTTP tests to observe what a submission forwarded.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::SubmissionPayload;
use crate::domain::ports::{ChallengeHandle, ChallengeResultSink, RegistrationSink};

/// Registration sink keeping every accepted payload.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationSink {
    accepted: Mutex<Vec<SubmissionPayload>>,
}

impl InMemoryRegistrationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads accepted so far, oldest first.
    pub fn accepted(&self) -> Vec<SubmissionPayload> {
        self.accepted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RegistrationSink for InMemoryRegistrationSink {
    fn accept(&self, payload: &SubmissionPayload) {
        let mut accepted = self.accepted.lock().unwrap_or_else(PoisonError::into_inner);
        accepted.push(payload.clone());
        info!(total = accepted.len(), "registration stored in memory");
    }
}

/// Challenge sink keeping every pending handle.
#[derive(Debug, Default)]
pub struct InMemoryChallengeResultSink {
    pending: Mutex<Vec<ChallengeHandle>>,
}

impl InMemoryChallengeResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles stored so far, oldest first.
    pub fn pending(&self) -> Vec<ChallengeHandle> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChallengeResultSink for InMemoryChallengeResultSink {
    fn accept(&self, handle: ChallengeHandle) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn challenge_sink_keeps_handles_in_order() {
        let sink = InMemoryChallengeResultSink::new();
        sink.accept(ChallengeHandle::new("v-1"));
        sink.accept(ChallengeHandle::new("v-2"));
        let ids: Vec<_> = sink
            .pending()
            .iter()
            .map(|handle| handle.verification_id().to_owned())
            .collect();
        assert_eq!(ids, ["v-1", "v-2"]);
    }

    #[rstest]
    fn registration_sink_starts_empty() {
        assert!(InMemoryRegistrationSink::new().accepted().is_empty());
    }
}
