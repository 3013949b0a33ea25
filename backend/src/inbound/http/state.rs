//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! domain ports, so they stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ChallengeResultSink, CourseCatalogue, FixtureChallengeResultSink, FixtureCourseCatalogue,
    FixturePhoneChallenge, FixtureRegistrationSink, PhoneChallenge, RegistrationSink,
};
use crate::domain::{FieldSchema, SubmissionPipeline};

/// Parameter object bundling the port implementations handlers need.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub catalogue: Arc<dyn CourseCatalogue>,
    pub registrations: Arc<dyn RegistrationSink>,
    pub challenges: Arc<dyn PhoneChallenge>,
    pub challenge_results: Arc<dyn ChallengeResultSink>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            catalogue: Arc::new(FixtureCourseCatalogue),
            registrations: Arc::new(FixtureRegistrationSink),
            challenges: Arc::new(FixturePhoneChallenge),
            challenge_results: Arc::new(FixtureChallengeResultSink),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub schema: Arc<FieldSchema>,
    pub catalogue: Arc<dyn CourseCatalogue>,
    pub pipeline: SubmissionPipeline,
}

impl HttpState {
    /// Construct state from a field schema and a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use registration_form::domain::FieldSchema;
    /// use registration_form::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(Arc::new(FieldSchema::default()), HttpStatePorts::default());
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(schema: Arc<FieldSchema>, ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            catalogue,
            registrations,
            challenges,
            challenge_results,
        } = ports;
        Self {
            schema,
            catalogue,
            pipeline: SubmissionPipeline::new(registrations, challenges, challenge_results),
        }
    }
}
