//! Domain ports for the collaborators around the registration form.
//!
//! Every collaborator the form talks to (identity provider, registration
//! sink, phone challenge, challenge-result sink, course catalogue) is a trait
//! here. Each ships a `Fixture*` implementation for local runs, and a
//! `mockall` mock in test builds.

mod challenge_result_sink;
mod course_catalogue;
mod identity_provider;
mod macros;
mod phone_challenge;
mod registration_sink;

use macros::define_port_error;

pub use challenge_result_sink::{ChallengeResultSink, FixtureChallengeResultSink};
#[cfg(test)]
pub use challenge_result_sink::MockChallengeResultSink;
pub use course_catalogue::{CourseCatalogue, CourseCatalogueError, FixtureCourseCatalogue};
#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
pub use identity_provider::{
    FixtureIdentityProvider, IdentityProvider, IdentityProviderError, SignInMethod,
};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use phone_challenge::{
    ChallengeHandle, FixturePhoneChallenge, PhoneChallenge, PhoneChallengeError,
};
#[cfg(test)]
pub use phone_challenge::MockPhoneChallenge;
pub use registration_sink::{FixtureRegistrationSink, RegistrationSink};
#[cfg(test)]
pub use registration_sink::MockRegistrationSink;
