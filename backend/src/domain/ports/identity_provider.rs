//! Driven port for third-party sign-in.
//!
//! The provider owns the signed-in identity. The form only reads the current
//! snapshot after a sign-in attempt settles.
//!
//! The HTTP surface never runs a sign-in flow: the client signs in with the
//! provider and sends the resulting snapshot with the submission.
//! [`FixtureIdentityProvider`] drives [`RegistrationForm::sign_in`] in local
//! runs and tests.
//!
//! [`RegistrationForm::sign_in`]: crate::domain::RegistrationForm::sign_in

use std::fmt;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::IdentitySnapshot;

use super::define_port_error;

/// Alternate sign-in methods offered above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInMethod {
    Google,
    Facebook,
}

impl fmt::Display for SignInMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        })
    }
}

define_port_error! {
    /// Errors raised by the identity provider.
    pub enum IdentityProviderError {
        /// The user dismissed the provider's prompt.
        Cancelled { method: SignInMethod } => "{method} sign-in was cancelled",
        /// The provider rejected or failed the attempt.
        Failed { method: SignInMethod, message: String } =>
            "{method} sign-in failed: {message}",
    }
}

/// Port exposing the current identity and the sign-in flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Identity of the signed-in user, if any.
    fn current(&self) -> Option<IdentitySnapshot>;

    /// Run the sign-in flow for `method`. On success [`Self::current`]
    /// reflects the new identity; on failure it is unchanged.
    async fn sign_in(&self, method: SignInMethod) -> Result<(), IdentityProviderError>;
}

/// Provider that signs every attempt in as one fixed profile.
#[derive(Debug, Default)]
pub struct FixtureIdentityProvider {
    profile: IdentitySnapshot,
    current: RwLock<Option<IdentitySnapshot>>,
}

impl FixtureIdentityProvider {
    /// Provider that signs in as `profile`.
    pub fn new(profile: IdentitySnapshot) -> Self {
        Self {
            profile,
            current: RwLock::new(None),
        }
    }
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    fn current(&self) -> Option<IdentitySnapshot> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    async fn sign_in(&self, method: SignInMethod) -> Result<(), IdentityProviderError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| IdentityProviderError::failed(method, "identity state poisoned"))?;
        *guard = Some(self.profile.clone());
        Ok(())
    }
}
