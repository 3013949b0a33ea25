//! Settings loaded via OrthoConfig and the server configuration built from
//! them.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use registration_form::domain::ports::{
    ChallengeResultSink, CourseCatalogue, FixtureCourseCatalogue, FixturePhoneChallenge,
    RegistrationSink,
};
use registration_form::domain::{
    DEFAULT_PHONE_REGION, FieldSchema, PhonePolicy, UnknownRegionError,
};
use registration_form::inbound::http::state::HttpStatePorts;
use registration_form::outbound::catalogue::HttpCourseCatalogue;
use registration_form::outbound::memory::{InMemoryChallengeResultSink, InMemoryRegistrationSink};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_COURSES_TIMEOUT_SECS: u64 = 10;

/// Raised when settings hold a value the server cannot use.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    PhoneRegion(#[from] UnknownRegionError),
    #[error("invalid courses URL {value:?}: {source}")]
    CoursesUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("failed to build course catalogue client: {0}")]
    CatalogueClient(#[from] reqwest::Error),
}

/// Runtime settings for the registration service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct RegistrationSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Default region used to parse phone numbers.
    pub phone_region: Option<String>,
    /// Require phone numbers to belong to the default region.
    #[ortho_config(default = true)]
    pub phone_strict: bool,
    /// REST listing URL of the `courses` collection. Without it a built-in
    /// list is served.
    pub courses_url: Option<String>,
    /// Timeout for course listing requests.
    pub courses_timeout_secs: Option<u64>,
}

impl RegistrationSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    pub fn phone_region(&self) -> &str {
        self.phone_region.as_deref().unwrap_or(DEFAULT_PHONE_REGION)
    }

    pub fn phone_policy(&self) -> Result<PhonePolicy, SettingsError> {
        Ok(PhonePolicy::new(self.phone_region(), self.phone_strict)?)
    }

    pub fn courses_url(&self) -> Result<Option<Url>, SettingsError> {
        self.courses_url
            .as_deref()
            .map(|value| {
                Url::parse(value).map_err(|source| SettingsError::CoursesUrl {
                    value: value.to_owned(),
                    source,
                })
            })
            .transpose()
    }

    pub fn courses_timeout(&self) -> Duration {
        Duration::from_secs(
            self.courses_timeout_secs
                .unwrap_or(DEFAULT_COURSES_TIMEOUT_SECS),
        )
    }
}

/// Everything [`super::create_server`] needs.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) schema: Arc<FieldSchema>,
    pub(crate) ports: HttpStatePorts,
}

impl ServerConfig {
    /// Resolve settings into a bindable address, a field schema and port
    /// adapters.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when any setting is malformed.
    pub fn from_settings(settings: &RegistrationSettings) -> Result<Self, SettingsError> {
        let catalogue: Arc<dyn CourseCatalogue> = match settings.courses_url()? {
            Some(endpoint) => Arc::new(HttpCourseCatalogue::new(
                endpoint,
                settings.courses_timeout(),
            )?),
            None => Arc::new(FixtureCourseCatalogue),
        };
        let registrations: Arc<dyn RegistrationSink> = Arc::new(InMemoryRegistrationSink::new());
        let challenge_results: Arc<dyn ChallengeResultSink> =
            Arc::new(InMemoryChallengeResultSink::new());
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            schema: Arc::new(FieldSchema::registration(settings.phone_policy()?)),
            ports: HttpStatePorts {
                catalogue,
                registrations,
                challenges: Arc::new(FixturePhoneChallenge),
                challenge_results,
            },
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Settings parsing and resolution.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "REGISTRATION_BIND_ADDR",
        "REGISTRATION_PHONE_REGION",
        "REGISTRATION_PHONE_STRICT",
        "REGISTRATION_COURSES_URL",
        "REGISTRATION_COURSES_TIMEOUT_SECS",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> RegistrationSettings {
        let _guard = lock_env(VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        }));
        RegistrationSettings::load_from_iter([OsString::from("registration-form")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = load_with(&[]);

        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(settings.phone_region(), "EG");
        assert!(settings.phone_strict);
        assert!(settings.courses_url().expect("absent URL is fine").is_none());
        assert_eq!(settings.courses_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("REGISTRATION_BIND_ADDR", "127.0.0.1:9090"),
            ("REGISTRATION_PHONE_REGION", "GB"),
            ("REGISTRATION_PHONE_STRICT", "false"),
            (
                "REGISTRATION_COURSES_URL",
                "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/courses",
            ),
            ("REGISTRATION_COURSES_TIMEOUT_SECS", "3"),
        ]);

        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            9090
        );
        let policy = settings.phone_policy().expect("GB is a known region");
        assert!(!policy.is_strict());
        assert!(settings.courses_url().expect("URL parses").is_some());
        assert_eq!(settings.courses_timeout(), Duration::from_secs(3));
    }

    #[rstest]
    fn malformed_values_are_reported() {
        let settings = load_with(&[
            ("REGISTRATION_BIND_ADDR", "nowhere"),
            ("REGISTRATION_PHONE_REGION", "ZZZ"),
            ("REGISTRATION_COURSES_URL", "not a url"),
        ]);

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
        assert!(matches!(
            settings.phone_policy(),
            Err(SettingsError::PhoneRegion(_))
        ));
        assert!(matches!(
            ServerConfig::from_settings(&settings),
            Err(SettingsError::CoursesUrl { .. })
        ));
    }

    #[rstest]
    fn fixture_catalogue_is_used_without_a_url() {
        let config = ServerConfig::from_settings(&load_with(&[])).expect("defaults resolve");
        assert_eq!(config.bind_addr().port(), 8080);
    }
}
