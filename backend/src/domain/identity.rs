//! Identity snapshots supplied by the authentication collaborator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only view of the signed-in user, used to seed form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySnapshot {
    #[schema(example = "Jane Doe")]
    display_name: Option<String>,
    #[schema(example = "jane@example.com")]
    email: Option<String>,
}

impl IdentitySnapshot {
    /// Build a snapshot from optional provider fields.
    pub fn new(display_name: Option<String>, email: Option<String>) -> Self {
        Self {
            display_name,
            email,
        }
    }

    /// Display name as reported by the provider.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// E-mail address as reported by the provider.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// First and last name derived from the display name.
    pub fn split_name(&self) -> SplitName {
        self.display_name()
            .map(SplitName::from_display_name)
            .unwrap_or_default()
    }
}

/// Name parts derived from a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitName {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl SplitName {
    /// Split on whitespace and keep the first two tokens.
    ///
    /// Anything after the second token is dropped, so `"Ana de Souza"`
    /// yields `Ana` / `de`. A single token leaves the last name absent.
    ///
    /// # Examples
    /// ```
    /// use registration_form::domain::SplitName;
    ///
    /// let name = SplitName::from_display_name("Jane Doe");
    /// assert_eq!(name.first.as_deref(), Some("Jane"));
    /// assert_eq!(name.last.as_deref(), Some("Doe"));
    ///
    /// let mononym = SplitName::from_display_name("Madonna");
    /// assert_eq!(mononym.last, None);
    /// ```
    pub fn from_display_name(display_name: &str) -> Self {
        let mut tokens = display_name.split_whitespace();
        Self {
            first: tokens.next().map(str::to_owned),
            last: tokens.next().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jane Doe", Some("Jane"), Some("Doe"))]
    #[case("Madonna", Some("Madonna"), None)]
    #[case("Ana de Souza", Some("Ana"), Some("de"))]
    #[case("  Jane   Doe ", Some("Jane"), Some("Doe"))]
    #[case("", None, None)]
    fn splits_on_first_whitespace_boundary(
        #[case] display_name: &str,
        #[case] first: Option<&str>,
        #[case] last: Option<&str>,
    ) {
        let split = SplitName::from_display_name(display_name);
        assert_eq!(split.first.as_deref(), first);
        assert_eq!(split.last.as_deref(), last);
    }

    #[rstest]
    fn missing_display_name_yields_no_parts() {
        let snapshot = IdentitySnapshot::new(None, Some("a@b.co".to_owned()));
        assert_eq!(snapshot.split_name(), SplitName::default());
        assert_eq!(snapshot.email(), Some("a@b.co"));
    }

    #[rstest]
    fn deserialises_camel_case() {
        let snapshot: IdentitySnapshot =
            serde_json::from_value(serde_json::json!({"displayName": "Jane Doe"}))
                .expect("snapshot");
        assert_eq!(snapshot.display_name(), Some("Jane Doe"));
        assert_eq!(snapshot.email(), None);
    }
}
