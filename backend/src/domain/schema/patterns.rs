//! Compiled patterns backing the pattern rules.

use std::sync::OnceLock;

use regex::Regex;

fn compile(cell: &'static OnceLock<Regex>, name: &str, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|error| panic!("{name} regex failed to compile: {error}"))
    })
}

pub(super) fn digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, "digits", "^[0-9]+$")
}

pub(super) fn email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(
        &RE,
        "email",
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
}

/// Country-prefixed LinkedIn host, e.g. `https://uk.linkedin.com/in/x`.
pub(super) fn linkedin() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, "linkedin", r"^https://[a-z]{2,3}\.linkedin\.com/.*$")
}

/// Unanchored: the link may appear anywhere in the value.
pub(super) fn facebook() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, "facebook", r"((http|https)://)?(www[.])?facebook\.com/.+")
}

fn twitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, "twitter", r"https://twitter\.com/[A-Za-z0-9_]+")
}

/// Return true when `value` contains a Twitter profile link whose handle is
/// not followed by a further path segment.
///
/// The handle match is greedy, so checking the next character is enough.
pub(super) fn contains_twitter_profile(value: &str) -> bool {
    twitter().find_iter(value).any(|found| {
        value
            .get(found.end()..)
            .is_some_and(|rest| !rest.starts_with('/'))
    })
}
