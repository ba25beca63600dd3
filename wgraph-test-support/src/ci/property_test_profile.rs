//! Property-test run profile read from the environment.
//!
//! CI raises case counts and enables forking through environment variables;
//! every property suite in the workspace reads them through this one type.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling proptest subprocess forking.
pub const WGRAPH_PBT_FORK_ENV_KEY: &str = "WGRAPH_PBT_FORK";

/// Reasons an override was ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count was not a positive integer.
    #[error("expected a positive case count, got `{raw}`")]
    InvalidCases {
        /// Raw value as read from the environment.
        raw: String,
    },
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    InvalidFlag {
        /// Raw value as read from the environment.
        raw: String,
    },
}

/// Case count and fork flag used to configure proptest runners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the supplied
    /// defaults when a variable is unset or malformed.
    ///
    /// Malformed overrides are reported through a `warn` event.
    ///
    /// # Examples
    ///
    /// ```
    /// use wgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(WGRAPH_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases each property runs.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest runs each case in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`ProfileOverrideError::InvalidCases`] for zero, negative, or
/// non-numeric input.
pub fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => Ok(cases),
        _ => Err(ProfileOverrideError::InvalidCases {
            raw: raw.to_owned(),
        }),
    }
}

/// Parses a boolean flag, accepting common spellings in any case.
///
/// # Errors
/// Returns [`ProfileOverrideError::InvalidFlag`] for unrecognised input.
pub fn parse_flag(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidFlag {
            raw: raw.to_owned(),
        }),
    }
}
