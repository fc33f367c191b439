//! Jurisdiction context supplied once per batch.

use serde::{Deserialize, Serialize};

/// The country and subdivision a run's records belong to.
///
/// Codes are ISO-3166 (alpha-2 country, bare subdivision suffix) and are
/// lowercased on construction so the expansion rules can compare them
/// directly. Immutable for the lifetime of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub country: Option<String>,
    pub region: Option<String>,
}

impl Context {
    #[must_use]
    pub fn new(country: Option<&str>, region: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_lowercase),
            region: region.map(str::to_lowercase),
        }
    }

    /// `true` if the context's country matches the given alpha-2 code.
    #[must_use]
    pub fn country_is(&self, code: &str) -> bool {
        self.country.as_deref() == Some(code)
    }

    /// `true` if the country is one of the given alpha-2 codes.
    #[must_use]
    pub fn country_in(&self, codes: &[&str]) -> bool {
        self.country
            .as_deref()
            .is_some_and(|country| codes.contains(&country))
    }

    /// The subdivision code, if both country and region are known.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.country.as_ref()?;
        self.region.as_deref()
    }
}
