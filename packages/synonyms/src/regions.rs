//! Subdivision code tables for the highway naming rules.
//!
//! Codes are the bare ISO-3166-2 suffixes ("pa", "nb") as carried by
//! [`address_itp_feature::Context`]; display names are the forms used
//! when generating the long highway variants.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// US state and district codes to display names.
static US_STATES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("al", "Alabama"),
        ("ak", "Alaska"),
        ("az", "Arizona"),
        ("ar", "Arkansas"),
        ("ca", "California"),
        ("co", "Colorado"),
        ("ct", "Connecticut"),
        ("de", "Delaware"),
        ("dc", "District of Columbia"),
        ("fl", "Florida"),
        ("ga", "Georgia"),
        ("hi", "Hawaii"),
        ("id", "Idaho"),
        ("il", "Illinois"),
        ("in", "Indiana"),
        ("ia", "Iowa"),
        ("ks", "Kansas"),
        ("ky", "Kentucky"),
        ("la", "Louisiana"),
        ("me", "Maine"),
        ("md", "Maryland"),
        ("ma", "Massachusetts"),
        ("mi", "Michigan"),
        ("mn", "Minnesota"),
        ("ms", "Mississippi"),
        ("mo", "Missouri"),
        ("mt", "Montana"),
        ("ne", "Nebraska"),
        ("nv", "Nevada"),
        ("nh", "New Hampshire"),
        ("nj", "New Jersey"),
        ("nm", "New Mexico"),
        ("ny", "New York"),
        ("nc", "North Carolina"),
        ("nd", "North Dakota"),
        ("oh", "Ohio"),
        ("ok", "Oklahoma"),
        ("or", "Oregon"),
        ("pa", "Pennsylvania"),
        ("ri", "Rhode Island"),
        ("sc", "South Carolina"),
        ("sd", "South Dakota"),
        ("tn", "Tennessee"),
        ("tx", "Texas"),
        ("ut", "Utah"),
        ("vt", "Vermont"),
        ("va", "Virginia"),
        ("wa", "Washington"),
        ("wv", "West Virginia"),
        ("wi", "Wisconsin"),
        ("wy", "Wyoming"),
    ])
});

/// Canadian province and territory codes to display names.
static CA_PROVINCES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("ab", "Alberta"),
        ("bc", "British Columbia"),
        ("mb", "Manitoba"),
        ("nb", "New Brunswick"),
        ("nl", "Newfoundland and Labrador"),
        ("ns", "Nova Scotia"),
        ("nt", "Northwest Territories"),
        ("nu", "Nunavut"),
        ("on", "Ontario"),
        ("pe", "Prince Edward Island"),
        ("qc", "Quebec"),
        ("sk", "Saskatchewan"),
        ("yt", "Yukon"),
    ])
});

/// Provinces whose numbered highways are displayed as "Route" rather
/// than "Highway" ("New Brunswick Route 101").
const CA_ROUTE_PROVINCES: &[&str] = &["nb", "nl", "pe", "qc"];

/// Display name for a US state code.
#[must_use]
pub fn us_state_name(code: &str) -> Option<&'static str> {
    US_STATES.get(code).copied()
}

/// Display name for a Canadian province or territory code.
#[must_use]
pub fn ca_province_name(code: &str) -> Option<&'static str> {
    CA_PROVINCES.get(code).copied()
}

/// `true` if the province labels its highways "Route".
#[must_use]
pub fn ca_uses_route(code: &str) -> bool {
    CA_ROUTE_PROVINCES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_state_names() {
        assert_eq!(us_state_name("pa"), Some("Pennsylvania"));
        assert_eq!(us_state_name("dc"), Some("District of Columbia"));
        assert_eq!(us_state_name("zz"), None);
    }

    #[test]
    fn resolves_province_names() {
        assert_eq!(ca_province_name("nb"), Some("New Brunswick"));
        assert_eq!(ca_province_name("on"), Some("Ontario"));
        assert_eq!(ca_province_name("pa"), None);
    }

    #[test]
    fn route_provinces_are_the_maritime_and_quebec_set() {
        for code in ["nb", "nl", "pe", "qc"] {
            assert!(ca_uses_route(code), "{code} should use Route");
        }
        for code in ["ab", "bc", "on", "sk"] {
            assert!(!ca_uses_route(code), "{code} should use Highway");
        }
    }
}
