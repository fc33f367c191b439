//! Highway designation recognition and display-form generation.
//!
//! Each jurisdiction writes its numbered routes many ways in source
//! data. The recognizers below map every accepted surface form to a
//! normal form of `<REGION> <NUMBER>`, then emit the cross-product of
//! display conventions for that jurisdiction. The variant marked as the
//! preferred display form carries priority +1 when the recognized name
//! is the feature's primary name, -1 otherwise; the remaining variants
//! rank -1 or -2.

use std::sync::LazyLock;

use address_itp_feature::Name;
use regex::Regex;

use crate::regions;

/// Source label attached to every generated variant.
const GENERATED: &str = "generated";

/// Octothorpe-prefixed route numbers ("HWY #35").
static OCTOTHORPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*#\s*(?P<num>\d+[a-z]?)").expect("valid regex"));

/// "US 81", "US-81", "U.S. Route 81", "US Hwy 81".
static US_FEDERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^u\.?s\.?(?:[-\s]+(?:route|rte|highway|hwy))?[-\s]+(?P<num>\d+[a-z]?)$")
        .expect("valid regex")
});

/// "United States Highway 81", "United States Route 81".
static US_FEDERAL_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^united states (?:route|rte|highway|hwy)\s+(?P<num>\d+[a-z]?)$")
        .expect("valid regex")
});

/// A bare route number ("101", "101a").
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<num>\d+[a-z]?)$").expect("valid regex"));

/// A generic type word plus number ("Highway 101", "SR 101").
static TYPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:route|rte|rt|highway|hwy|sr)[-\s]+(?P<num>\d+[a-z]?)$")
        .expect("valid regex")
});

/// A two-letter prefix plus number ("PA 81", "NB-101"). The prefix is
/// verified against the batch region before the match counts.
static PREFIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<prefix>[a-z]{2})[-\s]+(?P<num>\d+[a-z]?)$").expect("valid regex")
});

/// A spelled-out jurisdiction plus type word plus number
/// ("Pennsylvania Highway 81", "New Brunswick Route 101"). The name is
/// verified against the batch region before the match counts.
static NAMED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>[a-z][a-z ]*?)\s+(?:route|rte|highway|hwy)\s+(?P<num>\d+[a-z]?)$")
        .expect("valid regex")
});

/// Ontario's "King's Highway 7" styling.
static KINGS_HIGHWAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^king'?s highway\s+(?P<num>\d+[a-z]?)$").expect("valid regex")
});

/// Collapses an octothorpe-prefixed route number in place.
///
/// "HWY #35" becomes "HWY 35". Returns `None` when nothing changed.
#[must_use]
pub fn strip_octothorpe(display: &str) -> Option<String> {
    if !display.contains('#') {
        return None;
    }

    let replaced = OCTOTHORPE.replace_all(display, " ${num}");
    let replaced = replaced.trim().to_string();
    (replaced != display).then_some(replaced)
}

/// Expands a recognized US federal highway name.
///
/// Normal form is `US <num>`; "US Route <num>" is the preferred display
/// form.
#[must_use]
pub fn us_federal(display: &str, is_primary: bool) -> Option<Vec<Name>> {
    let num = US_FEDERAL
        .captures(display)
        .or_else(|| US_FEDERAL_FULL.captures(display))
        .map(|capture| capture["num"].to_string())?;

    let preferred = if is_primary { 1 } else { -1 };

    Some(vec![
        Name::with_source(format!("US Route {num}"), preferred, GENERATED),
        Name::with_source(format!("US {num}"), -1, GENERATED),
        Name::with_source(format!("US Highway {num}"), -2, GENERATED),
        Name::with_source(format!("United States Route {num}"), -2, GENERATED),
        Name::with_source(format!("United States Highway {num}"), -2, GENERATED),
    ])
}

/// Expands a recognized US state highway name for the batch region.
///
/// Normal form is `<ABBR> <num>`, which is also the preferred display
/// form.
#[must_use]
pub fn us_state(display: &str, region: &str, is_primary: bool) -> Option<Vec<Name>> {
    let state = regions::us_state_name(region)?;
    let num = recognize_regional(display, region, state, false)?;

    let abbr = region.to_uppercase();
    let preferred = if is_primary { 1 } else { -1 };

    Some(vec![
        Name::with_source(format!("{abbr} {num}"), preferred, GENERATED),
        Name::with_source(format!("Highway {num}"), -1, GENERATED),
        Name::with_source(format!("Route {num}"), -1, GENERATED),
        Name::with_source(format!("State Highway {num}"), -2, GENERATED),
        Name::with_source(format!("State Route {num}"), -2, GENERATED),
        Name::with_source(format!("{state} Highway {num}"), -2, GENERATED),
        Name::with_source(format!("{state} Route {num}"), -2, GENERATED),
    ])
}

/// Expands a recognized Canadian provincial highway name.
///
/// Normal form is `<ABBR> <num>`; "Highway <num>" is the preferred
/// display form. The long form uses "Route" in the provinces that label
/// their highways that way, "Highway" elsewhere.
#[must_use]
pub fn ca_provincial(display: &str, region: &str, is_primary: bool) -> Option<Vec<Name>> {
    let province = regions::ca_province_name(region)?;
    let num = recognize_regional(display, region, province, true)?;

    // A bare "1" is the Trans-Canada, never a provincial highway.
    if num == "1" && BARE_NUMBER.is_match(display) {
        return None;
    }

    let abbr = region.to_uppercase();
    let type_word = if regions::ca_uses_route(region) {
        "Route"
    } else {
        "Highway"
    };
    let preferred = if is_primary { 1 } else { -1 };

    Some(vec![
        Name::with_source(format!("Highway {num}"), preferred, GENERATED),
        Name::with_source(format!("Route {num}"), -1, GENERATED),
        Name::with_source(format!("{abbr} {num}"), -2, GENERATED),
        Name::with_source(format!("{province} {type_word} {num}"), -2, GENERATED),
    ])
}

/// Maps a regional highway surface form to its route number.
///
/// Shared by the US state and Canadian provincial recognizers; only the
/// "King's Highway" styling is specific to Canada.
fn recognize_regional(
    display: &str,
    region: &str,
    region_name: &str,
    kings: bool,
) -> Option<String> {
    if let Some(capture) = BARE_NUMBER.captures(display) {
        return Some(capture["num"].to_string());
    }

    if let Some(capture) = TYPED_NUMBER.captures(display) {
        return Some(capture["num"].to_string());
    }

    if let Some(capture) = PREFIXED_NUMBER.captures(display) {
        if capture["prefix"].eq_ignore_ascii_case(region) {
            return Some(capture["num"].to_string());
        }
    }

    if let Some(capture) = NAMED_NUMBER.captures(display) {
        if capture["name"].eq_ignore_ascii_case(region_name) {
            return Some(capture["num"].to_string());
        }
    }

    if kings {
        if let Some(capture) = KINGS_HIGHWAY.captures(display) {
            return Some(capture["num"].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displays(names: &[Name]) -> Vec<&str> {
        names.iter().map(|name| name.display.as_str()).collect()
    }

    #[test]
    fn strips_octothorpe_route_numbers() {
        assert_eq!(strip_octothorpe("HWY #35").as_deref(), Some("HWY 35"));
        assert_eq!(strip_octothorpe("Route #1a").as_deref(), Some("Route 1a"));
        assert_eq!(strip_octothorpe("HWY 35"), None);
        assert_eq!(strip_octothorpe("Main Street"), None);
    }

    #[test]
    fn recognizes_us_federal_surface_forms() {
        for form in [
            "US 81",
            "US-81",
            "us 81",
            "U.S. Route 81",
            "US Hwy 81",
            "United States Highway 81",
        ] {
            assert!(us_federal(form, true).is_some(), "missed {form}");
        }

        assert!(us_federal("Main Street", true).is_none());
        assert!(us_federal("US Bank Plaza", true).is_none());
    }

    #[test]
    fn federal_expansion_prefers_us_route() {
        let names = us_federal("US 81", true).unwrap();

        assert_eq!(
            displays(&names),
            vec![
                "US Route 81",
                "US 81",
                "US Highway 81",
                "United States Route 81",
                "United States Highway 81",
            ]
        );
        assert_eq!(names[0].priority, 1);
        assert_eq!(names[1].priority, -1);
        assert_eq!(names[2].priority, -2);
    }

    #[test]
    fn federal_secondary_name_is_not_preferred() {
        let names = us_federal("US 81", false).unwrap();
        assert_eq!(names[0].priority, -1);
    }

    #[test]
    fn recognizes_state_surface_forms() {
        for form in ["81", "Route 81", "SR 81", "PA 81", "PA-81", "Pennsylvania Highway 81"] {
            assert!(us_state(form, "pa", true).is_some(), "missed {form}");
        }

        // Another state's prefix or name is not this region's highway.
        assert!(us_state("MD 81", "pa", true).is_none());
        assert!(us_state("Maryland Highway 81", "pa", true).is_none());
    }

    #[test]
    fn state_expansion_covers_every_convention() {
        let names = us_state("81", "pa", true).unwrap();

        assert_eq!(
            displays(&names),
            vec![
                "PA 81",
                "Highway 81",
                "Route 81",
                "State Highway 81",
                "State Route 81",
                "Pennsylvania Highway 81",
                "Pennsylvania Route 81",
            ]
        );
        assert_eq!(names[0].priority, 1);
    }

    #[test]
    fn recognizes_provincial_surface_forms() {
        for form in ["101", "NB-101", "Highway 101", "rte 101", "New Brunswick Route 101"] {
            assert!(ca_provincial(form, "nb", true).is_some(), "missed {form}");
        }

        assert!(ca_provincial("Main Street", "nb", true).is_none());
    }

    #[test]
    fn provincial_expansion_uses_route_in_route_provinces() {
        let names = ca_provincial("101", "nb", true).unwrap();

        assert_eq!(
            displays(&names),
            vec![
                "Highway 101",
                "Route 101",
                "NB 101",
                "New Brunswick Route 101",
            ]
        );
    }

    #[test]
    fn provincial_expansion_uses_highway_elsewhere() {
        let names = ca_provincial("Kings Highway 7", "on", true).unwrap();
        assert_eq!(names[3].display, "Ontario Highway 7");
    }

    #[test]
    fn bare_one_is_the_trans_canada() {
        assert!(ca_provincial("1", "ab", true).is_none());
        // An explicit provincial styling of 1 is still recognized.
        assert!(ca_provincial("AB-1", "ab", true).is_some());
    }

    #[test]
    fn unknown_region_expands_nothing() {
        assert!(us_state("81", "zz", true).is_none());
        assert!(ca_provincial("101", "zz", true).is_none());
    }
}
