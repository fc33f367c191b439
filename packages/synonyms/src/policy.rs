//! Feature-level intake policy decided alongside naming.
//!
//! These checks reject whole features, not individual variants: the
//! caller drops the feature silently when any of them fires.

use std::sync::LazyLock;

use address_itp_feature::Context;
use regex::Regex;

/// Countries whose drive-through lanes leak into street-name data.
const DRIVE_THROUGH_COUNTRIES: &[&str] = &["us", "ca", "gb", "de", "ch", "at"];

/// Network geometries shorter than this are degenerate.
pub const MIN_NETWORK_LENGTH_KM: f64 = 0.001;

/// Road classes that may not go unnamed.
const NAMED_ONLY_CLASSES: &[&str] = &["track", "service", "construction", "proposed", "footway"];

static DRIVE_THROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)drive.?(in|through|thru)$").expect("valid regex"));

/// Einfahrt = drive through in German.
static EINFAHRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) einfahrt$").expect("valid regex"));

/// `true` if the display name is a drive-through lane in this context.
///
/// "Burger King Drive Through" is a navigable way in source data but
/// never a street name anyone addresses mail to.
#[must_use]
pub fn is_drive_through(display: &str, context: &Context) -> bool {
    if context.country_is("de") && EINFAHRT.is_match(display) {
        return true;
    }

    context.country_in(DRIVE_THROUGH_COUNTRIES) && DRIVE_THROUGH.is_match(display)
}

/// `true` if a network geometry of this length is too short to carry
/// addresses.
#[must_use]
pub fn is_degenerate(length_km: f64) -> bool {
    length_km < MIN_NETWORK_LENGTH_KM
}

/// `true` if the road class is only eligible for output when named.
#[must_use]
pub fn requires_name(road_class: &str) -> bool {
    NAMED_ONLY_CLASSES.contains(&road_class)
}
