//! The synonym expansion entry point.

use address_itp_feature::{Context, Name, Names};

use crate::{highway, numeric, policy};

/// Countries whose street names take English numeric forms.
const ENGLISH_COUNTRIES: &[&str] = &["us", "ca", "gb"];

/// Expands a feature's raw names into the full ranked variant list.
///
/// Octothorpe route canonicalization mutates the original displays
/// first; the jurisdiction's highway recognizers then derive display
/// variants per name, falling back to the numeric-form synonyms for
/// names no highway rule claimed. Derived variants are appended,
/// case-insensitively deduplicated, and sorted so a unique primary
/// variant exists.
///
/// Returns `None` when a name matches a disallowed pattern, which
/// rejects the whole feature rather than just the variant.
#[must_use]
pub fn expand(mut names: Names, context: &Context) -> Option<Names> {
    if context.country_in(&["us", "ca"]) {
        for name in &mut names.names {
            if let Some(canonical) = highway::strip_octothorpe(&name.display) {
                name.display = canonical;
            }
        }
    }

    for name in &names.names {
        if policy::is_drive_through(&name.display, context) {
            log::trace!("rejecting drive-through name '{}'", name.display);
            return None;
        }
    }

    let mut derived: Vec<Name> = Vec::new();

    for (index, name) in names.names.iter().enumerate() {
        let is_primary = index == 0;

        let highway_synonyms = match context.country.as_deref() {
            Some("us") => highway::us_federal(&name.display, is_primary).or_else(|| {
                context
                    .region()
                    .and_then(|region| highway::us_state(&name.display, region, is_primary))
            }),
            Some("ca") => context
                .region()
                .and_then(|region| highway::ca_provincial(&name.display, region, is_primary)),
            _ => None,
        };

        if let Some(synonyms) = highway_synonyms {
            derived.extend(synonyms);
        } else if context.country_in(ENGLISH_COUNTRIES) {
            if let Some(suffixed) = numeric::number_suffix(&name.display) {
                derived.push(Name::with_source(suffixed, -1, "generated"));
            }
            if let Some(written) = numeric::written_numeric(&name.display) {
                derived.push(Name::with_source(written, -1, "generated"));
            }
        }
    }

    names.concat(derived);
    names.finalize();

    Some(names)
}
