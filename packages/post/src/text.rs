//! Synonym labeling, deduplication and truncation for `carmen:text*`.

use geojson::Feature;

use crate::{PostOpts, label};

/// Most synonyms a single text property may carry.
const MAX_SYNONYMS: usize = 10;

/// Labels every `carmen:text*` property into its comma-joined output
/// form, truncating past ten synonyms with a warning.
///
/// A feature whose text labels to nothing is dropped: a record with no
/// usable display name can never be geocoded.
#[must_use]
pub fn post(mut feature: Feature, _opts: &PostOpts) -> Option<Feature> {
    let Some(properties) = feature.properties.as_mut() else {
        return Some(feature);
    };
    if !properties.contains_key("carmen:text") {
        return Some(feature);
    }

    let keys: Vec<String> = properties
        .keys()
        .filter(|key| key.starts_with("carmen:text"))
        .cloned()
        .collect();

    for key in keys {
        let mut labeled = label::label(&properties[&key]);

        if key == "carmen:text" && labeled.is_empty() {
            return None;
        }

        if labeled.len() > MAX_SYNONYMS {
            log::warn!(
                "too many synonyms - truncating!: {}",
                labeled.join(",")
            );
            labeled.truncate(MAX_SYNONYMS);
        }

        properties.insert(key, labeled.join(",").into());
    }

    Some(feature)
}
