//! Feature id assignment.

use geojson::Feature;
use geojson::feature::Id;

use crate::PostOpts;

/// Assigns a numeric feature id from the worker's sequence.
///
/// An existing numeric id is kept; anything else is replaced. Ids drawn
/// from the sequence are unique across concurrent partitions.
#[must_use]
pub fn post(mut feature: Feature, opts: &PostOpts) -> Option<Feature> {
    if let Some(Id::Number(_)) = feature.id {
        return Some(feature);
    }

    feature.id = Some(Id::Number(opts.next_id().into()));
    Some(feature)
}
