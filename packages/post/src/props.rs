//! Per-address property promotion and the removal of their carrier.
//!
//! Runs after [`crate::text`], [`crate::dedupe_address`] and
//! [`crate::sort`], all of which need `address_props` intact and
//! aligned with the address numbers.

use geojson::Feature;
use serde_json::{Map, Value};

use crate::PostOpts;

/// Promotes each allow-listed property to the feature level and strips
/// the `address_props` carrier.
///
/// The modal value across all addresses becomes the feature property;
/// addresses differing from it are recorded by index under
/// `carmen:addressprops` so no per-address information is lost.
#[must_use]
pub fn post(mut feature: Feature, opts: &PostOpts) -> Option<Feature> {
    let Some(properties) = feature.properties.as_mut() else {
        return Some(feature);
    };

    let Some(carrier) = properties.remove("address_props") else {
        return Some(feature);
    };

    let Some(entries) = carrier.as_array() else {
        return Some(feature);
    };

    for desired in &opts.props {
        let values: Vec<Value> = entries
            .iter()
            .map(|entry| entry.get(desired).cloned().unwrap_or(Value::Null))
            .collect();

        let Some(modal) = modal_value(&values) else {
            continue;
        };

        if !modal.is_null() {
            properties.insert(desired.clone(), modal.clone());
        }

        for (index, value) in values.iter().enumerate() {
            if *value == modal || (modal.is_null() && value.is_null()) {
                continue;
            }

            let exceptions = properties
                .entry("carmen:addressprops")
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(exceptions) = exceptions.as_object_mut() {
                let per_prop = exceptions
                    .entry(desired.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Some(per_prop) = per_prop.as_object_mut() {
                    per_prop.insert(index.to_string(), value.clone());
                }
            }
        }
    }

    Some(feature)
}

/// The most frequent value, ties broken by first occurrence.
fn modal_value(values: &[Value]) -> Option<Value> {
    let mut distinct: Vec<(&Value, usize)> = Vec::new();

    for value in values {
        match distinct.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => distinct.push((value, 1)),
        }
    }

    let mut best: Option<(&Value, usize)> = None;
    for (value, count) in distinct {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.clone())
}
