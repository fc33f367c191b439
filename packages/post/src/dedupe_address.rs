//! Address-number deduplication within each cluster sub-sequence.
//!
//! Must run before [`crate::sort`] and before [`crate::props`] consumes
//! the per-address property carrier: all three arrays (numbers,
//! coordinates, `address_props`) stay index-aligned only if entries are
//! removed from each at the same positions.

use geojson::Feature;
use serde_json::Value;

use crate::PostOpts;

/// Removes address numbers already seen earlier in the same
/// sub-sequence, dropping the coordinate and per-address properties at
/// the same index. Null and empty-string numbers are dropped outright.
#[must_use]
pub fn post(mut feature: Feature, _opts: &PostOpts) -> Option<Feature> {
    let keeps = match keep_indices(&feature) {
        Some(keeps) => keeps,
        None => return Some(feature),
    };

    let mut first_group = true;
    for (group_index, keep) in keeps.iter().enumerate() {
        let Some(keep) = keep else { continue };

        if let Some(properties) = feature.properties.as_mut() {
            if let Some(groups) = properties
                .get_mut("carmen:addressnumber")
                .and_then(Value::as_array_mut)
            {
                if let Some(numbers) = groups.get_mut(group_index).and_then(Value::as_array_mut) {
                    let kept = select(numbers, keep);
                    *numbers = kept;
                }
            }

            // The per-address property carrier parallels the first
            // address sub-sequence.
            if first_group {
                if let Some(props) = properties
                    .get_mut("address_props")
                    .and_then(Value::as_array_mut)
                {
                    let kept = select(props, keep);
                    *props = kept;
                }
                first_group = false;
            }
        }

        if let Some(geojson::Value::GeometryCollection(members)) =
            feature.geometry.as_mut().map(|geometry| &mut geometry.value)
        {
            if let Some(geojson::Value::MultiPoint(coordinates)) =
                members.get_mut(group_index).map(|member| &mut member.value)
            {
                let kept: Vec<Vec<f64>> = keep
                    .iter()
                    .filter_map(|&index| coordinates.get(index).cloned())
                    .collect();
                *coordinates = kept;
            }
        }
    }

    Some(feature)
}

/// For each array-valued sub-sequence, the indices that survive dedupe.
/// `None` means the feature lacks the expected shape entirely.
fn keep_indices(feature: &Feature) -> Option<Vec<Option<Vec<usize>>>> {
    let groups = feature
        .properties
        .as_ref()?
        .get("carmen:addressnumber")?
        .as_array()?;

    let keeps = groups
        .iter()
        .map(|group| {
            group.as_array().map(|numbers| {
                let mut seen: Vec<String> = Vec::new();
                let mut keep: Vec<usize> = Vec::new();

                for (index, number) in numbers.iter().enumerate() {
                    if number.is_null() {
                        continue;
                    }
                    if number.as_str().is_some_and(str::is_empty) {
                        continue;
                    }

                    let key = number.to_string();
                    if !seen.contains(&key) {
                        seen.push(key);
                        keep.push(index);
                    }
                }

                keep
            })
        })
        .collect();

    Some(keeps)
}

fn select(values: &[Value], keep: &[usize]) -> Vec<Value> {
    keep.iter()
        .filter_map(|&index| values.get(index).cloned())
        .collect()
}
