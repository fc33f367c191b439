//! Deterministic ordering of address-number sub-sequences.
//!
//! Runs after [`crate::dedupe_address`] and before [`crate::props`]:
//! the coordinate and per-address property arrays are permuted with the
//! numbers, which requires the carrier to still be present and aligned.

use geojson::Feature;
use serde_json::Value;

use crate::PostOpts;

/// Sorts each address-number sub-sequence ascending by numeric value,
/// applying the identical permutation to the parallel coordinate and
/// `address_props` arrays. The sort is stable, so non-numeric entries
/// keep their relative order at the end of the sequence.
#[must_use]
pub fn post(mut feature: Feature, _opts: &PostOpts) -> Option<Feature> {
    let orders = match sort_orders(&feature) {
        Some(orders) => orders,
        None => return Some(feature),
    };

    let mut first_group = true;
    for (group_index, order) in orders.iter().enumerate() {
        let Some(order) = order else { continue };

        if let Some(properties) = feature.properties.as_mut() {
            if let Some(groups) = properties
                .get_mut("carmen:addressnumber")
                .and_then(Value::as_array_mut)
            {
                if let Some(numbers) = groups.get_mut(group_index).and_then(Value::as_array_mut) {
                    let permuted = permute(numbers, order);
                    *numbers = permuted;
                }
            }

            if first_group {
                if let Some(props) = properties
                    .get_mut("address_props")
                    .and_then(Value::as_array_mut)
                {
                    let permuted = permute(props, order);
                    *props = permuted;
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
                if coordinates.len() == order.len() {
                    *coordinates = order
                        .iter()
                        .map(|&index| coordinates[index].clone())
                        .collect();
                }
            }
        }
    }

    Some(feature)
}

/// For each array-valued sub-sequence, the index order that sorts it.
fn sort_orders(feature: &Feature) -> Option<Vec<Option<Vec<usize>>>> {
    let groups = feature
        .properties
        .as_ref()?
        .get("carmen:addressnumber")?
        .as_array()?;

    let orders = groups
        .iter()
        .map(|group| {
            group.as_array().map(|numbers| {
                let mut order: Vec<usize> = (0..numbers.len()).collect();
                order.sort_by(|&a, &b| {
                    numeric_value(&numbers[a]).total_cmp(&numeric_value(&numbers[b]))
                });
                order
            })
        })
        .collect();

    Some(orders)
}

/// Numeric sort key of an address number. String numbers sort by their
/// leading digits ("12a" sorts as 12); entries with no digits sort
/// last.
fn numeric_value(number: &Value) -> f64 {
    if let Some(value) = number.as_f64() {
        return value;
    }

    number
        .as_str()
        .and_then(|text| {
            let digits: String = text
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse::<f64>().ok()
        })
        .unwrap_or(f64::INFINITY)
}

fn permute(values: &[Value], order: &[usize]) -> Vec<Value> {
    if values.len() == order.len() {
        order.iter().map(|&index| values[index].clone()).collect()
    } else {
        values.to_vec()
    }
}
