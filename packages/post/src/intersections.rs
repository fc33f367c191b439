//! Cross-street resolution for `carmen:intersections`.

use geojson::{Feature, Geometry};
use serde_json::{Value, json};

use crate::{PostOpts, label};

/// Resolves raw intersection records into labeled cross streets, or
/// strips them when intersections are not requested.
///
/// Each raw record names both sides of a crossing; the feature's own
/// side is identified by `internal:nid` and the opposite street is
/// kept. Resolved labels are deduplicated and appended as a new
/// MultiPoint member of the geometry collection, with the parallel
/// carmen arrays padded by a null entry to stay index-aligned.
#[must_use]
pub fn post(mut feature: Feature, opts: &PostOpts) -> Option<Feature> {
    let Some(properties) = feature.properties.as_mut() else {
        return Some(feature);
    };

    if !opts.intersections {
        properties.remove("carmen:intersections");
        return Some(feature);
    }

    let Some(raw) = properties.get("carmen:intersections").cloned() else {
        return Some(feature);
    };
    let Some(entries) = raw.as_array() else {
        properties.remove("carmen:intersections");
        return Some(feature);
    };

    let nid = properties.get("internal:nid").cloned().unwrap_or(Value::Null);

    let mut labels: Vec<String> = Vec::new();
    let mut coordinates: Vec<Vec<f64>> = Vec::new();

    for entry in entries {
        let street = if entry.get("a_id") == Some(&nid) {
            entry.get("b_street")
        } else if entry.get("b_id") == Some(&nid) {
            entry.get("a_street")
        } else {
            continue;
        };

        let Some(street) = street else { continue };
        let Some(point) = entry
            .get("geom")
            .and_then(|geom| geom.get("coordinates"))
            .and_then(Value::as_array)
        else {
            continue;
        };

        let point: Vec<f64> = point.iter().filter_map(Value::as_f64).collect();
        if point.len() < 2 {
            continue;
        }

        for street_label in label::label(street) {
            if !labels.contains(&street_label) {
                labels.push(street_label);
                coordinates.push(point.clone());
            }
        }
    }

    let collection = feature
        .geometry
        .as_mut()
        .map(|geometry| &mut geometry.value);
    let Some(geojson::Value::GeometryCollection(members)) = collection else {
        properties.remove("carmen:intersections");
        return Some(feature);
    };

    if labels.is_empty() {
        properties.remove("carmen:intersections");
        return Some(feature);
    }

    members.push(Geometry::new(geojson::Value::MultiPoint(coordinates)));

    let mut padded: Vec<Value> = vec![Value::Null; members.len() - 1];
    padded.push(json!(labels));
    properties.insert("carmen:intersections".into(), json!(padded));

    if let Some(numbers) = properties
        .get_mut("carmen:addressnumber")
        .and_then(Value::as_array_mut)
    {
        numbers.push(Value::Null);
    }

    Some(feature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(intersections: Value) -> Feature {
        let mut properties = serde_json::Map::new();
        properties.insert("carmen:intersections".into(), intersections);
        properties.insert("internal:nid".into(), json!(1));
        properties.insert("carmen:addressnumber".into(), json!([[5, 6]]));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::GeometryCollection(vec![
                Geometry::new(geojson::Value::MultiPoint(vec![
                    vec![0.0, 0.0],
                    vec![1.0, 1.0],
                ])),
            ]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn crossing(a_id: i64, b_id: i64) -> Value {
        json!({
            "a_id": a_id,
            "b_id": b_id,
            "a_street": [{ "display": "Main Street", "priority": 0, "tokenized": "main st" }],
            "b_street": [{ "display": "Oak Avenue", "priority": 0, "tokenized": "oak ave" }],
            "geom": { "type": "Point", "coordinates": [4.0, 4.0] }
        })
    }

    fn enabled() -> PostOpts {
        let mut opts = PostOpts::default();
        opts.intersections = true;
        opts
    }

    #[test]
    fn stripped_unless_requested() {
        let out = post(feature(json!([crossing(1, 2)])), &PostOpts::default()).unwrap();
        assert!(!out
            .properties
            .unwrap()
            .contains_key("carmen:intersections"));
    }

    #[test]
    fn resolves_the_opposite_street() {
        let out = post(feature(json!([crossing(1, 2)])), &enabled()).unwrap();
        let properties = out.properties.as_ref().unwrap();

        // This feature is side `a` of the crossing, so the cross street
        // is side `b`.
        assert_eq!(
            properties["carmen:intersections"],
            json!([null, ["Oak Avenue"]])
        );
    }

    #[test]
    fn resolves_from_either_side() {
        let out = post(feature(json!([crossing(9, 1)])), &enabled()).unwrap();
        let properties = out.properties.as_ref().unwrap();

        assert_eq!(
            properties["carmen:intersections"],
            json!([null, ["Main Street"]])
        );
    }

    #[test]
    fn appends_a_geometry_member_and_pads_the_arrays() {
        let out = post(feature(json!([crossing(1, 2)])), &enabled()).unwrap();

        let geojson::Value::GeometryCollection(members) = &out.geometry.as_ref().unwrap().value
        else {
            panic!("expected collection");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[1].value,
            geojson::Value::MultiPoint(vec![vec![4.0, 4.0]])
        );

        assert_eq!(
            out.properties.as_ref().unwrap()["carmen:addressnumber"],
            json!([[5, 6], null])
        );
    }

    #[test]
    fn duplicate_cross_streets_collapse() {
        let out = post(
            feature(json!([crossing(1, 2), crossing(1, 3)])),
            &enabled(),
        )
        .unwrap();

        assert_eq!(
            out.properties.as_ref().unwrap()["carmen:intersections"],
            json!([null, ["Oak Avenue"]])
        );
    }

    #[test]
    fn unrelated_crossings_strip_the_property() {
        let out = post(feature(json!([crossing(7, 8)])), &enabled()).unwrap();
        assert!(!out
            .properties
            .unwrap()
            .contains_key("carmen:intersections"));
    }

    #[test]
    fn features_without_intersections_pass_through() {
        let mut plain = feature(json!([]));
        plain
            .properties
            .as_mut()
            .unwrap()
            .remove("carmen:intersections");

        let out = post(plain, &enabled()).unwrap();
        assert!(out.properties.is_some());
    }
}
