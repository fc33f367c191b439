//! Internal-property stripping. Must remain the last pipeline step so
//! every other step may still consult `internal:*` values.

use geojson::Feature;

use crate::PostOpts;

/// Removes every property whose key begins with `internal:`.
#[must_use]
pub fn post(mut feature: Feature, _opts: &PostOpts) -> Option<Feature> {
    if let Some(properties) = feature.properties.as_mut() {
        properties.retain(|key, _| !key.starts_with("internal:"));
    }

    Some(feature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_internal_properties_only() {
        let mut properties = serde_json::Map::new();
        properties.insert("carmen:text".into(), json!("Main Street"));
        properties.insert("internal:nid".into(), json!(4));
        properties.insert("internal:source".into(), json!("osm"));

        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };

        let out = post(feature, &PostOpts::default()).unwrap();
        let props = out.properties.unwrap();

        assert_eq!(props.len(), 1);
        assert!(props.contains_key("carmen:text"));
    }

    #[test]
    fn passes_propertyless_features_through() {
        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };

        assert!(post(feature, &PostOpts::default()).is_some());
    }
}
