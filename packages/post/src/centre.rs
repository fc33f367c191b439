//! Representative-point computation with tile-coverage validation.

use address_itp_geometry::{Tile, VALIDATION_ZOOM, point_on_surface, tile_cover};
use geojson::Feature;

use crate::PostOpts;

/// Computes `carmen:center` for the feature.
///
/// The surface point of the address-cluster member (the network member
/// when no cluster exists) is used when it falls inside one of the
/// zoom-14 tiles covering the feature's geometries; otherwise the
/// centre of the first covering tile stands in. Features without a
/// geometry collection pass through unchanged.
#[must_use]
pub fn post(mut feature: Feature, _opts: &PostOpts) -> Option<Feature> {
    let centre = {
        let Some(geojson::Value::GeometryCollection(members)) =
            feature.geometry.as_ref().map(|geometry| &geometry.value)
        else {
            return Some(feature);
        };

        let mut tiles: Vec<Tile> = Vec::new();
        for member in members {
            for tile in tile_cover(&member.value, VALIDATION_ZOOM) {
                if !tiles.contains(&tile) {
                    tiles.push(tile);
                }
            }
        }

        let Some(first_tile) = tiles.first() else {
            return Some(feature);
        };

        // Address cluster first, network fallback.
        let surface = members
            .get(1)
            .or_else(|| members.first())
            .and_then(|member| point_on_surface(&member.value));

        match surface {
            Some(point) if tiles.iter().any(|tile| tile.contains(point[0], point[1])) => point,
            _ => first_tile.centre(),
        }
    };

    feature
        .properties
        .get_or_insert_with(serde_json::Map::new)
        .insert("carmen:center".into(), serde_json::json!(centre));

    Some(feature)
}
