#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry primitives consumed by the interpolation pipeline.
//!
//! Pure functions over [`geojson::Value`] geometries: haversine line
//! length, representative surface points, and the slippy-tile cover
//! used to validate computed centroids. No state, no side effects.

use geo::{Haversine, InteriorPoint, Length};
use geojson::Value;

/// Zoom level at which centroid validation tiles are computed.
pub const VALIDATION_ZOOM: u8 = 14;

/// A slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl Tile {
    /// The tile containing a WGS84 coordinate at the given zoom.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn containing(lon: f64, lat: f64, zoom: u8) -> Self {
        let scale = f64::from(1_u32 << zoom);
        let max = (1_u32 << zoom) - 1;

        let x = ((lon + 180.0) / 360.0 * scale).floor();
        let lat_rad = lat.to_radians();
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
            * scale)
            .floor();

        Self {
            x: (x.max(0.0) as u32).min(max),
            y: (y.max(0.0) as u32).min(max),
            z: zoom,
        }
    }

    /// The tile's bounds as `[west, south, east, north]`.
    #[must_use]
    pub fn bbox(&self) -> [f64; 4] {
        let scale = f64::from(1_u32 << self.z);

        let west = f64::from(self.x) / scale * 360.0 - 180.0;
        let east = f64::from(self.x + 1) / scale * 360.0 - 180.0;
        let north = tile_edge_lat(f64::from(self.y), scale);
        let south = tile_edge_lat(f64::from(self.y + 1), scale);

        [west, south, east, north]
    }

    /// The centre point of the tile's bounds.
    #[must_use]
    pub fn centre(&self) -> [f64; 2] {
        let [west, south, east, north] = self.bbox();
        [(west + east) / 2.0, (south + north) / 2.0]
    }

    /// `true` if the coordinate falls within the tile's bounds.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let [west, south, east, north] = self.bbox();
        lon >= west && lon <= east && lat >= south && lat <= north
    }
}

/// Latitude of a horizontal tile edge at row `y` of `scale` rows.
fn tile_edge_lat(y: f64, scale: f64) -> f64 {
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / scale);
    n.sinh().atan().to_degrees()
}

/// Haversine length of a line geometry in kilometres.
///
/// Non-line geometries have zero length.
#[must_use]
pub fn line_length_km(geometry: &Value) -> f64 {
    let metres = match geo::Geometry::<f64>::try_from(geometry) {
        Ok(geo::Geometry::Line(line)) => Haversine.length(&line),
        Ok(geo::Geometry::LineString(line)) => Haversine.length(&line),
        Ok(geo::Geometry::MultiLineString(lines)) => Haversine.length(&lines),
        _ => 0.0,
    };

    metres / 1000.0
}

/// A representative point guaranteed to lie on (or within) the
/// geometry: the interior point for areas, the vertex nearest the
/// centroid for point and line sets.
#[must_use]
pub fn point_on_surface(geometry: &Value) -> Option<[f64; 2]> {
    let geometry = geo::Geometry::<f64>::try_from(geometry).ok()?;
    let point = geometry.interior_point()?;
    Some([point.x(), point.y()])
}

/// The set of tiles covering a geometry at the given zoom.
///
/// Covers every vertex plus intermediate samples along segments longer
/// than a fraction of a tile width, so line geometries produce a
/// gap-free cover. Order is first-visit; no tile repeats.
#[must_use]
pub fn tile_cover(geometry: &Value, zoom: u8) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = Vec::new();
    cover_value(geometry, zoom, &mut tiles);
    tiles
}

fn cover_value(geometry: &Value, zoom: u8, tiles: &mut Vec<Tile>) {
    match geometry {
        Value::Point(position) => push_position(position, zoom, tiles),
        Value::MultiPoint(positions) => {
            for position in positions {
                push_position(position, zoom, tiles);
            }
        }
        Value::LineString(line) => cover_line(line, zoom, tiles),
        Value::MultiLineString(lines) => {
            for line in lines {
                cover_line(line, zoom, tiles);
            }
        }
        Value::Polygon(rings) => {
            for ring in rings {
                cover_line(ring, zoom, tiles);
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                for ring in rings {
                    cover_line(ring, zoom, tiles);
                }
            }
        }
        Value::GeometryCollection(members) => {
            for member in members {
                cover_value(&member.value, zoom, tiles);
            }
        }
    }
}

fn cover_line(line: &[Vec<f64>], zoom: u8, tiles: &mut Vec<Tile>) {
    // Sample finer than half a tile width so no tile between two
    // consecutive samples can be skipped.
    let step = 180.0 / f64::from(1_u32 << zoom);

    for pair in line.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.len() < 2 || b.len() < 2 {
            continue;
        }

        let span = (b[0] - a[0]).abs().max((b[1] - a[1]).abs());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let samples = ((span / step).ceil() as usize).max(1);

        for i in 0..=samples {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / samples as f64;
            let lon = a[0] + (b[0] - a[0]) * t;
            let lat = a[1] + (b[1] - a[1]) * t;
            push_tile(Tile::containing(lon, lat, zoom), tiles);
        }
    }

    if line.len() == 1 && line[0].len() >= 2 {
        push_position(&line[0], zoom, tiles);
    }
}

fn push_position(position: &[f64], zoom: u8, tiles: &mut Vec<Tile>) {
    if position.len() >= 2 {
        push_tile(Tile::containing(position[0], position[1], zoom), tiles);
    }
}

fn push_tile(tile: Tile, tiles: &mut Vec<Tile>) {
    if !tiles.contains(&tile) {
        tiles.push(tile);
    }
}
