//! Address record intake from line-delimited GeoJSON.

use serde_json::{Map, Value, json};

use crate::name::{Name, Names};

/// Why an input feature could not become an [`AddressRecord`].
///
/// These are per-record conditions: the caller warns and skips the line,
/// it never aborts the batch.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The line was not a GeoJSON Feature object.
    #[error("feature must be a JSON object with geometry and properties")]
    NotAFeature,

    /// Geometry was missing or not a point.
    #[error("feature geometry must be a Point with numeric coordinates")]
    NotAPoint,

    /// The required house number was missing or null.
    #[error("feature is missing the required house number")]
    MissingNumber,

    /// The street name was missing or of an unrecognized shape.
    #[error("feature street name is missing or malformed")]
    MissingStreet,
}

/// One address point: geometry plus the properties the engine operates on.
///
/// Built from a single input line, mutated in place through synonym
/// expansion and tokenization, then either merged into the persistent
/// corpus or emitted as a creation directive.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    /// House number, verbatim from the source ("12", "12a", "12 1/2").
    pub number: String,

    /// Label of the dataset this record came from.
    pub source: String,

    /// Display name variants for the street this address is on.
    pub names: Names,

    /// Point coordinates, `[lon, lat]`.
    pub point: [f64; 2],

    /// Remaining input properties, carried through to output untouched.
    pub props: Map<String, Value>,
}

impl AddressRecord {
    /// Parses a GeoJSON Feature value into a record.
    ///
    /// The `number` property may be a JSON string or number; `street` may
    /// be a bare string, a single name object, or an array of name
    /// objects.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] naming the violated requirement.
    pub fn from_feature(value: &Value) -> Result<Self, RecordError> {
        let object = value.as_object().ok_or(RecordError::NotAFeature)?;
        let properties = object
            .get("properties")
            .and_then(Value::as_object)
            .ok_or(RecordError::NotAFeature)?;

        let point = parse_point(object.get("geometry"))?;
        let number = parse_number(properties.get("number"))?;
        let names = parse_street(properties.get("street"))?;

        let source = properties
            .get("source")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut props = properties.clone();
        props.remove("number");
        props.remove("street");
        props.remove("source");

        Ok(Self {
            number,
            source,
            names,
            point,
            props,
        })
    }

    /// Serializes the record back to a GeoJSON Feature value.
    #[must_use]
    pub fn to_feature(&self) -> Value {
        let mut properties = self.props.clone();
        properties.insert("number".into(), Value::String(self.number.clone()));
        properties.insert("source".into(), Value::String(self.source.clone()));
        properties.insert(
            "street".into(),
            serde_json::to_value(&self.names.names).unwrap_or_else(|_| json!([])),
        );

        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "Point",
                "coordinates": self.point,
            }
        })
    }
}

fn parse_point(geometry: Option<&Value>) -> Result<[f64; 2], RecordError> {
    let geometry = geometry.and_then(Value::as_object).ok_or(RecordError::NotAPoint)?;

    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return Err(RecordError::NotAPoint);
    }

    let coordinates = geometry
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or(RecordError::NotAPoint)?;

    match (
        coordinates.first().and_then(Value::as_f64),
        coordinates.get(1).and_then(Value::as_f64),
    ) {
        (Some(lon), Some(lat)) => Ok([lon, lat]),
        _ => Err(RecordError::NotAPoint),
    }
}

fn parse_number(number: Option<&Value>) -> Result<String, RecordError> {
    match number {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Some(Value::Number(num)) => Ok(num.to_string()),
        _ => Err(RecordError::MissingNumber),
    }
}

fn parse_street(street: Option<&Value>) -> Result<Names, RecordError> {
    let names = match street {
        Some(Value::String(display)) if !display.trim().is_empty() => {
            vec![Name::new(display.trim().to_string(), 0)]
        }
        Some(object @ Value::Object(_)) => {
            let name: Name =
                serde_json::from_value(object.clone()).map_err(|_| RecordError::MissingStreet)?;
            vec![name]
        }
        Some(Value::Array(entries)) if !entries.is_empty() => entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<Result<Vec<Name>, _>>()
            .map_err(|_| RecordError::MissingStreet)?,
        _ => return Err(RecordError::MissingStreet),
    };

    Ok(Names::new(names))
}
