//! Station points and the services calling at them.

use geo::Point;
use geojson::Feature;
use serde::{Deserialize, Deserializer};

use crate::identifiers::StationIdentifier;
use crate::models::Dataset;
use crate::models::feature::{collect_features, coordinate, feature_label, properties_of};
use crate::models::types::{Result, TransitError, number_or_string};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StationLine {
    pub name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub opened: Option<u32>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub nightopened: Option<u32>,
}

/// Label offset hints used by schematic renderers. Either axis may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Cartography {
    #[serde(rename = "labelX", default)]
    pub label_x: Option<f64>,
    #[serde(rename = "labelY", default)]
    pub label_y: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct StationProperties {
    id: StationIdentifier,
    name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    nlc_id: Option<u32>,
    #[serde(default)]
    lines: Vec<StationLine>,
    #[serde(default)]
    cartography: Option<Cartography>,
    #[serde(default, deserialize_with = "number_or_string")]
    alt_id: Option<u32>,
    #[serde(default, deserialize_with = "zone_label")]
    zone: Option<String>,
}

/// Fare zones appear as `2`, `"2"` or `"2/3"`.
fn zone_label<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) if !text.is_empty() => Some(text),
        Some(Raw::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TubeStation {
    pub id: StationIdentifier,
    pub name: String,
    pub nlc_id: Option<u32>,
    pub lines: Vec<StationLine>,
    pub cartography: Option<Cartography>,
    pub alt_id: Option<u32>,
    pub zone: Option<String>,
    pub location: Point,
}

impl TubeStation {
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let location = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Point(position)) => Point::from(coordinate(position, feature)?),
            other => {
                return Err(TransitError::Geometry {
                    feature: feature_label(feature),
                    reason: format!(
                        "expected Point, found {}",
                        other.map(geojson::Value::type_name).unwrap_or("no geometry")
                    ),
                });
            }
        };

        let properties: StationProperties = properties_of(feature)?;
        Ok(Self {
            id: properties.id,
            name: properties.name,
            nlc_id: properties.nlc_id,
            lines: properties.lines,
            cartography: properties.cartography,
            alt_id: properties.alt_id,
            zone: properties.zone,
            location,
        })
    }

    pub fn serves(&self, line_name: &str) -> bool {
        self.lines.iter().any(|line| line.name == line_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TubeStationCollection {
    pub features: Vec<TubeStation>,
}

impl Dataset for TubeStationCollection {
    const KIND: &'static str = "tube stations";

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            features: collect_features(bytes, TubeStation::from_feature)?,
        })
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "id": "940GZZLUOXC",
                    "name": "Oxford Circus",
                    "nlc_id": "670",
                    "lines": [
                        {"name": "Bakerloo", "opened": 1906},
                        {"name": "Central", "opened": "1900", "nightopened": 2016},
                        {"name": "Victoria"}
                    ],
                    "cartography": {"labelX": 1, "labelY": -1},
                    "alt_id": 1000173,
                    "zone": 1
                },
                "geometry": {"type": "Point", "coordinates": [-0.1418, 51.5152]}
            },
            {
                "type": "Feature",
                "properties": {"id": "940GZZLUWHP", "name": "West Hampstead", "lines": [{"name": "Jubilee"}], "zone": "2"},
                "geometry": {"type": "Point", "coordinates": [-0.1906, 51.5469]}
            }
        ]
    }"#;

    #[test]
    fn test_decode_station_collection() {
        let collection = TubeStationCollection::decode(STATIONS.as_bytes()).unwrap();
        assert_eq!(collection.feature_count(), 2);

        let oxford = &collection.features[0];
        assert_eq!(oxford.name, "Oxford Circus");
        assert_eq!(oxford.nlc_id, Some(670));
        assert_eq!(oxford.alt_id, Some(1000173));
        assert_eq!(oxford.zone.as_deref(), Some("1"));
        assert_eq!(oxford.lines.len(), 3);
        assert_eq!(oxford.lines[1].opened, Some(1900));
        assert_eq!(oxford.lines[1].nightopened, Some(2016));
        assert_eq!(
            oxford.cartography,
            Some(Cartography {
                label_x: Some(1.0),
                label_y: Some(-1.0)
            })
        );
        assert!(oxford.serves("Victoria"));
        assert!(!oxford.serves("Jubilee"));

        let west_hampstead = &collection.features[1];
        assert_eq!(west_hampstead.zone.as_deref(), Some("2"));
        assert_eq!(west_hampstead.cartography, None);
        assert_eq!(west_hampstead.location, Point::new(-0.1906, 51.5469));
    }

    #[test]
    fn test_partial_label_hints_still_load() {
        let partial = STATIONS.replace(
            r#""cartography": {"labelX": 1, "labelY": -1}"#,
            r#""cartography": {"labelX": 30}"#,
        );
        let collection = TubeStationCollection::decode(partial.as_bytes()).unwrap();
        assert_eq!(collection.feature_count(), 2);
        assert_eq!(
            collection.features[0].cartography,
            Some(Cartography {
                label_x: Some(30.0),
                label_y: None
            })
        );
    }

    #[test]
    fn test_rejects_line_geometry() {
        let bad = STATIONS.replace(
            r#"{"type": "Point", "coordinates": [-0.1906, 51.5469]}"#,
            r#"{"type": "LineString", "coordinates": [[-0.1906, 51.5469], [-0.19, 51.54]]}"#,
        );
        let error = TubeStationCollection::decode(bad.as_bytes()).unwrap_err();
        assert!(matches!(error, TransitError::Geometry { .. }));
    }
}
