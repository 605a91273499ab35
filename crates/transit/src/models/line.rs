//! Transit line geometry, one feature per drawn segment.

use geo::LineString;
use geojson::Feature;
use serde::Deserialize;

use crate::identifiers::{LineIdentifier, StationIdentifier};
use crate::models::Dataset;
use crate::models::feature::{collect_features, coordinate, feature_label, properties_of};
use crate::models::types::{Result, TransitError, number_or_string};

/// One service running over a drawn segment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubLine {
    pub name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub opened: Option<u32>,
    pub start_sid: StationIdentifier,
    pub end_sid: StationIdentifier,
    #[serde(default)]
    pub otend_sid: Option<StationIdentifier>,
}

#[derive(Deserialize)]
struct LineProperties {
    id: LineIdentifier,
    lines: Vec<SubLine>,
}

/// A drawn line segment.
///
/// Always carries at least one [`SubLine`] and at least two coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TubeLineFeature {
    id: LineIdentifier,
    lines: Vec<SubLine>,
    geometry: LineString,
}

impl TubeLineFeature {
    pub fn new(id: LineIdentifier, lines: Vec<SubLine>, geometry: LineString) -> Result<Self> {
        if lines.is_empty() {
            return Err(TransitError::InvalidData(format!(
                "line feature {id} has no sub-lines"
            )));
        }
        if geometry.0.len() < 2 {
            return Err(TransitError::Geometry {
                feature: id.to_string(),
                reason: format!("line string has {} coordinates", geometry.0.len()),
            });
        }

        Ok(Self {
            id,
            lines,
            geometry,
        })
    }

    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::LineString(positions)) => positions
                .iter()
                .map(|position| coordinate(position, feature))
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(TransitError::Geometry {
                    feature: feature_label(feature),
                    reason: format!(
                        "expected LineString, found {}",
                        other.map(geojson::Value::type_name).unwrap_or("no geometry")
                    ),
                });
            }
        };

        let properties: LineProperties = properties_of(feature)?;
        Self::new(properties.id, properties.lines, LineString::from(coordinates))
    }

    pub fn id(&self) -> &LineIdentifier {
        &self.id
    }

    pub fn lines(&self) -> &[SubLine] {
        &self.lines
    }

    /// The first listed service, which names and colors the segment.
    pub fn primary(&self) -> &SubLine {
        &self.lines[0]
    }

    pub fn geometry(&self) -> &LineString {
        &self.geometry
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TubeLineCollection {
    pub features: Vec<TubeLineFeature>,
}

impl Dataset for TubeLineCollection {
    const KIND: &'static str = "tube lines";

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            features: collect_features(bytes, TubeLineFeature::from_feature)?,
        })
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "id": "LeytonstoneLeytonstoneEast",
                    "lines": [
                        {"name": "Central", "opened": 1947, "start_sid": "940GZZLULYS", "end_sid": "940GZZLULYN"}
                    ]
                },
                "geometry": {"type": "LineString", "coordinates": [[0.0083, 51.5683], [0.0101, 51.5717], [0.0125, 51.5760]]}
            },
            {
                "type": "Feature",
                "id": "BankWaterloo",
                "properties": {
                    "lines": [
                        {"name": "Waterloo & City", "start_sid": "940GZZLUBNK", "end_sid": "940GZZLUWLO", "otend_sid": "940GZZLUWLO"}
                    ]
                },
                "geometry": {"type": "LineString", "coordinates": [[-0.0886, 51.5133], [-0.1131, 51.5036]]}
            }
        ]
    }"#;

    #[test]
    fn test_decode_line_collection() {
        let collection = TubeLineCollection::decode(LINES.as_bytes()).unwrap();
        assert_eq!(collection.feature_count(), 2);

        let central = &collection.features[0];
        assert_eq!(central.id().as_str(), "LeytonstoneLeytonstoneEast");
        assert_eq!(central.primary().name, "Central");
        assert_eq!(central.primary().opened, Some(1947));
        assert_eq!(central.geometry().0.len(), 3);

        let waterloo = &collection.features[1];
        assert_eq!(waterloo.id().as_str(), "BankWaterloo");
        assert_eq!(waterloo.primary().opened, None);
        assert_eq!(
            waterloo.primary().otend_sid,
            Some(StationIdentifier::new("940GZZLUWLO"))
        );
    }

    #[test]
    fn test_rejects_short_geometry() {
        let result = TubeLineFeature::new(
            LineIdentifier::new("stub"),
            vec![SubLine {
                name: "Central".into(),
                opened: None,
                start_sid: "a".into(),
                end_sid: "b".into(),
                otend_sid: None,
            }],
            LineString::from(vec![(0.0, 0.0)]),
        );
        assert!(matches!(result, Err(TransitError::Geometry { .. })));
    }

    #[test]
    fn test_rejects_empty_sub_lines() {
        let result = TubeLineFeature::new(
            LineIdentifier::new("stub"),
            vec![],
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
        );
        assert!(matches!(result, Err(TransitError::InvalidData(_))));
    }

    #[test]
    fn test_opening_year_is_unsigned() {
        let negative = LINES.replace(r#""opened": 1947"#, r#""opened": -1947"#);
        assert!(TubeLineCollection::decode(negative.as_bytes()).is_err());

        let quoted = LINES.replace(r#""opened": 1947"#, r#""opened": "1947""#);
        let collection = TubeLineCollection::decode(quoted.as_bytes()).unwrap();
        assert_eq!(collection.features[0].primary().opened, Some(1947u32));
    }

    #[test]
    fn test_rejects_point_geometry() {
        let bad = LINES.replace(
            r#"{"type": "LineString", "coordinates": [[-0.0886, 51.5133], [-0.1131, 51.5036]]}"#,
            r#"{"type": "Point", "coordinates": [-0.0886, 51.5133]}"#,
        );
        assert!(TubeLineCollection::decode(bad.as_bytes()).is_err());
    }
}
