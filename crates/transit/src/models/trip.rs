//! Vehicle trips and building footprints.
//!
//! Both are consumed exactly as published: the renderer interpolates trip
//! paths itself, so nothing here checks that `timestamps` lines up with
//! `path`.

use serde::Deserialize;

use crate::models::Dataset;
use crate::models::types::{Position, Result, VendorCategory};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Trip {
    pub vendor: VendorCategory,
    pub path: Vec<Position>,
    pub timestamps: Vec<f64>,
}

impl Trip {
    /// First and last timestamp, if the trip has any samples.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.timestamps.first()?, *self.timestamps.last()?))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Building {
    pub polygon: Vec<Position>,
    pub height: f64,
}

impl Building {
    /// Footprint as a closed polygon.
    pub fn footprint(&self) -> geo::Polygon {
        let ring: Vec<geo::Coord> = self.polygon.iter().copied().map(geo::Coord::from).collect();
        // LineString::new does not close rings; Polygon::new does
        geo::Polygon::new(geo::LineString::new(ring), vec![])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TripCollection {
    pub trips: Vec<Trip>,
}

impl Dataset for TripCollection {
    const KIND: &'static str = "trips";

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn feature_count(&self) -> usize {
        self.trips.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BuildingCollection {
    pub buildings: Vec<Building>,
}

impl Dataset for BuildingCollection {
    const KIND: &'static str = "buildings";

    fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn feature_count(&self) -> usize {
        self.buildings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_trips() {
        let json = r#"[
            {"vendor": 0, "path": [[-74.20986, 40.81773], [-74.20987, 40.81765]], "timestamps": [1191.0, 1192.2]},
            {"vendor": 1, "path": [[-74.0, 40.7, 3.0]], "timestamps": [0]}
        ]"#;
        let collection = TripCollection::decode(json.as_bytes()).unwrap();
        assert_eq!(collection.feature_count(), 2);
        assert_eq!(collection.trips[0].vendor, VendorCategory::Zero);
        assert_eq!(collection.trips[1].vendor, VendorCategory::One);
        assert_eq!(collection.trips[1].path[0].altitude(), Some(3.0));

        let (start, end) = collection.trips[0].time_span().unwrap();
        assert_relative_eq!(start, 1191.0);
        assert_relative_eq!(end, 1192.2);
    }

    #[test]
    fn test_rejects_unknown_vendor() {
        let json = r#"[{"vendor": 7, "path": [], "timestamps": []}]"#;
        assert!(TripCollection::decode(json.as_bytes()).is_err());
    }

    #[test]
    fn test_building_footprint_is_closed() {
        let json = r#"[{"polygon": [[-74.0, 40.7], [-74.0, 40.71], [-73.99, 40.71]], "height": 35.5}]"#;
        let collection = BuildingCollection::decode(json.as_bytes()).unwrap();
        let building = &collection.buildings[0];
        assert_relative_eq!(building.height, 35.5);

        let footprint = building.footprint();
        let ring = &footprint.exterior().0;
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring.len(), 4);
    }
}
