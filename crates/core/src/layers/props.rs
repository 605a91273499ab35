//! Per-layer visual properties.
//!
//! Accessors are plain data so two descriptors built from the same inputs
//! compare equal; each props type evaluates its own accessors per feature.

use geo::{LineString, Point};
use palette::{Srgb, Srgba};
use tube_transit::{Building, Position, Trip, TubeLineFeature, TubeStation};

use crate::color::{ColorScheme, LineCategory};
use crate::theme::Material;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineColor {
    Constant(Srgba<u8>),
    /// Looked up from the first sub-line's name.
    ByLineName(ColorScheme),
}

/// Stroked line geometry (`PathLayer`).
#[derive(Clone, Debug, PartialEq)]
pub struct PathProps {
    pub color: LineColor,
    pub width_pixels: f32,
    pub width_min_pixels: f32,
    pub rounded: bool,
}

impl PathProps {
    pub fn path_of<'a>(&self, feature: &'a TubeLineFeature) -> &'a LineString {
        feature.geometry()
    }

    pub fn color_of(&self, feature: &TubeLineFeature) -> Srgba<u8> {
        match self.color {
            LineColor::Constant(color) => color,
            LineColor::ByLineName(scheme) => {
                LineCategory::from_name(&feature.primary().name).color(scheme)
            }
        }
    }

    pub fn width_of(&self, _feature: &TubeLineFeature) -> f32 {
        self.width_pixels.max(self.width_min_pixels)
    }
}

/// Station markers (`ScatterplotLayer`).
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterplotProps {
    pub fill_color: Srgba<u8>,
    pub outline_color: Srgba<u8>,
    pub radius_pixels: f32,
    pub radius_min_pixels: f32,
    pub outline_width_pixels: f32,
    pub stroked: bool,
}

impl ScatterplotProps {
    pub fn position_of(&self, station: &TubeStation) -> Point {
        station.location
    }

    pub fn radius_of(&self, _station: &TubeStation) -> f32 {
        self.radius_pixels.max(self.radius_min_pixels)
    }
}

/// Trail colors keyed by vendor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VendorColors {
    pub zero: Srgb<u8>,
    pub one: Srgb<u8>,
}

/// Re-evaluate an accessor whenever `key` changes, even if the data did not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTrigger {
    pub accessor: &'static str,
    pub key: String,
}

/// Animated vehicle trails (`TripsLayer`).
#[derive(Clone, Debug, PartialEq)]
pub struct TripsProps {
    pub colors: VendorColors,
    pub width_min_pixels: f32,
    pub rounded: bool,
    pub trail_length: f64,
    pub current_time: f64,
    pub shadow_enabled: bool,
    pub update_triggers: Vec<UpdateTrigger>,
}

impl TripsProps {
    pub fn path_of<'a>(&self, trip: &'a Trip) -> &'a [Position] {
        &trip.path
    }

    pub fn timestamps_of<'a>(&self, trip: &'a Trip) -> &'a [f64] {
        &trip.timestamps
    }

    pub fn color_of(&self, trip: &Trip) -> Srgb<u8> {
        match trip.vendor {
            tube_transit::VendorCategory::Zero => self.colors.zero,
            tube_transit::VendorCategory::One => self.colors.one,
        }
    }
}

/// Extruded building footprints (`PolygonLayer`).
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonProps {
    pub extruded: bool,
    pub wireframe: bool,
    pub fill_color: Srgb<u8>,
    pub material: Material,
}

impl PolygonProps {
    pub fn polygon_of<'a>(&self, building: &'a Building) -> &'a [Position] {
        &building.polygon
    }

    pub fn elevation_of(&self, building: &Building) -> f64 {
        building.height
    }

    pub fn fill_color_of(&self, _building: &Building) -> Srgb<u8> {
        self.fill_color
    }
}
