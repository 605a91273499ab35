//! Builds the ordered overlay list handed to the map renderer each frame.
//!
//! Layers stack back to front: line borders, line fills, station markers,
//! vehicle trails, then buildings when enabled.

mod props;

use std::sync::Arc;

use palette::Srgba;
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;
use tube_transit::{
    BuildingCollection, TripCollection, TubeLineCollection, TubeStationCollection, VendorCategory,
};

use crate::color::ColorScheme;
use crate::theme::MapTheme;

pub use props::{
    LineColor, PathProps, PolygonProps, ScatterplotProps, TripsProps, UpdateTrigger, VendorColors,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum LayerId {
    #[strum(serialize = "tube-lines-border")]
    LineBorder,
    #[strum(serialize = "tube-lines-main")]
    LineFill,
    #[strum(serialize = "tube-stations")]
    Stations,
    #[strum(serialize = "trips")]
    Trips,
    #[strum(serialize = "buildings")]
    Buildings,
}

impl LayerId {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Data either already in memory or left for the renderer to fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSource<T> {
    Inline(Arc<T>),
    Url(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayerData {
    Lines(Arc<TubeLineCollection>),
    Stations(Arc<TubeStationCollection>),
    Trips(DataSource<TripCollection>),
    Buildings(DataSource<BuildingCollection>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    Path(PathProps),
    Scatterplot(ScatterplotProps),
    Trips(TripsProps),
    Polygon(PolygonProps),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerDescriptor {
    pub id: LayerId,
    pub data: LayerData,
    pub kind: LayerKind,
    pub opacity: f32,
    pub pickable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub show_tube_lines: bool,
    pub show_stations: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_tube_lines: true,
            show_stations: true,
        }
    }
}

/// Everything one render pass depends on.
#[derive(Clone, Copy, Debug)]
pub struct LayerInputs<'a> {
    pub trips: Option<&'a DataSource<TripCollection>>,
    pub current_time: f64,
    pub trail_length: f64,
    pub lines: Option<&'a Arc<TubeLineCollection>>,
    pub stations: Option<&'a Arc<TubeStationCollection>>,
    pub buildings: Option<&'a DataSource<BuildingCollection>>,
    pub visibility: Visibility,
    pub theme: &'a MapTheme,
}

const LINE_BORDER_COLOR: Srgba<u8> = Srgba::new(0, 0, 0, 180);
const STATION_FILL_COLOR: Srgba<u8> = Srgba::new(255, 255, 255, 200);
const STATION_OUTLINE_COLOR: Srgba<u8> = Srgba::new(0, 0, 0, 255);

/// Layers whose data is missing or whose visibility flag is off are left
/// out of the list entirely.
pub fn compose_layers(inputs: &LayerInputs<'_>) -> Vec<LayerDescriptor> {
    let mut layers = Vec::with_capacity(5);

    if let Some(lines) = inputs.lines.filter(|_| inputs.visibility.show_tube_lines) {
        layers.push(line_border_layer(lines));
        layers.push(line_fill_layer(lines));
    }

    if let Some(stations) = inputs.stations.filter(|_| inputs.visibility.show_stations) {
        layers.push(station_layer(stations));
    }

    if let Some(trips) = inputs.trips {
        layers.push(trips_layer(trips, inputs));
    }

    if let Some(buildings) = inputs.buildings {
        layers.push(building_layer(buildings, inputs.theme));
    }

    debug!(
        layers = layers.len(),
        current_time = inputs.current_time,
        "composed layers"
    );
    layers
}

fn line_border_layer(lines: &Arc<TubeLineCollection>) -> LayerDescriptor {
    LayerDescriptor {
        id: LayerId::LineBorder,
        data: LayerData::Lines(Arc::clone(lines)),
        kind: LayerKind::Path(PathProps {
            color: LineColor::Constant(LINE_BORDER_COLOR),
            width_pixels: 7.0,
            width_min_pixels: 3.0,
            rounded: true,
        }),
        opacity: 1.0,
        pickable: false,
    }
}

fn line_fill_layer(lines: &Arc<TubeLineCollection>) -> LayerDescriptor {
    LayerDescriptor {
        id: LayerId::LineFill,
        data: LayerData::Lines(Arc::clone(lines)),
        kind: LayerKind::Path(PathProps {
            color: LineColor::ByLineName(ColorScheme::Current),
            width_pixels: 4.0,
            width_min_pixels: 2.0,
            rounded: true,
        }),
        opacity: 1.0,
        pickable: true,
    }
}

fn station_layer(stations: &Arc<TubeStationCollection>) -> LayerDescriptor {
    LayerDescriptor {
        id: LayerId::Stations,
        data: LayerData::Stations(Arc::clone(stations)),
        kind: LayerKind::Scatterplot(ScatterplotProps {
            fill_color: STATION_FILL_COLOR,
            outline_color: STATION_OUTLINE_COLOR,
            radius_pixels: 4.0,
            radius_min_pixels: 2.0,
            outline_width_pixels: 1.0,
            stroked: true,
        }),
        opacity: 1.0,
        pickable: true,
    }
}

fn trips_layer(trips: &DataSource<TripCollection>, inputs: &LayerInputs<'_>) -> LayerDescriptor {
    let colors = VendorColors {
        zero: inputs.theme.trail_color(VendorCategory::Zero),
        one: inputs.theme.trail_color(VendorCategory::One),
    };
    let color_key = format!(
        "{},{},{}|{},{},{}",
        colors.zero.red, colors.zero.green, colors.zero.blue, colors.one.red, colors.one.green,
        colors.one.blue
    );

    LayerDescriptor {
        id: LayerId::Trips,
        data: LayerData::Trips(trips.clone()),
        kind: LayerKind::Trips(TripsProps {
            colors,
            width_min_pixels: 2.0,
            rounded: true,
            trail_length: inputs.trail_length,
            current_time: inputs.current_time,
            shadow_enabled: false,
            update_triggers: vec![UpdateTrigger {
                accessor: "getColor",
                key: color_key,
            }],
        }),
        opacity: 0.3,
        pickable: false,
    }
}

fn building_layer(buildings: &DataSource<BuildingCollection>, theme: &MapTheme) -> LayerDescriptor {
    LayerDescriptor {
        id: LayerId::Buildings,
        data: LayerData::Buildings(buildings.clone()),
        kind: LayerKind::Polygon(PolygonProps {
            extruded: true,
            wireframe: false,
            fill_color: theme.building_color,
            material: theme.material,
        }),
        opacity: 0.5,
        pickable: false,
    }
}
