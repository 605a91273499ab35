//! User-facing configuration with defaults for every field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::layers::Visibility;
use crate::theme::MapTheme;
use crate::viewport::{BasemapStyle, ViewState};

pub const DEFAULT_LINES_URL: &str =
    "https://raw.githubusercontent.com/oobrien/vis/master/tubecreature/data/tfl_lines.json";
pub const DEFAULT_STATIONS_URL: &str =
    "https://raw.githubusercontent.com/oobrien/vis/master/tubecreature/data/tfl_stations.json";
pub const DEFAULT_TRIPS_URL: &str =
    "https://raw.githubusercontent.com/visgl/deck.gl-data/master/examples/trips/trips-v7.json";
pub const DEFAULT_BUILDINGS_URL: &str =
    "https://raw.githubusercontent.com/visgl/deck.gl-data/master/examples/trips/buildings.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("{0} is not set; it is required for mapbox:// styles")]
    MissingAccessToken(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Length of the fading trail drawn behind each vehicle.
    pub trail_length: f64,
    /// Animation cycle length in data time units.
    pub loop_length: f64,
    /// Data time units per real second.
    pub animation_speed: f64,
    pub initial_view_state: ViewState,
    pub map_style: BasemapStyle,
    pub show_tube_lines: bool,
    pub show_stations: bool,
    pub show_buildings: bool,
    pub theme: MapTheme,
    pub lines_url: String,
    pub stations_url: String,
    pub trips_url: String,
    pub buildings_url: String,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            trail_length: 180.0,
            loop_length: 1800.0,
            animation_speed: 1.0,
            initial_view_state: ViewState::default(),
            map_style: BasemapStyle::default(),
            show_tube_lines: true,
            show_stations: true,
            show_buildings: false,
            theme: MapTheme::default(),
            lines_url: DEFAULT_LINES_URL.to_owned(),
            stations_url: DEFAULT_STATIONS_URL.to_owned(),
            trips_url: DEFAULT_TRIPS_URL.to_owned(),
            buildings_url: DEFAULT_BUILDINGS_URL.to_owned(),
        }
    }
}

impl VisualizationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        };

        positive("trail_length", self.trail_length)?;
        positive("loop_length", self.loop_length)?;
        positive("animation_speed", self.animation_speed)
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            show_tube_lines: self.show_tube_lines,
            show_stations: self.show_stations,
        }
    }
}
