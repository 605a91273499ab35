//! Composition root: owns configuration, datasets and the latest clock value,
//! and re-derives the layer list on demand.

use std::sync::Arc;

use geojson::Feature;
use tube_transit::{
    BuildingCollection, DataFetcher, TripCollection, TubeLineCollection, TubeStationCollection,
};

use crate::clock::{AnimationClock, AnimationLoop, FRAME_INTERVAL};
use crate::config::{ConfigError, VisualizationConfig};
use crate::layers::{DataSource, LayerDescriptor, LayerInputs, compose_layers};
use crate::loader::DataLoader;
use crate::logging::setup_logging;
use crate::theme::LightingEffect;
use crate::tooltip::{Tooltip, format_tooltip};
use crate::viewport::{MapViewport, StyleReference};

/// Data supplied by the embedding application instead of the default URLs.
#[derive(Clone, Debug, Default)]
pub struct InjectedData {
    pub lines: Option<Arc<TubeLineCollection>>,
    pub stations: Option<Arc<TubeStationCollection>>,
    pub trips: Option<Arc<TripCollection>>,
    pub buildings: Option<Arc<BuildingCollection>>,
}

pub struct TransitVisualization {
    config: VisualizationConfig,
    viewport: MapViewport,
    lines: DataLoader<TubeLineCollection>,
    stations: DataLoader<TubeStationCollection>,
    trips: DataSource<TripCollection>,
    buildings: Option<DataSource<BuildingCollection>>,
    current_time: f64,
}

impl TransitVisualization {
    /// Validates `config` and resolves its basemap style against the
    /// environment.
    pub fn new(config: VisualizationConfig) -> Result<Self, ConfigError> {
        setup_logging();
        let style = config.map_style.resolve()?;
        Self::with_style(config, style)
    }

    pub fn with_style(config: VisualizationConfig, style: StyleReference) -> Result<Self, ConfigError> {
        config.validate()?;

        let viewport = MapViewport::new(config.initial_view_state, style);
        let lines = DataLoader::new(config.lines_url.clone());
        let stations = DataLoader::new(config.stations_url.clone());
        let trips = DataSource::Url(config.trips_url.clone());
        let buildings = config
            .show_buildings
            .then(|| DataSource::Url(config.buildings_url.clone()));

        Ok(Self {
            config,
            viewport,
            lines,
            stations,
            trips,
            buildings,
            current_time: 0.0,
        })
    }

    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Lighting descriptors the host applies alongside the layer list.
    pub fn effects(&self) -> &[LightingEffect] {
        &self.config.theme.effects
    }

    pub fn clock(&self) -> AnimationClock {
        AnimationClock::new(self.config.loop_length, self.config.animation_speed)
    }

    /// Start a clock for this visualization. Feed its readings back through
    /// [`Self::set_current_time`] before each render.
    pub fn start_animation(&self) -> AnimationLoop {
        AnimationLoop::start(self.clock(), FRAME_INTERVAL)
    }

    pub fn set_current_time(&mut self, current_time: f64) {
        self.current_time = current_time;
    }

    /// Bring every dataset up to date with `injected`.
    ///
    /// Lines and stations load concurrently. Trips and buildings are passed
    /// through, as inline data or as their URL.
    pub async fn refresh_data(&mut self, injected: &InjectedData, fetcher: &dyn DataFetcher) {
        tokio::join!(
            self.lines.resolve(injected.lines.clone(), fetcher),
            self.stations.resolve(injected.stations.clone(), fetcher),
        );

        self.trips = match &injected.trips {
            Some(trips) => DataSource::Inline(Arc::clone(trips)),
            None => DataSource::Url(self.config.trips_url.clone()),
        };

        self.buildings = self.config.show_buildings.then(|| match &injected.buildings {
            Some(buildings) => DataSource::Inline(Arc::clone(buildings)),
            None => DataSource::Url(self.config.buildings_url.clone()),
        });
    }

    pub fn layers(&self) -> Vec<LayerDescriptor> {
        compose_layers(&LayerInputs {
            trips: Some(&self.trips),
            current_time: self.current_time,
            trail_length: self.config.trail_length,
            lines: self.lines.data(),
            stations: self.stations.data(),
            buildings: self.buildings.as_ref(),
            visibility: self.config.visibility(),
            theme: &self.config.theme,
        })
    }

    pub fn tooltip(&self, feature: Option<&Feature>, layer_id: &str) -> Option<Tooltip> {
        format_tooltip(feature, layer_id)
    }
}
