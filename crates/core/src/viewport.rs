//! Camera state and basemap style for the host map.

use serde::Deserialize;

use crate::config::ConfigError;

/// Environment variable holding the Mapbox access token.
pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";

const DARK_MATTER_STYLE: &str =
    "https://basemaps.cartocdn.com/gl/dark-matter-nolabels-gl-style/style.json";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
}

impl Default for ViewState {
    /// Central London, tilted so building extrusions read.
    fn default() -> Self {
        Self {
            longitude: -0.1276,
            latitude: 51.5072,
            zoom: 11.0,
            pitch: 45.0,
            bearing: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BasemapStyle {
    /// A public style document.
    Url { url: String },
    /// A `mapbox://styles/...` reference; needs an access token.
    Mapbox { style: String },
}

impl Default for BasemapStyle {
    fn default() -> Self {
        Self::Url {
            url: DARK_MATTER_STYLE.to_owned(),
        }
    }
}

/// A style reference the host map can load as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleReference {
    pub style: String,
    pub access_token: Option<String>,
}

impl BasemapStyle {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<StyleReference, ConfigError> {
        self.resolve_with_token(std::env::var(MAPBOX_TOKEN_VAR).ok())
    }

    pub fn resolve_with_token(&self, token: Option<String>) -> Result<StyleReference, ConfigError> {
        match self {
            Self::Url { url } => Ok(StyleReference {
                style: url.clone(),
                access_token: None,
            }),
            Self::Mapbox { style } => match token.filter(|token| !token.trim().is_empty()) {
                Some(token) => Ok(StyleReference {
                    style: style.clone(),
                    access_token: Some(token),
                }),
                None => Err(ConfigError::MissingAccessToken(MAPBOX_TOKEN_VAR)),
            },
        }
    }
}

/// Host-side map state: where the camera is and what it draws underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct MapViewport {
    view_state: ViewState,
    style: StyleReference,
}

impl MapViewport {
    pub fn new(view_state: ViewState, style: StyleReference) -> Self {
        Self { view_state, style }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn style(&self) -> &StyleReference {
        &self.style
    }

    /// Called when the user pans, zooms or tilts the map.
    pub fn set_view_state(&mut self, view_state: ViewState) {
        self.view_state = view_state;
    }
}
