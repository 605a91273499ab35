//! # tube-core
//!
//! Layer configuration for an animated transit map: a looping clock drives
//! vehicle trails drawn over line geometry, station markers and optional
//! building extrusions. Rendering, picking and projection belong to the
//! host map engine; this crate decides what it draws and how hovered
//! features are described.

pub mod clock;
pub mod color;
pub mod config;
pub mod layers;
pub mod loader;
pub mod logging;
pub mod theme;
pub mod tooltip;
pub mod viewport;
pub mod visualization;

// Re-export transit from the transit crate
pub use tube_transit as transit;

pub use config::{ConfigError, VisualizationConfig};
pub use visualization::{InjectedData, TransitVisualization};
