//! # tube-transit
//!
//! Typed transit datasets for the trips map: line geometry, stations,
//! vehicle trips and building footprints.
//!
//! ## Features
//!
//! - **GeoJSON decoding**: line and station feature collections are lifted
//!   into typed models, rejecting features with the wrong geometry
//! - **Sample datasets**: trip and building arrays decode straight from JSON
//! - **Pluggable networking**: implement [`DataFetcher`] to control how
//!   datasets are fetched
//!
//! ## Example
//!
//! ```
//! use tube_transit::prelude::*;
//!
//! let json = br#"[{"vendor": 1, "path": [[-0.1, 51.5], [-0.11, 51.51]], "timestamps": [0, 12]}]"#;
//! let trips = TripCollection::decode(json).unwrap();
//! assert_eq!(trips.trips[0].vendor, VendorCategory::One);
//! ```

pub mod identifiers;
pub mod models;
pub mod network;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::Dataset;
    pub use crate::models::line::{SubLine, TubeLineCollection, TubeLineFeature};
    pub use crate::models::station::{Cartography, StationLine, TubeStation, TubeStationCollection};
    pub use crate::models::trip::{Building, BuildingCollection, Trip, TripCollection};
    pub use crate::models::types::*;
    pub use crate::network::traits::*;
}

pub use prelude::*;
