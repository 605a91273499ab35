//! Helpers for lifting raw GeoJSON features into typed models.

use geo::Coord;
use geojson::{Feature, FeatureCollection, feature::Id};
use serde::de::DeserializeOwned;

use crate::models::types::{Result, TransitError};

/// Best-effort label used in error messages.
pub(crate) fn feature_label(feature: &Feature) -> String {
    match &feature.id {
        Some(Id::String(id)) => id.clone(),
        Some(Id::Number(id)) => id.to_string(),
        None => feature
            .property("id")
            .or_else(|| feature.property("name"))
            .map(|value| value.to_string())
            .unwrap_or_else(|| "<anonymous>".to_owned()),
    }
}

/// Deserialize the feature's `properties` object into `T`.
///
/// The top-level feature `id` is injected as the `id` property when the
/// properties do not carry one themselves.
pub(crate) fn properties_of<T: DeserializeOwned>(feature: &Feature) -> Result<T> {
    let mut properties = feature.properties.clone().unwrap_or_default();

    if !properties.contains_key("id") {
        match &feature.id {
            Some(Id::String(id)) => {
                properties.insert("id".to_owned(), id.clone().into());
            }
            Some(Id::Number(id)) => {
                properties.insert("id".to_owned(), id.to_string().into());
            }
            None => {}
        }
    }

    Ok(serde_json::from_value(serde_json::Value::Object(properties))?)
}

pub(crate) fn coordinate(position: &[f64], feature: &Feature) -> Result<Coord> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(TransitError::Geometry {
            feature: feature_label(feature),
            reason: format!("position has {} components", position.len()),
        }),
    }
}

/// Decode a feature collection, failing on the first bad feature.
pub(crate) fn collect_features<T>(
    bytes: &[u8],
    convert: impl Fn(&Feature) -> Result<T>,
) -> Result<Vec<T>> {
    let collection: FeatureCollection = serde_json::from_slice(bytes)?;
    collection.features.iter().map(convert).collect()
}
