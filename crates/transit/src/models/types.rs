//! Core data types and enums shared by every transit dataset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

// ============================================================================
// Enums
// ============================================================================

/// Binary vendor tag carried by every trip record (`0` or `1` on the wire)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
#[repr(u8)]
pub enum VendorCategory {
    Zero = 0,
    One = 1,
}

impl TryFrom<u8> for VendorCategory {
    type Error = TransitError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(TransitError::InvalidData(format!(
                "vendor must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// A `[lon, lat]` or `[lon, lat, alt]` coordinate as found in trip paths and
/// building footprints.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Planar([f64; 2]),
    Elevated([f64; 3]),
}

impl Position {
    pub fn longitude(&self) -> f64 {
        match self {
            Self::Planar([lon, _]) | Self::Elevated([lon, _, _]) => *lon,
        }
    }

    pub fn latitude(&self) -> f64 {
        match self {
            Self::Planar([_, lat]) | Self::Elevated([_, lat, _]) => *lat,
        }
    }

    pub fn altitude(&self) -> Option<f64> {
        match self {
            Self::Planar(_) => None,
            Self::Elevated([_, _, alt]) => Some(*alt),
        }
    }
}

impl From<Position> for geo::Coord {
    fn from(position: Position) -> Self {
        geo::Coord {
            x: position.longitude(),
            y: position.latitude(),
        }
    }
}

// ============================================================================
// Deserialization helpers
// ============================================================================

/// Accepts `1863`, `"1863"`, `""` or `null`.
///
/// The published line and station datasets are not consistent about quoting
/// numeric codes and years.
pub(crate) fn number_or_string<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid geometry for feature {feature}: {reason}")]
    Geometry { feature: String, reason: String },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Fetching {url} failed: {message}")]
    Fetch { url: String, message: String },
}

pub type Result<T> = std::result::Result<T, TransitError>;
