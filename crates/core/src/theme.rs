//! Theme bundle shared by the trail and building layers.

use palette::Srgb;
use serde::{Deserialize, Deserializer};
use tube_transit::VendorCategory;

/// Deserialize `[r, g, b]` into an sRGB color.
fn rgb_array<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Srgb<u8>, D::Error> {
    let [red, green, blue] = <[u8; 3]>::deserialize(deserializer)?;
    Ok(Srgb::new(red, green, blue))
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Material {
    pub ambient: f32,
    pub diffuse: f32,
    pub shininess: f32,
    #[serde(deserialize_with = "rgb_array")]
    pub specular_color: Srgb<u8>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.6,
            shininess: 32.0,
            specular_color: Srgb::new(60, 64, 70),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AmbientLight {
    #[serde(deserialize_with = "rgb_array")]
    pub color: Srgb<u8>,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PointLight {
    #[serde(deserialize_with = "rgb_array")]
    pub color: Srgb<u8>,
    pub intensity: f32,
    /// `[lon, lat, altitude in meters]`
    pub position: [f64; 3],
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LightingEffect {
    #[serde(default)]
    pub ambient_light: Option<AmbientLight>,
    #[serde(default)]
    pub point_lights: Vec<PointLight>,
}

impl Default for LightingEffect {
    fn default() -> Self {
        Self {
            ambient_light: Some(AmbientLight {
                color: Srgb::new(255, 255, 255),
                intensity: 1.0,
            }),
            point_lights: vec![PointLight {
                color: Srgb::new(255, 255, 255),
                intensity: 2.0,
                position: [-0.1276, 51.5072, 8000.0],
            }],
        }
    }
}

/// Built once at startup and passed by reference to the layer composer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapTheme {
    #[serde(deserialize_with = "rgb_array")]
    pub trail_color_0: Srgb<u8>,
    #[serde(deserialize_with = "rgb_array")]
    pub trail_color_1: Srgb<u8>,
    #[serde(deserialize_with = "rgb_array")]
    pub building_color: Srgb<u8>,
    pub material: Material,
    pub effects: Vec<LightingEffect>,
}

impl Default for MapTheme {
    fn default() -> Self {
        Self {
            trail_color_0: Srgb::new(253, 128, 93),
            trail_color_1: Srgb::new(23, 184, 190),
            building_color: Srgb::new(74, 80, 87),
            material: Material::default(),
            effects: vec![LightingEffect::default()],
        }
    }
}

impl MapTheme {
    pub fn trail_color(&self, vendor: VendorCategory) -> Srgb<u8> {
        match vendor {
            VendorCategory::Zero => self.trail_color_0,
            VendorCategory::One => self.trail_color_1,
        }
    }
}
