//! Hover tooltips for picked line and station features.
//!
//! The renderer hands back the raw GeoJSON feature it hit plus the id of the
//! layer that drew it. Classification looks only at those two things.

use geojson::{Feature, feature::Id};
use itertools::Itertools;
use serde_json::Value as JsonValue;

use crate::color::text_color;
use crate::layers::LayerId;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    Line {
        name: String,
        opened: Option<String>,
        line_id: String,
    },
    Station {
        name: String,
        lines: Vec<String>,
    },
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipStyle {
    pub font_size: &'static str,
    pub font_family: &'static str,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font_size: "0.8em",
            font_family: "Helvetica, Arial, sans-serif",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub html: String,
    pub style: TooltipStyle,
}

fn is_point(feature: &Feature) -> bool {
    matches!(
        feature.geometry.as_ref().map(|geometry| &geometry.value),
        Some(geojson::Value::Point(_))
    )
}

/// Render a JSON scalar for display; empty strings and non-scalars count as
/// missing.
fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(text) if !text.is_empty() => Some(text.clone()),
        JsonValue::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn line_names(feature: &Feature) -> Vec<String> {
    feature
        .property("lines")
        .and_then(JsonValue::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(|line| line.get("name").and_then(JsonValue::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn feature_id(feature: &Feature) -> Option<String> {
    feature.property("id").and_then(scalar_text).or_else(|| match &feature.id {
        Some(Id::String(id)) => Some(id.clone()),
        Some(Id::Number(id)) => Some(id.to_string()),
        None => None,
    })
}

pub fn classify(feature: Option<&Feature>, layer_id: &str) -> Hit {
    let Some(feature) = feature else {
        return Hit::None;
    };

    if layer_id == LayerId::LineFill.as_str() && !is_point(feature) {
        let primary = feature
            .property("lines")
            .and_then(|lines| lines.get(0));

        return Hit::Line {
            name: primary
                .and_then(|line| line.get("name"))
                .and_then(scalar_text)
                .unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            opened: primary
                .and_then(|line| line.get("opened"))
                .and_then(scalar_text),
            line_id: feature_id(feature).unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        };
    }

    if is_point(feature) {
        if let Some(name) = feature.property("name").and_then(scalar_text) {
            return Hit::Station {
                name,
                lines: line_names(feature),
            };
        }
    }

    Hit::None
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl Hit {
    pub fn to_tooltip(&self) -> Option<Tooltip> {
        let html = match self {
            Hit::Line {
                name,
                opened,
                line_id,
            } => format!(
                "<strong>{}</strong><br/>Opened: {}<br/>ID: {}",
                escape_html(name),
                escape_html(opened.as_deref().unwrap_or(NOT_AVAILABLE)),
                escape_html(line_id),
            ),
            Hit::Station { name, lines } => {
                let lines = lines
                    .iter()
                    .map(|line| {
                        format!(
                            "<span style=\"color: {}\">{}</span>",
                            text_color(line),
                            escape_html(line)
                        )
                    })
                    .join("\n");
                format!("<strong>{}</strong><br/>{lines}", escape_html(name))
            }
            Hit::None => return None,
        };

        Some(Tooltip {
            html,
            style: TooltipStyle::default(),
        })
    }
}

pub fn format_tooltip(feature: Option<&Feature>, layer_id: &str) -> Option<Tooltip> {
    classify(feature, layer_id).to_tooltip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: &str) -> Feature {
        serde_json::from_str(json).unwrap()
    }

    fn central_segment() -> Feature {
        feature(
            r#"{
                "type": "Feature",
                "properties": {
                    "id": "BankLiverpoolStreet",
                    "lines": [{"name": "Central", "opened": 1912, "start_sid": "940GZZLUBNK", "end_sid": "940GZZLULVT"}]
                },
                "geometry": {"type": "LineString", "coordinates": [[-0.0886, 51.5133], [-0.0823, 51.5178]]}
            }"#,
        )
    }

    fn bank_station() -> Feature {
        feature(
            r#"{
                "type": "Feature",
                "properties": {"id": "940GZZLUBNK", "name": "Bank", "lines": [{"name": "Central"}, {"name": "Northern"}]},
                "geometry": {"type": "Point", "coordinates": [-0.0886, 51.5133]}
            }"#,
        )
    }

    #[test]
    fn test_line_hit() {
        let hit = classify(Some(&central_segment()), "tube-lines-main");
        assert_eq!(
            hit,
            Hit::Line {
                name: "Central".into(),
                opened: Some("1912".into()),
                line_id: "BankLiverpoolStreet".into(),
            }
        );

        let tooltip = hit.to_tooltip().unwrap();
        assert!(tooltip.html.contains("<strong>Central</strong>"));
        assert!(tooltip.html.contains("Opened: 1912"));
        assert!(tooltip.html.contains("ID: BankLiverpoolStreet"));
        assert_eq!(tooltip.style, TooltipStyle::default());
    }

    #[test]
    fn test_line_without_opening_year() {
        let segment = feature(
            r#"{
                "type": "Feature",
                "id": "BankWaterloo",
                "properties": {"lines": [{"name": "Waterloo & City", "start_sid": "a", "end_sid": "b"}]},
                "geometry": {"type": "LineString", "coordinates": [[-0.0886, 51.5133], [-0.1131, 51.5036]]}
            }"#,
        );
        let tooltip = format_tooltip(Some(&segment), "tube-lines-main").unwrap();
        assert!(tooltip.html.contains("Opened: N/A"));
        assert!(tooltip.html.contains("ID: BankWaterloo"));
        assert!(tooltip.html.contains("Waterloo &amp; City"));
    }

    #[test]
    fn test_line_on_other_layer_is_ignored() {
        assert_eq!(classify(Some(&central_segment()), "tube-lines-border"), Hit::None);
        assert_eq!(format_tooltip(Some(&central_segment()), "trips"), None);
    }

    #[test]
    fn test_station_hit_colors_lines() {
        let tooltip = format_tooltip(Some(&bank_station()), "tube-stations").unwrap();

        assert_eq!(tooltip.html.matches("<span").count(), 2);
        assert!(tooltip.html.contains("<span style=\"color: rgb(220,36,31)\">Central</span>"));
        assert!(tooltip.html.contains("<span style=\"color: rgb(255,255,255)\">Northern</span>"));
        assert!(tooltip.html.contains("</span>\n<span"));
    }

    #[test]
    fn test_point_on_line_layer_is_a_station() {
        assert!(matches!(
            classify(Some(&bank_station()), "tube-lines-main"),
            Hit::Station { .. }
        ));
    }

    #[test]
    fn test_no_hit() {
        assert_eq!(format_tooltip(None, "tube-lines-main"), None);

        let unnamed = feature(
            r#"{"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}"#,
        );
        assert_eq!(classify(Some(&unnamed), "tube-stations"), Hit::None);
    }
}
