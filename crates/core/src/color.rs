//! Fixed line palette for the Underground and associated networks.
//!
//! Alpha is part of the palette: line fills are drawn translucent so that
//! overlapping segments on shared track stay distinguishable.

use std::str::FromStr;

use palette::{Srgb, Srgba};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Color used for names outside the table.
pub const UNKNOWN_LINE_COLOR: Srgba<u8> = Srgba::new(255, 255, 255, 10);

/// Text color forced for lines whose own color is unreadable on the dark
/// station marker background.
const LEGIBLE_TEXT: Srgb<u8> = Srgb::new(255, 255, 255);

/// Every line the palette knows about, keyed by the display name used in the
/// line and station datasets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
pub enum TubeLine {
    Bakerloo,
    Central,
    Circle,
    District,
    #[strum(serialize = "Hammersmith & City")]
    HammersmithAndCity,
    Jubilee,
    Metropolitan,
    Northern,
    Piccadilly,
    Victoria,
    #[strum(serialize = "Waterloo & City")]
    WaterlooAndCity,
    #[strum(serialize = "DLR")]
    Dlr,
    #[strum(serialize = "London Overground")]
    LondonOverground,
    #[strum(serialize = "Elizabeth line")]
    ElizabethLine,
}

/// Two published revisions of the palette disagree on the Northern line's
/// alpha (255 in the current one, 100 in the legacy one). Both are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Current,
    Legacy,
}

impl TubeLine {
    pub fn color(self, scheme: ColorScheme) -> Srgba<u8> {
        match self {
            Self::Bakerloo => Srgba::new(178, 99, 0, 100),
            Self::Central => Srgba::new(220, 36, 31, 100),
            Self::Circle => Srgba::new(255, 211, 41, 100),
            Self::District => Srgba::new(0, 125, 50, 100),
            Self::HammersmithAndCity => Srgba::new(244, 169, 190, 100),
            Self::Jubilee => Srgba::new(161, 165, 167, 100),
            Self::Metropolitan => Srgba::new(155, 0, 88, 100),
            Self::Northern => match scheme {
                ColorScheme::Current => Srgba::new(0, 0, 0, 255),
                ColorScheme::Legacy => Srgba::new(0, 0, 0, 100),
            },
            Self::Piccadilly => Srgba::new(0, 25, 168, 100),
            Self::Victoria => Srgba::new(0, 152, 216, 100),
            Self::WaterlooAndCity => Srgba::new(147, 206, 186, 100),
            Self::Dlr => Srgba::new(0, 175, 173, 100),
            Self::LondonOverground => Srgba::new(239, 123, 16, 100),
            Self::ElizabethLine => Srgba::new(96, 57, 158, 100),
        }
    }

    /// RGB used when the line name is printed as text.
    pub fn text_color(self) -> Srgb<u8> {
        match self {
            Self::Northern => LEGIBLE_TEXT,
            other => other.color(ColorScheme::Current).color,
        }
    }
}

/// A line name as found in the data: either a known line or anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCategory {
    Known(TubeLine),
    Unknown,
}

impl LineCategory {
    pub fn from_name(name: &str) -> Self {
        TubeLine::from_str(name).map_or(Self::Unknown, Self::Known)
    }

    pub fn color(self, scheme: ColorScheme) -> Srgba<u8> {
        match self {
            Self::Known(line) => line.color(scheme),
            Self::Unknown => UNKNOWN_LINE_COLOR,
        }
    }

    pub fn text_color(self) -> Srgb<u8> {
        match self {
            Self::Known(line) => line.text_color(),
            Self::Unknown => UNKNOWN_LINE_COLOR.color,
        }
    }
}

/// Resolve a line name against the current palette.
pub fn resolve(name: &str) -> Srgba<u8> {
    resolve_with(name, ColorScheme::Current)
}

pub fn resolve_with(name: &str, scheme: ColorScheme) -> Srgba<u8> {
    LineCategory::from_name(name).color(scheme)
}

/// CSS `rgb(r,g,b)` string for printing a line name.
pub fn text_color(name: &str) -> String {
    css_rgb(LineCategory::from_name(name).text_color())
}

pub fn css_rgb(color: Srgb<u8>) -> String {
    format!("rgb({},{},{})", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_known_colors() {
        assert_eq!(resolve("Central"), Srgba::new(220, 36, 31, 100));
        assert_eq!(resolve("Northern"), Srgba::new(0, 0, 0, 255));
        assert_eq!(resolve("Hammersmith & City"), Srgba::new(244, 169, 190, 100));
    }

    #[test]
    fn test_legacy_northern_alpha() {
        assert_eq!(
            resolve_with("Northern", ColorScheme::Legacy),
            Srgba::new(0, 0, 0, 100)
        );
        // only the Northern line differs between the schemes
        for line in TubeLine::iter().filter(|line| *line != TubeLine::Northern) {
            assert_eq!(
                line.color(ColorScheme::Current),
                line.color(ColorScheme::Legacy)
            );
        }
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(resolve("Unknown Line"), Srgba::new(255, 255, 255, 10));
        assert_eq!(resolve(""), UNKNOWN_LINE_COLOR);
        // names are matched exactly
        assert_eq!(resolve("central"), UNKNOWN_LINE_COLOR);
    }

    #[test]
    fn test_table_size_and_names() {
        assert_eq!(TubeLine::COUNT, 14);
        for line in TubeLine::iter() {
            let name: &'static str = line.into();
            assert_eq!(LineCategory::from_name(name), LineCategory::Known(line));
        }
    }

    #[test]
    fn test_text_colors() {
        assert_eq!(text_color("Central"), "rgb(220,36,31)");
        assert_eq!(text_color("Northern"), "rgb(255,255,255)");
        assert_eq!(text_color("Victoria"), "rgb(0,152,216)");
        assert_eq!(text_color("Tramlink"), "rgb(255,255,255)");
    }
}
