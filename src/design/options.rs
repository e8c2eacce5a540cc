//! Per-design choices a customer makes.

use serde::{Deserialize, Serialize};

use crate::layout::FontMetrics;
use crate::render::{Colors, MockupRegion, Rgb};

/// What the design is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignMode {
    #[default]
    Text,
    Ascii,
}

impl DesignMode {
    pub fn name(&self) -> &'static str {
        match self {
            DesignMode::Text => "text",
            DesignMode::Ascii => "ascii",
        }
    }

    /// Hint shown instead of a preview while there is nothing to draw.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DesignMode::Text => "Enter text above to see preview",
            DesignMode::Ascii => "Upload an image to see preview",
        }
    }
}

/// Garment colour. The ink is always the opposite colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShirtColor {
    #[default]
    Black,
    White,
}

impl ShirtColor {
    pub fn name(&self) -> &'static str {
        match self {
            ShirtColor::Black => "black",
            ShirtColor::White => "white",
        }
    }

    pub fn colors(&self) -> Colors {
        match self {
            ShirtColor::Black => Colors {
                foreground: Rgb::WHITE,
                background: Rgb::BLACK,
            },
            ShirtColor::White => Colors {
                foreground: Rgb::BLACK,
                background: Rgb::WHITE,
            },
        }
    }
}

/// Side of the shirt the print goes on. Does not change the print canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Front,
    Back,
}

impl Placement {
    pub fn name(&self) -> &'static str {
        match self {
            Placement::Front => "front",
            Placement::Back => "back",
        }
    }

    pub fn mockup_region(&self) -> MockupRegion {
        match self {
            Placement::Front => MockupRegion::FRONT,
            Placement::Back => MockupRegion::BACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ShirtSize {
    S,
    #[default]
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "2XL")]
    Xxl,
}

impl ShirtSize {
    pub fn name(&self) -> &'static str {
        match self {
            ShirtSize::S => "S",
            ShirtSize::M => "M",
            ShirtSize::L => "L",
            ShirtSize::Xl => "XL",
            ShirtSize::Xxl => "2XL",
        }
    }
}

/// Display font for typed-text designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextFont {
    #[default]
    PressStart,
    Vt323,
    Commodore,
}

impl TextFont {
    pub fn family(&self) -> &'static str {
        match self {
            TextFont::PressStart => "\"Press Start 2P\", monospace",
            TextFont::Vt323 => "VT323, monospace",
            TextFont::Commodore => "\"Commodore 64 Pixelized\", monospace",
        }
    }

    /// Glyph advance as a fraction of font size.
    pub fn advance_ratio(&self) -> f32 {
        match self {
            TextFont::PressStart => 1.0,
            TextFont::Vt323 => 0.5,
            TextFont::Commodore => 1.0,
        }
    }

    pub fn metrics(&self, line_height_ratio: f32) -> FontMetrics {
        FontMetrics::new(self.advance_ratio(), line_height_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ink_is_opposite_of_shirt() {
        assert_eq!(ShirtColor::Black.colors().foreground, Rgb::WHITE);
        assert_eq!(ShirtColor::White.colors().foreground, Rgb::BLACK);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&(ShirtSize::Xxl, TextFont::Vt323, Placement::Back)).unwrap();
        assert_eq!(json, r#"["2XL","vt323","back"]"#);
        let font: TextFont = serde_json::from_str(r#""pressStart""#).unwrap();
        assert_eq!(font, TextFont::PressStart);
    }

    #[test]
    fn test_placeholders() {
        assert!(DesignMode::Ascii.placeholder().contains("Upload"));
        assert!(DesignMode::Text.placeholder().contains("Enter text"));
    }
}
