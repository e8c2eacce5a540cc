//! CLI enum types for shirt, layout, and output options.

use clap::ValueEnum;

use crate::design::{ArtifactFormat, Placement, ShirtColor, ShirtSize, TextFont};
use crate::layout::TextAlign;
use crate::overlay::Band;

/// Shirt colour; ink is the opposite colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Shirt {
    #[default]
    Black,
    White,
}

impl From<Shirt> for ShirtColor {
    fn from(s: Shirt) -> Self {
        match s {
            Shirt::Black => ShirtColor::Black,
            Shirt::White => ShirtColor::White,
        }
    }
}

/// Print placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl From<Side> for Placement {
    fn from(s: Side) -> Self {
        match s {
            Side::Front => Placement::Front,
            Side::Back => Placement::Back,
        }
    }
}

/// Shirt size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Size {
    S,
    #[default]
    M,
    L,
    Xl,
    #[value(name = "2xl")]
    Xxl,
}

impl From<Size> for ShirtSize {
    fn from(s: Size) -> Self {
        match s {
            Size::S => ShirtSize::S,
            Size::M => ShirtSize::M,
            Size::L => ShirtSize::L,
            Size::Xl => ShirtSize::Xl,
            Size::Xxl => ShirtSize::Xxl,
        }
    }
}

/// Font for typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Font {
    #[default]
    PressStart,
    Vt323,
    Commodore,
}

impl From<Font> for TextFont {
    fn from(f: Font) -> Self {
        match f {
            Font::PressStart => TextFont::PressStart,
            Font::Vt323 => TextFont::Vt323,
            Font::Commodore => TextFont::Commodore,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for TextAlign {
    fn from(a: Align) -> Self {
        match a {
            Align::Left => TextAlign::Left,
            Align::Center => TextAlign::Center,
            Align::Right => TextAlign::Right,
        }
    }
}

/// Overlay band position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BandPosition {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl From<BandPosition> for Band {
    fn from(b: BandPosition) -> Self {
        match b {
            BandPosition::Top => Band::Top,
            BandPosition::Middle => Band::Middle,
            BandPosition::Bottom => Band::Bottom,
        }
    }
}

/// Artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Svg,
    Png,
}

impl From<Format> for ArtifactFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Svg => ArtifactFormat::Svg,
            Format::Png => ArtifactFormat::Png,
        }
    }
}

/// Render resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    /// Small on-screen proxy on the shirt colour
    #[default]
    Preview,
    /// Full print resolution, transparent background
    Export,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_to_shirt_size() {
        assert_eq!(ShirtSize::from(Size::S), ShirtSize::S);
        assert_eq!(ShirtSize::from(Size::Xl), ShirtSize::Xl);
        assert_eq!(ShirtSize::from(Size::Xxl), ShirtSize::Xxl);
    }

    #[test]
    fn test_size_value_names() {
        assert_eq!(Size::from_str("2xl", true).unwrap(), Size::Xxl);
        assert_eq!(Size::from_str("XL", true).unwrap(), Size::Xl);
    }

    #[test]
    fn test_font_value_names() {
        assert_eq!(Font::from_str("press-start", false).unwrap(), Font::PressStart);
        assert_eq!(TextFont::from(Font::Vt323), TextFont::Vt323);
    }

    #[test]
    fn test_band_and_align() {
        assert_eq!(Band::from(BandPosition::Middle), Band::Middle);
        assert_eq!(TextAlign::from(Align::Right), TextAlign::Right);
    }

    #[test]
    fn test_shirt_and_side() {
        assert_eq!(ShirtColor::from(Shirt::White), ShirtColor::White);
        assert_eq!(Placement::from(Side::Back), Placement::Back);
        assert_eq!(ArtifactFormat::from(Format::Png), ArtifactFormat::Png);
    }
}
