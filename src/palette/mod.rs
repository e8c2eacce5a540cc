//! Density and style palette table.
//!
//! Two families of brightness ramps are available:
//! - [`DensityLevel`] - plain ASCII ramps from 2 to 70 symbols
//! - [`StylePalette`] - themed ramps (block shades, line art, emoticons...)
//!   that also carry the font family used to display them
//!
//! A style, when given, takes precedence over a density level. Unknown keys
//! are cosmetic mistakes, so [`Palette::resolve`] falls back to the `Normal`
//! density ramp instead of failing.

mod ramps;

pub use ramps::{
    DensityLevel, StylePalette, CHUNKY_RAMP, DETAILED_RAMP, EMOTICON_STYLE, IRC_STYLE,
    LIGHT_RAMP, LINE_ART_STYLE, NEWSCHOOL_STYLE, NORMAL_RAMP, OLDSCHOOL_STYLE, SHADED_STYLE,
    SOLID_STYLE, STANDARD_STYLE, TYPEWRITER_STYLE, ULTRA_RAMP,
};

/// Font family used for plain density ramps.
pub const DEFAULT_FONT_FAMILY: &str = "monospace";

/// Errors raised while looking up a palette key.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Unsupported palette '{key}'")]
    Unsupported { key: String },
    #[error("Palette '{name}' has an empty ramp")]
    EmptyRamp { name: &'static str },
}

/// Which ramp family a resolved palette came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSource {
    Density(DensityLevel),
    Style(StylePalette),
}

/// A resolved, ready-to-sample palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub source: PaletteSource,
}

impl Default for Palette {
    fn default() -> Self {
        Self::density(DensityLevel::default())
    }
}

impl Palette {
    pub fn density(level: DensityLevel) -> Self {
        Self {
            source: PaletteSource::Density(level),
        }
    }

    pub fn style(style: StylePalette) -> Self {
        Self {
            source: PaletteSource::Style(style),
        }
    }

    /// Parse a style key into a palette.
    pub fn from_style_key(key: &str) -> Result<Self, PaletteError> {
        StylePalette::from_key(key)
            .map(Self::style)
            .ok_or_else(|| PaletteError::Unsupported {
                key: key.to_string(),
            })
    }

    /// Parse a density ordinal into a palette.
    pub fn from_density_index(index: u8) -> Result<Self, PaletteError> {
        DensityLevel::from_index(index)
            .map(Self::density)
            .ok_or_else(|| PaletteError::Unsupported {
                key: index.to_string(),
            })
    }

    /// Resolve the active palette for one sampling call.
    ///
    /// A style key wins over a density index. Any unknown key logs a warning
    /// and yields the default `Normal` ramp.
    pub fn resolve(style: Option<&str>, density: Option<u8>) -> Self {
        let resolved = match (style, density) {
            (Some(key), _) => Self::from_style_key(key),
            (None, Some(index)) => Self::from_density_index(index),
            (None, None) => Ok(Self::default()),
        };

        resolved.unwrap_or_else(|e| {
            log::warn!("{}, falling back to the normal density ramp", e);
            Self::default()
        })
    }

    /// Glyphs ordered heaviest first.
    pub fn chars(&self) -> &'static [char] {
        match self.source {
            PaletteSource::Density(level) => level.chars(),
            PaletteSource::Style(style) => style.chars(),
        }
    }

    pub fn font_family(&self) -> &'static str {
        match self.source {
            PaletteSource::Density(_) => DEFAULT_FONT_FAMILY,
            PaletteSource::Style(style) => style.font_family(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.source {
            PaletteSource::Density(level) => level.name(),
            PaletteSource::Style(style) => style.key(),
        }
    }

    /// Heaviest glyph of the ramp.
    pub fn darkest(&self) -> char {
        self.chars()[0]
    }

    /// Lightest glyph of the ramp.
    pub fn lightest(&self) -> char {
        self.chars()[self.chars().len() - 1]
    }
}

/// Check the whole table once. Every ramp must be non-empty.
pub fn validate() -> Result<(), PaletteError> {
    for level in DensityLevel::ALL {
        if level.chars().is_empty() {
            return Err(PaletteError::EmptyRamp { name: level.name() });
        }
    }
    for style in StylePalette::ALL {
        if style.chars().is_empty() {
            return Err(PaletteError::EmptyRamp { name: style.key() });
        }
    }
    Ok(())
}

/// Every palette in table order: densities first, then styles.
pub fn all() -> Vec<Palette> {
    DensityLevel::ALL
        .iter()
        .map(|&d| Palette::density(d))
        .chain(StylePalette::ALL.iter().map(|&s| Palette::style(s)))
        .collect()
}
