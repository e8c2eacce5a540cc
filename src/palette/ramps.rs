//! Character ramp definitions.
//!
//! Every ramp is ordered from the heaviest glyph (most ink) to the lightest.
//! Index 0 is always the darkest glyph.

/// Density level 0: two symbols, very blocky.
pub const CHUNKY_RAMP: &[char] = &['@', '#'];

/// Density level 1.
pub const LIGHT_RAMP: &[char] = &['@', '#', 'S', '%', '?', '*'];

/// Density level 2. Also the fallback ramp for unknown palette keys.
pub const NORMAL_RAMP: &[char] = &['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Density level 3.
pub const DETAILED_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w',
    'm',
];

/// Density level 4: the classic 70-level ramp, ending in a space.
#[rustfmt::skip]
pub const ULTRA_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*', 'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm',
    'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X', 'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't',
    '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']', '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

pub const STANDARD_STYLE: &[char] = NORMAL_RAMP;

/// Line-drawing glyphs. Ordered by structure rather than ink weight.
pub const LINE_ART_STYLE: &[char] = &['/', '\\', '|', '-', '+', '~', '^', 'v', '<', '>', '(', ')'];

pub const SOLID_STYLE: &[char] = &['█', '▓', '▒', '░', ' '];

pub const SHADED_STYLE: &[char] = &['█', '▓', '▒', '░', '·', ' '];

pub const OLDSCHOOL_STYLE: &[char] = &['▀', '▄', '█', '▌', '▐', '░', '▒', '▓'];

pub const NEWSCHOOL_STYLE: &[char] = &['■', '▪', '▫', '□', '◆', '◇', '●', '○'];

pub const IRC_STYLE: &[char] = &['@', '#', '$', '%', '&', '*', '+', '=', '-', '.', ' '];

pub const TYPEWRITER_STYLE: &[char] = &['#', '*', '=', '+', '-', '_', '.', ',', ' '];

pub const EMOTICON_STYLE: &[char] = &['^', '_', '^', 'o', 'O', '~', '-', '.', ' '];

/// Brightness ramp granularity, from two symbols up to seventy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DensityLevel {
    Chunky,
    Light,
    #[default]
    Normal,
    Detailed,
    Ultra,
}

impl DensityLevel {
    pub const ALL: [DensityLevel; 5] = [
        DensityLevel::Chunky,
        DensityLevel::Light,
        DensityLevel::Normal,
        DensityLevel::Detailed,
        DensityLevel::Ultra,
    ];

    /// Look up a level by its ordinal (0..=4).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u8 {
        match self {
            DensityLevel::Chunky => 0,
            DensityLevel::Light => 1,
            DensityLevel::Normal => 2,
            DensityLevel::Detailed => 3,
            DensityLevel::Ultra => 4,
        }
    }

    pub fn chars(&self) -> &'static [char] {
        match self {
            DensityLevel::Chunky => CHUNKY_RAMP,
            DensityLevel::Light => LIGHT_RAMP,
            DensityLevel::Normal => NORMAL_RAMP,
            DensityLevel::Detailed => DETAILED_RAMP,
            DensityLevel::Ultra => ULTRA_RAMP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DensityLevel::Chunky => "chunky",
            DensityLevel::Light => "light",
            DensityLevel::Normal => "normal",
            DensityLevel::Detailed => "detailed",
            DensityLevel::Ultra => "ultra",
        }
    }
}

/// Named, themed character ramp with its display font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylePalette {
    Standard,
    LineArt,
    Solid,
    Shaded,
    Oldschool,
    Newschool,
    Irc,
    Typewriter,
    Emoticon,
}

impl StylePalette {
    pub const ALL: [StylePalette; 9] = [
        StylePalette::Standard,
        StylePalette::LineArt,
        StylePalette::Solid,
        StylePalette::Shaded,
        StylePalette::Oldschool,
        StylePalette::Newschool,
        StylePalette::Irc,
        StylePalette::Typewriter,
        StylePalette::Emoticon,
    ];

    /// Parse a style key. Accepts the camelCase keys used by the storefront
    /// (`lineArt`) as well as kebab/lower-case spellings.
    pub fn from_key(key: &str) -> Option<Self> {
        let style = match key {
            "standard" => StylePalette::Standard,
            "lineArt" | "line-art" | "lineart" | "line_art" => StylePalette::LineArt,
            "solid" => StylePalette::Solid,
            "shaded" => StylePalette::Shaded,
            "oldschool" => StylePalette::Oldschool,
            "newschool" => StylePalette::Newschool,
            "irc" => StylePalette::Irc,
            "typewriter" => StylePalette::Typewriter,
            "emoticon" => StylePalette::Emoticon,
            _ => return None,
        };
        Some(style)
    }

    pub fn key(&self) -> &'static str {
        match self {
            StylePalette::Standard => "standard",
            StylePalette::LineArt => "lineArt",
            StylePalette::Solid => "solid",
            StylePalette::Shaded => "shaded",
            StylePalette::Oldschool => "oldschool",
            StylePalette::Newschool => "newschool",
            StylePalette::Irc => "irc",
            StylePalette::Typewriter => "typewriter",
            StylePalette::Emoticon => "emoticon",
        }
    }

    pub fn chars(&self) -> &'static [char] {
        match self {
            StylePalette::Standard => STANDARD_STYLE,
            StylePalette::LineArt => LINE_ART_STYLE,
            StylePalette::Solid => SOLID_STYLE,
            StylePalette::Shaded => SHADED_STYLE,
            StylePalette::Oldschool => OLDSCHOOL_STYLE,
            StylePalette::Newschool => NEWSCHOOL_STYLE,
            StylePalette::Irc => IRC_STYLE,
            StylePalette::Typewriter => TYPEWRITER_STYLE,
            StylePalette::Emoticon => EMOTICON_STYLE,
        }
    }

    /// Font family used when rendering this style. Sampling never looks at it.
    pub fn font_family(&self) -> &'static str {
        match self {
            StylePalette::Standard => "monospace",
            StylePalette::LineArt => "Courier New, monospace",
            StylePalette::Solid => "JetBrains Mono, monospace",
            StylePalette::Shaded => "Menlo, monospace",
            StylePalette::Oldschool => "Liberation Mono, monospace",
            StylePalette::Newschool => "DejaVu Sans Mono, monospace",
            StylePalette::Irc => "Monaco, monospace",
            StylePalette::Typewriter => "Courier Prime, monospace",
            StylePalette::Emoticon => "Noto Sans Mono, monospace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_index_roundtrip() {
        for level in DensityLevel::ALL {
            assert_eq!(DensityLevel::from_index(level.index()), Some(level));
        }
        assert_eq!(DensityLevel::from_index(5), None);
    }

    #[test]
    fn test_density_ramps_grow_finer() {
        let lens: Vec<usize> = DensityLevel::ALL.iter().map(|d| d.chars().len()).collect();
        assert_eq!(lens, vec![2, 6, 11, 20, 70]);
    }

    #[test]
    fn test_ramps_start_with_heaviest_glyph() {
        assert_eq!(CHUNKY_RAMP[0], '@');
        assert_eq!(ULTRA_RAMP[0], '$');
        assert_eq!(SOLID_STYLE[0], '█');
        assert_eq!(*ULTRA_RAMP.last().unwrap(), ' ');
    }

    #[test]
    fn test_style_key_aliases() {
        assert_eq!(StylePalette::from_key("lineArt"), Some(StylePalette::LineArt));
        assert_eq!(StylePalette::from_key("line-art"), Some(StylePalette::LineArt));
        assert_eq!(StylePalette::from_key("Solid"), None);
        for style in StylePalette::ALL {
            assert_eq!(StylePalette::from_key(style.key()), Some(style));
        }
    }

    #[test]
    fn test_style_fonts_fall_back_to_monospace() {
        for style in StylePalette::ALL {
            assert!(style.font_family().ends_with("monospace"), "{:?}", style);
        }
    }
}
