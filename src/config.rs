//! Configuration file handling for typetee.
//!
//! Loads configuration from `~/.config/typetee/config.toml` or a custom path.
//! Command-line flags override file values, which override built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{DEFAULT_MAX_SAMPLE_WIDTH, DEFAULT_MAX_SOURCE_DIMENSION, DEFAULT_ROW_STRIDE};
use crate::design::{LayoutTunables, ShirtColor};
use crate::layout::FontMetrics;
use crate::palette::{DensityLevel, Palette};

/// Environment variable that overrides `render.font_path`.
pub const FONT_ENV_VAR: &str = "TYPETEE_FONT";

/// Configuration file structure for typetee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub max_sample_width: u32,
    /// Keep every n-th sampled row.
    pub row_stride: u32,
    /// Density level index, 0 (chunky) to 4 (ultra).
    pub density: u8,
    /// Style palette key; wins over `density` when set.
    pub style: Option<String>,
    /// Uploads larger than this are downscaled before sampling.
    pub max_source_dimension: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_sample_width: DEFAULT_MAX_SAMPLE_WIDTH,
            row_stride: DEFAULT_ROW_STRIDE,
            density: DensityLevel::default().index(),
            style: None,
            max_source_dimension: DEFAULT_MAX_SOURCE_DIMENSION,
        }
    }
}

impl SamplerConfig {
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.style.as_deref(), Some(self.density))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Artwork glyph advance over font size.
    pub advance_ratio: f32,
    /// Artwork line height over font size.
    pub line_height_ratio: f32,
    /// Typed-text and overlay line height over font size.
    pub text_line_height_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            advance_ratio: FontMetrics::ARTWORK.advance_ratio,
            line_height_ratio: FontMetrics::ARTWORK.line_height_ratio,
            text_line_height_ratio: FontMetrics::TEXT.line_height_ratio,
        }
    }
}

impl LayoutConfig {
    pub fn tunables(&self) -> LayoutTunables {
        LayoutTunables {
            artwork: FontMetrics::new(self.advance_ratio, self.line_height_ratio),
            text_line_height_ratio: self.text_line_height_ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// TTF/OTF used for PNG output; block glyphs when unset.
    pub font_path: Option<PathBuf>,
    pub shirt_color: ShirtColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 460.0,
            height: 579.0,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With no explicit path, a missing default file yields defaults. An
    /// explicit path must exist. A file that exists but cannot be parsed is
    /// always an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() && !explicit {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        config.validate(&path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject sizes and ratios that would make layout non-finite.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let values = [
            ("layout.advance_ratio", self.layout.advance_ratio),
            ("layout.line_height_ratio", self.layout.line_height_ratio),
            ("layout.text_line_height_ratio", self.layout.text_line_height_ratio),
            ("preview.width", self.preview.width),
            ("preview.height", self.preview.height),
        ];
        for (key, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    path: path.to_path_buf(),
                    key,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Apply environment overrides (`TYPETEE_FONT`).
    pub fn with_env(mut self) -> Self {
        if let Ok(font) = std::env::var(FONT_ENV_VAR) {
            if !font.trim().is_empty() {
                self.render.font_path = Some(PathBuf::from(font));
            }
        }
        self
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        value: f32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, key, value } => {
                write!(
                    f,
                    "Invalid {} = {} in config file '{}': must be a finite number above zero",
                    key,
                    value,
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("typetee").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/typetee/config.toml")
        })
}

/// Commented starter file written by `typetee config init`.
pub const DEFAULT_CONFIG: &str = r#"# typetee configuration

[sampler]
# Maximum ASCII columns sampled from an image
max_sample_width = 120
# Keep every n-th row (glyphs are taller than wide)
row_stride = 2
# Density level: 0 chunky, 1 light, 2 normal, 3 detailed, 4 ultra
density = 2
# Style palette, overrides density when set:
# standard, lineArt, solid, shaded, oldschool, newschool, irc, typewriter, emoticon
# style = "solid"
# Larger uploads are downscaled first
max_source_dimension = 2048

[layout]
# Glyph advance and line height as fractions of font size
advance_ratio = 0.6
line_height_ratio = 1.2
text_line_height_ratio = 1.5

[render]
# Font for PNG output (block glyphs when unset, or set TYPETEE_FONT)
# font_path = "/path/to/font.ttf"
# Shirt colour: black or white
shirt_color = "black"

[preview]
# On-screen preview bound
width = 460.0
height = 579.0
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sampler]\ndensity = 4\n\n[render]\nshirt_color = \"white\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.sampler.density, 4);
        assert_eq!(config.sampler.max_sample_width, 120);
        assert_eq!(config.sampler.row_stride, 2);
        assert_eq!(config.render.shirt_color, ShirtColor::White);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.preview.width, 460.0);
    }

    #[test]
    fn test_parse_error_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sampler\ndensity = ").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_non_positive_layout_ratios_rejected() {
        for key in ["advance_ratio", "line_height_ratio", "text_line_height_ratio"] {
            for value in ["0.0", "-1.2", "nan", "inf"] {
                let mut file = NamedTempFile::new().unwrap();
                writeln!(file, "[layout]\n{} = {}", key, value).unwrap();
                let err = Config::load(Some(file.path())).unwrap_err();
                match err {
                    ConfigError::InvalidValue { key: bad, .. } => {
                        assert_eq!(bad, format!("layout.{}", key));
                    }
                    other => panic!("expected InvalidValue for {key} = {value}, got {other}"),
                }
            }
        }
    }

    #[test]
    fn test_zero_preview_width_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[preview]\nwidth = 0.0").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("preview.width"));
    }

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.sampler.style = Some("lineArt".to_string());
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.sampler.palette().name(), "lineArt");
    }

    #[test]
    fn test_tunables_from_layout() {
        let layout = LayoutConfig {
            advance_ratio: 0.55,
            ..LayoutConfig::default()
        };
        let tunables = layout.tunables();
        assert_eq!(tunables.artwork.advance_ratio, 0.55);
        assert_eq!(tunables.artwork.line_height_ratio, 1.2);
    }

    #[test]
    fn test_default_path_ends_with_typetee() {
        assert!(default_path().ends_with("typetee/config.toml"));
    }
}
