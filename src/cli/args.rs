//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Align, BandPosition, Font, Format, Shirt, Side, Size, Target};
use crate::layout::{SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN};

/// Turn images and text into print-ready t-shirt designs
#[derive(Parser, Debug)]
#[command(name = "typetee")]
#[command(version, about = "ASCII-art t-shirt design pipeline", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image to ASCII art
    Convert(ConvertArgs),
    /// Render a preview or print artifact
    Render(RenderArgs),
    /// Render the print artifact and write its order metadata
    Export(ExportArgs),
    /// Character palettes
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Palette selection shared by every command that samples images.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SamplingArgs {
    /// Density level: 0 chunky to 4 ultra
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub density: Option<u8>,

    /// Style palette key (overrides density), e.g. solid, lineArt, emoticon
    #[arg(long)]
    pub style: Option<String>,

    /// Maximum ASCII columns
    #[arg(long)]
    pub max_width: Option<u32>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Image to convert (JPG, PNG, WEBP, GIF, BMP)
    pub image: PathBuf,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    /// Write the art here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Parse and validate a scale selector value.
fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(SCALE_MIN..=SCALE_MAX).contains(&scale) {
        return Err(format!(
            "Scale must be between {} and {}, got {}",
            SCALE_MIN, SCALE_MAX, scale
        ));
    }
    Ok(scale)
}

/// Everything that describes the design itself.
#[derive(clap::Args, Debug, Clone)]
pub struct DesignArgs {
    /// Image to convert to ASCII art
    #[arg(long, conflicts_with_all = ["ascii", "text"])]
    pub image: Option<PathBuf>,

    /// Pre-made ASCII art file
    #[arg(long, conflicts_with = "text")]
    pub ascii: Option<PathBuf>,

    /// Typed text
    #[arg(long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    /// Scale selector; the midpoint fits the canvas exactly
    #[arg(long, default_value_t = SCALE_MIDPOINT, value_parser = parse_scale)]
    pub scale: f32,

    /// Always fit the canvas, ignoring --scale
    #[arg(long)]
    pub fit: bool,

    /// Shirt colour (default from config)
    #[arg(long)]
    pub shirt: Option<Shirt>,

    /// Print placement
    #[arg(long, default_value = "front")]
    pub placement: Side,

    /// Shirt size
    #[arg(long, default_value = "m")]
    pub size: Size,

    /// Font for typed text
    #[arg(long, default_value = "press-start")]
    pub font: Font,

    /// Alignment of typed text
    #[arg(long, default_value = "left")]
    pub align: Align,

    /// Caption drawn over the design
    #[arg(long)]
    pub overlay: Option<String>,

    /// Caption band
    #[arg(long, default_value = "bottom")]
    pub band: BandPosition,

    /// Caption alignment
    #[arg(long, default_value = "center")]
    pub overlay_align: Align,

    /// Fixed caption size step instead of fitting the band
    #[arg(long)]
    pub overlay_size: Option<f32>,

    /// Draw the caption without a band fill
    #[arg(long)]
    pub overlay_transparent: bool,

    /// Font file for PNG output (default from config or TYPETEE_FONT)
    #[arg(long)]
    pub font_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    /// Output format
    #[arg(long, default_value = "svg")]
    pub format: Format,

    /// Output resolution
    #[arg(long, default_value = "preview")]
    pub target: Target,

    /// Shirt mockup image; writes a PNG of the design on the shirt
    #[arg(long)]
    pub mockup: Option<PathBuf>,

    /// Output file (SVG goes to stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    /// Output format
    #[arg(long, default_value = "png")]
    pub format: Format,

    /// Artifact path; order metadata goes next to it
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PaletteAction {
    /// List every density and style palette
    List,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
