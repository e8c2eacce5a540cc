//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{
    Args, Command, ConfigAction, ConvertArgs, DesignArgs, ExportArgs, PaletteAction, RenderArgs,
    SamplingArgs,
};
pub use commands::{
    build_design, convert, export, glyph_source, handle_config_action, list_palettes, order_path,
    render,
};
pub use enums::{Align, BandPosition, Font, Format, Shirt, Side, Size, Target};
