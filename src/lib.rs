//! typetee library crate.
//!
//! The t-shirt design pipeline: image sampling into ASCII art, print-layout
//! solving, raster and vector rendering, and caption overlays.
//!
//! ```text
//! image ──▶ ascii::sample ──▶ AsciiArtwork ─┐
//!                                           ├─▶ layout::solve_layout ──▶ render::{svg, raster}
//! typed text ───────────────────────────────┘            ▲
//!                               overlay::composite_overlay┘
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod design;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod palette;
pub mod render;

pub use error::{Error, Result};
