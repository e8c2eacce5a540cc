//! Subcommand handlers.

use std::path::{Path, PathBuf};

use super::args::{ConfigAction, ConvertArgs, DesignArgs, ExportArgs, RenderArgs, SamplingArgs};
use super::enums::Target;
use crate::ascii::{load_image, sample, AsciiArtwork, SampleSettings};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::design::{
    export as export_design, preview_on_mockup, render as render_design, Artifact, ArtifactFormat,
    Design, DesignError, RenderTarget,
};
use crate::error::{Error, Result};
use crate::layout::{ScaleSelector, SizingMode};
use crate::overlay::{OverlayBackground, OverlaySizing, TextOverlay};
use crate::palette::{self, Palette};
use crate::render::{FontGlyphs, GlyphSource, Viewport};

fn resolve_palette(sampling: &SamplingArgs, config: &Config) -> Palette {
    match (sampling.style.as_deref(), sampling.density) {
        (Some(style), _) => Palette::resolve(Some(style), None),
        // An explicit density beats a style from the config file.
        (None, Some(density)) => Palette::resolve(None, Some(density)),
        (None, None) => config.sampler.palette(),
    }
}

fn sample_settings(sampling: &SamplingArgs, config: &Config) -> SampleSettings {
    SampleSettings {
        max_sample_width: sampling
            .max_width
            .unwrap_or(config.sampler.max_sample_width),
        row_stride: config.sampler.row_stride,
    }
}

async fn convert_image(
    path: &Path,
    sampling: &SamplingArgs,
    config: &Config,
) -> Result<(AsciiArtwork, Palette)> {
    let palette = resolve_palette(sampling, config);
    let image = load_image(path)
        .await?
        .downscale_to_fit(config.sampler.max_source_dimension);
    let artwork = sample(&image, &palette, &sample_settings(sampling, config))?;
    Ok((artwork, palette))
}

async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::Write {
            path: path.display().to_string(),
            source: e,
        })?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Handle `typetee convert`.
pub async fn convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let (artwork, palette) = convert_image(&args.image, &args.sampling, config).await?;
    log::info!(
        "Converted {} to {} rows x {} columns with the '{}' palette",
        args.image.display(),
        artwork.row_count(),
        artwork.max_columns(),
        palette.name()
    );
    let text = artwork.to_text();
    match &args.output {
        Some(path) => write_output(path, text.as_bytes()).await,
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Assemble a [`Design`] from flags, config, and any uploaded content.
pub async fn build_design(args: &DesignArgs, config: &Config) -> Result<Design> {
    let mut design = if let Some(path) = &args.image {
        let (artwork, palette) = convert_image(path, &args.sampling, config).await?;
        Design::ascii(artwork, palette)
    } else if let Some(path) = &args.ascii {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| crate::ascii::SampleError::Io {
                path: path.clone(),
                source: e,
            })?;
        Design::ascii(
            AsciiArtwork::from_text(&text),
            resolve_palette(&args.sampling, config),
        )
    } else {
        Design::text(args.text.clone().unwrap_or_default())
    };

    design.shirt_color = args
        .shirt
        .map(Into::into)
        .unwrap_or(config.render.shirt_color);
    design.placement = args.placement.into();
    design.size = args.size.into();
    design.font = args.font.into();
    design.align = args.align.into();
    design.scale = ScaleSelector::new(args.scale);
    design.sizing = if args.fit {
        SizingMode::FitToCanvas
    } else {
        SizingMode::ExplicitScale
    };
    design.tunables = config.layout.tunables();
    design.overlay = args.overlay.as_ref().map(|text| TextOverlay {
        text: text.clone(),
        band: args.band.into(),
        align: args.overlay_align.into(),
        background: if args.overlay_transparent {
            OverlayBackground::Transparent
        } else {
            OverlayBackground::Solid
        },
        sizing: args
            .overlay_size
            .map(OverlaySizing::Explicit)
            .unwrap_or_default(),
    });
    Ok(design)
}

/// Font file from flags or config, else font-free block glyphs.
pub fn glyph_source(
    args: &DesignArgs,
    config: &Config,
    design: &Design,
) -> Result<Box<dyn GlyphSource>> {
    let font = args
        .font_file
        .as_ref()
        .or(config.render.font_path.as_ref());
    match font {
        Some(path) => Ok(Box::new(FontGlyphs::load(path)?)),
        None => {
            log::debug!("No font configured, using block glyphs");
            Ok(Box::new(design.block_glyphs()))
        }
    }
}

/// Turn an empty-content failure into the placeholder hint.
fn placeholder_or<T>(design: &Design, result: std::result::Result<T, DesignError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_empty_content() => {
            println!("{}", design.mode.placeholder());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle `typetee render`.
pub async fn render(args: &RenderArgs, config: &Config) -> Result<()> {
    let design = build_design(&args.design, config).await?;
    let glyphs = glyph_source(&args.design, config, &design)?;

    if let Some(mockup_path) = &args.mockup {
        let mockup = load_image(mockup_path).await?;
        let Some(shirt) = placeholder_or(
            &design,
            preview_on_mockup(&design, mockup.as_rgba(), glyphs.as_ref()),
        )?
        else {
            return Ok(());
        };
        let bytes = crate::render::encode_png(&shirt)?;
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("typetee-mockup.png"));
        return write_output(&path, &bytes).await;
    }

    let (target, viewport) = match args.target {
        Target::Preview => (
            RenderTarget::Preview {
                max_width: config.preview.width,
                max_height: config.preview.height,
            },
            None,
        ),
        Target::Export => (
            RenderTarget::Export,
            // Keep export SVGs small on screen; the viewBox carries full size.
            Some(Viewport::new(config.preview.width, config.preview.height)),
        ),
    };
    let format: ArtifactFormat = args.format.into();
    let viewport = match format {
        ArtifactFormat::Svg => viewport,
        ArtifactFormat::Png => None,
    };
    let Some(artifact) = placeholder_or(
        &design,
        render_design(&design, target, format, viewport, glyphs.as_ref()),
    )?
    else {
        return Ok(());
    };

    match (&artifact, &args.output) {
        (Artifact::Svg(markup), None) => {
            print!("{}", markup);
            Ok(())
        }
        (_, Some(path)) => write_output(path, artifact.as_bytes()).await,
        (Artifact::Png(bytes), None) => {
            let path = PathBuf::from(format!("typetee-preview.{}", format.extension()));
            write_output(&path, bytes).await
        }
    }
}

/// Path of the order metadata written next to an artifact.
pub fn order_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("order.toml")
}

/// Handle `typetee export`.
pub async fn export(args: &ExportArgs, config: &Config) -> Result<()> {
    let design = build_design(&args.design, config).await?;
    let glyphs = glyph_source(&args.design, config, &design)?;
    let format: ArtifactFormat = args.format.into();

    let Some(export) = placeholder_or(
        &design,
        export_design(&design, format, glyphs.as_ref()),
    )?
    else {
        return Ok(());
    };

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("typetee-print.{}", format.extension())));
    write_output(&path, export.artifact.as_bytes()).await?;
    let metadata = export.metadata.to_toml()?;
    write_output(&order_path(&path), metadata.as_bytes()).await?;

    println!("Artifact: {}", path.display());
    println!("Order:    {}", order_path(&path).display());
    println!("SHA-256:  {}", export.metadata.artifact_sha256);
    Ok(())
}

/// Print every palette with its glyph ramp.
pub fn list_palettes() -> Result<()> {
    palette::validate()?;
    println!("Palettes (heaviest glyph first):");
    for palette in palette::all() {
        let ramp: String = palette.chars().iter().collect();
        println!("  {:<11} {:?}", palette.name(), ramp);
    }
    println!();
    println!("Use --density <0-4> or --style <name> to select a palette.");
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>, config: &Config) {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            match config.to_toml() {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'typetee config show' to view current settings.");
                std::process::exit(1);
            }

            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
