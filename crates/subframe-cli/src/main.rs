mod preview;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use subframe_core::hash::hash_image;
use subframe_core::{BoundingBox, SubframeConfig, SubtitleFrame};
use subframe_render::TrackRenderer;

const DEFAULT_CONFIG_FILE: &str = "subframe.toml";

#[derive(Parser)]
#[command(
    name = "subframe",
    version,
    about = "subframe — subtitle bitmap compositor",
    long_about = "Composes the bitmap regions of decoded subtitle frames into single RGBA images.\nFrames are read from JSON fixtures; composed images are reported, never written."
)]
struct Cli {
    /// Path to a subframe.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary, bounding box and rectangles of a frame
    Inspect {
        /// Path to a subtitle frame in JSON form
        #[arg()]
        file: PathBuf,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compose a frame and report on the resulting image
    Render {
        /// Path to a subtitle frame in JSON form
        #[arg()]
        file: PathBuf,

        /// Print an ASCII preview of the composed image
        #[arg(long)]
        preview: bool,

        /// Minimum alpha for a pixel to count as visible (overrides config)
        #[arg(long)]
        threshold: Option<u8>,
    },

    /// Compose every frame of a JSON array of frames
    RenderAll {
        /// Path to a JSON array of subtitle frames
        #[arg()]
        file: PathBuf,

        /// Compose frames one after another instead of on the thread pool
        #[arg(long)]
        sequential: bool,
    },

    /// Display version and engine info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Reports go to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { file, json } => cmd_inspect(&file, json),
        Commands::Render {
            file,
            preview,
            threshold,
        } => cmd_render(&file, preview, threshold, &config),
        Commands::RenderAll { file, sequential } => cmd_render_all(&file, sequential, &config),
        Commands::Info => cmd_info(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<SubframeConfig> {
    match path {
        Some(path) => SubframeConfig::load_from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                SubframeConfig::load_from_file(default)
                    .with_context(|| format!("failed to load config: {}", default.display()))
            } else {
                Ok(SubframeConfig::default())
            }
        }
    }
}

fn read_frame(file: &Path) -> Result<SubtitleFrame> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read file: {}", file.display()))?;
    SubtitleFrame::from_json(&source)
        .with_context(|| format!("failed to parse subtitle frame: {}", file.display()))
}

#[derive(Serialize)]
struct InspectReport<'a> {
    summary: String,
    bounds: BoundingBox,
    rects: Vec<RectReport<'a>>,
}

#[derive(Serialize)]
struct RectReport<'a> {
    index: usize,
    kind: &'a subframe_core::RectKind,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    stride: usize,
    has_palette: bool,
}

fn cmd_inspect(file: &Path, json: bool) -> Result<()> {
    let frame = read_frame(file)?;
    let bounds = subframe_render::compute_bounding_box(&frame);
    let summary = subframe_render::summarize(Some(&frame));
    tracing::debug!("{}", summary);

    if json {
        let report = InspectReport {
            summary,
            bounds,
            rects: frame
                .rects()
                .iter()
                .enumerate()
                .map(|(index, rect)| RectReport {
                    index,
                    kind: &rect.kind,
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    stride: rect.stride,
                    has_palette: rect.palette.is_some(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔍 {}", file.display());
    println!("   {}", summary);
    println!("   bounds: {}", bounds);
    for (index, rect) in frame.rects().iter().enumerate() {
        println!("   {}", subframe_render::describe_rect(index, rect));
    }
    Ok(())
}

fn cmd_render(file: &Path, show_preview: bool, threshold: Option<u8>, config: &SubframeConfig) -> Result<()> {
    let frame = read_frame(file)?;
    let composition = subframe_render::compose(&frame)
        .with_context(|| format!("failed to compose {}", file.display()))?;

    let mut preview_config = config.preview.clone();
    if let Some(threshold) = threshold {
        preview_config.threshold = threshold;
    }

    let image = &composition.image;
    println!("🎞  {}", file.display());
    println!("   bounds:  {}", composition.bounds);
    println!("   size:    {}x{}", image.width, image.height);
    println!(
        "   visible: {} of {} pixels (alpha >= {})",
        image.count_visible(preview_config.threshold),
        image.pixel_count(),
        preview_config.threshold
    );
    println!("   hash:    {}", hash_image(image));

    if show_preview {
        print!("{}", preview::ascii_preview(image, &preview_config));
    }
    Ok(())
}

fn cmd_render_all(file: &Path, sequential: bool, config: &SubframeConfig) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read file: {}", file.display()))?;
    let frames: Vec<SubtitleFrame> = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse subtitle track: {}", file.display()))?;

    let renderer = TrackRenderer::new().with_parallel(config.render.parallel && !sequential);
    let result = renderer
        .render(&frames)
        .with_context(|| format!("failed to compose track {}", file.display()))?;

    println!("🎞  {} ({} frames)", file.display(), result.len());
    for (index, (frame, composition)) in frames.iter().zip(&result.compositions).enumerate() {
        println!(
            "   [{}] {} -> {} hash={}",
            index,
            subframe_render::summarize(Some(frame)),
            composition.bounds,
            hash_image(&composition.image).short()
        );
    }
    println!("   track hash: {}", result.content_hash());
    Ok(())
}

fn cmd_info(config: &SubframeConfig) -> Result<()> {
    println!("🎬 subframe subtitle compositor");
    println!("   Version:   {}", env!("CARGO_PKG_VERSION"));
    println!("   Input:     JSON subtitle frames (bitmap, text, ass, other rectangles)");
    println!("   Output:    RGBA8, straight alpha");
    println!(
        "   Tracks:    {}",
        if config.render.parallel {
            "parallel (rayon)"
        } else {
            "sequential"
        }
    );
    println!("   Log level: {}", config.log.level);
    Ok(())
}
