use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use image::ImageReader;
use picbox_core::{Rect, Size, create_thumbnail, scale_to_fit};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "picbox",
    about = "Best-fit draw rectangles and thumbnails for image files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true, help_heading = "Logging")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the draw rectangle for an image inside a target area
    Fit(FitArgs),
    /// Generate a fixed-height thumbnail from an image file
    Thumb(ThumbArgs),
}

#[derive(Parser, Debug, Clone)]
struct FitArgs {
    /// Input image; its pixel size feeds the fit
    #[arg(required_unless_present = "image_size", conflicts_with = "image_size")]
    input: Option<PathBuf>,
    /// Image size as WxH (e.g. 300x100) instead of reading a file
    #[arg(long, value_name = "WxH")]
    image_size: Option<String>,
    /// Target area origin x
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true, help_heading = "Target area")]
    x: i32,
    /// Target area origin y
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true, help_heading = "Target area")]
    y: i32,
    /// Target area width
    #[arg(short = 'W', long, help_heading = "Target area")]
    width: u32,
    /// Target area height
    #[arg(short = 'H', long, help_heading = "Target area")]
    height: u32,
    /// Upscale images smaller than the target to fill it
    #[arg(long, default_value_t = false)]
    stretch: bool,
}

#[derive(Parser, Debug, Clone)]
struct ThumbArgs {
    /// Input image file
    input: PathBuf,
    /// Thumbnail height in pixels (width follows the aspect ratio)
    #[arg(long, default_value_t = 128)]
    height: u32,
    /// Output path (default: <input stem>.thumb.png next to the input)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Fit(args) => run_fit(args),
        Commands::Thumb(args) => run_thumb(args),
    }
}

fn run_fit(args: &FitArgs) -> anyhow::Result<()> {
    let image = match (&args.input, &args.image_size) {
        (_, Some(spec)) => parse_size(spec)?,
        (Some(path), None) => {
            let (w, h) = ImageReader::open(path)
                .with_context(|| format!("open {}", path.display()))?
                .into_dimensions()
                .with_context(|| format!("read dimensions of {}", path.display()))?;
            Size::new(w, h)
        }
        (None, None) => anyhow::bail!("either an input file or --image-size is required"),
    };

    let target = Rect::new(args.x, args.y, args.width, args.height);
    let result = scale_to_fit(image, target, args.stretch)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_thumb(args: &ThumbArgs) -> anyhow::Result<()> {
    let img = ImageReader::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?
        .decode()
        .with_context(|| format!("decode {}", args.input.display()))?;

    let thumb = create_thumbnail(&img, args.height)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_extension("thumb.png"));
    thumb
        .save(&out)
        .with_context(|| format!("write {}", out.display()))?;
    info!(
        width = thumb.width(),
        height = thumb.height(),
        out = %out.display(),
        "thumbnail written"
    );
    Ok(())
}

/// Parses a `WxH` size spec such as `300x100`.
fn parse_size(spec: &str) -> anyhow::Result<Size> {
    let (w, h) = spec
        .split_once(['x', 'X'])
        .with_context(|| format!("invalid size `{spec}`, expected WxH"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("bad width in `{spec}`"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("bad height in `{spec}`"))?;
    Ok(Size::new(w, h))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
