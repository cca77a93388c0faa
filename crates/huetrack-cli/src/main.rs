//! huetrack CLI — estimate a colored target's offset from the frame center.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use huetrack::{draw_debug_overlay, ColorRange, EstimateConfig, Estimator, StillSource};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "huetrack")]
#[command(about = "Estimate a colored target's physical offset from the frame center")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the target offset in an image.
    Detect(CliDetectArgs),

    /// Print the default estimation configuration (JSON).
    DefaultConfig,
}

#[derive(Debug, Clone, Args)]
struct CliDetectArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the estimate (JSON). Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to write the working frame with debug markers drawn in.
    #[arg(long)]
    annotated: Option<PathBuf>,

    /// Lower HSV bound, inclusive (h in 0-180, s and v in 0-255).
    #[arg(long, value_parser = parse_hsv, default_value = "110,50,50")]
    lower: [u8; 3],

    /// Upper HSV bound, inclusive.
    #[arg(long, value_parser = parse_hsv, default_value = "130,255,255")]
    upper: [u8; 3],

    /// Minimum enclosing-circle radius (px) for a blob to qualify.
    #[arg(long, default_value = "10.0")]
    min_radius: f32,

    /// Device resolution in pixels per inch for the centimeter conversion.
    #[arg(long, default_value = "72.0")]
    dpi: f64,

    /// Working width frames are normalized to before detection (0 = off).
    #[arg(long, default_value = "640")]
    width: u32,

    /// Erosion iterations for mask cleanup.
    #[arg(long, default_value = "2")]
    erode: u8,

    /// Dilation iterations for mask cleanup.
    #[arg(long, default_value = "2")]
    dilate: u8,
}

impl CliDetectArgs {
    fn to_config(&self) -> CliResult<EstimateConfig> {
        let color_range = ColorRange {
            lower: self.lower,
            upper: self.upper,
        };
        if !color_range.is_valid() {
            return Err("invalid color range: --lower must be <= --upper componentwise".into());
        }
        let mut config = EstimateConfig {
            color_range,
            min_radius_px: self.min_radius,
            dpi: self.dpi,
            working_width: self.width,
            ..Default::default()
        };
        config.morph.erode_iters = self.erode;
        config.morph.dilate_iters = self.dilate;
        Ok(config)
    }
}

/// Parse an `h,s,v` byte triple.
fn parse_hsv(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected an h,s,v triple, got `{s}`"));
    }
    let mut out = [0u8; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|e| format!("invalid component `{part}`: {e}"))?;
    }
    Ok(out)
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(args) => run_detect(&args),
        Commands::DefaultConfig => run_default_config(),
    }
}

// ── default-config ─────────────────────────────────────────────────────

fn run_default_config() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&EstimateConfig::default())?);
    Ok(())
}

// ── detect ─────────────────────────────────────────────────────────────

fn run_detect(args: &CliDetectArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());

    let img = image::open(&args.image).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", args.image.display(), e).into()
    })?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    tracing::info!("Image size: {}x{}", w, h);

    let estimator = Estimator::with_config(args.to_config()?);
    let mut source = StillSource::new(rgb.clone());
    let estimate = estimator.estimate(&mut source)?;

    match &estimate.detection {
        Some(det) => tracing::info!(
            "Target at ({}, {}) px: offset ({:+} px, {:+} px) = ({:+.2} cm, {:+.2} cm)",
            det.center_px[0],
            det.center_px[1],
            det.offset_px.dx,
            det.offset_px.dy,
            det.offset_cm.width_cm,
            det.offset_cm.height_cm,
        ),
        None => tracing::info!("No qualifying target found"),
    }

    let json = serde_json::to_string_pretty(&estimate)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &json)?;
            tracing::info!("Estimate written to {}", path.display());
        }
        None => println!("{json}"),
    }

    if let Some(path) = &args.annotated {
        // Redraw on a frame matching the working dimensions the estimator saw.
        let [fw, fh] = estimate.frame_size;
        let mut canvas = if (fw, fh) == (w, h) {
            rgb
        } else {
            image::imageops::resize(&rgb, fw, fh, image::imageops::FilterType::Triangle)
        };
        draw_debug_overlay(&mut canvas, &estimate);
        canvas.save(path)?;
        tracing::info!("Annotated frame written to {}", path.display());
    }

    Ok(())
}
