//! Precipitation field renderer.
//!
//! Stands in for the map host: supplies a camera, loads the sample points,
//! render config and gradient, renders one frame on the CPU and writes it
//! as a PNG.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use field_common::GeoPoint;
use renderer::PrecipitationLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{JobSources, RenderJob};

#[derive(Parser, Debug)]
#[command(name = "field-render")]
#[command(about = "Render a precipitation intensity field to PNG")]
struct Args {
    /// JSON file with sample points
    #[arg(short, long, env = "POINTS_FILE")]
    points: PathBuf,

    /// YAML render config (partial, merged over defaults)
    #[arg(short, long, env = "RENDER_CONFIG")]
    config: Option<PathBuf>,

    /// JSON gradient style
    #[arg(short, long, env = "GRADIENT_STYLE")]
    gradient: Option<PathBuf>,

    /// Camera center longitude
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    lng: f64,

    /// Camera center latitude
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    lat: f64,

    /// Camera zoom level
    #[arg(short, long, default_value = "3.0")]
    zoom: f64,

    /// Viewport width in pixels
    #[arg(long, default_value = "1024")]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "768")]
    height: u32,

    /// Render worker threads (0 = one per core)
    #[arg(long, env = "RENDER_THREADS", default_value = "0")]
    threads: usize,

    /// Output PNG path
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let job = RenderJob::load(&JobSources {
        points: args.points,
        config: args.config,
        gradient: args.gradient,
        center: GeoPoint::new(args.lng, args.lat),
        zoom: args.zoom,
        width: args.width,
        height: args.height,
        output: args.output,
    })?;

    info!(
        points = job.points.len(),
        lng = job.camera.center.lng,
        lat = job.camera.center.lat,
        zoom = job.camera.zoom,
        "Starting precipitation render"
    );

    let layer =
        PrecipitationLayer::with_threads(job.config, job.points, job.gradient, args.threads)?;

    let start = Instant::now();
    let frame = layer.render(&job.camera)?;
    let png = frame.to_png()?;
    std::fs::write(&job.output, &png)
        .with_context(|| format!("writing {}", job.output.display()))?;

    info!(
        output = %job.output.display(),
        width = frame.width,
        height = frame.height,
        visible = frame.visible_pixels(),
        bytes = png.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Wrote frame"
    );

    Ok(())
}
