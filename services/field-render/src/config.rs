//! Loading render inputs from files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use field_common::{CameraState, GeoPoint, RenderConfig, RenderConfigPatch, SamplePoint};
use renderer::{Gradient, GradientStyle};
use tracing::info;

/// Everything needed to render one frame.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub camera: CameraState,
    pub config: RenderConfig,
    pub points: Vec<SamplePoint>,
    pub gradient: Gradient,
    pub output: PathBuf,
}

/// File locations and camera parameters from the command line.
#[derive(Debug, Clone)]
pub struct JobSources {
    pub points: PathBuf,
    pub config: Option<PathBuf>,
    pub gradient: Option<PathBuf>,
    pub center: GeoPoint,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

impl RenderJob {
    /// Read points, config and gradient from disk.
    ///
    /// A missing config or gradient file falls back to the defaults.
    pub fn load(sources: &JobSources) -> Result<Self> {
        let points = SamplePoint::list_from_file(&sources.points)
            .with_context(|| format!("reading points from {}", sources.points.display()))?;

        let config = match &sources.config {
            Some(path) => {
                let patch = RenderConfigPatch::from_file(path)
                    .with_context(|| format!("reading config from {}", path.display()))?;
                RenderConfig::default().merged(&patch)?
            }
            None => RenderConfig::default(),
        };

        let gradient = match &sources.gradient {
            Some(path) => {
                let style = GradientStyle::from_file(path)
                    .with_context(|| format!("reading gradient from {}", path.display()))?;
                info!(style = %style.name, "Loaded gradient style");
                style.to_gradient()?
            }
            None => Gradient::default(),
        };

        let camera = CameraState::new(
            sources.center,
            sources.zoom,
            sources.width as f64,
            sources.height as f64,
        );
        camera.validate()?;

        Ok(Self {
            camera,
            config,
            points,
            gradient,
            output: sources.output.clone(),
        })
    }
}
