//! Owned layer state with replace-and-swap updates.
//!
//! A [`PrecipitationLayer`] holds the committed config, sample set and
//! gradient. Every update builds new state and swaps it in whole; a frame
//! renders from a [`FrameSnapshot`] taken at its start, so updates made
//! while a frame is in flight are only seen by the next frame.

use std::sync::Arc;

use field_common::{
    validate_points, CameraState, FieldError, FieldResult, GeoPoint, RenderConfig,
    RenderConfigPatch, SamplePoint,
};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, warn};

use crate::blend::blend_intensity;
use crate::evaluator::{evaluate, render_frame, Frame};
use crate::gradient::{Gradient, Rgba};

/// Immutable view of the layer for one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub config: RenderConfig,
    pub points: Arc<[SamplePoint]>,
    pub gradient: Arc<Gradient>,
}

impl FrameSnapshot {
    /// Shade one NDC position.
    pub fn evaluate(&self, ndc: (f64, f64), camera: &CameraState) -> Rgba {
        evaluate(ndc, camera, &self.config, &self.points, &self.gradient)
    }

    /// Blended intensity before color lookup.
    pub fn raw_value_at(&self, location: GeoPoint) -> f64 {
        blend_intensity(location, &self.points, &self.config)
    }

    /// Render the full viewport.
    pub fn render(&self, camera: &CameraState) -> FieldResult<Frame> {
        render_frame(camera, &self.config, &self.points, &self.gradient)
    }

    /// Samples whose normalized value is above zero.
    pub fn active_point_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| self.config.normalize_value(p.value) > 0.0)
            .count()
    }
}

/// Build the worker pool that shades frame rows. `threads == 0` lets rayon
/// pick one thread per core.
fn build_render_pool(threads: usize) -> FieldResult<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("field-render-{}", i))
        .build()
        .map_err(|e| FieldError::Initialization(format!("render thread pool: {}", e)))
}

/// The precipitation field layer.
#[derive(Debug, Clone)]
pub struct PrecipitationLayer {
    state: FrameSnapshot,
    pool: Arc<ThreadPool>,
}

impl PrecipitationLayer {
    /// Activate a layer with one render thread per core.
    ///
    /// Invalid config, points or gradient fail with their configuration
    /// error. A render pool that cannot be built fails with
    /// [`FieldError::Initialization`]. Either way no layer exists to render
    /// with.
    pub fn new(
        config: RenderConfig,
        points: Vec<SamplePoint>,
        gradient: Gradient,
    ) -> FieldResult<Self> {
        Self::with_threads(config, points, gradient, 0)
    }

    /// Activate a layer whose frames render on `threads` worker threads.
    pub fn with_threads(
        config: RenderConfig,
        points: Vec<SamplePoint>,
        gradient: Gradient,
        threads: usize,
    ) -> FieldResult<Self> {
        let activate = || -> FieldResult<Self> {
            config.validate()?;
            validate_points(&points)?;
            let gradient = Gradient::new(gradient.stops().to_vec())?;
            let pool = build_render_pool(threads)?;
            Ok(Self {
                state: FrameSnapshot {
                    config,
                    points: points.into(),
                    gradient: Arc::new(gradient),
                },
                pool: Arc::new(pool),
            })
        };

        match activate() {
            Ok(layer) => {
                info!(
                    points = layer.state.points.len(),
                    radius_km = config.influence_radius,
                    steepness = config.falloff_steepness,
                    bands = layer.state.gradient.stops().len(),
                    threads = layer.pool.current_num_threads(),
                    "Activated precipitation layer"
                );
                Ok(layer)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    initialization = e.is_initialization_error(),
                    "Precipitation layer failed to activate"
                );
                Err(e)
            }
        }
    }

    /// State the next frame will render from.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.clone()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.state.config
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.state.points
    }

    pub fn gradient(&self) -> &Gradient {
        &self.state.gradient
    }

    /// Replace the whole sample set.
    ///
    /// More than [`field_common::MAX_SAMPLE_POINTS`] samples, or any sample
    /// with a non-finite coordinate or value, is rejected and the current set
    /// stays active.
    pub fn replace_points(&mut self, points: Vec<SamplePoint>) -> FieldResult<()> {
        if let Err(e) = validate_points(&points) {
            warn!(
                error = %e,
                submitted = points.len(),
                retained = self.state.points.len(),
                "Rejected sample point update"
            );
            return Err(e);
        }

        info!(
            previous = self.state.points.len(),
            current = points.len(),
            "Replaced sample points"
        );
        self.state.points = points.into();
        Ok(())
    }

    /// Merge a partial config update over the current config.
    pub fn update_config(&mut self, patch: &RenderConfigPatch) -> FieldResult<RenderConfig> {
        match self.state.config.merged(patch) {
            Ok(config) => {
                info!(
                    radius_km = config.influence_radius,
                    steepness = config.falloff_steepness,
                    min_value = config.min_value,
                    max_value = config.max_value,
                    "Updated render config"
                );
                self.state.config = config;
                Ok(config)
            }
            Err(e) => {
                warn!(error = %e, "Rejected render config update");
                Err(e)
            }
        }
    }

    /// Replace the config wholesale.
    pub fn replace_config(&mut self, config: RenderConfig) -> FieldResult<()> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Rejected render config replacement");
            return Err(e);
        }
        self.state.config = config;
        Ok(())
    }

    /// Swap in a new gradient table.
    pub fn replace_gradient(&mut self, gradient: Gradient) {
        info!(bands = gradient.stops().len(), "Replaced gradient");
        self.state.gradient = Arc::new(gradient);
    }

    /// Worker threads frames are rendered on.
    pub fn render_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Render a frame from the current state on the layer's pool.
    pub fn render(&self, camera: &CameraState) -> FieldResult<Frame> {
        let snapshot = self.snapshot();
        self.pool.install(|| snapshot.render(camera))
    }
}
