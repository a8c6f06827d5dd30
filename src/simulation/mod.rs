//! Rope - orchestrates one sagging rope
//!
//! Two explicit entry points replace engine lifecycle hooks:
//! - `tick_physics(dt)`: fixed-rate, advances the sag spring
//! - `tick_render()`: per frame, recomputes the target from the anchors and
//!   samples the curve into the point buffer
//!
//! The target is only refreshed on render ticks. Physics ticks chase whatever
//! target the last render tick computed.

use crate::domain::config::RopeConfig;
use crate::domain::vec3::Vec3;
use crate::systems::sag::{SagState, SagStep};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "render/render_extract.rs"]
mod render_extract;
mod batch;
mod facade;

pub use batch::RopeBatchCore;
pub use facade::{Rope, RopeBatch};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A single rope instance. Owns its sag state exclusively.
pub struct RopeCore {
    config: RopeConfig,

    // Anchors, supplied by the host every frame
    start: Option<Vec3>,
    end: Option<Vec3>,

    // State
    sag: SagState,
    seeded: bool,
    physics_ticks: u64,
    render_ticks: u64,

    // Outputs
    points: Vec<Vec3>,
    attachment_enabled: bool,
    attachment: Option<Vec3>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl RopeCore {
    /// Rope with default config and no anchors yet
    pub fn new() -> Self {
        init::create_rope_core(RopeConfig::default())
    }

    /// Rope with a validated config
    pub fn with_config(config: RopeConfig) -> Result<Self, String> {
        Ok(init::create_rope_core(config.validate()?))
    }

    /// Rope seeded at rest from its anchors
    pub fn with_anchors(config: RopeConfig, start: Vec3, end: Vec3) -> Result<Self, String> {
        let mut rope = Self::with_config(config)?;
        rope.set_anchors(Some(start), Some(end));
        Ok(rope)
    }

    pub fn config(&self) -> &RopeConfig { &self.config }

    /// Replace the config live. Sag state is kept.
    pub fn set_config(&mut self, config: RopeConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::set_config(self, RopeConfig::from_json(json)?)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    // === ANCHORS ===

    pub fn set_start(&mut self, start: Option<Vec3>) {
        commands::set_start(self, start);
    }

    pub fn set_end(&mut self, end: Option<Vec3>) {
        commands::set_end(self, end);
    }

    pub fn set_anchors(&mut self, start: Option<Vec3>, end: Option<Vec3>) {
        commands::set_anchors(self, start, end);
    }

    pub fn start(&self) -> Option<Vec3> { self.start }

    pub fn end(&self) -> Option<Vec3> { self.end }

    /// Drop the sag state and reseed it from the current anchors (if both set)
    pub fn reinitialize(&mut self) {
        commands::reinitialize(self);
    }

    // === TICKS ===

    /// Advance the sag spring one fixed step.
    ///
    /// `None` when skipped: non-positive or non-finite `dt`, or the rope has
    /// never seen both anchors.
    pub fn tick_physics(&mut self, dt: f32) -> Option<SagStep> {
        step_physics::tick_physics(self, dt)
    }

    /// Recompute the target and resample the curve.
    ///
    /// `None` (and nothing written) when either anchor is unset.
    pub fn tick_render(&mut self) -> Option<&[Vec3]> {
        render_extract::tick_render(self, None)
    }

    /// Like [`tick_render`](Self::tick_render), also writing the t=0.5 curve
    /// point into the caller's attachment slot.
    pub fn tick_render_with(&mut self, attachment: Option<&mut Vec3>) -> Option<&[Vec3]> {
        render_extract::tick_render(self, attachment)
    }

    // === OUTPUTS ===

    /// Points from the last successful render tick
    pub fn points(&self) -> &[Vec3] { &self.points }

    pub fn points_ptr(&self) -> *const f32 {
        render_extract::points_ptr(self)
    }

    /// Number of floats behind `points_ptr` (3 per point)
    pub fn points_len_floats(&self) -> usize {
        self.points.len() * 3
    }

    /// Keep the t=0.5 curve point cached on each render tick
    pub fn set_attachment_enabled(&mut self, enabled: bool) {
        settings::set_attachment_enabled(self, enabled);
    }

    pub fn attachment(&self) -> Option<Vec3> { self.attachment }

    /// Un-smoothed midpoint the spring is heading to, for debug drawing
    pub fn target_midpoint(&self) -> Option<Vec3> {
        render_extract::target_midpoint(self)
    }

    pub fn sag_state(&self) -> &SagState { &self.sag }

    pub fn is_seeded(&self) -> bool { self.seeded }

    pub fn is_at_rest(&self) -> bool {
        self.seeded && self.sag.is_at_rest()
    }

    pub fn physics_ticks(&self) -> u64 { self.physics_ticks }

    pub fn render_ticks(&self) -> u64 { self.render_ticks }

    // === PERF ===

    /// Enable or disable tick timing (adds clock reads when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Zeros when perf disabled
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

impl Default for RopeCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
