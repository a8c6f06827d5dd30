use wasm_bindgen::prelude::*;

use crate::domain::config::RopeConfig;
use crate::domain::vec3::Vec3;
use crate::systems::sag::SagStep;

use super::batch::RopeBatchCore;
use super::perf_stats::PerfStats;
use super::RopeCore;

fn flat(points: &[Vec3]) -> Vec<f32> {
    points.iter().flat_map(|p| p.to_array()).collect()
}

fn flat_opt(point: Option<Vec3>) -> Vec<f32> {
    point.map(|p| p.to_array().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub struct Rope {
    core: RopeCore,
}

#[wasm_bindgen]
impl Rope {
    /// Rope with default config; set both anchors before rendering
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: RopeCore::new() }
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: String) -> Result<Rope, JsValue> {
        let config = RopeConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        let core = RopeCore::with_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === ANCHORS ===

    pub fn set_start(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_start(Some(Vec3::new(x, y, z)));
    }

    pub fn set_end(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_end(Some(Vec3::new(x, y, z)));
    }

    pub fn clear_start(&mut self) {
        self.core.set_start(None);
    }

    pub fn clear_end(&mut self) {
        self.core.set_end(None);
    }

    pub fn reinitialize(&mut self) {
        self.core.reinitialize();
    }

    // === TICKS ===

    /// Fixed-rate step. Returns true while the rope is still moving.
    pub fn tick_physics(&mut self, dt: f32) -> bool {
        matches!(self.core.tick_physics(dt), Some(SagStep::Moving))
    }

    /// Per-frame resample. Returns false when an anchor is missing.
    pub fn tick_render(&mut self) -> bool {
        self.core.tick_render().is_some()
    }

    // === OUTPUTS ===

    /// Copy of the polyline as [x0, y0, z0, x1, ...]
    pub fn points(&self) -> Vec<f32> {
        flat(self.core.points())
    }

    /// Zero-copy view: read `points_len()` f32s from wasm memory
    pub fn points_ptr(&self) -> *const f32 {
        self.core.points_ptr()
    }

    pub fn points_len(&self) -> usize {
        self.core.points_len_floats()
    }

    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> u32 {
        self.core.points().len() as u32
    }

    pub fn set_attachment_enabled(&mut self, enabled: bool) {
        self.core.set_attachment_enabled(enabled);
    }

    /// [x, y, z] of the curve at t=0.5, empty when disabled or not rendered yet
    pub fn attachment(&self) -> Vec<f32> {
        flat_opt(self.core.attachment())
    }

    /// DEBUG: raw target midpoint, empty without both anchors
    pub fn target_midpoint(&self) -> Vec<f32> {
        flat_opt(self.core.target_midpoint())
    }

    #[wasm_bindgen(getter)]
    pub fn current_value(&self) -> f32 { self.core.sag_state().current_value }

    #[wasm_bindgen(getter)]
    pub fn target_value(&self) -> f32 { self.core.sag_state().target_value }

    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> f32 { self.core.sag_state().current_velocity }

    #[wasm_bindgen(getter)]
    pub fn at_rest(&self) -> bool { self.core.is_at_rest() }

    // === PERF ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent ropes ticked in one call (parallel with the `parallel` feature)
#[wasm_bindgen]
pub struct RopeBatch {
    core: RopeBatchCore,
}

#[wasm_bindgen]
impl RopeBatch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: RopeBatchCore::new() }
    }

    /// Add a rope with default config. Returns its id.
    pub fn add_rope(&mut self) -> u32 {
        self.core.add(RopeCore::new())
    }

    #[wasm_bindgen(js_name = addRopeWithConfigJson)]
    pub fn add_rope_with_config_json(&mut self, json: String) -> Result<u32, JsValue> {
        let config = RopeConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        let rope = RopeCore::with_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.core.add(rope))
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> u32 {
        self.core.len() as u32
    }

    /// Returns false for an unknown id
    #[allow(clippy::too_many_arguments)]
    pub fn set_anchors(&mut self, id: u32, sx: f32, sy: f32, sz: f32, ex: f32, ey: f32, ez: f32) -> bool {
        self.core
            .set_anchors(id, Some(Vec3::new(sx, sy, sz)), Some(Vec3::new(ex, ey, ez)))
    }

    /// Returns how many ropes are still moving
    pub fn tick_physics(&mut self, dt: f32) -> u32 {
        self.core.tick_physics(dt) as u32
    }

    /// Returns how many ropes rendered
    pub fn tick_render(&mut self) -> u32 {
        self.core.tick_render() as u32
    }

    /// Flat xyz points of one rope, empty for an unknown id
    pub fn points(&self, id: u32) -> Vec<f32> {
        self.core.get(id).map(|r| flat(r.points())).unwrap_or_default()
    }
}

impl Default for RopeBatch {
    fn default() -> Self {
        Self::new()
    }
}
