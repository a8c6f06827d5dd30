use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) physics_ms: f64,
    pub(super) render_ms: f64,
    pub(super) physics_ticks: u32,
    pub(super) render_ticks: u32,
    pub(super) skipped_renders: u32,
    pub(super) settled_ticks: u32,
    pub(super) points_written: u32,
    pub(super) settled: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Duration of the last physics tick
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    /// Duration of the last render tick
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ticks(&self) -> u32 { self.physics_ticks }
    #[wasm_bindgen(getter)]
    pub fn render_ticks(&self) -> u32 { self.render_ticks }
    #[wasm_bindgen(getter)]
    pub fn skipped_renders(&self) -> u32 { self.skipped_renders }
    #[wasm_bindgen(getter)]
    pub fn settled_ticks(&self) -> u32 { self.settled_ticks }
    #[wasm_bindgen(getter)]
    pub fn points_written(&self) -> u32 { self.points_written }
    #[wasm_bindgen(getter)]
    pub fn settled(&self) -> bool { self.settled }
}
