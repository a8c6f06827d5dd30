//! Particula Rope - sagging cable renderer in WASM
//!
//! A rope between two anchors droops by `rest_length - span`. The droop is
//! smoothed by a damped spring and drawn as a quadratic Bezier.
//!
//! Architecture:
//! - core/        - Logging utilities
//! - domain/      - Vec3 and rope config
//! - systems/     - Sag integrator and curve sampler
//! - simulation/  - RopeCore orchestration + wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the rope module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🪢 Particula rope module initialized!");
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{RopeConfig, Vec3, MAX_SEGMENTS, MIN_SEGMENTS};
pub use simulation::{PerfStats, Rope, RopeBatch, RopeBatchCore, RopeCore};
pub use systems::{SagState, SagStep, SagTarget};

// Export config limits for JS
#[wasm_bindgen]
pub fn min_segments() -> u32 { MIN_SEGMENTS }
#[wasm_bindgen]
pub fn max_segments() -> u32 { MAX_SEGMENTS }
