pub mod config;
pub mod vec3;

pub use config::{RopeConfig, MAX_SEGMENTS, MIN_SEGMENTS};
pub use vec3::Vec3;
