pub mod curve;
pub mod sag;

pub use curve::{bezier_point, compute_target, sample, sample_into, CurveSamples, SagTarget};
pub use sag::{advance, SagState, SagStep};
