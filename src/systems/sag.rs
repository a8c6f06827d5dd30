//! Sag integrator - damped spring on the rope midpoint height
//!
//! One scalar degree of freedom: how far the midpoint currently droops.
//! Advanced on the fixed physics tick with semi-implicit Euler
//! (velocity first, then position with the new velocity).
//!
//! Stability: explicit integration, only stable while `stiffness * dt` stays
//! small. Tick at a fixed physics rate, never with the variable render delta.
//! A rope that oscillates forever or blows up is mistuned, not broken.

use crate::domain::config::RopeConfig;

/// Mutable simulation state carried across ticks.
///
/// `current_value`/`current_velocity` are written only by [`advance`];
/// `target_value` only by the render tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SagState {
    pub current_value: f32,
    pub current_velocity: f32,
    pub target_value: f32,
}

/// Outcome of one integrator step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SagStep {
    Moving,
    /// Snapped exactly onto the target with zero velocity
    Settled,
}

impl SagState {
    /// At rest on `value` (value == target, zero velocity)
    pub fn seeded(value: f32) -> Self {
        Self {
            current_value: value,
            current_velocity: 0.0,
            target_value: value,
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.current_value == self.target_value && self.current_velocity == 0.0
    }
}

/// Advance the spring one fixed step toward `target`.
///
/// Once inside both epsilons the state snaps onto the target, which makes
/// `value == target, velocity == 0` an exact fixed point.
pub fn advance(dt: f32, target: f32, config: &RopeConfig, state: &mut SagState) -> SagStep {
    let damping_factor = (1.0 - config.damping * dt).max(0.0);
    let acceleration = (target - state.current_value) * config.stiffness * dt;

    state.current_velocity = state.current_velocity * damping_factor + acceleration;
    state.current_value += state.current_velocity * dt;

    if (state.current_value - target).abs() < config.value_epsilon
        && state.current_velocity.abs() < config.velocity_epsilon
    {
        state.current_value = target;
        state.current_velocity = 0.0;
        return SagStep::Settled;
    }

    SagStep::Moving
}
