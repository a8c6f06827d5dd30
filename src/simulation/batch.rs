//! Many independent ropes ticked together
//!
//! Ropes share nothing, so with the `parallel` feature the ticks fan out
//! over rayon. Results are identical to ticking each rope by hand.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::vec3::Vec3;
use crate::systems::sag::SagStep;

use super::RopeCore;

#[derive(Default)]
pub struct RopeBatchCore {
    ropes: Vec<RopeCore>,
}

impl RopeBatchCore {
    pub fn new() -> Self {
        Self { ropes: Vec::new() }
    }

    /// Returns the rope's index
    pub fn add(&mut self, rope: RopeCore) -> u32 {
        self.ropes.push(rope);
        (self.ropes.len() - 1) as u32
    }

    pub fn len(&self) -> usize { self.ropes.len() }

    pub fn is_empty(&self) -> bool { self.ropes.is_empty() }

    pub fn get(&self, id: u32) -> Option<&RopeCore> {
        self.ropes.get(id as usize)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut RopeCore> {
        self.ropes.get_mut(id as usize)
    }

    /// Returns false for an unknown id
    pub fn set_anchors(&mut self, id: u32, start: Option<Vec3>, end: Option<Vec3>) -> bool {
        match self.get_mut(id) {
            Some(rope) => {
                rope.set_anchors(start, end);
                true
            }
            None => false,
        }
    }

    /// Advance every rope; returns how many are still moving
    pub fn tick_physics(&mut self, dt: f32) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.ropes
                .par_iter_mut()
                .map(|rope| moving(rope.tick_physics(dt)))
                .sum()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.ropes
                .iter_mut()
                .map(|rope| moving(rope.tick_physics(dt)))
                .sum()
        }
    }

    /// Resample every rope; returns how many rendered (both anchors set)
    pub fn tick_render(&mut self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.ropes
                .par_iter_mut()
                .map(|rope| rope.tick_render().is_some() as usize)
                .sum()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.ropes
                .iter_mut()
                .map(|rope| rope.tick_render().is_some() as usize)
                .sum()
        }
    }
}

#[inline]
fn moving(step: Option<SagStep>) -> usize {
    matches!(step, Some(SagStep::Moving)) as usize
}
