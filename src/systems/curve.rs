//! Curve sampler - quadratic Bezier through the sagging midpoint
//!
//! The control point sits at the anchors' midpoint horizontally; its height
//! is the smoothed sag value, not the raw target.

use crate::domain::config::RopeConfig;
use crate::domain::vec3::Vec3;

/// Where the rope wants its midpoint to be this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SagTarget {
    /// Midpoint of the anchors (un-sagged)
    pub midpoint: Vec3,
    /// Desired midpoint height: `midpoint.y - sag_amount`
    pub target_value: f32,
    /// Always in [0, rest_length]; 0 once anchors are `rest_length` or further apart
    pub sag_amount: f32,
}

impl SagTarget {
    /// Control point for the curve with the given (smoothed) midpoint height
    #[inline]
    pub fn control_point(&self, current_value: f32) -> Vec3 {
        self.midpoint.with_y(current_value)
    }

    /// Raw target midpoint, for debug drawing
    #[inline]
    pub fn target_point(&self) -> Vec3 {
        self.midpoint.with_y(self.target_value)
    }
}

pub fn compute_target(start: Vec3, end: Vec3, config: &RopeConfig) -> SagTarget {
    let midpoint = start.midpoint(end);
    let distance = start.distance(end);
    let sag_amount = config.rest_length - distance.min(config.rest_length);

    SagTarget {
        midpoint,
        target_value: midpoint.y - sag_amount,
        sag_amount,
    }
}

/// De Casteljau evaluation of a degree-2 Bezier
#[inline]
pub fn bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    a.lerp(b, t)
}

/// Fill `out` with `segment_count + 1` points from `start` to `end`.
///
/// The last point is `end` itself rather than the curve at t=1, so the line
/// always lands exactly on the anchor.
pub fn sample_into(start: Vec3, mid: Vec3, end: Vec3, segment_count: u32, out: &mut Vec<Vec3>) {
    out.clear();
    out.extend(CurveSamples::new(start, mid, end, segment_count));
}

pub fn sample(start: Vec3, mid: Vec3, end: Vec3, segment_count: u32) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(segment_count as usize + 1);
    sample_into(start, mid, end, segment_count, &mut out);
    out
}

/// Iterator form of [`sample`]; `Clone` it to restart.
#[derive(Clone, Debug)]
pub struct CurveSamples {
    start: Vec3,
    mid: Vec3,
    end: Vec3,
    segment_count: u32,
    index: u32,
}

impl CurveSamples {
    pub fn new(start: Vec3, mid: Vec3, end: Vec3, segment_count: u32) -> Self {
        Self { start, mid, end, segment_count, index: 0 }
    }
}

impl Iterator for CurveSamples {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        let i = self.index;
        if i > self.segment_count {
            return None;
        }
        self.index += 1;

        if i == self.segment_count {
            return Some(self.end);
        }
        let t = i as f32 / self.segment_count as f32;
        Some(bezier_point(self.start, self.mid, self.end, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.segment_count + 1).saturating_sub(self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CurveSamples {}
