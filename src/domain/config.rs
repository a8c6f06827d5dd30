//! Rope configuration
//!
//! Every field is optional in JSON; missing fields fall back to the defaults
//! of the original rope component (10 segments, stiffness 1, damping 0.1,
//! length 15, thresholds 0.01).

use serde::{Deserialize, Serialize};

pub const MIN_SEGMENTS: u32 = 2;
pub const MAX_SEGMENTS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RopeConfig {
    /// Number of curve segments; the polyline has `segment_count + 1` points
    pub segment_count: u32,
    /// Spring strength pulling the sag toward its target
    pub stiffness: f32,
    /// Velocity damping per second (0 = undamped)
    pub damping: f32,
    /// Natural length of the rope; anchors closer than this make it sag
    pub rest_length: f32,
    /// Snap threshold on |value - target|
    pub value_epsilon: f32,
    /// Snap threshold on |velocity|
    pub velocity_epsilon: f32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            segment_count: 10,
            stiffness: 1.0,
            damping: 0.1,
            rest_length: 15.0,
            value_epsilon: 0.01,
            velocity_epsilon: 0.01,
        }
    }
}

impl RopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment_count(mut self, segment_count: u32) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_rest_length(mut self, rest_length: f32) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_epsilons(mut self, value_epsilon: f32, velocity_epsilon: f32) -> Self {
        self.value_epsilon = value_epsilon;
        self.velocity_epsilon = velocity_epsilon;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: RopeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject unusable values and clamp `segment_count` into [2, 100].
    pub fn validate(mut self) -> Result<Self, String> {
        check_positive("stiffness", self.stiffness)?;
        check_positive("restLength", self.rest_length)?;
        check_positive("valueEpsilon", self.value_epsilon)?;
        check_positive("velocityEpsilon", self.velocity_epsilon)?;
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(format!("damping must be finite and >= 0, got {}", self.damping));
        }

        let clamped = self.segment_count.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        if clamped != self.segment_count {
            crate::console_warn!(
                "rope: segmentCount {} out of range [{}, {}], clamped to {}",
                self.segment_count,
                MIN_SEGMENTS,
                MAX_SEGMENTS,
                clamped
            );
            self.segment_count = clamped;
        }

        Ok(self)
    }
}

fn check_positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be finite and > 0, got {}", name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_component() {
        let c = RopeConfig::default();
        assert_eq!(c.segment_count, 10);
        assert_eq!(c.stiffness, 1.0);
        assert_eq!(c.damping, 0.1);
        assert_eq!(c.rest_length, 15.0);
        assert_eq!(c.value_epsilon, 0.01);
        assert_eq!(c.velocity_epsilon, 0.01);
    }

    #[test]
    fn json_missing_fields_use_defaults() {
        let c = RopeConfig::from_json(r#"{ "restLength": 4.5, "segmentCount": 20 }"#).unwrap();
        assert_eq!(c.rest_length, 4.5);
        assert_eq!(c.segment_count, 20);
        assert_eq!(c.stiffness, 1.0);
    }

    #[test]
    fn segment_count_is_clamped() {
        let low = RopeConfig::new().with_segment_count(0).validate().unwrap();
        assert_eq!(low.segment_count, MIN_SEGMENTS);
        let high = RopeConfig::new().with_segment_count(5000).validate().unwrap();
        assert_eq!(high.segment_count, MAX_SEGMENTS);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RopeConfig::new().with_stiffness(0.0).validate().is_err());
        assert!(RopeConfig::new().with_rest_length(-1.0).validate().is_err());
        assert!(RopeConfig::new().with_damping(-0.5).validate().is_err());
        assert!(RopeConfig::new().with_damping(f32::NAN).validate().is_err());
        assert!(RopeConfig::new().with_epsilons(0.0, 0.01).validate().is_err());
        assert!(RopeConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = RopeConfig::default().to_json();
        assert!(json.contains("\"segmentCount\":10"));
        assert!(json.contains("\"restLength\":15.0"));
        assert_eq!(RopeConfig::from_json(&json).unwrap(), RopeConfig::default());
    }
}
