//! Gesture tunables with defaults and construction-time validation
//!
//! Every externally settable knob lives in one aggregate. Defaults are the
//! values the game shipped with; validation rejects combinations the
//! classifiers cannot run on (most importantly an empty hysteresis band).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("pose smoothing factor {0} outside [0, 0.95)")]
    PoseSmoothing(f32),

    #[error("velocity smoothing factor {0} outside [0, 0.5]")]
    VelocitySmoothing(f32),

    #[error("punch trigger threshold {trigger} must exceed reset threshold {reset}")]
    EmptyHysteresisBand { trigger: f32, reset: f32 },

    #[error("punch cooldown {0} must not be negative")]
    NegativeCooldown(f32),

    #[error("max lean {0} must be positive")]
    NonPositiveMaxLean(f32),
}

/// All gesture-pipeline tunables for one player
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Lateral speed (units/s) applied while the depth classifier fires
    pub depth_movement_speed: f32,
    /// Lateral speed (units/s) scale for lean commands
    pub lean_movement_speed: f32,

    /// Shoulder-width ratio band around 1.0 treated as "no depth movement"
    pub depth_threshold: f32,
    /// Minimum hip-center shift per tick before a lean command fires
    pub lean_threshold: f32,
    /// Lean delta that maps to a full-strength command
    pub max_lean: f32,

    /// Scale from normalized image space to world units
    pub pose_scale: f32,
    /// Local-space offset applied before scaling
    pub pose_offset: Vec3,

    /// Fraction of the previous smoothed landmark retained per tick, [0, 0.95)
    pub pose_smoothing: f32,
    /// Low-pass blend factor for hand velocity, [0, 0.5]
    pub velocity_smoothing: f32,

    /// Smoothed hand velocity that triggers a punch
    pub punch_velocity_threshold: f32,
    /// Smoothed hand velocity below which the punch latch releases
    pub punch_reset_threshold: f32,
    /// Minimum seconds between punch triggers for the same hand
    pub punch_cooldown: f32,

    /// Seconds a punch keeps its hitbox window open
    pub hitbox_active_time: f32,

    /// Swap left/right paired landmarks at ingestion
    pub mirror_input: bool,
    /// Publish per-joint IK targets every tick
    pub ik_tracking: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            depth_movement_speed: 2.0,
            lean_movement_speed: 2.0,
            depth_threshold: 0.15,
            lean_threshold: 0.08,
            max_lean: 0.25,
            pose_scale: 1.0,
            pose_offset: Vec3::ZERO,
            pose_smoothing: 0.6,
            velocity_smoothing: 0.2,
            punch_velocity_threshold: 1.2,
            punch_reset_threshold: 0.5,
            punch_cooldown: 0.6,
            hitbox_active_time: 0.3,
            mirror_input: true,
            ik_tracking: false,
        }
    }
}

impl GestureConfig {
    /// Validate ranges and cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..0.95).contains(&self.pose_smoothing) {
            return Err(ConfigError::PoseSmoothing(self.pose_smoothing));
        }
        if !(0.0..=0.5).contains(&self.velocity_smoothing) {
            return Err(ConfigError::VelocitySmoothing(self.velocity_smoothing));
        }
        if self.punch_velocity_threshold <= self.punch_reset_threshold {
            return Err(ConfigError::EmptyHysteresisBand {
                trigger: self.punch_velocity_threshold,
                reset: self.punch_reset_threshold,
            });
        }
        if self.punch_cooldown < 0.0 {
            return Err(ConfigError::NegativeCooldown(self.punch_cooldown));
        }
        if self.max_lean <= 0.0 {
            return Err(ConfigError::NonPositiveMaxLean(self.max_lean));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GestureConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_empty_hysteresis_band() {
        let config = GestureConfig {
            punch_velocity_threshold: 0.5,
            punch_reset_threshold: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyHysteresisBand { .. })
        ));
    }

    #[test]
    fn test_rejects_smoothing_out_of_range() {
        let config = GestureConfig {
            pose_smoothing: 0.95,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PoseSmoothing(0.95)));

        let config = GestureConfig {
            pose_smoothing: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_defaults() {
        let config: GestureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.punch_cooldown, 0.6);
        assert!(config.mirror_input);
    }
}
