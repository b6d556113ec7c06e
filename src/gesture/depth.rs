//! Depth movement classifier with shoulder-width self-calibration
//!
//! Stepping toward the camera widens the on-screen shoulder span, stepping
//! back narrows it. The first classifier tick captures the player's
//! baseline width; after that the current/baseline ratio drives advance or
//! retreat, with a dead band around 1.0 so breathing and jitter don't move
//! the avatar.

use crate::gesture::{GestureConfig, MovementCommand, PlayerOrientation};
use crate::pose::{mirrored_index, Keypoint, LEFT_SHOULDER, RIGHT_SHOULDER};

/// Shoulder-width calibration plus per-tick depth classification
pub struct DepthTracker {
    /// Baseline shoulder width, captured once on the first classifier tick
    baseline_width: Option<f32>,
}

impl DepthTracker {
    pub fn new() -> Self {
        Self {
            baseline_width: None,
        }
    }

    /// Whether the baseline has been captured
    pub fn is_calibrated(&self) -> bool {
        self.baseline_width.is_some()
    }

    /// The captured baseline width, if any
    pub fn baseline(&self) -> Option<f32> {
        self.baseline_width
    }

    /// Classify one tick from the raw normalized frame
    ///
    /// The first call with a usable frame captures the baseline and emits
    /// nothing. The shoulder pair is selected mirror-aware: with mirroring
    /// on, the geometric left shoulder is read through the anatomical-right
    /// index and vice versa. A non-positive baseline is kept as stored but
    /// skips classification, so a degenerate first frame can never divide
    /// by zero.
    pub fn update(
        &mut self,
        frame: &[Keypoint],
        mirror: bool,
        orientation: PlayerOrientation,
        config: &GestureConfig,
        delta: f32,
    ) -> Option<MovementCommand> {
        let left_idx = if mirror {
            mirrored_index(LEFT_SHOULDER)
        } else {
            LEFT_SHOULDER
        };
        let right_idx = if mirror {
            mirrored_index(RIGHT_SHOULDER)
        } else {
            RIGHT_SHOULDER
        };

        let (left, right) = match (frame.get(left_idx), frame.get(right_idx)) {
            (Some(l), Some(r)) => (l, r),
            _ => return None,
        };

        let current_width = (left.x - right.x).abs();

        let baseline = match self.baseline_width {
            Some(width) => width,
            None => {
                self.baseline_width = Some(current_width);
                return None;
            }
        };
        if baseline <= 0.0 {
            return None;
        }

        let ratio = current_width / baseline;
        let facing = orientation.facing_sign();

        // Wider than baseline = closer to camera = advance; narrower = retreat
        let direction = if ratio > 1.0 + config.depth_threshold {
            facing
        } else if ratio < 1.0 - config.depth_threshold {
            -facing
        } else {
            return None;
        };

        Some(MovementCommand {
            direction,
            magnitude: config.depth_movement_speed * delta,
        })
    }
}

impl Default for DepthTracker {
    fn default() -> Self {
        Self::new()
    }
}
