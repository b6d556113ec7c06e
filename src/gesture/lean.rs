//! Lean movement classifier
//!
//! Tracks the hip-center x across ticks using raw (unsmoothed) world
//! positions; a sideways lean shifts the hips and produces a proportional
//! lateral command. Gated behind a guard stance (left wrist above left
//! hip) and suppressed while either hand's punch latch is set, so a punch
//! follow-through never reads as a dodge.

use crate::gesture::{GestureConfig, MovementCommand};
use crate::pose::{LandmarkStore, LEFT_HIP, LEFT_WRIST, RIGHT_HIP};

/// Cross-tick hip-center tracking for lean detection
pub struct LeanTracker {
    /// Hip-center x of the previous tick; None until the first tick seeds it
    last_hip_center_x: Option<f32>,
}

impl LeanTracker {
    pub fn new() -> Self {
        Self {
            last_hip_center_x: None,
        }
    }

    /// Classify one tick against the raw world landmarks
    ///
    /// `punch_latched` must be the latch state as of the end of the
    /// previous tick (the punch detector runs after this classifier).
    /// The hip baseline advances every tick no matter how the gates
    /// resolve, so a long suppressed lean cannot bank up a huge delta.
    pub fn update(
        &mut self,
        store: &LandmarkStore,
        punch_latched: bool,
        config: &GestureConfig,
        delta: f32,
    ) -> Option<MovementCommand> {
        let hip_center_x = (store.raw(LEFT_HIP).x + store.raw(RIGHT_HIP).x) / 2.0;

        let previous = match self.last_hip_center_x.replace(hip_center_x) {
            Some(x) => x,
            // First tick seeds the baseline and emits nothing
            None => return None,
        };
        let lean_delta = hip_center_x - previous;

        let guarding = store.raw(LEFT_WRIST).y > store.raw(LEFT_HIP).y;
        if !guarding || punch_latched {
            return None;
        }
        if lean_delta.abs() <= config.lean_threshold {
            return None;
        }

        let normalized = lean_delta.clamp(-config.max_lean, config.max_lean) / config.max_lean;
        Some(MovementCommand {
            direction: normalized,
            magnitude: config.lean_movement_speed * delta,
        })
    }
}

impl Default for LeanTracker {
    fn default() -> Self {
        Self::new()
    }
}
