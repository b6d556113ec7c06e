//! Per-hand punch detection with velocity hysteresis and cooldown
//!
//! Each hand runs an independent two-state machine keyed by a "fast"
//! latch: Idle until the smoothed wrist velocity crosses the trigger
//! threshold (with the cooldown elapsed), then latched until it drops
//! below the reset threshold. The band between the two thresholds changes
//! nothing, so a wobbling fast hand cannot re-trigger every tick.

use glam::Vec3;

use crate::gesture::{GestureConfig, GestureSink, Hand, IncapacitationQuery, PunchEvent};
use crate::math::lerp;

/// Tick deltas at or below this are skipped entirely; dividing a wrist
/// displacement by a near-zero delta would read as an absurd velocity
pub const MIN_TICK_DELTA: f32 = 0.01;

/// Cross-tick punch state for one hand
pub struct HandPunchState {
    hand: Hand,
    /// Low-pass filtered wrist speed
    smoothed_velocity: f32,
    /// Clock reading of the last trigger; starts far in the past so the
    /// first punch is never cooldown-blocked
    last_trigger_time: f64,
    /// The hysteresis latch: set on trigger, cleared below the reset
    /// threshold, and no re-trigger while set
    fast_latched: bool,
    /// Raw wrist position at the end of the previous tick
    last_position: Vec3,
    /// Whether `last_position` holds a real wrist sample yet
    initialized: bool,
}

impl HandPunchState {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            smoothed_velocity: 0.0,
            last_trigger_time: -999.0,
            fast_latched: false,
            last_position: Vec3::ZERO,
            initialized: false,
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Current smoothed wrist velocity
    pub fn velocity(&self) -> f32 {
        self.smoothed_velocity
    }

    /// Whether the fast latch is currently set
    pub fn is_latched(&self) -> bool {
        self.fast_latched
    }

    /// Advance one tick; returns true when a punch trigger fired
    ///
    /// Position and velocity state always update at tick end, whether or
    /// not a transition happened.
    fn update(&mut self, position: Vec3, delta: f32, now: f64, config: &GestureConfig) -> bool {
        // First active tick only seeds the position sample; measuring
        // velocity against a parked construction-time default would read
        // the wrist's standing offset as a punch
        if !self.initialized {
            self.initialized = true;
            self.last_position = position;
            return false;
        }

        let raw_velocity = position.distance(self.last_position) / delta;
        let smoothed = lerp(self.smoothed_velocity, raw_velocity, config.velocity_smoothing);

        let mut triggered = false;
        if smoothed > config.punch_velocity_threshold
            && now - self.last_trigger_time > f64::from(config.punch_cooldown)
        {
            if !self.fast_latched {
                self.last_trigger_time = now;
                self.fast_latched = true;
                triggered = true;
            }
        } else if smoothed < config.punch_reset_threshold {
            self.fast_latched = false;
        }

        self.last_position = position;
        self.smoothed_velocity = smoothed;
        triggered
    }
}

/// Both hands' punch state machines
pub struct PunchDetector {
    left: HandPunchState,
    right: HandPunchState,
}

impl PunchDetector {
    pub fn new() -> Self {
        Self {
            left: HandPunchState::new(Hand::Left),
            right: HandPunchState::new(Hand::Right),
        }
    }

    pub fn left(&self) -> &HandPunchState {
        &self.left
    }

    pub fn right(&self) -> &HandPunchState {
        &self.right
    }

    /// Whether either hand's fast latch is set
    pub fn any_latched(&self) -> bool {
        self.left.fast_latched || self.right.fast_latched
    }

    /// Advance both hands one tick and emit punch events
    ///
    /// Skips the tick entirely (no state update) on a degenerate delta.
    /// The incapacitation query runs only at the moment a punch would
    /// trigger; a suppressed punch still sets the latch and cooldown so an
    /// incapacitated player cannot spam triggers while recovering.
    pub fn update(
        &mut self,
        left_wrist: Vec3,
        right_wrist: Vec3,
        delta: f32,
        now: f64,
        config: &GestureConfig,
        health: &dyn IncapacitationQuery,
        sink: &mut dyn GestureSink,
    ) {
        if delta <= MIN_TICK_DELTA {
            return;
        }

        for (state, wrist) in [(&mut self.left, left_wrist), (&mut self.right, right_wrist)] {
            if state.update(wrist, delta, now, config) && !health.is_incapacitated() {
                sink.punch(PunchEvent {
                    hand: state.hand,
                    velocity: state.smoothed_velocity,
                });
            }
        }
    }
}

impl Default for PunchDetector {
    fn default() -> Self {
        Self::new()
    }
}
