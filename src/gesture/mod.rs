//! Gesture module - calibration, movement classification, punch detection
//!
//! Re-exports only. All logic in submodules.

mod config;
mod depth;
mod lean;
mod punch;
mod sink;

pub use config::{ConfigError, GestureConfig};
pub use depth::DepthTracker;
pub use lean::LeanTracker;
pub use punch::{HandPunchState, PunchDetector, MIN_TICK_DELTA};
pub use sink::{
    GestureSink, Hand, IkTargets, IncapacitationQuery, MovementCommand, PlayerOrientation,
    PunchEvent,
};
