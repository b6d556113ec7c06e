//! strike-core - webcam pose-to-gameplay gesture recognition
//!
//! Turns a stream of normalized 2D body landmarks (17 points per frame,
//! produced by an external pose estimator) into gameplay control signals
//! for a two-player fighting game: continuous lateral movement commands
//! and discrete punch events.
//!
//! The host drives everything through [`FighterRig`]: push landmark frames
//! with `receive_frame`, then call `tick(delta)` once per simulation step.
//! Movement commands, punch events and optional IK targets come back
//! through the [`GestureSink`] trait.

pub mod fighter;
pub mod gesture;
pub mod hitbox;
pub mod math;
pub mod pose;

pub use fighter::FighterRig;
pub use gesture::{
    ConfigError, GestureConfig, GestureSink, Hand, IkTargets, IncapacitationQuery,
    MovementCommand, PlayerOrientation, PunchEvent,
};
pub use hitbox::{HitboxActivator, HitboxWindow};
pub use pose::{Keypoint, PoseRouter, LANDMARK_COUNT};
