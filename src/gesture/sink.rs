//! Output events and collaborator traits
//!
//! The core never touches transforms, animators or health directly; it
//! emits values through [`GestureSink`] and asks one synchronous question
//! through [`IncapacitationQuery`]. Both are implemented by the host.

use glam::Vec3;

/// Which side of the arena a player fights from
///
/// Fixed at assignment time; flips the sign convention for depth movement
/// (stepping toward the camera always means "advance on the opponent").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerOrientation {
    Left,
    Right,
}

impl PlayerOrientation {
    /// +1 for a left-side player advancing rightward, -1 for the mirror case
    pub fn facing_sign(self) -> f32 {
        match self {
            PlayerOrientation::Left => 1.0,
            PlayerOrientation::Right => -1.0,
        }
    }
}

/// A punching hand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Continuous lateral movement intent for one tick
///
/// Re-evaluated fresh every tick, never latched. The host translation is
/// `direction * magnitude` along its lateral axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementCommand {
    /// Signed direction in [-1, 1]
    pub direction: f32,
    /// Delta-time-scaled distance for this tick
    pub magnitude: f32,
}

impl MovementCommand {
    /// Signed lateral translation for this tick
    pub fn translation(&self) -> f32 {
        self.direction * self.magnitude
    }
}

/// A discrete punch trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PunchEvent {
    pub hand: Hand,
    /// Smoothed hand velocity at trigger time
    pub velocity: f32,
}

/// Per-joint world targets for external avatar puppeting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IkTargets {
    pub head: Vec3,
    pub left_hand: Vec3,
    pub right_hand: Vec3,
    pub left_elbow: Vec3,
    pub right_elbow: Vec3,
}

/// Host-side consumer of gesture output
pub trait GestureSink {
    fn movement(&mut self, command: MovementCommand);
    fn punch(&mut self, event: PunchEvent);

    /// Published every tick when IK tracking is enabled; default ignores it
    fn ik_targets(&mut self, _targets: &IkTargets) {}
}

/// Synchronous health query, asked once per candidate punch trigger
pub trait IncapacitationQuery {
    fn is_incapacitated(&self) -> bool;
}
