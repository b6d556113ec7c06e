//! Per-player fighter rig - ingestion, tick orchestration, IK publishing
//!
//! One rig per player, owning all of that player's state; the two rigs
//! never share anything. The host pushes frames with `receive_frame` and
//! drives classification with `tick(delta)`. Everything is single-threaded
//! and cooperative - no locks, no internal timers.

use glam::{Quat, Vec3};

use crate::gesture::{
    ConfigError, DepthTracker, GestureConfig, GestureSink, IkTargets, IncapacitationQuery,
    LeanTracker, PlayerOrientation, PunchDetector,
};
use crate::pose::{
    AnchorPose, Keypoint, LandmarkStore, LEFT_ELBOW, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_WRIST,
};

/// Gesture-recognition pipeline for one player
pub struct FighterRig {
    config: GestureConfig,
    /// None until `assign` fixes the sign conventions; frames are dropped
    /// while unassigned
    orientation: Option<PlayerOrientation>,
    anchor: AnchorPose,
    store: LandmarkStore,
    depth: DepthTracker,
    lean: LeanTracker,
    punches: PunchDetector,
    /// Internal clock, summed tick deltas; feeds punch cooldowns
    clock: f64,
    /// Master gate for calibration and all three classifiers
    fighting: bool,
}

impl FighterRig {
    /// Build a rig; the config is validated here, once
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let anchor = AnchorPose::default();
        Ok(Self {
            store: LandmarkStore::new(anchor.position),
            punches: PunchDetector::new(),
            depth: DepthTracker::new(),
            lean: LeanTracker::new(),
            orientation: None,
            anchor,
            clock: 0.0,
            fighting: false,
            config,
        })
    }

    /// Fix this player's side of the arena; call once at setup
    pub fn assign(&mut self, orientation: PlayerOrientation) {
        if let Some(existing) = self.orientation {
            if existing != orientation {
                log::warn!("fighter reassigned from {existing:?} to {orientation:?}");
            }
        }
        self.orientation = Some(orientation);
        log::debug!("fighter assigned orientation {orientation:?}");
    }

    /// Update the world pose landmarks are projected onto
    pub fn set_anchor(&mut self, position: Vec3, rotation: Quat) {
        self.anchor = AnchorPose { position, rotation };
    }

    /// Enable or disable fighting; classifiers only run while enabled
    pub fn set_fighting(&mut self, fighting: bool) {
        self.fighting = fighting;
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn orientation(&self) -> Option<PlayerOrientation> {
        self.orientation
    }

    /// Whether a valid frame has ever been accepted
    pub fn has_frame(&self) -> bool {
        self.store.has_frame()
    }

    /// Whether the shoulder-width baseline has been captured
    pub fn is_calibrated(&self) -> bool {
        self.depth.is_calibrated()
    }

    /// Smoothed left-hand velocity, for contact-time damage scaling
    pub fn left_hand_velocity(&self) -> f32 {
        self.punches.left().velocity()
    }

    /// Smoothed right-hand velocity
    pub fn right_hand_velocity(&self) -> f32 {
        self.punches.right().velocity()
    }

    /// Ingest one raw landmark frame
    ///
    /// Dropped silently while unassigned or when the frame has fewer than
    /// 17 points; the previous target and smoothed state persist unchanged.
    pub fn receive_frame(&mut self, points: &[Keypoint]) {
        if self.orientation.is_none() {
            return;
        }
        self.store.ingest(
            points,
            self.config.mirror_input,
            &self.anchor,
            self.config.pose_scale,
            self.config.pose_offset,
        );
    }

    /// Advance the pipeline one tick
    ///
    /// Intra-tick order is load-bearing: smoothing first, then the depth
    /// and lean classifiers, then punch detection. Lean reads the punch
    /// latches before the detector updates them, i.e. as of the end of the
    /// previous tick.
    pub fn tick(
        &mut self,
        delta: f32,
        health: &dyn IncapacitationQuery,
        sink: &mut dyn GestureSink,
    ) {
        self.clock += f64::from(delta);

        // Smoothing runs unconditionally, even with no frame yet and even
        // while not fighting, so smoothed state keeps easing toward the
        // latest target
        self.store.smooth_step(self.config.pose_smoothing);

        if self.config.ik_tracking {
            sink.ik_targets(&self.ik_targets());
        }

        let orientation = match self.orientation {
            Some(orientation) => orientation,
            None => return,
        };
        if !self.fighting || !self.store.has_frame() {
            return;
        }

        if let Some(command) = self.depth.update(
            self.store.frame(),
            self.config.mirror_input,
            orientation,
            &self.config,
            delta,
        ) {
            sink.movement(command);
        }

        let latched = self.punches.any_latched();
        if let Some(command) = self.lean.update(&self.store, latched, &self.config, delta) {
            sink.movement(command);
        }

        self.punches.update(
            self.store.raw(LEFT_WRIST),
            self.store.raw(RIGHT_WRIST),
            delta,
            self.clock,
            &self.config,
            health,
            sink,
        );
    }

    /// Current per-joint targets for external puppeting, from the
    /// smoothed landmarks
    pub fn ik_targets(&self) -> IkTargets {
        IkTargets {
            head: self.store.smoothed(NOSE),
            left_hand: self.store.smoothed(LEFT_WRIST),
            right_hand: self.store.smoothed(RIGHT_WRIST),
            left_elbow: self.store.smoothed(LEFT_ELBOW),
            right_elbow: self.store.smoothed(RIGHT_ELBOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{Hand, MovementCommand, PunchEvent};
    use crate::pose::{LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER};

    struct Healthy;
    impl IncapacitationQuery for Healthy {
        fn is_incapacitated(&self) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct Collector {
        movements: Vec<MovementCommand>,
        punches: Vec<PunchEvent>,
        ik: Vec<IkTargets>,
    }
    impl GestureSink for Collector {
        fn movement(&mut self, command: MovementCommand) {
            self.movements.push(command);
        }
        fn punch(&mut self, event: PunchEvent) {
            self.punches.push(event);
        }
        fn ik_targets(&mut self, targets: &IkTargets) {
            self.ik.push(*targets);
        }
    }

    /// Guard-stance frame with configurable shoulder width, hip center and
    /// left-wrist position
    fn frame(shoulder_width: f32, hip_x: f32, left_wrist: Keypoint) -> Vec<Keypoint> {
        let mut points = vec![Keypoint::new(0.5, 0.5); LANDMARK_COUNT];
        points[LEFT_SHOULDER] = Keypoint::new(0.5 + shoulder_width / 2.0, 0.4);
        points[RIGHT_SHOULDER] = Keypoint::new(0.5 - shoulder_width / 2.0, 0.4);
        points[LEFT_HIP] = Keypoint::new(hip_x, 0.6);
        points[RIGHT_HIP] = Keypoint::new(hip_x, 0.6);
        points[LEFT_WRIST] = left_wrist;
        points
    }

    /// Neutral guard-stance frame
    fn neutral_frame() -> Vec<Keypoint> {
        frame(0.20, 0.5, Keypoint::new(0.5, 0.3))
    }

    /// Assigned, fighting, unmirrored rig
    fn rig() -> FighterRig {
        let config = GestureConfig {
            mirror_input: false,
            velocity_smoothing: 0.5,
            ..Default::default()
        };
        let mut rig = FighterRig::new(config).unwrap();
        rig.assign(PlayerOrientation::Left);
        rig.set_fighting(true);
        rig
    }

    const DT: f32 = 0.1;

    #[test]
    fn test_rejects_invalid_config() {
        let config = GestureConfig {
            punch_velocity_threshold: 0.1,
            ..Default::default()
        };
        assert!(FighterRig::new(config).is_err());
    }

    #[test]
    fn test_unassigned_rig_drops_frames() {
        let mut rig = FighterRig::new(GestureConfig::default()).unwrap();
        rig.receive_frame(&neutral_frame());
        assert!(!rig.has_frame());
    }

    #[test]
    fn test_calibration_requires_fighting() {
        let mut rig = rig();
        rig.set_fighting(false);
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut Collector::default());
        assert!(!rig.is_calibrated());

        rig.set_fighting(true);
        rig.tick(DT, &Healthy, &mut Collector::default());
        assert!(rig.is_calibrated());
    }

    #[test]
    fn test_depth_advance_after_calibration() {
        let mut rig = rig();
        let mut sink = Collector::default();

        // Calibration tick at width 0.20
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);
        assert!(sink.movements.is_empty());

        // Step toward the camera: width 0.26, ratio 1.3 > 1.15
        rig.receive_frame(&frame(0.26, 0.5, Keypoint::new(0.5, 0.3)));
        rig.tick(DT, &Healthy, &mut sink);
        assert_eq!(sink.movements.len(), 1);
        assert_eq!(sink.movements[0].direction, 1.0);
    }

    #[test]
    fn test_punch_latch_gates_lean_next_tick_not_current() {
        let mut rig = rig();
        let mut sink = Collector::default();

        // Seed: calibration + lean baseline + wrist rest position
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);
        rig.tick(DT, &Healthy, &mut sink);
        assert!(sink.movements.is_empty());

        // One frame moves the hips AND throws the left wrist fast enough
        // to punch. Lean runs before punch detection, so this tick still
        // emits the lean command.
        rig.receive_frame(&frame(0.20, 0.65, Keypoint::new(0.9, 0.3)));
        rig.tick(DT, &Healthy, &mut sink);
        assert_eq!(sink.movements.len(), 1);
        assert_eq!(sink.punches.len(), 1);
        assert_eq!(sink.punches[0].hand, Hand::Left);

        // Next tick the latch is visible: an equally large hip shift is
        // suppressed
        rig.receive_frame(&frame(0.20, 0.80, Keypoint::new(0.9, 0.3)));
        rig.tick(DT, &Healthy, &mut sink);
        assert_eq!(sink.movements.len(), 1);
    }

    #[test]
    fn test_still_stance_never_punches_at_match_start() {
        // A motionless guard stance must not punch on the first fighting
        // tick: the wrist landmark sits well away from the rig's resting
        // origin, and at 60 Hz that offset over one tick would read as an
        // enormous velocity if it entered the velocity computation
        let mut rig = rig();
        let mut sink = Collector::default();

        rig.receive_frame(&frame(0.20, 0.5, Keypoint::new(0.9, 0.3)));
        for _ in 0..10 {
            rig.tick(1.0 / 60.0, &Healthy, &mut sink);
        }
        assert!(sink.punches.is_empty());
        assert_eq!(rig.left_hand_velocity(), 0.0);

        // A real punch from that stance still registers at 60 Hz
        rig.receive_frame(&frame(0.20, 0.5, Keypoint::new(0.5, 0.3)));
        rig.tick(1.0 / 60.0, &Healthy, &mut sink);
        assert_eq!(sink.punches.len(), 1);
        assert_eq!(sink.punches[0].hand, Hand::Left);
    }

    #[test]
    fn test_ik_published_only_when_enabled() {
        let mut rig = rig();
        let mut sink = Collector::default();
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);
        assert!(sink.ik.is_empty());

        let config = GestureConfig {
            ik_tracking: true,
            mirror_input: false,
            ..Default::default()
        };
        let mut rig = FighterRig::new(config).unwrap();
        rig.assign(PlayerOrientation::Right);
        // Published even while not fighting
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);
        assert_eq!(sink.ik.len(), 1);
    }

    #[test]
    fn test_ik_targets_track_smoothed_landmarks() {
        let config = GestureConfig {
            ik_tracking: true,
            mirror_input: false,
            pose_smoothing: 0.0,
            ..Default::default()
        };
        let mut rig = FighterRig::new(config).unwrap();
        rig.assign(PlayerOrientation::Left);
        let mut sink = Collector::default();

        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);
        // Zero smoothing converges in one tick; nose at image center
        // projects to the origin
        assert!(sink.ik[0].head.length() < 1e-6);
        // Left wrist at (0.5, 0.3) -> world (0, 0.2, 0)
        assert!((sink.ik[0].left_hand.y - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_smoothing_runs_without_frames() {
        // No frame ever arrives; ticking must not panic or classify
        let mut rig = rig();
        let mut sink = Collector::default();
        for _ in 0..10 {
            rig.tick(DT, &Healthy, &mut sink);
        }
        assert!(sink.movements.is_empty());
        assert!(sink.punches.is_empty());
        assert!(!rig.is_calibrated());
    }

    #[test]
    fn test_hand_velocity_accessors() {
        let mut rig = rig();
        let mut sink = Collector::default();
        rig.receive_frame(&neutral_frame());
        rig.tick(DT, &Healthy, &mut sink);

        rig.receive_frame(&frame(0.20, 0.5, Keypoint::new(0.9, 0.3)));
        rig.tick(DT, &Healthy, &mut sink);
        assert!(rig.left_hand_velocity() > 0.0);
        assert_eq!(rig.right_hand_velocity(), 0.0);
    }
}
