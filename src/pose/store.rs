//! World-landmark storage with projection and smoothing
//!
//! Keeps two fixed-size arrays per player: `target` holds the freshly
//! projected positions from the latest accepted frame, `smoothed` eases
//! toward `target` by one lerp step per tick. Ingestion and smoothing are
//! deliberately separate so smoothing keeps converging on ticks where no
//! new frame arrived.

use glam::{Quat, Vec3};

use super::keypoints::{Keypoint, LANDMARK_COUNT};
use super::mirror::mirrored_index;

/// World position and orientation the landmarks are projected onto
#[derive(Clone, Copy, Debug)]
pub struct AnchorPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for AnchorPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Per-player landmark state: raw frame, projected targets, smoothed copy
pub struct LandmarkStore {
    /// Freshly projected world positions, unsmoothed
    target: [Vec3; LANDMARK_COUNT],

    /// Low-pass filtered world positions
    smoothed: [Vec3; LANDMARK_COUNT],

    /// Last accepted raw frame, kept for classifiers that read normalized
    /// image coordinates directly (shoulder-width depth tracking)
    frame: Vec<Keypoint>,

    /// Whether at least one valid frame has been accepted
    has_frame: bool,
}

impl LandmarkStore {
    /// New store with every landmark parked at the anchor position
    pub fn new(anchor: Vec3) -> Self {
        Self {
            target: [anchor; LANDMARK_COUNT],
            smoothed: [anchor; LANDMARK_COUNT],
            frame: Vec::new(),
            has_frame: false,
        }
    }

    /// Ingest a raw frame, projecting it into world space
    ///
    /// Frames with fewer than 17 points are rejected without touching any
    /// state; returns whether the frame was accepted. When `mirror` is set
    /// the source index for each output slot comes from the mirror map.
    pub fn ingest(
        &mut self,
        points: &[Keypoint],
        mirror: bool,
        anchor: &AnchorPose,
        scale: f32,
        offset: Vec3,
    ) -> bool {
        if points.len() < LANDMARK_COUNT {
            return false;
        }

        for i in 0..LANDMARK_COUNT {
            let src = if mirror { mirrored_index(i) } else { i };
            let point = points[src];

            // Center the normalized point and flip y so +y is up
            let local = Vec3::new(point.x - 0.5, 0.5 - point.y, 0.0);
            self.target[i] = anchor.position + anchor.rotation * ((local + offset) * scale);
        }

        self.frame.clear();
        self.frame.extend_from_slice(&points[..LANDMARK_COUNT]);
        self.has_frame = true;
        true
    }

    /// One smoothing step: ease every smoothed landmark toward its target
    ///
    /// `smoothing` is the fraction of the previous value retained per tick,
    /// so the remaining error decays geometrically by that factor. Runs
    /// every tick regardless of whether a new frame arrived.
    pub fn smooth_step(&mut self, smoothing: f32) {
        let lerp_factor = 1.0 - smoothing;
        for i in 0..LANDMARK_COUNT {
            self.smoothed[i] = self.smoothed[i].lerp(self.target[i], lerp_factor);
        }
    }

    /// Raw (unsmoothed) world position for a landmark index
    ///
    /// Out-of-range indices return the zero vector instead of panicking.
    pub fn raw(&self, index: usize) -> Vec3 {
        if index < LANDMARK_COUNT {
            self.target[index]
        } else {
            Vec3::ZERO
        }
    }

    /// Smoothed world position for a landmark index
    pub fn smoothed(&self, index: usize) -> Vec3 {
        if index < LANDMARK_COUNT {
            self.smoothed[index]
        } else {
            Vec3::ZERO
        }
    }

    /// Last accepted raw frame (empty before the first valid frame)
    pub fn frame(&self) -> &[Keypoint] {
        &self.frame
    }

    /// Whether a valid frame has ever been accepted
    pub fn has_frame(&self) -> bool {
        self.has_frame
    }
}
