//! Body landmark indices and the raw keypoint type
//!
//! The pose estimator delivers 17 keypoints per person (COCO ordering),
//! each normalized to [0,1] x [0,1] image space. The index map is fixed;
//! classifiers address joints by these constants and never by magic numbers.

/// Number of landmarks in a valid frame
pub const LANDMARK_COUNT: usize = 17;

// ============================================================================
// LANDMARK INDICES (COCO body pose - 17 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

/// A single raw keypoint in normalized image coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    /// 0-1 normalized, image left to right
    pub x: f32,
    /// 0-1 normalized, image top to bottom
    pub y: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
