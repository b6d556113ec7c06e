//! Pose module - landmark ingestion, mirroring and storage
//!
//! Re-exports only. All logic in submodules.

mod keypoints;
mod mirror;
mod packet;
mod store;

pub use keypoints::{
    Keypoint, LANDMARK_COUNT, LEFT_ANKLE, LEFT_EAR, LEFT_ELBOW, LEFT_EYE, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ANKLE, RIGHT_EAR, RIGHT_ELBOW, RIGHT_EYE, RIGHT_HIP,
    RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
pub use mirror::{mirrored_index, MIRROR_MAP};
pub use packet::{parse_packet, LandmarkData, PlayerData, PoseDataPacket, PoseRouter};
pub use store::{AnchorPose, LandmarkStore};
