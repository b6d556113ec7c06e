//! Left/right landmark mirroring
//!
//! A single shared camera sees both players face-on, so the on-screen
//! handedness is flipped relative to the avatar's. Mirroring swaps every
//! left/right paired joint index at ingestion time; the nose stays put.

use super::keypoints::LANDMARK_COUNT;

/// Index permutation pairing left/right symmetric joints
///
/// Applying it twice is the identity - it is its own inverse.
pub const MIRROR_MAP: [usize; LANDMARK_COUNT] =
    [0, 2, 1, 4, 3, 6, 5, 8, 7, 10, 9, 12, 11, 14, 13, 16, 15];

/// Mirrored source index for output index `i`
///
/// Out-of-range indices map to themselves so callers can never be sent
/// out of bounds by a bad index.
pub fn mirrored_index(i: usize) -> usize {
    if i < MIRROR_MAP.len() {
        MIRROR_MAP[i]
    } else {
        i
    }
}
