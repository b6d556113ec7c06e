//! Scalar math helpers
//!
//! Vector math comes from glam; the only thing it lacks is a plain
//! scalar lerp, used by the punch velocity low-pass filter.

/// Linear interpolation from `a` toward `b` by factor `t`
///
/// `t` = 0 returns `a`, `t` = 1 returns `b`. Not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
