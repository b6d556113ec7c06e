//! Timed hitbox-active window
//!
//! A punch opens the hand's hitbox for a fixed duration; the window then
//! closes on its own deadline, checked each tick. The activator is passed
//! in as an `Option` so a target destroyed mid-window degrades to a no-op
//! instead of a crash - the window still expires.

/// Host-side collider toggle for one hand's hitbox
pub trait HitboxActivator {
    fn set_active(&mut self, active: bool);
}

/// One scoped activation window with an explicit per-tick deadline
#[derive(Default)]
pub struct HitboxWindow {
    /// Seconds until the window closes; None while closed
    remaining: Option<f32>,
}

impl HitboxWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the window is currently open
    pub fn is_open(&self) -> bool {
        self.remaining.is_some()
    }

    /// Open the window for `duration` seconds, activating the collider
    ///
    /// Re-opening while already open restarts the clock. A missing
    /// activator leaves the window tracking time with no side effect.
    pub fn open(&mut self, duration: f32, activator: Option<&mut dyn HitboxActivator>) {
        self.remaining = Some(duration);
        match activator {
            Some(activator) => activator.set_active(true),
            None => log::warn!("hitbox window opened with no activator attached"),
        }
    }

    /// Advance the deadline; deactivates the collider at expiry
    ///
    /// Safe to call with `None` when the target no longer exists - the
    /// window closes either way.
    pub fn tick(&mut self, delta: f32, activator: Option<&mut dyn HitboxActivator>) {
        let Some(remaining) = self.remaining else {
            return;
        };

        let remaining = remaining - delta;
        // Treat float residue from summed tick deltas as expired, so a
        // 0.3 s window ticked at 0.1 s closes on the third tick
        if remaining > 1e-6 {
            self.remaining = Some(remaining);
            return;
        }

        self.remaining = None;
        if let Some(activator) = activator {
            activator.set_active(false);
        }
    }
}
