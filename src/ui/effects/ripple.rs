// SPDX-License-Identifier: MPL-2.0
//! Expanding click ripples.

use std::time::{Duration, Instant};

/// How long a ripple lives before it is removed.
pub const RIPPLE_LIFETIME: Duration = Duration::from_secs(1);

/// One expanding circle spawned at a pressed button, removed after
/// [`RIPPLE_LIFETIME`].
#[derive(Debug, Clone)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    /// Full diameter, in unit space.
    pub size: f32,
    pub spawned: Instant,
}

impl Ripple {
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.spawned) >= RIPPLE_LIFETIME
    }

    /// Animation progress in 0..1; the circle grows and fades with it.
    pub fn progress(&self, now: Instant) -> f32 {
        let age = now.duration_since(self.spawned).as_secs_f32();
        (age / RIPPLE_LIFETIME.as_secs_f32()).min(1.0)
    }
}

/// Starts a ripple of the given diameter at `anchor`.
pub fn press_ripple(anchor: (f32, f32), size: f32, now: Instant) -> Ripple {
    Ripple {
        x: anchor.0,
        y: anchor.1,
        size,
        spawned: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_expires_after_lifetime() {
        let now = Instant::now();
        let ripple = press_ripple((0.5, 0.5), 0.12, now);

        assert!(!ripple.expired(now));
        assert!(!ripple.expired(now + Duration::from_millis(999)));
        assert!(ripple.expired(now + RIPPLE_LIFETIME));
    }

    #[test]
    fn progress_grows_from_zero_to_one() {
        let now = Instant::now();
        let ripple = press_ripple((0.2, 0.8), 0.12, now);

        assert_eq!(ripple.progress(now), 0.0);
        let halfway = ripple.progress(now + Duration::from_millis(500));
        assert!(halfway > 0.4 && halfway < 0.6);
        assert_eq!(ripple.progress(now + Duration::from_secs(2)), 1.0);
    }
}
