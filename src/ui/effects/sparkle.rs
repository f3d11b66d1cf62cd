// SPDX-License-Identifier: MPL-2.0
//! Floating sparkles and the hover-burst variant.

use rand::Rng;
use std::time::{Duration, Instant};

/// One ambient sparkle, drifting and twinkling for the lifetime of the page.
///
/// Positions are in unit space (0..1 of the backdrop) so the field scales with
/// the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Twinkle cycle length.
    pub period_secs: f32,
    /// Offset into the cycle, so the field doesn't pulse in unison.
    pub phase_secs: f32,
    /// Peak opacity.
    pub opacity: f32,
}

impl Sparkle {
    /// Current brightness factor, oscillating between zero and the sparkle's
    /// peak opacity.
    pub fn twinkle(&self, elapsed_secs: f32) -> f32 {
        let t = (elapsed_secs + self.phase_secs) / self.period_secs;
        let wave = (t * std::f32::consts::TAU).sin() * 0.5 + 0.5;
        self.opacity * wave
    }
}

/// Scatters `count` ambient sparkles across the backdrop.
pub fn sparkle_field<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            size: rng.random_range(2.0..5.0),
            period_secs: rng.random_range(5.0..10.0),
            phase_secs: rng.random_range(0.0..5.0),
            opacity: rng.random_range(0.3..1.0),
        })
        .collect()
}

/// One short-lived sparkle from a hover burst. Removed once its animation is
/// over.
#[derive(Debug, Clone)]
pub struct Burst {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    pub spawned: Instant,
    pub lifetime: Duration,
}

impl Burst {
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.spawned) >= self.lifetime
    }

    /// Animation progress in 0..1.
    pub fn progress(&self, now: Instant) -> f32 {
        let age = now.duration_since(self.spawned).as_secs_f32();
        (age / self.lifetime.as_secs_f32()).min(1.0)
    }
}

/// How far burst sparkles scatter from their anchor, in unit space.
const BURST_SPREAD: f32 = 0.06;

/// Scatters a burst of `count` transient sparkles around `anchor`.
pub fn hover_burst<R: Rng + ?Sized>(
    rng: &mut R,
    anchor: (f32, f32),
    count: u32,
    now: Instant,
) -> Vec<Burst> {
    (0..count)
        .map(|_| {
            let duration = rng.random_range(0.3..0.8);
            let delay = rng.random_range(0.0..0.2);
            Burst {
                x: (anchor.0 + rng.random_range(-BURST_SPREAD..BURST_SPREAD)).clamp(0.0, 1.0),
                y: (anchor.1 + rng.random_range(-BURST_SPREAD..BURST_SPREAD)).clamp(0.0, 1.0),
                size: rng.random_range(2.0..6.0),
                spawned: now,
                lifetime: Duration::from_secs_f32(duration + delay),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn field_has_requested_count_and_sane_parameters() {
        let sparkles = sparkle_field(&mut rng(), 40);
        assert_eq!(sparkles.len(), 40);

        for sparkle in &sparkles {
            assert!((0.0..1.0).contains(&sparkle.x));
            assert!((0.0..1.0).contains(&sparkle.y));
            assert!((2.0..5.0).contains(&sparkle.size));
            assert!((5.0..10.0).contains(&sparkle.period_secs));
            assert!((0.0..5.0).contains(&sparkle.phase_secs));
            assert!((0.3..1.0).contains(&sparkle.opacity));
        }
    }

    #[test]
    fn twinkle_stays_within_peak_opacity() {
        let sparkles = sparkle_field(&mut rng(), 10);
        for sparkle in &sparkles {
            for step in 0..50 {
                let brightness = sparkle.twinkle(step as f32 * 0.37);
                assert!(brightness >= 0.0);
                assert!(brightness <= sparkle.opacity + f32::EPSILON);
            }
        }
    }

    #[test]
    fn burst_scatters_around_anchor() {
        let now = Instant::now();
        let bursts = hover_burst(&mut rng(), (0.5, 0.5), 10, now);
        assert_eq!(bursts.len(), 10);

        for burst in &bursts {
            assert!((burst.x - 0.5).abs() <= BURST_SPREAD);
            assert!((burst.y - 0.5).abs() <= BURST_SPREAD);
            assert!(!burst.expired(now));
            assert!(burst.lifetime >= Duration::from_secs_f32(0.3));
            assert!(burst.lifetime <= Duration::from_secs_f32(1.0));
        }
    }

    #[test]
    fn burst_near_edge_stays_in_unit_space() {
        let now = Instant::now();
        for burst in hover_burst(&mut rng(), (0.0, 1.0), 20, now) {
            assert!((0.0..=1.0).contains(&burst.x));
            assert!((0.0..=1.0).contains(&burst.y));
        }
    }

    #[test]
    fn burst_progress_saturates_at_one() {
        let now = Instant::now();
        let bursts = hover_burst(&mut rng(), (0.5, 0.5), 1, now);
        let burst = &bursts[0];

        assert_eq!(burst.progress(now), 0.0);
        let after = now + burst.lifetime + Duration::from_millis(100);
        assert_eq!(burst.progress(after), 1.0);
        assert!(burst.expired(after));
    }
}
