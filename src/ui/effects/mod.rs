// SPDX-License-Identifier: MPL-2.0
//! The decorative layer: ambient sparkles and orbs plus the transient bursts
//! and ripples the page spawns around its fancy buttons.
//!
//! Each spawner is an independent, idempotent function over an injected RNG;
//! bootstrap invokes the ambient ones exactly once. Calling a spawner twice
//! duplicates entities, which is the caller's responsibility to avoid.
//! Transient entities expire on their own and are pruned by the animation
//! tick. Nothing outside this module inspects the entities beyond drawing
//! them.

pub mod backdrop;
pub mod orb;
pub mod ripple;
pub mod sparkle;

pub use backdrop::Backdrop;
pub use orb::{orb_field, Orb};
pub use ripple::{press_ripple, Ripple};
pub use sparkle::{hover_burst, sparkle_field, Burst, Sparkle};

use crate::config::{EffectsConfig, DEFAULT_ORB_COUNT, DEFAULT_SPARKLE_COUNT};
use rand::Rng;
use std::time::Instant;

/// Sparkles per hover burst.
pub const BURST_COUNT: u32 = 10;

/// Nominal ripple diameter, in unit space.
pub const RIPPLE_SIZE: f32 = 0.12;

/// All decorative entities currently alive.
#[derive(Debug)]
pub struct EffectsState {
    enabled: bool,
    pub sparkles: Vec<Sparkle>,
    pub orbs: Vec<Orb>,
    pub bursts: Vec<Burst>,
    pub ripples: Vec<Ripple>,
    started: Instant,
}

impl EffectsState {
    /// Populates the ambient fields. Bootstrap calls this exactly once.
    pub fn init<R: Rng + ?Sized>(config: &EffectsConfig, rng: &mut R) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        let sparkle_count = config.sparkle_count.unwrap_or(DEFAULT_SPARKLE_COUNT);
        let orb_count = config.orb_count.unwrap_or(DEFAULT_ORB_COUNT);

        Self {
            enabled: true,
            sparkles: sparkle_field(rng, sparkle_count),
            orbs: orb_field(rng, orb_count),
            bursts: Vec::new(),
            ripples: Vec::new(),
            started: Instant::now(),
        }
    }

    /// An empty, inert layer.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            sparkles: Vec::new(),
            orbs: Vec::new(),
            bursts: Vec::new(),
            ripples: Vec::new(),
            started: Instant::now(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Seconds since the layer was initialized, for the ambient animations.
    pub fn elapsed_secs(&self, now: Instant) -> f32 {
        now.duration_since(self.started).as_secs_f32()
    }

    /// Scatters a sparkle burst around a hovered fancy button.
    pub fn spawn_hover_burst<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        anchor: (f32, f32),
        now: Instant,
    ) {
        if !self.enabled {
            return;
        }
        self.bursts
            .extend(hover_burst(rng, anchor, BURST_COUNT, now));
    }

    /// Starts an expanding ripple at a pressed button.
    pub fn spawn_press_ripple(&mut self, anchor: (f32, f32), now: Instant) {
        if !self.enabled {
            return;
        }
        self.ripples.push(press_ripple(anchor, RIPPLE_SIZE, now));
    }

    /// Drops transient entities whose animation has finished.
    pub fn prune(&mut self, now: Instant) {
        self.bursts.retain(|burst| !burst.expired(now));
        self.ripples.retain(|ripple| !ripple.expired(now));
    }

    pub fn has_transients(&self) -> bool {
        !self.bursts.is_empty() || !self.ripples.is_empty()
    }

    /// Whether anything needs periodic redraws.
    pub fn is_animating(&self) -> bool {
        self.enabled
            && (!self.sparkles.is_empty() || !self.orbs.is_empty() || self.has_transients())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffectsConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn init_honors_configured_counts() {
        let config = EffectsConfig {
            enabled: true,
            sparkle_count: Some(5),
            orb_count: Some(3),
        };
        let effects = EffectsState::init(&config, &mut rng());

        assert_eq!(effects.sparkles.len(), 5);
        assert_eq!(effects.orbs.len(), 3);
        assert!(effects.bursts.is_empty());
        assert!(effects.ripples.is_empty());
        assert!(effects.is_animating());
    }

    #[test]
    fn disabled_layer_spawns_nothing() {
        let config = EffectsConfig {
            enabled: false,
            sparkle_count: Some(5),
            orb_count: Some(3),
        };
        let mut effects = EffectsState::init(&config, &mut rng());

        assert!(!effects.enabled());
        assert!(effects.sparkles.is_empty());
        assert!(!effects.is_animating());

        let now = Instant::now();
        effects.spawn_hover_burst(&mut rng(), (0.5, 0.5), now);
        effects.spawn_press_ripple((0.5, 0.5), now);
        assert!(!effects.has_transients());
    }

    #[test]
    fn hover_burst_spawns_and_expires() {
        let mut effects = EffectsState::init(&EffectsConfig::default(), &mut rng());
        let now = Instant::now();

        effects.spawn_hover_burst(&mut rng(), (0.4, 0.5), now);
        assert_eq!(effects.bursts.len(), BURST_COUNT as usize);

        // Nothing expires right away.
        effects.prune(now);
        assert_eq!(effects.bursts.len(), BURST_COUNT as usize);

        // Every burst sparkle is gone after the longest possible lifetime.
        effects.prune(now + Duration::from_secs(2));
        assert!(effects.bursts.is_empty());
    }

    #[test]
    fn ripple_spawns_and_expires() {
        let mut effects = EffectsState::init(&EffectsConfig::default(), &mut rng());
        let now = Instant::now();

        effects.spawn_press_ripple((0.6, 0.5), now);
        assert_eq!(effects.ripples.len(), 1);

        effects.prune(now + Duration::from_millis(500));
        assert_eq!(effects.ripples.len(), 1);

        effects.prune(now + Duration::from_millis(1100));
        assert!(effects.ripples.is_empty());
    }

    #[test]
    fn elapsed_grows_monotonically() {
        let effects = EffectsState::init(&EffectsConfig::default(), &mut rng());
        let now = Instant::now();
        let later = now + Duration::from_secs(3);
        assert!(effects.elapsed_secs(later) > effects.elapsed_secs(now));
    }
}
