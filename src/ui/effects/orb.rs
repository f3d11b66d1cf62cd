// SPDX-License-Identifier: MPL-2.0
//! Floating magic orbs.

use crate::ui::design_tokens::palette;
use iced::Color;
use rand::Rng;

/// The five brand colors the page cycles orbs through.
pub const ORB_COLORS: [Color; 5] = [
    palette::SPELL_PURPLE,
    palette::FAIRY_PINK,
    palette::WIZARD_BLUE,
    palette::UNICORN_TEAL,
    palette::ENCHANTED_GOLD,
];

/// One ambient orb, slowly circling its home position.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Drift cycle length.
    pub period_secs: f32,
    /// Offset into the cycle.
    pub phase_secs: f32,
    pub color: Color,
}

/// Drift radius, in unit space.
const DRIFT: f32 = 0.03;

impl Orb {
    /// Current offset from the home position.
    pub fn drift(&self, elapsed_secs: f32) -> (f32, f32) {
        let t = (elapsed_secs + self.phase_secs) / self.period_secs;
        let angle = t * std::f32::consts::TAU;
        (DRIFT * angle.cos(), DRIFT * angle.sin())
    }
}

/// Scatters `count` ambient orbs across the backdrop.
pub fn orb_field<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<Orb> {
    (0..count)
        .map(|_| Orb {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            size: rng.random_range(10.0..30.0),
            period_secs: rng.random_range(10.0..25.0),
            phase_secs: rng.random_range(0.0..10.0),
            color: ORB_COLORS[rng.random_range(0..ORB_COLORS.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn field_has_requested_count_and_brand_colors() {
        let mut rng = StdRng::seed_from_u64(12);
        let orbs = orb_field(&mut rng, 12);
        assert_eq!(orbs.len(), 12);

        for orb in &orbs {
            assert!((0.0..1.0).contains(&orb.x));
            assert!((0.0..1.0).contains(&orb.y));
            assert!((10.0..30.0).contains(&orb.size));
            assert!((10.0..25.0).contains(&orb.period_secs));
            assert!(ORB_COLORS.contains(&orb.color));
        }
    }

    #[test]
    fn drift_stays_within_radius() {
        let mut rng = StdRng::seed_from_u64(12);
        let orbs = orb_field(&mut rng, 5);
        for orb in &orbs {
            for step in 0..100 {
                let (dx, dy) = orb.drift(step as f32 * 0.5);
                assert!((dx * dx + dy * dy).sqrt() <= DRIFT + f32::EPSILON);
            }
        }
    }
}
