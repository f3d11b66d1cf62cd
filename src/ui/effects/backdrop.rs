// SPDX-License-Identifier: MPL-2.0
//! Canvas layer drawing the decorative entities behind the page content.

use super::EffectsState;
use crate::ui::design_tokens::palette;
use iced::widget::{canvas, Stack};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme};
use std::time::Instant;

/// Backdrop widget rendering the sparkle and orb fields plus any live
/// transients. Entities hold unit-space positions; the draw pass scales them
/// to the current bounds.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop<'a> {
    pub effects: &'a EffectsState,
    pub now: Instant,
}

impl<Message> canvas::Program<Message> for Backdrop<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let elapsed = self.effects.elapsed_secs(self.now);

        for orb in &self.effects.orbs {
            let (dx, dy) = orb.drift(elapsed);
            let center = Point::new(
                (orb.x + dx).clamp(0.0, 1.0) * bounds.width,
                (orb.y + dy).clamp(0.0, 1.0) * bounds.height,
            );
            let halo = canvas::Path::circle(center, orb.size);
            frame.fill(
                &halo,
                Color {
                    a: 0.12,
                    ..orb.color
                },
            );
            let core = canvas::Path::circle(center, orb.size / 2.0);
            frame.fill(
                &core,
                Color {
                    a: 0.30,
                    ..orb.color
                },
            );
        }

        for sparkle in &self.effects.sparkles {
            let center = Point::new(sparkle.x * bounds.width, sparkle.y * bounds.height);
            let path = canvas::Path::circle(center, sparkle.size / 2.0);
            frame.fill(
                &path,
                Color {
                    a: sparkle.twinkle(elapsed),
                    ..palette::WHITE
                },
            );
        }

        for burst in &self.effects.bursts {
            let fade = 1.0 - burst.progress(self.now);
            let center = Point::new(burst.x * bounds.width, burst.y * bounds.height);
            let path = canvas::Path::circle(center, burst.size / 2.0);
            frame.fill(
                &path,
                Color {
                    a: fade,
                    ..palette::ENCHANTED_GOLD
                },
            );
        }

        for ripple in &self.effects.ripples {
            let progress = ripple.progress(self.now);
            let center = Point::new(ripple.x * bounds.width, ripple.y * bounds.height);
            let radius = ripple.size * progress * bounds.width.min(bounds.height) / 2.0;
            let path = canvas::Path::circle(center, radius.max(1.0));
            frame.fill(
                &path,
                Color {
                    a: 0.35 * (1.0 - progress),
                    ..palette::WHITE
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Layers the page content over the backdrop.
pub fn wrap<'a, Message: 'a>(
    effects: &'a EffectsState,
    now: Instant,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    if !effects.enabled() {
        return content;
    }

    Stack::new()
        .push(
            canvas::Canvas::new(Backdrop { effects, now })
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}
