// SPDX-License-Identifier: MPL-2.0
//! Contact section: the Live-ID copy card.
//!
//! Pressing the card copies the ID to the system clipboard and shows a short
//! confirmation, cleared again by the application tick.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// The Poppo Live room ID shown on the card.
pub const LIVE_ID: &str = "27184930";

/// How long the copied confirmation stays up.
pub const COPIED_FLASH: Duration = Duration::from_millis(1500);

/// Contact section state: whether the copied confirmation is showing.
#[derive(Debug, Default)]
pub struct State {
    copied_at: Option<Instant>,
}

impl State {
    /// Starts the copied confirmation.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Clears the confirmation once [`COPIED_FLASH`] has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied_at) = self.copied_at {
            if now.duration_since(copied_at) >= COPIED_FLASH {
                self.copied_at = None;
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    CopyLiveId,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    CopyLiveId,
}

/// Process a contact section message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::CopyLiveId => Event::CopyLiveId,
    }
}

/// Render the contact section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("contact_title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("contact_subtitle")).size(typography::BODY_LG);

    let hint_key = if ctx.state.is_copied() {
        "contact_copied"
    } else {
        "contact_copy_hint"
    };

    let card_content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("contact_live_id_label")).size(typography::BODY))
        .push(Text::new(LIVE_ID).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(hint_key)).size(typography::CAPTION));

    let copy_card = button(card_content)
        .on_press(Message::CopyLiveId)
        .padding(spacing::LG)
        .width(sizing::COPY_CARD_WIDTH)
        .style(styles::button::copy_card(ctx.state.is_copied()));

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(title)
        .push(subtitle)
        .push(copy_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
        };
        let _element = view(ctx);
    }

    #[test]
    fn copy_message_emits_copy_event() {
        let event = update(&Message::CopyLiveId);
        assert!(matches!(event, Event::CopyLiveId));
    }

    #[test]
    fn copied_flash_clears_after_timeout() {
        let mut state = State::default();
        let now = Instant::now();

        state.mark_copied(now);
        assert!(state.is_copied());

        // Still showing just before the timeout.
        state.tick(now + COPIED_FLASH - Duration::from_millis(1));
        assert!(state.is_copied());

        state.tick(now + COPIED_FLASH);
        assert!(!state.is_copied());
    }

    #[test]
    fn tick_without_copy_is_a_no_op() {
        let mut state = State::default();
        state.tick(Instant::now());
        assert!(!state.is_copied());
    }

    #[test]
    fn live_id_is_digits() {
        assert!(LIVE_ID.chars().all(|c| c.is_ascii_digit()));
    }
}
