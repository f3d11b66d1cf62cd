// SPDX-License-Identifier: MPL-2.0
//! Home section: the hero banner, call-to-action buttons, and info cards.

use crate::app::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, mouse_area, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the home section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// The hero's fancy buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    WatchLive,
    MeetPoppo,
}

impl CallToAction {
    /// Section the button navigates to.
    pub fn target(self) -> Section {
        match self {
            CallToAction::WatchLive => Section::Contact,
            CallToAction::MeetPoppo => Section::AboutPoppo,
        }
    }

    /// Translation key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            CallToAction::WatchLive => "hero_cta_watch",
            CallToAction::MeetPoppo => "hero_cta_about",
        }
    }

    /// Where the button sits on the backdrop, in unit space. Transient
    /// effects spawn around this point.
    pub fn anchor(self) -> (f32, f32) {
        match self {
            CallToAction::WatchLive => (0.40, 0.42),
            CallToAction::MeetPoppo => (0.60, 0.42),
        }
    }
}

/// Messages emitted by the home section.
#[derive(Debug, Clone)]
pub enum Message {
    CtaHovered(CallToAction),
    CtaPressed(CallToAction),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// The cursor entered a fancy button; scatter a sparkle burst around it.
    SparkleBurst { anchor: (f32, f32) },
    /// A fancy button was pressed; ripple, then navigate.
    Activate {
        target: Section,
        anchor: (f32, f32),
    },
}

/// Process a home section message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::CtaHovered(cta) => Event::SparkleBurst {
            anchor: cta.anchor(),
        },
        Message::CtaPressed(cta) => Event::Activate {
            target: cta.target(),
            anchor: cta.anchor(),
        },
    }
}

/// Render the home section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("hero_title")).size(typography::TITLE_XL);
    let subtitle = Text::new(ctx.i18n.tr("hero_subtitle")).size(typography::BODY_LG);

    let ctas = Row::new()
        .spacing(spacing::MD)
        .push(build_cta(&ctx, CallToAction::WatchLive))
        .push(build_cta(&ctx, CallToAction::MeetPoppo));

    let cards = Row::new()
        .spacing(spacing::LG)
        .push(build_card(&ctx, "home_card_schedule_title", "home_card_schedule_body"))
        .push(build_card(&ctx, "home_card_community_title", "home_card_community_body"))
        .push(build_card(&ctx, "home_card_gifts_title", "home_card_gifts_body"));

    let footer = Text::new(ctx.i18n.tr("footer_note")).size(typography::CAPTION);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(title)
        .push(subtitle)
        .push(ctas)
        .push(cards)
        .push(footer);

    content.into()
}

/// Build one fancy button, with the hover burst wired through a mouse area.
fn build_cta<'a>(ctx: &ViewContext<'a>, cta: CallToAction) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(cta.label_key())).size(typography::BODY_LG);
    let fancy = button(label)
        .on_press(Message::CtaPressed(cta))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::fancy);

    mouse_area(fancy)
        .on_enter(Message::CtaHovered(cta))
        .into()
}

/// Build one info card with the mystical shadow.
fn build_card<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    body_key: &str,
) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr(body_key)).size(typography::BODY));

    Container::new(inner)
        .padding(spacing::MD)
        .width(sizing::CARD_WIDTH)
        .style(styles::container::mystical_card)
        .into()
}
