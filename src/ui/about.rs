// SPDX-License-Identifier: MPL-2.0
//! About section: who Poppo is.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about section. It has no interactions of its own, so it is
/// generic over the parent's message type.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about_title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("about_intro")).size(typography::BODY_LG);

    let cards = Row::new()
        .spacing(spacing::LG)
        .push(build_card(&ctx, "about_card_story_title", "about_card_story_body"))
        .push(build_card(&ctx, "about_card_magic_title", "about_card_magic_body"));

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(title)
        .push(intro)
        .push(cards)
        .into()
}

fn build_card<'a, Message: 'a>(
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
        .style(styles::container::frosted_glass)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element: Element<'_, ()> = view(ctx);
    }
}
