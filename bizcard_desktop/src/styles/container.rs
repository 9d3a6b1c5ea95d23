use iced::widget::container;
use iced::{Background, Border, Color, Theme};

use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;

/// Flat screen background behind the card.
pub fn screen_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

/// One entry in the portfolio list.
pub fn project_card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.6, ..palette.surface })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.5, ..palette.border },
            width: 1.0,
            radius: (CARD_BORDER_RADIUS / 2.0).into(),
        },
        ..Default::default()
    }
}

/// Frame around the revealed portfolio list.
pub fn portfolio_frame_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: Color { a: 0.7, ..palette.accent_soft },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Thin horizontal divider under the avatar.
pub fn divider_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.accent)),
        ..Default::default()
    }
}
