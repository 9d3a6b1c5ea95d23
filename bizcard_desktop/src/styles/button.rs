use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::theme::PaletteColors;

/// The pill-shaped "Portfolio" toggle, accent-filled with a pressed lift.
pub fn portfolio_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: 50.0.into(),
            },
            shadow: Shadow {
                color: Color { a: 0.3, ..Color::BLACK },
                blur_radius: 5.0,
                offset: Vector::new(0.0, 2.0),
            },
            snap: false,
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color { a: 0.9, ..palette.accent })),
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 10.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                shadow: Shadow {
                    color: Color { a: 0.4, ..Color::BLACK },
                    blur_radius: 8.0,
                    offset: Vector::new(0.0, 3.0),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// The top-right 3D-mode toggle; lit while 3D mode is on.
pub fn mode_toggle_style(
    palette: PaletteColors,
    enabled: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = if enabled { palette.accent } else { palette.muted };
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border {
                color: if enabled { palette.accent } else { Color::TRANSPARENT },
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color { a: 0.1, ..palette.accent })),
                ..base
            },
            _ => base,
        }
    }
}

/// Inline hyperlink: transparent background, accent text.
pub fn link_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: match status {
            button::Status::Hovered => palette.glow,
            _ => Color::from_rgb8(0x00, 0x9F, 0xF5),
        },
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Invisible hit-area around the avatar; content styles itself.
pub fn avatar_button_style() -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, _| button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}
