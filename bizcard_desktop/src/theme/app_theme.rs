use iced::{theme, Theme};

use super::palette::{palette_from_mode, ThemeMode};

/// Builds the custom iced theme for the given mode.
pub fn app_theme(mode: ThemeMode) -> Theme {
    let p = palette_from_mode(mode);
    Theme::custom(
        format!("BizCard {}", mode.name()),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: match mode {
                ThemeMode::Light => theme::Palette::LIGHT.warning,
                ThemeMode::Dark => theme::Palette::DARK.warning,
            },
            danger: p.danger,
        },
    )
}
