use iced::Color;

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Core color palette for the card screen.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::light()
    }
}

impl PaletteColors {
    /// Light theme palette
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(248, 250, 255),
            surface: Color::from_rgb8(240, 244, 255),
            surface_raised: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(200, 210, 230),
            text: Color::from_rgb8(20, 30, 50),
            muted: Color::from_rgb8(110, 120, 140),
            accent: Color::from_rgb8(103, 80, 164), // Material tertiary-ish purple
            accent_soft: Color::from_rgb8(150, 130, 210),
            success: Color::from_rgb8(40, 160, 80),
            danger: Color::from_rgb8(220, 60, 60),
            glow: Color::from_rgb8(150, 130, 220),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(16, 14, 22),
            surface: Color::from_rgb8(24, 20, 32),
            surface_raised: Color::from_rgb8(34, 28, 44),
            border: Color::from_rgb8(60, 50, 80),
            text: Color::from_rgb8(240, 235, 255),
            muted: Color::from_rgb8(150, 140, 180),
            accent: Color::from_rgb8(186, 104, 200),
            accent_soft: Color::from_rgb8(150, 80, 170),
            success: Color::from_rgb8(100, 255, 140),
            danger: Color::from_rgb8(255, 100, 100),
            glow: Color::from_rgb8(200, 120, 255),
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns palette for a specific theme mode
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}

/// The eight sweep stops of the avatar's rainbow ring (first repeated last
/// to close the sweep).
pub fn rainbow_ring() -> [Color; 8] {
    [
        Color::from_rgb8(0x95, 0x75, 0xCD),
        Color::from_rgb8(0xBA, 0x68, 0xC8),
        Color::from_rgb8(0xE5, 0x73, 0x73),
        Color::from_rgb8(0xFF, 0xB7, 0x4D),
        Color::from_rgb8(0xFF, 0xF1, 0x76),
        Color::from_rgb8(0xAE, 0xD5, 0x81),
        Color::from_rgb8(0x4D, 0xD0, 0xE1),
        Color::from_rgb8(0x95, 0x75, 0xCD),
    ]
}
