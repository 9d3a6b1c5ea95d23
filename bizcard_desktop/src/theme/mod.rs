pub mod app_theme;
pub mod palette;

pub use app_theme::app_theme;
pub use palette::{palette_from_mode, rainbow_ring, PaletteColors, ThemeMode};
