//! BizCard Desktop - a digital business card GUI built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod dispatcher;
pub mod images;
pub mod styles;
pub mod theme;

pub use animation::{PortfolioReveal, PullState, RefreshSpinnerState, Spring, TiltAnimation};
pub use constants::*;
pub use dispatcher::Dispatcher;
pub use images::ImageCache;
pub use styles::*;
pub use theme::{app_theme, palette_from_mode, PaletteColors, ThemeMode};
