pub mod avatar_ring;
pub mod refresh_spinner;
pub mod tilt_card;

pub use avatar_ring::AvatarRing;
pub use refresh_spinner::RefreshSpinner;
pub use tilt_card::TiltCardCanvas;
