// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const SPINNER_TICK_INCREMENT: f32 = 0.016;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Tilt easing (snappy, follows the sensor closely)
pub const TILT_SPRING_STIFFNESS: f32 = 0.12;
pub const TILT_SPRING_DAMPING: f32 = 0.75;

// Portfolio reveal
pub const REVEAL_STIFFNESS: f32 = 0.15;
pub const REVEAL_DAMPING: f32 = 0.70;
pub const PORTFOLIO_MAX_HEIGHT: f32 = 340.0;

// UI dimensions
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const CARD_PADDING: f32 = 40.0;
pub const AVATAR_SIZE: f32 = 110.0;
pub const AVATAR_RING_WIDTH: f32 = 3.0;
pub const PROJECT_THUMB_SIZE: f32 = 80.0;

// Pull-to-refresh
pub const PULL_TRIGGER_DISTANCE: f32 = 80.0;

// Pseudo-3D projection
pub const PERSPECTIVE_DISTANCE: f32 = 900.0;
