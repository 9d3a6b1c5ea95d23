pub mod spring;
pub mod states;

pub use spring::Spring;
pub use states::{PortfolioReveal, PullState, RefreshSpinnerState, TiltAnimation};
