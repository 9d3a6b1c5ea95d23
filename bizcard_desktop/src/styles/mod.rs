pub mod button;
pub mod container;

pub use button::*;
pub use container::*;
