//! Domain layer - Site options and pipeline stages

pub mod step;
pub mod theme;

pub use step::Step;
pub use theme::Theme;
