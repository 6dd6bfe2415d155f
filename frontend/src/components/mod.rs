pub mod auth;
pub mod gradient_background;

pub use auth::*;
pub use gradient_background::GradientBackground;
