pub mod auth_state;
pub mod form_state;
pub mod validation;

pub use auth_state::*;
