pub mod auth;
pub mod lucky_wheel;
