pub mod animation;
pub mod auth;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod prize;
pub mod profanity;
pub mod session;
pub mod shared_lucky_wheel;
pub mod telemetry;
pub mod validation;
pub mod wheel;

pub use error::LotteryError;
