use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LotteryError {
    /// The draw engine could not be made ready. Fatal until the page is reloaded.
    Initialization(String),
    /// Malformed weights, sector counts or configuration.
    InvalidInput(String),
    /// A spin was requested while another one is still animating.
    AnimationInterrupted,
}

impl LotteryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LotteryError::InvalidInput(msg.into())
    }

    /// Message suitable for the error alert on the wheel page.
    pub fn user_message(&self) -> &'static str {
        match self {
            LotteryError::Initialization(_) => "The lottery engine failed to load. Please refresh the page and try again.",
            LotteryError::InvalidInput(_) => "Something went wrong during the draw. Please try again.",
            LotteryError::AnimationInterrupted => "",
        }
    }
}

impl fmt::Display for LotteryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotteryError::Initialization(reason) => write!(f, "draw engine initialization failed: {}", reason),
            LotteryError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            LotteryError::AnimationInterrupted => write!(f, "a spin is already in progress"),
        }
    }
}

impl std::error::Error for LotteryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = LotteryError::invalid("all weights are zero");
        assert_eq!(err.to_string(), "invalid input: all weights are zero");
    }

    #[test]
    fn test_interrupted_has_no_user_message() {
        assert!(LotteryError::AnimationInterrupted.user_message().is_empty());
        assert!(!LotteryError::Initialization("no entropy".into()).user_message().is_empty());
    }
}
