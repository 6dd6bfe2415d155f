use std::fmt;
use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME, INVALID_CREDENTIALS_ERROR, MISSING_CREDENTIALS_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingCredentials,
    InvalidCredentials,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => MISSING_CREDENTIALS_ERROR,
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_ERROR,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}

/// Mock credential check; there is no account database behind it.
pub fn authenticate(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_account_accepted() {
        assert_eq!(authenticate("demo", "demo"), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(authenticate("", "demo"), Err(AuthError::MissingCredentials));
        assert_eq!(authenticate("demo", ""), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn test_wrong_credentials() {
        assert_eq!(authenticate("demo", "Demo"), Err(AuthError::InvalidCredentials));
        assert_eq!(authenticate("alice", "demo"), Err(AuthError::InvalidCredentials));
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Incorrect username or password");
    }
}
