use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;
use crate::constants::{
    INVALID_EMAIL_ERROR, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
    MISSING_FIELDS_ERROR, PASSWORD_MISMATCH_ERROR, SHORT_PASSWORD_ERROR,
};
use crate::profanity::ProfanityFilter;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !UsernameChecks::evaluate(username).is_valid() {
        return Err(ValidationError::new("invalid_username"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_short"));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsernameChecks {
    pub has_min_length: bool,
    pub has_max_length: bool,
    pub valid_characters: bool,
}

impl UsernameChecks {
    pub fn evaluate(username: &str) -> Self {
        if username.is_empty() {
            return Self::default();
        }
        let length = username.chars().count();
        Self {
            has_min_length: length >= MIN_USERNAME_LENGTH,
            has_max_length: length <= MAX_USERNAME_LENGTH,
            valid_characters: username.chars().all(|c| c.is_alphanumeric() || c == '_'),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_max_length && self.valid_characters
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailChecks {
    pub has_at_symbol: bool,
    pub has_domain: bool,
    pub valid_format: bool,
}

impl EmailChecks {
    pub fn evaluate(email: &str) -> Self {
        if email.is_empty() {
            return Self::default();
        }
        Self {
            has_at_symbol: email.contains('@'),
            has_domain: email.split('@').nth(1).map_or(false, |domain| domain.contains('.')),
            valid_format: validate_email(email).is_ok(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_at_symbol && self.has_domain && self.valid_format
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordChecks {
    pub has_min_length: bool,
    pub matches_confirmation: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str, confirmation: &str) -> Self {
        if password.is_empty() {
            return Self::default();
        }
        Self {
            has_min_length: validate_password(password).is_ok(),
            matches_confirmation: password == confirmation,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.matches_confirmation
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    MissingFields,
    InvalidUsername,
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
    InappropriateUsername(String),
}

impl RegistrationError {
    pub fn message(&self) -> String {
        match self {
            RegistrationError::MissingFields => MISSING_FIELDS_ERROR.to_string(),
            RegistrationError::InvalidUsername => format!(
                "Username must be {}-{} letters, numbers or underscores",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            ),
            RegistrationError::InvalidEmail => INVALID_EMAIL_ERROR.to_string(),
            RegistrationError::PasswordTooShort => SHORT_PASSWORD_ERROR.to_string(),
            RegistrationError::PasswordMismatch => PASSWORD_MISMATCH_ERROR.to_string(),
            RegistrationError::InappropriateUsername(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for RegistrationError {}

/// Checks a registration form, reporting the first problem found.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), RegistrationError> {
    let fields = [&form.username, &form.email, &form.password, &form.confirm_password];
    if fields.iter().any(|field| field.is_empty()) {
        return Err(RegistrationError::MissingFields);
    }

    validate_email(&form.email).map_err(|_| RegistrationError::InvalidEmail)?;
    validate_password(&form.password).map_err(|_| RegistrationError::PasswordTooShort)?;

    if form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }

    // username rules come after the password checks
    validate_username(&form.username).map_err(|_| RegistrationError::InvalidUsername)?;
    ProfanityFilter::validate_username(&form.username)
        .map_err(RegistrationError::InappropriateUsername)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            username: "lucky_star".to_string(),
            email: "star@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_registration(&form()), Ok(()));
    }

    #[test]
    fn test_missing_field_reported_first() {
        let mut f = form();
        f.confirm_password.clear();
        f.email = "broken".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::MissingFields));
    }

    #[test]
    fn test_bad_email() {
        let mut f = form();
        f.email = "star@example".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::InvalidEmail));
    }

    #[test]
    fn test_short_password_before_mismatch() {
        let mut f = form();
        f.password = "abc".to_string();
        f.confirm_password = "abcd".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::PasswordTooShort));
    }

    #[test]
    fn test_password_mismatch() {
        let mut f = form();
        f.confirm_password = "secret2".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::PasswordMismatch));
        assert_eq!(
            RegistrationError::PasswordMismatch.to_string(),
            "The two passwords do not match"
        );
    }

    #[test]
    fn test_username_format() {
        let mut f = form();
        f.username = "no spaces".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::InvalidUsername));
        f.username = "ab".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::InvalidUsername));
    }

    #[test]
    fn test_field_checks_run_before_username_rules() {
        let mut f = form();
        f.username = "no spaces".to_string();
        f.email = "broken".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::InvalidEmail));

        f.email = "star@example.com".to_string();
        f.password = "abc".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::PasswordTooShort));

        f.password = "secret1".to_string();
        f.confirm_password = "secret2".to_string();
        assert_eq!(validate_registration(&f), Err(RegistrationError::PasswordMismatch));
    }

    #[test]
    fn test_profane_username() {
        let mut f = form();
        f.username = "fuck".to_string();
        assert!(matches!(
            validate_registration(&f),
            Err(RegistrationError::InappropriateUsername(_))
        ));
    }

    #[test]
    fn test_live_checks() {
        assert_eq!(EmailChecks::evaluate(""), EmailChecks::default());
        let email = EmailChecks::evaluate("a@b");
        assert!(email.has_at_symbol && !email.has_domain && !email.is_valid());
        assert!(EmailChecks::evaluate("a@b.cn").is_valid());

        assert!(UsernameChecks::evaluate("demo").is_valid());
        assert!(!UsernameChecks::evaluate("this_name_is_far_too_long").has_max_length);

        let password = PasswordChecks::evaluate("secret1", "secret");
        assert!(password.has_min_length && !password.matches_confirmation);
    }
}
