use rustrict::CensorStr;

#[derive(Debug)]
pub struct ProfanityFilter;

impl ProfanityFilter {
    pub fn contains_profanity(text: &str) -> bool {
        text.is_inappropriate()
    }

    pub fn validate_username(username: &str) -> Result<(), String> {
        if Self::contains_profanity(username) {
            return Err(format!("Inappropriate language detected: {}", username.censor()));
        }
        Ok(())
    }
}
