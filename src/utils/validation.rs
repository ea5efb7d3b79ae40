use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("email pattern compiles")
});

/// Simple email-pattern check. Empty values pass; presence is a separate
/// concern from well-formedness.
pub fn validate_email_pattern(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}
