//! Field validators mirroring the server-side rules.
//!
//! A validator returns `None` when the value is acceptable, or the message
//! describing why it is not. Validators never touch the network; a form
//! that fails validation is never submitted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::Msg;

/// Validator signature: `None` means valid.
pub type Validator = fn(&str) -> Option<Msg>;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Same shape the site checks before submitting: something@something.tld
    // with no whitespace or extra @.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex")
});

/// Returns whether `email` looks like an address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

/// Requires a non-blank value.
pub fn required(value: &str) -> Option<Msg> {
    if value.trim().is_empty() {
        Some(Msg::FieldRequired)
    } else {
        None
    }
}

/// Requires a syntactically valid email address.
pub fn email(value: &str) -> Option<Msg> {
    if is_valid_email(value.trim()) {
        None
    } else {
        Some(Msg::EnterValidEmail)
    }
}

/// Requires at least [`MIN_PASSWORD_LEN`] characters.
pub fn password_length(value: &str) -> Option<Msg> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Some(Msg::PasswordTooShort)
    } else {
        None
    }
}

/// Requires `confirm` to equal `password`.
#[must_use]
pub fn passwords_match(password: &str, confirm: &str) -> Option<Msg> {
    if password == confirm {
        None
    } else {
        Some(Msg::PasswordsNotMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_valid_email("user@club.test"));
        assert!(is_valid_email("first.last+tag@sub.domain.example"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user @domain.test"));
        assert!(!is_valid_email("user@@domain.test"));
    }

    #[test]
    fn test_required() {
        assert_eq!(required("   "), Some(Msg::FieldRequired));
        assert_eq!(required("x"), None);
    }

    #[test]
    fn test_password_length() {
        assert_eq!(password_length("1234567"), Some(Msg::PasswordTooShort));
        assert_eq!(password_length("12345678"), None);
    }

    #[test]
    fn test_passwords_match() {
        assert_eq!(passwords_match("abcdefgh", "abcdefgh"), None);
        assert_eq!(
            passwords_match("abcdefgh", "abcdefg"),
            Some(Msg::PasswordsNotMatch)
        );
    }

    #[test]
    fn test_email_validator_trims() {
        assert_eq!(email(" user@club.test "), None);
        assert_eq!(email("nope"), Some(Msg::EnterValidEmail));
    }
}
