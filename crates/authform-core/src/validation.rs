//! Submit-time validation.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. username present
//! 2. password present
//! 3. signup only: email present, then password matches confirmation
//!
//! "Present" means non-empty; whitespace is not trimmed.

use thiserror::Error;

use crate::fields::FieldSet;
use crate::mode::Mode;

/// A user-recoverable input problem. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter username")]
    MissingUsername,
    #[error("Please enter password")]
    MissingPassword,
    #[error("Please enter email")]
    MissingEmail,
    #[error("Passwords don't match!")]
    PasswordMismatch,
}

pub type ValidationResult = Result<(), ValidationError>;

/// Validates `fields` for `mode`.
///
/// # Errors
/// Returns the first failing rule.
pub fn validate(mode: Mode, fields: &FieldSet) -> ValidationResult {
    if fields.username.is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if fields.password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }

    if mode.is_signup() {
        if fields.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if fields.password != fields.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    fn fields(username: &str, email: &str, password: &str, confirm: &str) -> FieldSet {
        FieldSet {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_empty_username_wins_in_both_modes() {
        let cases = [
            fields("", "", "", ""),
            fields("", "e@x.com", "p", "q"),
            fields("", "", "p", "p"),
        ];
        for mode in [Mode::Login, Mode::Signup] {
            for case in &cases {
                assert_eq!(validate(mode, case), Err(ValidationError::MissingUsername));
            }
        }
    }

    #[test]
    fn test_empty_password_after_username() {
        for mode in [Mode::Login, Mode::Signup] {
            assert_eq!(
                validate(mode, &fields("bob", "", "", "x")),
                Err(ValidationError::MissingPassword)
            );
        }
    }

    #[test]
    fn test_signup_requires_email() {
        assert_eq!(
            validate(Mode::Signup, &fields("bob", "", "x", "y")),
            Err(ValidationError::MissingEmail)
        );
    }

    #[test]
    fn test_signup_requires_matching_passwords() {
        assert_eq!(
            validate(Mode::Signup, &fields("bob", "e@x.com", "x", "y")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate(Mode::Signup, &fields("bob", "e@x.com", "x", "")),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_login_ignores_signup_only_fields() {
        let mut set = FieldSet::new();
        set.set(Field::Username, "a");
        set.set(Field::Password, "b");
        assert_eq!(validate(Mode::Login, &set), Ok(()));

        set.set(Field::ConfirmPassword, "different");
        assert_eq!(validate(Mode::Login, &set), Ok(()));
    }

    #[test]
    fn test_signup_ok() {
        assert_eq!(
            validate(Mode::Signup, &fields("a", "e@x.com", "p", "p")),
            Ok(())
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert_eq!(validate(Mode::Login, &fields(" ", "", " ", "")), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingUsername.to_string(),
            "Please enter username"
        );
        assert_eq!(
            ValidationError::MissingPassword.to_string(),
            "Please enter password"
        );
        assert_eq!(
            ValidationError::MissingEmail.to_string(),
            "Please enter email"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords don't match!"
        );
    }
}
