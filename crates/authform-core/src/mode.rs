//! Form mode and the labels derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the form is currently for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Signup,
            Mode::Signup => Mode::Login,
        }
    }

    /// Text on the submit control.
    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Login",
            Mode::Signup => "Sign Up",
        }
    }

    /// Text on the control that switches to the other mode.
    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Mode::Login => "New here? Sign Up!",
            Mode::Signup => "Already have an account? Login!",
        }
    }

    /// Action name used in the success notification.
    ///
    /// Differs from `submit_label` for signup ("Signup" vs "Sign Up").
    pub fn action_label(self) -> &'static str {
        match self {
            Mode::Login => "Login",
            Mode::Signup => "Signup",
        }
    }

    pub fn is_signup(self) -> bool {
        matches!(self, Mode::Signup)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::Signup => "signup",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Mode::Login),
            "signup" | "sign-up" => Ok(Mode::Signup),
            other => anyhow::bail!("Unknown mode '{other}' (expected login or signup)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(Mode::default(), Mode::Login);
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(Mode::Login.toggled(), Mode::Signup);
        assert_eq!(Mode::Signup.toggled(), Mode::Login);
    }

    #[test]
    fn test_labels_per_mode() {
        assert_eq!(Mode::Login.submit_label(), "Login");
        assert_eq!(Mode::Signup.submit_label(), "Sign Up");
        assert_eq!(Mode::Login.toggle_prompt(), "New here? Sign Up!");
        assert_eq!(
            Mode::Signup.toggle_prompt(),
            "Already have an account? Login!"
        );
        assert_eq!(Mode::Signup.action_label(), "Signup");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("login".parse::<Mode>().unwrap(), Mode::Login);
        assert_eq!("SignUp".parse::<Mode>().unwrap(), Mode::Signup);
        assert_eq!("sign-up".parse::<Mode>().unwrap(), Mode::Signup);
        assert!("register".parse::<Mode>().is_err());
    }
}
