//! Transient messages shown after a submit.

use crate::mode::Mode;
use crate::validation::ValidationError;

/// Style class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A one-shot message; shown once, then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Success(String),
}

impl Notification {
    /// Success message for a submit in `mode`, e.g. "Login successful!".
    pub fn success_for(mode: Mode) -> Self {
        Notification::Success(format!("{} successful!", mode.action_label()))
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Error(_) => NotificationKind::Error,
            Notification::Success(_) => NotificationKind::Success,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notification::Error(text) | Notification::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

impl From<ValidationError> for Notification {
    fn from(err: ValidationError) -> Self {
        Notification::Error(err.to_string())
    }
}
