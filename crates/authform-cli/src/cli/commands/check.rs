//! Check command handler.
//!
//! Drives the same `AuthForm` the TUI uses, through a headless presenter.

use std::fmt;

use anyhow::Result;
use authform_core::{AuthForm, Field, Mode};

use crate::modes::headless::HeadlessPresenter;

/// Returned when the submission was rejected; the message is already on stderr.
#[derive(Debug)]
pub struct ValidationFailed;

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")
    }
}

impl std::error::Error for ValidationFailed {}

pub struct CheckOptions {
    pub mode: Mode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn run(options: &CheckOptions) -> Result<()> {
    let mut presenter = HeadlessPresenter::stdio();
    let mut form = AuthForm::new();

    if form.mode() != options.mode {
        form.toggle(&mut presenter);
    }

    for (field, value) in [
        (Field::Username, &options.username),
        (Field::Email, &options.email),
        (Field::Password, &options.password),
        (Field::ConfirmPassword, &options.confirm_password),
    ] {
        form.set_field(field, value.as_str(), &mut presenter);
    }

    let notification = form.submit(&mut presenter);
    presenter.flush()?;

    if notification.is_error() {
        return Err(ValidationFailed.into());
    }
    Ok(())
}
