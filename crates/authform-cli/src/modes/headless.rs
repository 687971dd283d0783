//! Presenter for non-interactive runs.
//!
//! Only notifications are written: success to `out`, errors to `err`.
//! Field and label updates have nowhere to go without a screen.

use std::io::{self, Write};

use anyhow::{Context, Result};
use authform_core::{FieldSet, Notification, Presenter, Visibility};
use tracing::{trace, warn};

pub struct HeadlessPresenter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl HeadlessPresenter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> HeadlessPresenter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush stdout")?;
        self.err.flush().context("flush stderr")?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Presenter for HeadlessPresenter<O, E> {
    fn render_fields(&mut self, _fields: &FieldSet, visibility: &Visibility) {
        trace!(visible = visibility.values().filter(|v| **v).count(), "fields");
    }

    fn render_submit_label(&mut self, label: &str) {
        trace!(label, "submit label");
    }

    fn render_toggle_text(&mut self, text: &str) {
        trace!(text, "toggle text");
    }

    fn show_notification(&mut self, notification: &Notification) {
        let result = match notification {
            Notification::Success(text) => writeln!(self.out, "{text}"),
            Notification::Error(text) => writeln!(self.err, "{text}"),
        };
        if let Err(err) = result {
            warn!("failed to write notification: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use authform_core::{AuthForm, Field};

    use super::*;

    fn run(form: &AuthForm) -> (String, String) {
        let mut presenter = HeadlessPresenter::new(Vec::new(), Vec::new());
        form.submit(&mut presenter);
        let (out, err) = presenter.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_goes_to_out() {
        let mut form = AuthForm::new();
        let mut sink = HeadlessPresenter::new(io::sink(), io::sink());
        form.set_field(Field::Username, "bob", &mut sink);
        form.set_field(Field::Password, "x", &mut sink);

        let (out, err) = run(&form);
        assert_eq!(out, "Login successful!\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_goes_to_err() {
        let (out, err) = run(&AuthForm::new());
        assert!(out.is_empty());
        assert_eq!(err, "Please enter username\n");
    }
}
