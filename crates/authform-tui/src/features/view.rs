//! The TUI side of the `Presenter` boundary.
//!
//! `FormView` is a plain view model: the form pushes into it, the renderer
//! reads from it. It never calls back into the form.

use std::time::{Duration, Instant};

use authform_core::{FieldSet, Mode, Notification, Presenter, Visibility};

/// A notification on screen and when it appeared.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, timeout: Option<Duration>) -> bool {
        timeout.is_some_and(|timeout| self.shown_at.elapsed() >= timeout)
    }
}

/// Last values pushed by the form.
#[derive(Debug, Clone)]
pub struct FormView {
    pub fields: FieldSet,
    pub visibility: Visibility,
    pub submit_label: String,
    pub toggle_text: String,
    pub toast: Option<Toast>,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            fields: FieldSet::default(),
            visibility: FieldSet::visibility(Mode::default()),
            submit_label: Mode::default().submit_label().to_string(),
            toggle_text: Mode::default().toggle_prompt().to_string(),
            toast: None,
        }
    }
}

impl FormView {
    /// Removes the current notification. Returns true if one was showing.
    pub fn dismiss_notification(&mut self) -> bool {
        self.toast.take().is_some()
    }

    /// Drops the notification if it has been up for `timeout`.
    pub fn expire_notification(&mut self, timeout: Option<Duration>) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(timeout)) {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.toast.as_ref().map(|t| &t.notification)
    }
}

impl Presenter for FormView {
    fn render_fields(&mut self, fields: &FieldSet, visibility: &Visibility) {
        self.fields.clone_from(fields);
        self.visibility = *visibility;
    }

    fn render_submit_label(&mut self, label: &str) {
        label.clone_into(&mut self.submit_label);
    }

    fn render_toggle_text(&mut self, text: &str) {
        text.clone_into(&mut self.toggle_text);
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.toast = Some(Toast {
            notification: notification.clone(),
            shown_at: Instant::now(),
        });
    }
}
