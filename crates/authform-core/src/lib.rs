//! Core state machine for the authform login/signup screen.
//!
//! Everything here is UI-agnostic: the form pushes its view into a
//! [`Presenter`] and never holds a reference to concrete widgets.
//!
//! ## Module Structure
//!
//! - `mode.rs`: `Mode` (Login/Signup) and the labels that depend on it
//! - `fields.rs`: `Field`, `FieldSet` and per-mode visibility
//! - `validation.rs`: the ordered, short-circuiting validation rules
//! - `notification.rs`: transient error/success notifications
//! - `form.rs`: `AuthForm` state machine and the `Presenter` boundary
//! - `config.rs`: `${AUTHFORM_HOME}/config.toml` loading

pub mod config;
pub mod fields;
pub mod form;
pub mod mode;
pub mod notification;
pub mod validation;

pub use fields::{Field, FieldSet, Visibility};
pub use form::{AuthForm, Presenter};
pub use mode::Mode;
pub use notification::{Notification, NotificationKind};
pub use validation::{ValidationError, ValidationResult, validate};
