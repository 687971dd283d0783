//! Field values and per-mode visibility.

use enum_map::{Enum, EnumMap, enum_map};

use crate::mode::Mode;

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Which fields are shown, keyed by field.
pub type Visibility = EnumMap<Field, bool>;

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the value should be masked when rendered.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Whether the field is only part of the signup form.
    pub fn is_signup_only(self) -> bool {
        matches!(self, Field::Email | Field::ConfirmPassword)
    }

    pub fn is_visible_in(self, mode: Mode) -> bool {
        !self.is_signup_only() || mode.is_signup()
    }
}

/// The user-entered values.
///
/// No validation happens on write; see [`crate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Visibility of every field in `mode`.
    pub fn visibility(mode: Mode) -> Visibility {
        enum_map! {
            field => field.is_visible_in(mode),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_without_touching_others() {
        let mut fields = FieldSet::new();
        fields.set(Field::Username, "bob");
        fields.set(Field::Username, "alice");
        fields.set(Field::ConfirmPassword, "pw");

        assert_eq!(fields.get(Field::Username), "alice");
        assert_eq!(fields.get(Field::ConfirmPassword), "pw");
        assert_eq!(fields.get(Field::Email), "");
        assert_eq!(fields.get(Field::Password), "");
    }

    #[test]
    fn test_login_hides_signup_only_fields() {
        let vis = FieldSet::visibility(Mode::Login);
        assert!(vis[Field::Username]);
        assert!(vis[Field::Password]);
        assert!(!vis[Field::Email]);
        assert!(!vis[Field::ConfirmPassword]);
    }

    #[test]
    fn test_signup_shows_everything() {
        let vis = FieldSet::visibility(Mode::Signup);
        assert!(Field::ALL.iter().all(|f| vis[*f]));
    }

    #[test]
    fn test_secret_fields() {
        let secret: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_secret()).collect();
        assert_eq!(secret, vec![Field::Password, Field::ConfirmPassword]);
    }
}
