//! Keyboard focus ring over the visible controls.

use authform_core::{Field, Visibility};

/// The control that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
    Toggle,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Username)
    }
}

impl Focus {
    /// Visible controls in tab order.
    pub fn ring(visibility: &Visibility) -> Vec<Focus> {
        Field::ALL
            .into_iter()
            .filter(|field| visibility[*field])
            .map(Focus::Field)
            .chain([Focus::Submit, Focus::Toggle])
            .collect()
    }

    #[must_use]
    pub fn next(self, visibility: &Visibility) -> Self {
        self.step(visibility, 1)
    }

    #[must_use]
    pub fn prev(self, visibility: &Visibility) -> Self {
        let ring_len = Self::ring(visibility).len();
        self.step(visibility, ring_len - 1)
    }

    /// Falls back to the first field when this control is no longer shown.
    #[must_use]
    pub fn clamp_to(self, visibility: &Visibility) -> Self {
        match self {
            Focus::Field(field) if !visibility[field] => Focus::default(),
            other => other,
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit | Focus::Toggle => None,
        }
    }

    fn step(self, visibility: &Visibility, by: usize) -> Self {
        let ring = Self::ring(visibility);
        let current = ring
            .iter()
            .position(|f| *f == self.clamp_to(visibility))
            .unwrap_or(0);
        ring[(current + by) % ring.len()]
    }
}
