//! Application state for the form screen.
//!
//! ```text
//! AppState
//! ├── form: AuthForm            (mode + field values, the source of truth)
//! ├── view: FormView            (what the form last pushed for display)
//! ├── editors: EnumMap<Field, LineEditor> (per-field cursor + text)
//! ├── focus: Focus
//! ├── reveal_secrets: bool
//! └── hit_areas: Cell<HitAreas> (set during render, used for mouse routing)
//! ```

use std::cell::Cell;
use std::time::Duration;

use authform_core::config::Config;
use authform_core::{AuthForm, Field};
use enum_map::EnumMap;
use ratatui::layout::Rect;

use crate::features::focus::Focus;
use crate::features::line_editor::LineEditor;
use crate::features::view::FormView;
use crate::theme::Palette;

/// Screen regions of clickable controls from the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub fields: EnumMap<Field, Option<Rect>>,
    pub submit: Option<Rect>,
    pub toggle: Option<Rect>,
}

impl HitAreas {
    /// The control under a screen position, if any.
    pub fn at(&self, column: u16, row: u16) -> Option<Focus> {
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains((column, row).into()));
        if hit(self.submit) {
            return Some(Focus::Submit);
        }
        if hit(self.toggle) {
            return Some(Focus::Toggle);
        }
        self.fields
            .iter()
            .find(|(_, rect)| hit(**rect))
            .map(|(field, _)| Focus::Field(field))
    }
}

/// Static presentation settings resolved at startup.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub heading: String,
    pub card_width: u16,
    pub notification_timeout: Option<Duration>,
    pub palette: Palette,
}

impl Presentation {
    /// Resolves presentation settings from the config file values.
    ///
    /// # Errors
    /// Returns an error if a theme color cannot be parsed.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            heading: config.heading.clone(),
            card_width: config.layout.card_width,
            notification_timeout: config.notification_timeout(),
            palette: Palette::from_config(&config.theme)?,
        })
    }
}

impl Default for Presentation {
    fn default() -> Self {
        let config = Config::default();
        Self {
            heading: config.heading.clone(),
            card_width: config.layout.card_width,
            notification_timeout: config.notification_timeout(),
            palette: Palette::default(),
        }
    }
}

pub struct AppState {
    pub form: AuthForm,
    pub view: FormView,
    pub editors: EnumMap<Field, LineEditor>,
    pub focus: Focus,
    /// Show password fields in clear text.
    pub reveal_secrets: bool,
    pub presentation: Presentation,
    pub should_quit: bool,
    pub hit_areas: Cell<HitAreas>,
}

impl AppState {
    /// Creates the initial state and paints the form's first view.
    pub fn new(presentation: Presentation) -> Self {
        let form = AuthForm::new();
        let mut view = FormView::default();
        form.render(&mut view);

        Self {
            form,
            view,
            editors: EnumMap::default(),
            focus: Focus::default(),
            reveal_secrets: false,
            presentation,
            should_quit: false,
            hit_areas: Cell::new(HitAreas::default()),
        }
    }

    pub fn editor(&self, field: Field) -> &LineEditor {
        &self.editors[field]
    }
}
