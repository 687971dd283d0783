//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Key map:
//! - printable keys, Backspace, Delete, arrows, Home/End, Ctrl+W, Ctrl+U: edit the focused field
//! - Tab / Down, Shift+Tab / Up: move focus
//! - Enter: next field, or activate the focused button
//! - Ctrl+S: submit, Ctrl+T: switch mode, Ctrl+R: reveal passwords
//! - Esc: dismiss the notification, or quit when none is showing
//! - Ctrl+C: quit

use authform_core::Field;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::focus::Focus;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.view
                .expire_notification(app.presentation.notification_timeout);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if let Some(field) = app.focus.field() {
                app.editors[field].insert_str(&text);
                commit_field(app, field);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    // Notifications are one-shot: any key takes the current one down.
    let dismissed = app.view.dismiss_notification();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Esc => {
            if dismissed {
                vec![]
            } else {
                vec![UiEffect::Quit]
            }
        }
        KeyCode::Char('s') if ctrl => submit(app),
        KeyCode::Char('t') if ctrl => {
            toggle(app);
            vec![]
        }
        KeyCode::Char('r') if ctrl => {
            app.reveal_secrets = !app.reveal_secrets;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus = app.focus.next(&app.view.visibility);
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = app.focus.prev(&app.view.visibility);
            vec![]
        }
        KeyCode::Enter => activate(app),
        _ => {
            if let Some(field) = app.focus.field()
                && app.editors[field].input(key)
            {
                commit_field(app, field);
            }
            vec![]
        }
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return vec![];
    }
    let Some(target) = app.hit_areas.get().at(mouse.column, mouse.row) else {
        return vec![];
    };

    app.view.dismiss_notification();
    app.focus = target;
    match target {
        Focus::Field(_) => vec![],
        Focus::Submit => submit(app),
        Focus::Toggle => {
            toggle(app);
            vec![]
        }
    }
}

/// Enter: fields advance focus, buttons fire.
fn activate(app: &mut AppState) -> Vec<UiEffect> {
    match app.focus {
        Focus::Field(_) => {
            app.focus = app.focus.next(&app.view.visibility);
            vec![]
        }
        Focus::Submit => submit(app),
        Focus::Toggle => {
            toggle(app);
            vec![]
        }
    }
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let notification = app.form.submit(&mut app.view);
    if notification.is_error() {
        vec![UiEffect::Bell]
    } else {
        vec![]
    }
}

fn toggle(app: &mut AppState) {
    app.form.toggle(&mut app.view);
    app.focus = app.focus.clamp_to(&app.view.visibility);
}

/// Pushes an editor's text into the form.
fn commit_field(app: &mut AppState, field: Field) {
    let value = app.editors[field].text().to_string();
    app.form.set_field(field, value, &mut app.view);
}
