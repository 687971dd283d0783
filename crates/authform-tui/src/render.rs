//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! form state. The only write is `hit_areas`, a `Cell` the reducer reads for
//! mouse routing.

use authform_core::{Field, FieldSet};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::features::focus::Focus;
use crate::state::{AppState, HitAreas};
use crate::theme::Palette;

/// Rows taken by one bordered field.
const FIELD_HEIGHT: u16 = 3;

/// Rows taken by the submit button.
const BUTTON_HEIGHT: u16 = 3;

/// Border plus one row of padding on each side.
const CARD_CHROME: u16 = 4;

/// Character used to mask secret fields.
const MASK_CHAR: char = '•';

const HINTS: &str = "Tab next · Enter select · Ctrl+S submit · Ctrl+T switch · Ctrl+R reveal · Esc quit";

/// Renders the entire screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let palette = &app.presentation.palette;

    frame.render_widget(Block::default().style(palette.screen()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let hit_areas = render_card(app, frame, chunks[0]);
    app.hit_areas.set(hit_areas);

    render_notification(app, frame, chunks[1]);

    frame.render_widget(
        Paragraph::new(HINTS)
            .alignment(Alignment::Center)
            .style(palette.hint()),
        chunks[2],
    );
}

/// Height the card needs for the currently visible fields.
pub fn card_height(app: &AppState) -> u16 {
    let visible = Field::ALL
        .iter()
        .filter(|f| app.view.visibility[**f])
        .count() as u16;
    // heading, gap, fields, gap, button, gap, toggle
    CARD_CHROME + 1 + 1 + visible * FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 1 + 1
}

fn render_card(app: &AppState, frame: &mut Frame, area: Rect) -> HitAreas {
    let palette = &app.presentation.palette;

    let width = app
        .presentation
        .card_width
        .min(area.width.saturating_sub(2));
    let height = card_height(app).min(area.height);
    let card = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, card);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.card_background).bg(palette.card_background))
            .style(palette.card()),
        card,
    );

    let inner = Rect::new(
        card.x + 2,
        card.y + 2,
        card.width.saturating_sub(4),
        card.height.saturating_sub(CARD_CHROME),
    );

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    let visible: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| app.view.visibility[*f])
        .collect();
    constraints.extend(visible.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(app.presentation.heading.as_str())
            .alignment(Alignment::Center)
            .style(palette.heading()),
        rows[0],
    );

    let mut hit_areas = HitAreas::default();
    for (idx, field) in visible.iter().enumerate() {
        let rect = rows[2 + idx];
        render_field(app, frame, *field, rect);
        hit_areas.fields[*field] = Some(rect);
    }

    let button_row = rows[2 + visible.len() + 1];
    render_submit_button(app, frame, button_row);
    hit_areas.submit = Some(button_row);

    let toggle_row = rows[2 + visible.len() + 3];
    render_toggle_link(app, frame, toggle_row);
    hit_areas.toggle = Some(toggle_row);

    hit_areas
}

fn render_field(app: &AppState, frame: &mut Frame, field: Field, area: Rect) {
    let palette = &app.presentation.palette;
    let focused = app.focus == Focus::Field(field);
    let border_color = if focused {
        palette.primary
    } else {
        palette.text_secondary
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(palette.text_secondary),
        ))
        .style(palette.card());
    let inner = block.inner(area);

    let value = display_value(&app.view.fields, field, app.reveal_secrets);
    let cursor_col = cursor_column(app, field);
    // Keep the cursor inside the box for long values.
    let offset = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(value).block(block).scroll((0, offset)),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + (cursor_col - offset), inner.y));
    }
}

/// Screen column of the cursor within a field's text.
///
/// Masked values draw one mask char per character, so the column is the
/// char count rather than the display width of the real text.
fn cursor_column(app: &AppState, field: Field) -> u16 {
    let editor = app.editor(field);
    let width = if field.is_secret() && !app.reveal_secrets {
        editor.cursor()
    } else {
        editor.cursor_width()
    };
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Field text as it should appear on screen.
///
/// Secret fields are masked one mask char per character unless revealed.
pub fn display_value(fields: &FieldSet, field: Field, reveal: bool) -> String {
    let value = fields.get(field);
    if field.is_secret() && !reveal {
        MASK_CHAR.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn render_submit_button(app: &AppState, frame: &mut Frame, area: Rect) {
    let palette = &app.presentation.palette;
    let mut style = Style::default()
        .fg(palette.text)
        .bg(palette.primary)
        .add_modifier(Modifier::BOLD);
    if app.focus == Focus::Submit {
        style = style.add_modifier(Modifier::REVERSED);
    }

    frame.render_widget(
        Paragraph::new(app.view.submit_label.as_str())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .style(style),
        area,
    );
}

fn render_toggle_link(app: &AppState, frame: &mut Frame, area: Rect) {
    let palette = &app.presentation.palette;
    let mut style = Style::default()
        .fg(palette.primary)
        .bg(palette.card_background);
    if app.focus == Focus::Toggle {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    frame.render_widget(
        Paragraph::new(app.view.toggle_text.as_str())
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
}

/// Bottom snackbar for the current notification.
fn render_notification(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(notification) = app.view.notification() else {
        return;
    };
    let style = snackbar_style(&app.presentation.palette, notification.kind());

    frame.render_widget(
        Paragraph::new(Line::from(format!(" {} ", notification.text())))
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
}

fn snackbar_style(palette: &Palette, kind: authform_core::NotificationKind) -> Style {
    palette.notification(kind).add_modifier(Modifier::BOLD)
}
