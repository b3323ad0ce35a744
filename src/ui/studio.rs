// Studio rendering.
// Admin key login before a session exists; the upload form once unlocked.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::UploadField;

pub fn draw_studio(frame: &mut Frame, app: &App, area: Rect) {
    if app.studio.session.is_active() {
        draw_upload_form(frame, app, area);
    } else {
        draw_login(frame, app, area);
    }
}

fn draw_login(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Key input
            Constraint::Min(1),    // Message
        ])
        .split(area);

    // Key is masked; only its length shows.
    let masked = "•".repeat(app.studio.key_input.chars().count());
    let input_line = Line::from(vec![
        Span::styled("Admin key: ", Style::default().fg(Color::DarkGray)),
        Span::raw(masked),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Studio — Admin Only "),
    );
    frame.render_widget(input, chunks[0]);

    let mut lines = Vec::new();
    if app.studio.verifying {
        lines.push(Line::from(Span::styled(
            "⏳ Verifying...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(message) = &app.studio.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Use this panel to add new drawings once unlocked.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

fn draw_upload_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Session banner
            Constraint::Length(12), // Form fields
            Constraint::Min(1),     // Message
        ])
        .split(area);

    let banner = Line::from(vec![
        Span::styled(" Admin mode enabled", Style::default().fg(Color::Green)),
        Span::styled("  ·  Ctrl+L to log out", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(banner), chunks[0]);

    let mut lines = Vec::new();
    for field in UploadField::ALL {
        let value = field_value(app, field);
        let focused = app.studio.focus == field;

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![
            Span::styled(format!(" {:<12}", field.label()), label_style),
            Span::raw(value.to_string()),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Upload New Work "),
    );
    frame.render_widget(form, chunks[1]);

    let mut footer = Vec::new();
    if app.studio.uploading {
        footer.push(Line::from(Span::styled(
            "⏳ Uploading...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(message) = &app.studio.message {
        let color = if message.starts_with("Uploaded") {
            Color::Green
        } else {
            Color::Red
        };
        footer.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        )));
    }
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}

fn field_value(app: &App, field: UploadField) -> &str {
    match field {
        UploadField::Title => &app.studio.draft.title,
        UploadField::Tag => &app.studio.draft.tag,
        UploadField::Year => &app.studio.draft.year,
        UploadField::ImagePath => &app.studio.draft.image_path,
        UploadField::Description => &app.studio.draft.description,
    }
}
