// Modal UI components.
// Work detail viewer and the delete confirmation dialog.

use ratatui::{prelude::*, widgets::*};

use crate::api::WorkItem;
use crate::state::gallery::display_tag;

/// Centered rect of the given size, clamped to the frame.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Draw the work detail modal on top of the gallery.
pub fn draw_work_modal(frame: &mut Frame, work: &WorkItem, admin_mode: bool) {
    let modal_area = centered(frame.area(), 64, 14);
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Details
            Constraint::Length(1), // Instructions
        ])
        .split(modal_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                display_tag(work),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!("  {}", work.year),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            work.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if !work.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(work.description.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        work.image_url.clone(),
        Style::default().fg(Color::Blue),
    )));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Artwork "),
        );
    frame.render_widget(detail, chunks[0]);

    let mut instructions = vec![
        Span::styled(" Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ];
    if admin_mode {
        instructions.push(Span::styled(" d", Style::default().fg(Color::Yellow)));
        instructions.push(Span::styled(
            " = Delete ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(instructions)).alignment(Alignment::Center),
        chunks[1],
    );
}

/// Draw the delete confirmation dialog. Rendered above the detail modal.
pub fn draw_delete_modal(frame: &mut Frame) {
    let modal_area = centered(frame.area(), 52, 7);
    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            "Delete this artwork?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("This will remove the image and its details permanently."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Delete   ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = Cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm Delete "),
        );
    frame.render_widget(dialog, modal_area);
}
