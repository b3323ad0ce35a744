// Gallery rendering.
// Tag chip row plus the works list, with distinct loading, backend-offline,
// and empty-gallery states.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::loader::LoadState;
use crate::state::gallery::display_tag;

pub fn draw_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tag chips
            Constraint::Min(1),    // Works list
        ])
        .split(area);

    draw_tag_chips(frame, app, chunks[0]);
    draw_works(frame, app, chunks[1]);
}

fn draw_tag_chips(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for tag in app.gallery.tags() {
        let style = if tag == app.gallery.active_tag {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tag), style));
        spans.push(Span::raw(" "));
    }

    if let Some(notice) = &app.gallery.notice {
        spans.push(Span::styled(
            format!("  {}", notice),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_works(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" My Works ");

    match &app.gallery.load {
        LoadState::Idle => {
            let text = Paragraph::new("Press r to load works")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(text, area);
        }
        LoadState::Loading => {
            let text = Paragraph::new("⏳ Loading works...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(text, area);
        }
        LoadState::Failed => {
            // Unreachable backend is not the same as an empty gallery.
            let text =
                Paragraph::new("Backend is offline — connect the server to load your uploads.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red))
                    .block(block);
            frame.render_widget(text, area);
        }
        LoadState::Ready(items) if items.is_empty() => {
            let text =
                Paragraph::new("No artworks yet. Log in as admin and upload your first drawing.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
            frame.render_widget(text, area);
        }
        LoadState::Ready(_) => {
            let filtered = app.gallery.filtered_works();
            if filtered.is_empty() {
                let text = Paragraph::new(format!(
                    "No works tagged \"{}\".",
                    app.gallery.active_tag
                ))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
                frame.render_widget(text, area);
                return;
            }

            let items: Vec<ListItem> = filtered
                .iter()
                .map(|work| {
                    ListItem::new(Line::from(vec![
                        Span::styled(&work.title, Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!("  {}", display_tag(work)),
                            Style::default().fg(Color::Magenta),
                        ),
                        Span::styled(
                            format!("  {}", work.year),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let title = format!(" My Works ({}) ", filtered.len());
            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            let mut list_state = ListState::default();
            list_state.select(Some(app.gallery.selected));
            frame.render_stateful_widget(list_widget, area, &mut list_state);
        }
    }
}
