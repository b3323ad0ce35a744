// Home page rendering.
// Static marketing content: hero, stats, about, process steps, contact.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::content;

pub fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let profile = &content::PROFILE;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tagline,
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::styled(profile.location, Style::default().fg(Color::DarkGray)),
            Span::raw("  ·  "),
            Span::styled(profile.availability, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    // Stats
    let mut stat_spans = Vec::new();
    for stat in &content::STATS {
        stat_spans.push(Span::styled(
            stat.value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        stat_spans.push(Span::styled(
            format!(" {}   ", stat.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(stat_spans));
    lines.push(Line::from(""));

    lines.push(section_title("About"));
    lines.push(Line::from(profile.about));
    lines.push(Line::from(""));

    lines.push(section_title("Highlights"));
    for highlight in content::HIGHLIGHTS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Yellow)),
            Span::raw(highlight),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_title("Process"));
    for step in &content::PROCESS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", step.step),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                step.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("      {}", step.text)));
    }
    lines.push(Line::from(""));

    lines.push(section_title("Contact"));
    lines.push(Line::from(vec![
        Span::styled("  Instagram ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("@{}", profile.instagram_id),
            Style::default().fg(Color::Magenta),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  WhatsApp  ", Style::default().fg(Color::DarkGray)),
        Span::styled(profile.whatsapp_number, Style::default().fg(Color::Green)),
    ]));

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.home_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(" Portfolio "));
    frame.render_widget(page, area);
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}
