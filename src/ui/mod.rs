// UI module for rendering the TUI.
// Contains widgets for the tab bar, the Home page, gallery, studio forms,
// and the modal dialogs.

mod gallery;
mod home;
mod modal;
mod studio;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    match app.active_tab {
        Tab::Home => home::draw_home(frame, app, chunks[1]),
        Tab::Gallery => gallery::draw_gallery(frame, app, chunks[1]),
        Tab::Studio => studio::draw_studio(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);

    // Modals are rendered last, on top of the gallery.
    if app.active_tab == Tab::Gallery {
        if let Some(work) = &app.gallery.opened {
            modal::draw_work_modal(frame, work, app.studio.session.is_active());
        }
        if app.gallery.delete_target.is_some() {
            modal::draw_delete_modal(frame);
        }
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut hints = match app.active_tab {
        Tab::Home => vec![
            Span::raw(" ↑↓ "),
            hint("Scroll"),
            Span::raw("  Tab "),
            hint("Switch"),
            Span::raw("  q "),
            hint("Quit"),
        ],
        Tab::Gallery => {
            let mut spans = vec![
                Span::raw(" ↑↓ "),
                hint("Select"),
                Span::raw("  ←→ "),
                hint("Filter"),
                Span::raw("  ↵ "),
                hint("View"),
                Span::raw("  r "),
                hint("Reload"),
            ];
            if app.studio.session.is_active() {
                spans.push(Span::raw("  d "));
                spans.push(hint("Delete"));
            }
            spans.push(Span::raw("  Tab "));
            spans.push(hint("Switch"));
            spans.push(Span::raw("  q "));
            spans.push(hint("Quit"));
            spans
        }
        Tab::Studio => {
            if app.studio.session.is_active() {
                vec![
                    Span::raw(" ↑↓ "),
                    hint("Field"),
                    Span::raw("  ↵ "),
                    hint("Upload"),
                    Span::raw("  ^L "),
                    hint("Logout"),
                    Span::raw("  Tab "),
                    hint("Switch"),
                    Span::raw("  ^C "),
                    hint("Quit"),
                ]
            } else {
                vec![
                    Span::raw(" ↵ "),
                    hint("Unlock"),
                    Span::raw("  Tab "),
                    hint("Switch"),
                    Span::raw("  ^C "),
                    hint("Quit"),
                ]
            }
        }
    };

    if app.studio.session.is_active() {
        hints.push(Span::styled(
            "  ADMIN",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
