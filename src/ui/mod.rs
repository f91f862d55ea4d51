//! UI rendering for the library browser
//!
//! Layout, top to bottom:
//! - Header: app name, data source, screen tabs, loading indicator
//! - Body: the library browser or the admin dashboard
//! - Footer: status message, or key hints for the current context
//!
//! Overlays (full-screen preview, delete confirmation) draw last.

mod dashboard;
mod helpers;
mod layout;
mod library;
mod modal;
mod theme;

pub use helpers::{centered_rect, truncate_to_width};
pub use layout::LayoutContext;
pub use library::breadcrumb_line;
pub use theme::{kind_color, status_color};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::input::ModalType;
use crate::state::ViewMode;
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, rows[0]);

    match app.screen {
        Screen::Library => library::render_library(frame, app, rows[1]),
        Screen::Dashboard => dashboard::render_dashboard(frame, app, rows[1]),
    }

    render_footer(frame, app, rows[2]);

    if let Some(ref preview) = app.modal {
        modal::render_preview_modal(frame, preview);
    }
    if let Some(ref file) = app.pending_delete {
        modal::render_confirm_delete(frame, file);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " folio ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}  ", app.source_label), Style::default().fg(COLOR_DIM)),
    ];

    for screen in [Screen::Library, Screen::Dashboard] {
        let style = if screen == app.screen {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(screen.title(), style));
        spans.push(Span::raw("  "));
    }

    if app.is_loading() {
        spans.push(Span::styled("Loading…", Style::default().fg(COLOR_WARNING)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current context.
pub fn key_hints(app: &App) -> &'static str {
    let context = app.input_context();
    match context.modal {
        ModalType::Preview => return "o open · Esc close",
        ModalType::ConfirmDelete => return "y delete · n cancel",
        ModalType::None => {}
    }
    if app.screen == Screen::Dashboard {
        return "Tab library · r refresh · q quit";
    }
    if app.input_mode == InputMode::Search {
        return "type to filter · Enter keep · Esc clear";
    }
    match app.nav.view {
        ViewMode::Folders => "↑↓ move · Enter open · r refresh · Tab dashboard · q quit",
        ViewMode::Subfolders => "↑↓ move · Enter open · Esc back · 1-2 jump · q quit",
        ViewMode::Files => "Enter preview · p full · o open · / search · d delete · Esc back",
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status {
        Some(ref status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(status_color(status.kind)),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::loaded_app;
    use crate::input::Command;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_folders_view() {
        let (mut app, _) = loaded_app();
        let screen = draw(&mut app, 100, 24);
        assert!(screen.contains("Music Library"));
        assert!(screen.contains("Symphony Orchestra"));
        assert!(screen.contains("Details"));
    }

    #[test]
    fn test_render_narrow_hides_details() {
        let (mut app, _) = loaded_app();
        let screen = draw(&mut app, 60, 20);
        assert!(screen.contains("Jazz Ensemble"));
        assert!(!screen.contains("Details"));
    }

    #[test]
    fn test_render_modal_and_dashboard() {
        let (mut app, _) = loaded_app();
        app.execute_command(Command::Activate);
        app.execute_command(Command::Activate);
        app.execute_command(Command::OpenPreviewModal);
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("docs.google.com/viewer"));

        app.execute_command(Command::ClosePreviewModal);
        app.execute_command(Command::SwitchScreen);
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("Recent uploads"));
        assert!(screen.contains("Total size"));
    }

    #[test]
    fn test_key_hints_follow_context() {
        let (mut app, _) = loaded_app();
        assert!(key_hints(&app).contains("Tab dashboard"));
        app.pending_delete = Some(app.library.files[0].clone());
        assert_eq!(key_hints(&app), "y delete · n cancel");
    }
}
