//! Admin dashboard: library totals, kind breakdown and recent uploads.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::format::{format_date, format_file_size};
use crate::models::FileKind;
use crate::stats::LibraryStats;

use super::helpers::{fit_to_width, truncate_to_width};
use super::theme::{kind_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

fn render_stat_card(frame: &mut Frame, area: Rect, title: &str, value: String) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )))
    .block(panel(title));
    frame.render_widget(paragraph, area);
}

/// A bar of `█` scaled so `max` fills `width` cells.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max);
    "█".repeat(filled.min(width))
}

fn kind_lines(stats: &LibraryStats, width: usize) -> Vec<Line<'static>> {
    if stats.by_kind.is_empty() {
        return vec![Line::from(Span::styled("No files", Style::default().fg(COLOR_DIM)))];
    }
    let max = stats.by_kind.values().copied().max().unwrap_or(0);
    let bar_width = width.saturating_sub(18);
    FileKind::ALL
        .iter()
        .filter(|kind| stats.count_of(**kind) > 0)
        .map(|kind| {
            let count = stats.count_of(*kind);
            Line::from(vec![
                Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind_color(*kind))),
                Span::styled(fit_to_width(kind.label(), 9), Style::default().fg(COLOR_ACCENT)),
                Span::styled(format!("{:>4} ", count), Style::default().fg(COLOR_DIM)),
                Span::styled(bar(count, max, bar_width), Style::default().fg(kind_color(*kind))),
            ])
        })
        .collect()
}

fn recent_lines(stats: &LibraryStats, width: usize) -> Vec<Line<'static>> {
    if stats.recent.is_empty() {
        return vec![Line::from(Span::styled("Nothing uploaded yet", Style::default().fg(COLOR_DIM)))];
    }
    stats
        .recent
        .iter()
        .map(|file| {
            let date = format!("  {}", format_date(&file.file.uploaded_at));
            let name_width = width.saturating_sub(date.chars().count() + 3);
            let kind = file.kind();
            Line::from(vec![
                Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind_color(kind))),
                Span::styled(
                    truncate_to_width(
                        &format!("{} / {}", file.subfolder_name, file.name()),
                        name_width,
                    ),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled(date, Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect()
}

pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let stats = LibraryStats::from_library(&app.library);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    render_stat_card(frame, cards[0], "Folders", stats.folder_count.to_string());
    render_stat_card(
        frame,
        cards[1],
        "Subfolders",
        format!("{} ({} empty)", stats.subfolder_count, stats.empty_subfolders),
    );
    render_stat_card(frame, cards[2], "Files", stats.file_count.to_string());
    render_stat_card(frame, cards[3], "Total size", format_file_size(stats.total_bytes));

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let kinds_width = body[0].width.saturating_sub(2) as usize;
    frame.render_widget(
        Paragraph::new(kind_lines(&stats, kinds_width)).block(panel("By type")),
        body[0],
    );

    let recent_width = body[1].width.saturating_sub(2) as usize;
    frame.render_widget(
        Paragraph::new(recent_lines(&stats, recent_width)).block(panel("Recent uploads")),
        body[1],
    );
}
