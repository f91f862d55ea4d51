//! Overlays: full-screen preview and delete confirmation.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::format::{format_date_time, format_file_size};
use crate::models::LibraryFile;
use crate::preview::PreviewModal;

use super::helpers::centered_rect;
use super::layout::LayoutContext;
use super::theme::{
    kind_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
};

fn dialog_block(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG))
}

/// Full-screen preview of a PDF-like file.
///
/// The terminal cannot draw the document, so this shows where the viewer
/// lives plus the file's metadata.
pub fn render_preview_modal(frame: &mut Frame, modal: &PreviewModal) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let dialog = centered_rect(
        ctx.bounded_width(85, 40, 140),
        ctx.percent_height(80).max(10),
        area,
    );
    frame.render_widget(Clear, dialog);

    let file = &modal.file;
    let kind = file.kind();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind_color(kind))),
            Span::styled(kind.label(), Style::default().fg(kind_color(kind))),
            Span::styled(
                format!(
                    "  ·  {}  ·  {}",
                    format_file_size(file.file.size),
                    format_date_time(&file.file.uploaded_at)
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!("in {}", file.subfolder_name),
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
    ];

    match modal.viewer_url {
        Some(ref viewer) => {
            lines.push(Line::from(Span::styled("Viewer", Style::default().fg(COLOR_DIM))));
            lines.push(Line::from(Span::styled(viewer.clone(), Style::default().fg(COLOR_ACCENT))));
            lines.push(Line::default());
            if let Some(source) = file.file.link() {
                lines.push(Line::from(Span::styled("Source", Style::default().fg(COLOR_DIM))));
                lines.push(Line::from(Span::styled(
                    source.to_string(),
                    Style::default().fg(COLOR_ACCENT),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "This file has no link, so there is nothing to preview.",
            Style::default().fg(COLOR_ERROR),
        ))),
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "o: open in browser · Esc: close",
        Style::default().fg(COLOR_DIM),
    )));

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(format!(" {} ", modal.title())))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, dialog);
}

/// "Delete this file?" prompt.
pub fn render_confirm_delete(frame: &mut Frame, file: &LibraryFile) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let dialog = centered_rect(ctx.bounded_width(50, 36, 64), 7, area);
    frame.render_widget(Clear, dialog);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete \"{}\"?", file.name()),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "It is removed from this session only.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(COLOR_ERROR)),
            Span::styled("delete   ", Style::default().fg(COLOR_ACCENT)),
            Span::styled("[n] ", Style::default().fg(COLOR_DIM)),
            Span::styled("cancel", Style::default().fg(COLOR_ACCENT)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(" Delete file ".to_string()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, dialog);
}
