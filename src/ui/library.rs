//! Library browser screen: breadcrumb, item list and details panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::format::{count_label, format_date, format_date_time, format_file_size};
use crate::models::{is_pdf_like, Folder, LibraryFile, Subfolder};
use crate::preview::viewer_url;
use crate::state::{NavigationState, ViewMode, VisibleItems};

use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::theme::{
    kind_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOLDER, COLOR_HEADER,
    COLOR_SELECTION_BG,
};

const BREADCRUMB_SEPARATOR: &str = " › ";

/// Breadcrumb line with jump keys: `[1] Music Library › [2] Orchestra`.
pub fn breadcrumb_line(nav: &NavigationState) -> Line<'static> {
    let last = nav.breadcrumb.len().saturating_sub(1);
    let mut spans = Vec::new();
    for (index, label) in nav.breadcrumb.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(BREADCRUMB_SEPARATOR, Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            format!("[{}] ", index + 1),
            Style::default().fg(COLOR_DIM),
        ));
        let style = if index == last {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        spans.push(Span::styled(label.clone(), style));
    }
    Line::from(spans)
}

/// Render the library screen into `area`.
pub fn render_library(frame: &mut Frame, app: &mut App, area: Rect) {
    let ctx = LayoutContext::from_rect(area);

    let show_search = app.nav.view == ViewMode::Files
        && (app.input_mode == InputMode::Search || !app.nav.search_query.is_empty());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(if show_search { 1 } else { 0 }),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(breadcrumb_line(&app.nav)), rows[0]);

    let (list_area, details_area) = if ctx.shows_details() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[1], None)
    };

    render_item_list(frame, app, list_area);
    if let Some(details_area) = details_area {
        render_details(frame, app, details_area);
    }
    if show_search {
        render_search_bar(frame, app, rows[2]);
    }
}

fn list_title(app: &App) -> String {
    match app.nav.view {
        ViewMode::Folders => " Folders ".to_string(),
        ViewMode::Subfolders => " Subfolders ".to_string(),
        ViewMode::Files => {
            if app.nav.search_query.is_empty() {
                " Files ".to_string()
            } else {
                format!(" Files matching \"{}\" ", app.nav.search_query)
            }
        }
    }
}

fn empty_message(app: &App) -> String {
    if app.is_loading() && app.library.is_empty() {
        return "Loading library…".to_string();
    }
    match app.nav.view {
        ViewMode::Folders => "No folders yet".to_string(),
        ViewMode::Subfolders => "This folder has no subfolders".to_string(),
        ViewMode::Files if !app.nav.search_query.is_empty() => {
            format!("No files matching \"{}\"", app.nav.search_query)
        }
        ViewMode::Files => "This subfolder has no files".to_string(),
    }
}

fn folder_item(folder: &Folder, width: usize) -> ListItem<'static> {
    let count = format!("  {}", count_label(folder.subfolder_count as usize, "subfolder"));
    let name_width = width.saturating_sub(count.chars().count() + 3);
    ListItem::new(Line::from(vec![
        Span::styled("▣ ", Style::default().fg(COLOR_FOLDER)),
        Span::styled(truncate_to_width(&folder.name, name_width), Style::default().fg(COLOR_ACCENT)),
        Span::styled(count, Style::default().fg(COLOR_DIM)),
    ]))
}

fn subfolder_item(subfolder: &Subfolder, width: usize) -> ListItem<'static> {
    let count = format!("  {}", count_label(subfolder.files.len(), "file"));
    let name_width = width.saturating_sub(count.chars().count() + 3);
    ListItem::new(Line::from(vec![
        Span::styled("□ ", Style::default().fg(COLOR_FOLDER)),
        Span::styled(
            truncate_to_width(&subfolder.name, name_width),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(count, Style::default().fg(COLOR_DIM)),
    ]))
}

fn file_item(file: &LibraryFile, previewing: bool, viewer_template: &str, width: usize) -> ListItem<'static> {
    let kind = file.kind();
    let size = format!("  {}", format_file_size(file.file.size));
    let name_width = width.saturating_sub(size.chars().count() + 4);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind_color(kind))),
        Span::styled(truncate_to_width(file.name(), name_width), Style::default().fg(COLOR_ACCENT)),
        Span::styled(size, Style::default().fg(COLOR_DIM)),
    ])];

    if previewing {
        let preview = match file.file.link() {
            Some(url) => viewer_url(viewer_template, url),
            None => "No link available".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("   ▾ ", Style::default().fg(kind_color(kind))),
            Span::styled(
                truncate_to_width(&preview, width.saturating_sub(6)),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }
    ListItem::new(Text::from(lines))
}

fn render_item_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            list_title(app),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = match app.visible() {
        VisibleItems::Folders(folders) => folders.iter().map(|f| folder_item(f, width)).collect(),
        VisibleItems::Subfolders(subs) => subs.iter().map(|s| subfolder_item(s, width)).collect(),
        VisibleItems::Files(files) => files
            .iter()
            .map(|f| {
                file_item(
                    f,
                    app.nav.is_previewing(f.id()),
                    &app.config.viewer_url_template,
                    width,
                )
            })
            .collect(),
    };

    if items.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            empty_message(app),
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTION_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");

    let mut state = ListState::default()
        .with_offset(app.cursor.offset)
        .with_selected(Some(app.cursor.selected));
    frame.render_stateful_widget(list, area, &mut state);
    app.cursor.offset = state.offset();
}

fn detail_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_ACCENT)),
    ])
}

fn details_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match app.visible() {
        VisibleItems::Folders(folders) => {
            if let Some(folder) = folders.get(app.cursor.selected) {
                lines.push(Line::from(Span::styled(
                    folder.name.clone(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                )));
                if let Some(ref description) = folder.description {
                    lines.push(Line::from(Span::styled(description.clone(), Style::default().fg(COLOR_DIM))));
                }
                lines.push(Line::default());
                lines.push(detail_row(
                    "Contains",
                    count_label(folder.subfolder_count as usize, "subfolder"),
                ));
                lines.push(detail_row("Created", format_date(&folder.created_at)));
            }
        }
        VisibleItems::Subfolders(subs) => {
            if let Some(sub) = subs.get(app.cursor.selected) {
                lines.push(Line::from(Span::styled(
                    sub.name.clone(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                )));
                if let Some(ref description) = sub.description {
                    lines.push(Line::from(Span::styled(description.clone(), Style::default().fg(COLOR_DIM))));
                }
                lines.push(Line::default());
                lines.push(detail_row("Contains", count_label(sub.files.len(), "file")));
                lines.push(detail_row("Size", format_file_size(sub.total_size())));
                lines.push(detail_row("Created", format_date(&sub.created_at)));
            }
        }
        VisibleItems::Files(files) => {
            if let Some(file) = files.get(app.cursor.selected) {
                let kind = file.kind();
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", kind.icon()), Style::default().fg(kind_color(kind))),
                    Span::styled(
                        file.name().to_string(),
                        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::default());
                lines.push(detail_row("Type", kind.label().to_string()));
                lines.push(detail_row("Size", format_file_size(file.file.size)));
                lines.push(detail_row("Uploaded", format_date_time(&file.file.uploaded_at)));
                if !file.file.uploaded_by.is_empty() {
                    lines.push(detail_row("By", file.file.uploaded_by.clone()));
                }
                lines.push(detail_row("In", file.subfolder_name.clone()));
                lines.push(Line::default());
                let hint = if is_pdf_like(&file.file) {
                    "Enter: inline preview · p: full screen · o: open"
                } else {
                    "Enter / o: open"
                };
                lines.push(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))));
            }
        }
    }
    lines
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Details ", Style::default().fg(COLOR_HEADER)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let paragraph = Paragraph::new(details_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let cursor = if app.input_mode == InputMode::Search { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled(" / ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("{}{}", app.nav.search_query, cursor),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Folder;
    use chrono::Utc;

    #[test]
    fn test_breadcrumb_line_marks_levels() {
        let mut nav = NavigationState::new();
        nav.open_folder(&Folder {
            id: "f".to_string(),
            name: "Orchestra".to_string(),
            description: None,
            subfolder_count: 0,
            created_at: Utc::now(),
        });
        let text: String = breadcrumb_line(&nav)
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(text, "[1] Music Library › [2] Orchestra");
    }
}
