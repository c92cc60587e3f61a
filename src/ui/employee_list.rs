use crate::app::state::AppState;
use crate::ui::text::{fit, truncate};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const UPDATE_CONTROL: &str = " [u] Update ";
const DELETE_CONTROL: &str = " [d] Delete ";
/// Marker + gap + both controls with a space between them.
const ROW_CHROME: usize = 2 + 1 + UPDATE_CONTROL.len() + 1 + DELETE_CONTROL.len();

/// Shown in place of the whole view while the list loads.
pub fn render_loading(frame: &mut Frame, state: &AppState) {
    let frame_idx = (state.tick_count / 2) as usize % SPINNER.len();
    let line = Line::from(Span::styled(
        format!("{} Loading...", SPINNER[frame_idx]),
        Theme::loading(),
    ));
    render_centered(frame, vec![line]);
}

/// Shown in place of the whole view when the list could not be loaded.
pub fn render_failed(frame: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled("Failed to load employees", Theme::error())),
        Line::from(Span::styled("r retry  q quit", Theme::hint())),
    ];
    render_centered(frame, lines);
}

fn render_centered(frame: &mut Frame, lines: Vec<Line>) {
    let area = frame.area();
    let height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect::new(area.x, y, area.width, height.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Employee List ({}) ", state.employees.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 10 {
        return;
    }

    if state.employees.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("  No employees.", Theme::hint())));
        frame.render_widget(empty, inner);
        return;
    }
    let employees = &state.employees.items;

    // Details for the selected row take the bottom two lines when there is room.
    let show_details = inner.height >= 5;
    let list_h = (if show_details { inner.height - 2 } else { inner.height }) as usize;
    let list_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), list_h as u16);

    let selected = state.view.selected.min(employees.len() - 1);
    let start = selected.saturating_sub(list_h.saturating_sub(1));
    let end = (start + list_h).min(employees.len());
    let name_w = (list_area.width as usize).saturating_sub(ROW_CHROME).max(4);

    let mut lines: Vec<Line> = Vec::new();
    for (i, emp) in employees.iter().enumerate().take(end).skip(start) {
        let is_selected = i == selected;
        let (marker, row_style) = if is_selected {
            ("> ", Theme::row_selected())
        } else {
            ("  ", Theme::row())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, row_style),
            Span::styled(fit(&emp.name, name_w), row_style),
            Span::raw(" "),
            Span::styled(UPDATE_CONTROL, Theme::update_button()),
            Span::raw(" "),
            Span::styled(DELETE_CONTROL, Theme::delete_button()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), list_area);

    if employees.len() > list_h {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            list_h as u16,
        );
        let mut scrollbar_state =
            ScrollbarState::new(employees.len().saturating_sub(list_h)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    if show_details {
        let sep_area = Rect::new(inner.x, inner.y + inner.height - 2, inner.width, 1);
        let sep = Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(Theme::BORDER_DIM),
        )));
        frame.render_widget(sep, sep_area);

        let details_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let details = details_line(state, selected, inner.width as usize);
        frame.render_widget(Paragraph::new(details), details_area);
    }
}

fn details_line(state: &AppState, selected: usize, width: usize) -> Line<'static> {
    let emp = &state.employees.items[selected];
    let mut text = format!(" #{}", emp.id);
    match emp.description.as_deref() {
        Some(desc) if !desc.is_empty() => text.push_str(&format!("  {}", desc)),
        _ => {}
    }
    if let Some(parent_id) = emp.parent_id {
        match state.employees.get(parent_id) {
            Some(parent) => text.push_str(&format!("  | reports to {} (#{})", parent.name, parent_id)),
            None => text.push_str(&format!("  | reports to #{}", parent_id)),
        }
    }
    Line::from(Span::styled(truncate(&text, width), Theme::label()))
}
