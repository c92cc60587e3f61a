use crate::app::state::AppState;
use crate::app::view::ViewMode;
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let ViewMode::ShowingDelete { id } = state.view.mode else {
        return;
    };

    let popup = popup_area(frame.area(), 50, 52, 8);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm Delete ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_RED))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let who = match state.employees.get(id) {
        Some(emp) => format!("{} (#{})", emp.name, id),
        None => format!("#{}", id),
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Are you sure you want to delete this employee?",
            Style::default().fg(Theme::TEXT_PRIMARY),
        )),
        Line::from(Span::styled(who, Theme::label())),
        Line::default(),
        Line::from(vec![
            Span::styled("n", Theme::key_hint()),
            Span::raw(" "),
            Span::styled(" No ", Theme::neutral_button()),
            Span::raw("   "),
            Span::styled("y", Theme::key_hint()),
            Span::raw(" "),
            Span::styled(" Yes ", Theme::delete_button()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
