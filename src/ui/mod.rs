mod delete_modal;
mod employee_list;
mod layout;
mod status_bar;
mod text;
mod theme;
mod update_modal;

use crate::app::state::{AppState, LoadStatus};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    // While loading or after a failed load the indicator is all there is.
    match state.employees.status {
        LoadStatus::Loading => {
            employee_list::render_loading(frame, state);
            return;
        }
        LoadStatus::Failed => {
            employee_list::render_failed(frame);
            return;
        }
        LoadStatus::Idle | LoadStatus::Succeeded => {}
    }

    let app_layout = layout::compute_layout(frame.area());

    render_title_bar(frame, app_layout.title_bar);
    employee_list::render(frame, app_layout.content, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Modals draw last, over everything else.
    update_modal::render(frame, state);
    delete_modal::render(frame, state);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" roster ", Theme::title().bg(Theme::BG_SURFACE)),
        Span::styled(" employee records", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
