use crate::app::state::AppState;
use crate::app::view::{FormField, UpdateForm};
use crate::ui::layout::popup_area;
use crate::ui::text::{fit, scroll_window};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const LABEL_W: u16 = 14;
const FIELDS: [(FormField, &str); 3] = [
    (FormField::Name, "Name"),
    (FormField::Description, "Description"),
    (FormField::ParentId, "Parent ID"),
];

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(form) = state.view.form() else {
        return;
    };
    let submitting = state.view.is_submitting();

    let popup = popup_area(frame.area(), 60, 50, 13);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Update Employee #{} ", form.original.id))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 9 || inner.width < LABEL_W + 8 {
        return;
    }

    let field_w = (inner.width - LABEL_W - 1) as usize;
    for (row, (field, label)) in FIELDS.iter().enumerate() {
        let y = inner.y + 1 + row as u16 * 2;
        render_field(frame, inner, y, form, *field, label, field_w, !submitting);
    }

    // Parsed parent, right under the parent id field
    let hint_area = Rect::new(inner.x + LABEL_W, inner.y + 6, inner.width - LABEL_W, 1);
    let hint = match form.parent_id {
        Some(id) => match state.employees.get(id) {
            Some(parent) => format!("reports to {}", parent.name),
            None => format!("parent #{}", id),
        },
        None => "no parent".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Theme::hint()))),
        hint_area,
    );

    if let Some(ref error) = form.error {
        let error_area = Rect::new(inner.x + 1, inner.y + 8, inner.width - 2, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(error.as_str(), Theme::error()))),
            error_area,
        );
    }

    let save = if submitting { " Saving... " } else { " Save " };
    let buttons = Line::from(vec![
        Span::styled("Esc", Theme::key_hint()),
        Span::raw(" "),
        Span::styled(" Cancel ", Theme::neutral_button()),
        Span::raw("  "),
        Span::styled("Enter", Theme::key_hint()),
        Span::raw(" "),
        Span::styled(save, Theme::update_button()),
        Span::raw(" "),
    ]);
    let buttons_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), buttons_area);
}

fn render_field(
    frame: &mut Frame,
    inner: Rect,
    y: u16,
    form: &UpdateForm,
    field: FormField,
    label: &str,
    field_w: usize,
    editable: bool,
) {
    let focused = editable && form.focus == field;
    let input = form.field(field);
    let (visible, cursor) = scroll_window(&input.text, input.cursor_column(), field_w);

    let label_style = if focused { Theme::label_focused() } else { Theme::label() };
    let line = Line::from(vec![
        Span::styled(fit(&format!(" {}", label), LABEL_W as usize), label_style),
        Span::styled(fit(&visible, field_w), Theme::field()),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));

    if focused {
        frame.set_cursor_position((inner.x + LABEL_W + cursor as u16, y));
    }
}
