use crate::app::state::*;
use crate::app::view::{FlashKind, ViewMode};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match state.view.flash {
        Some(ref flash) => {
            let style = match flash.kind {
                FlashKind::Success => Theme::success(),
                FlashKind::Error => Theme::error(),
            };
            parts.push(Span::styled(format!(" {} ", flash.text), style.bg(Theme::BG_SURFACE)));
        }
        None => parts.push(Span::styled(format!(" {} ", state.status_line()), Theme::status_bar())),
    }

    let hints = match state.view.mode {
        ViewMode::Idle => "j/k move  u update  d delete  r reload  q quit",
        ViewMode::ShowingUpdate(_) => "Tab next field  Enter save  Esc cancel",
        ViewMode::Submitting(_) => "Saving...",
        ViewMode::ShowingDelete { .. } => "y delete  n keep",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", hints),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_SURFACE),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
