use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Employee list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Centre a popup of `width_pct` of the screen width (at least `min_w`
/// columns) and a fixed `height`, clipped to the screen.
pub fn popup_area(area: Rect, width_pct: u16, min_w: u16, height: u16) -> Rect {
    let scaled = u32::from(area.width) * u32::from(width_pct) / 100;
    let popup_w = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = height.min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}
