use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 22, 30);
    pub const BG_SURFACE: Color = Color::Rgb(32, 33, 44);
    pub const BG_FIELD: Color = Color::Rgb(48, 50, 66);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 222, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 164, 190);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 104, 128);
    pub const BORDER_DIM: Color = Color::Rgb(70, 72, 92);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 206, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 190, 100);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(180, 160, 250);
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 150, 240);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 110);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 210, 130);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn row() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn row_selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn update_button() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_BLUE)
    }

    pub fn delete_button() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_RED)
    }

    pub fn neutral_button() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::TEXT_SECONDARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn label_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).add_modifier(Modifier::BOLD)
    }

    pub fn field() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_FIELD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED).add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }
}
