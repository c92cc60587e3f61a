use crate::app::view::ViewState;
use crate::config::AppConfig;
use crate::store::model::{Employee, EmployeeId};
use chrono::Local;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The employee collection as last reported by the service.
///
/// Only completion events from the store change it; the view reads it.
#[derive(Debug)]
pub struct EmployeeList {
    pub items: Vec<Employee>,
    pub status: LoadStatus,
    pub last_loaded: Option<String>,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
            last_loaded: None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn loaded(&mut self, items: Vec<Employee>, timestamp: String) {
        self.items = items;
        self.status = LoadStatus::Succeeded;
        self.last_loaded = Some(timestamp);
    }

    pub fn failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    /// Swap in the stored version of an updated record, keeping its position.
    pub fn replace(&mut self, employee: Employee) {
        if let Some(slot) = self.items.iter_mut().find(|e| e.id == employee.id) {
            *slot = employee;
        }
    }

    pub fn remove(&mut self, id: EmployeeId) {
        self.items.retain(|e| e.id != id);
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single-line editable text field with a byte-offset cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.text[..self.cursor])
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

/// Read a parent id the way a lenient number field does: optional leading
/// whitespace and sign, then leading digits; anything after is ignored.
///
/// No digits, overflow, or a value of zero all mean "no parent".
pub fn parse_parent_id(text: &str) -> Option<EmployeeId> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: EmployeeId = rest[..end].parse().ok()?;
    let value = if negative { -value } else { value };
    (value != 0).then_some(value)
}

pub struct AppState {
    pub config: AppConfig,
    pub employees: EmployeeList,
    pub view: ViewState,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let flash_duration = Duration::from_secs(config.ui.flash_secs);
        Self {
            config,
            employees: EmployeeList::new(),
            view: ViewState::new(flash_duration),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn timestamp(&self) -> String {
        Local::now().format(&self.config.ui.timestamp_format).to_string()
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        if self.employees.status != LoadStatus::Succeeded {
            return None;
        }
        self.employees.items.get(self.view.selected)
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("Employees: {}", self.employees.len());
        if let Some(ref at) = self.employees.last_loaded {
            s.push_str(&format!(" | Refreshed {}", at));
        }
        s
    }

    pub fn select_next(&mut self) {
        if self.view.selected + 1 < self.employees.len() {
            self.view.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.view.selected = self.view.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self) {
        self.view.selected = self.employees.len().saturating_sub(1);
    }

    /// Keep the cursor on a row after the list shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.employees.len();
        if self.view.selected >= len {
            self.view.selected = len.saturating_sub(1);
        }
    }
}
