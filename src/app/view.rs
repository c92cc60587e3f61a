//! Interaction state of the employee view and its transition function.
//!
//! Every change to the view goes through [`update`]: key handling, request
//! completions and timer ticks are all expressed as a [`ViewMsg`]. Requests to
//! the employee service come back out as [`Action`]s.

use crate::app::action::Action;
use crate::app::state::{parse_parent_id, TextInput};
use crate::store::model::{Employee, EmployeeId};
use std::time::{Duration, Instant};
use tracing::debug;

pub const UPDATE_SUCCESS: &str = "Employee updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    ParentId,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::ParentId,
            FormField::ParentId => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::ParentId,
            FormField::Description => FormField::Name,
            FormField::ParentId => FormField::Description,
        }
    }
}

/// Editable copy of one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateForm {
    pub original: Employee,
    pub name: TextInput,
    pub description: TextInput,
    /// Raw text of the parent id field; `parent_id` is derived from it.
    pub parent_text: TextInput,
    pub parent_id: Option<EmployeeId>,
    pub focus: FormField,
    pub error: Option<String>,
}

impl UpdateForm {
    pub fn new(employee: Employee) -> Self {
        let parent_text = employee
            .parent_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        Self {
            name: TextInput::new(employee.name.clone()),
            description: TextInput::new(employee.description.clone().unwrap_or_default()),
            parent_text: TextInput::new(parent_text),
            parent_id: employee.parent_id,
            focus: FormField::Name,
            error: None,
            original: employee,
        }
    }

    pub fn field(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::ParentId => &self.parent_text,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::ParentId => &mut self.parent_text,
        }
    }

    fn edited(&mut self, field: FormField) {
        if field == FormField::ParentId {
            self.parent_id = parse_parent_id(&self.parent_text.text);
        }
    }

    /// The selected employee with the edited fields merged over it.
    pub fn to_employee(&self) -> Employee {
        Employee {
            name: self.name.text.clone(),
            description: Some(self.description.text.clone()),
            parent_id: self.parent_id,
            ..self.original.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Idle,
    ShowingUpdate(UpdateForm),
    Submitting(UpdateForm),
    ShowingDelete { id: EmployeeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
    pub expires_at: Instant,
}

/// Editing keystrokes applied to the focused form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    DeleteWord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMsg {
    BeginUpdate(Employee),
    BeginDelete(EmployeeId),
    ConfirmDelete,
    CancelDelete,
    Edit(TextEdit),
    FocusNext,
    FocusPrev,
    Submit,
    CloseUpdate,
    UpdateSettled(Result<Employee, String>),
    DeleteFailed { id: EmployeeId, error: String },
    Tick(Instant),
}

#[derive(Debug)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Row under the cursor in the employee list.
    pub selected: usize,
    pub flash: Option<Flash>,
    pub flash_duration: Duration,
}

impl ViewState {
    pub fn new(flash_duration: Duration) -> Self {
        Self {
            mode: ViewMode::Idle,
            selected: 0,
            flash: None,
            flash_duration,
        }
    }

    pub fn form(&self) -> Option<&UpdateForm> {
        match &self.mode {
            ViewMode::ShowingUpdate(form) | ViewMode::Submitting(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.mode, ViewMode::Submitting(_))
    }

    fn show_flash(&mut self, text: impl Into<String>, kind: FlashKind) {
        self.flash = Some(Flash {
            text: text.into(),
            kind,
            expires_at: Instant::now() + self.flash_duration,
        });
    }
}

/// Apply one message to the view. Returns the requests it triggers.
pub fn update(view: &mut ViewState, msg: ViewMsg) -> Vec<Action> {
    let mode = std::mem::replace(&mut view.mode, ViewMode::Idle);
    let (mode, actions) = transition(view, mode, msg);
    view.mode = mode;
    actions
}

fn transition(view: &mut ViewState, mode: ViewMode, msg: ViewMsg) -> (ViewMode, Vec<Action>) {
    match (mode, msg) {
        (mode, ViewMsg::Tick(now)) => {
            if view.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
                view.flash = None;
            }
            (mode, vec![])
        }

        (ViewMode::Idle, ViewMsg::BeginUpdate(employee)) => {
            debug!(id = employee.id, "opening update form");
            view.flash = None;
            (ViewMode::ShowingUpdate(UpdateForm::new(employee)), vec![])
        }

        (ViewMode::Idle, ViewMsg::BeginDelete(id)) => {
            debug!(id, "asking for delete confirmation");
            (ViewMode::ShowingDelete { id }, vec![])
        }

        (ViewMode::ShowingDelete { id }, ViewMsg::ConfirmDelete) => {
            (ViewMode::Idle, vec![Action::DeleteEmployee { id }])
        }

        (ViewMode::ShowingDelete { .. }, ViewMsg::CancelDelete) => (ViewMode::Idle, vec![]),

        (ViewMode::ShowingUpdate(mut form), ViewMsg::Edit(edit)) => {
            let focus = form.focus;
            let input = form.field_mut(focus);
            match edit {
                TextEdit::Insert(c) => input.insert_char(c),
                TextEdit::Backspace => input.delete_back(),
                TextEdit::Delete => input.delete_forward(),
                TextEdit::Left => input.move_left(),
                TextEdit::Right => input.move_right(),
                TextEdit::Home => input.move_home(),
                TextEdit::End => input.move_end(),
                TextEdit::DeleteWord => input.delete_word_back(),
            }
            form.edited(focus);
            (ViewMode::ShowingUpdate(form), vec![])
        }

        (ViewMode::ShowingUpdate(mut form), ViewMsg::FocusNext) => {
            form.focus = form.focus.next();
            (ViewMode::ShowingUpdate(form), vec![])
        }

        (ViewMode::ShowingUpdate(mut form), ViewMsg::FocusPrev) => {
            form.focus = form.focus.prev();
            (ViewMode::ShowingUpdate(form), vec![])
        }

        (ViewMode::ShowingUpdate(mut form), ViewMsg::Submit) => {
            form.error = None;
            let employee = form.to_employee();
            debug!(id = employee.id, "submitting update");
            (ViewMode::Submitting(form), vec![Action::UpdateEmployee(employee)])
        }

        (ViewMode::ShowingUpdate(_), ViewMsg::CloseUpdate) => {
            view.flash = None;
            (ViewMode::Idle, vec![])
        }

        (ViewMode::Submitting(_), ViewMsg::UpdateSettled(Ok(_))) => {
            view.show_flash(UPDATE_SUCCESS, FlashKind::Success);
            (ViewMode::Idle, vec![])
        }

        (ViewMode::Submitting(mut form), ViewMsg::UpdateSettled(Err(error))) => {
            form.error = Some(format!("Update failed: {}", error));
            (ViewMode::ShowingUpdate(form), vec![])
        }

        (mode, ViewMsg::DeleteFailed { id, error }) => {
            view.show_flash(format!("Failed to delete employee {}: {}", id, error), FlashKind::Error);
            (mode, vec![])
        }

        // Anything else does not apply in the current mode.
        (mode, _) => (mode, vec![]),
    }
}
