use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::view::{self, TextEdit, ViewMode, ViewMsg};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{info, warn};

/// Called once when the view comes up: starts the initial load.
pub fn mount(state: &mut AppState) -> Vec<Action> {
    request_reload(state)
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::EmployeesLoaded(items) => {
            let timestamp = state.timestamp();
            state.employees.loaded(items, timestamp);
            state.clamp_selection();
            state.dirty = true;
            vec![]
        }
        AppEvent::LoadFailed { error } => {
            warn!(%error, "employee list unavailable");
            state.employees.failed();
            state.dirty = true;
            vec![]
        }
        AppEvent::EmployeeUpdated { id, result } => {
            if let Ok(ref employee) = result {
                state.employees.replace(employee.clone());
            }
            let actions = view::update(&mut state.view, ViewMsg::UpdateSettled(result));
            info!(id, "update settled");
            state.dirty = true;
            actions
        }
        AppEvent::EmployeeDeleted { id, result } => {
            let actions = match result {
                Ok(()) => {
                    state.employees.remove(id);
                    state.clamp_selection();
                    vec![]
                }
                Err(error) => view::update(&mut state.view, ViewMsg::DeleteFailed { id, error }),
            };
            state.dirty = true;
            actions
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn request_reload(state: &mut AppState) -> Vec<Action> {
    if state.employees.status == LoadStatus::Loading {
        return vec![];
    }
    info!("loading employees");
    state.employees.begin_loading();
    state.dirty = true;
    vec![Action::LoadEmployees]
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);

    let had_flash = state.view.flash.is_some();
    let actions = view::update(&mut state.view, ViewMsg::Tick(Instant::now()));

    // Redraw when the flash went away, and keep spinners moving.
    if had_flash != state.view.flash.is_some()
        || state.employees.status == LoadStatus::Loading
        || state.view.is_submitting()
    {
        state.dirty = true;
    }
    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.view.mode {
        ViewMode::Idle => handle_list_key(state, key),
        ViewMode::ShowingUpdate(_) => handle_form_key(state, key),
        ViewMode::ShowingDelete { .. } => handle_delete_key(state, key),
        // The form is locked until the request settles.
        ViewMode::Submitting(_) => vec![],
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('r') | KeyCode::F(5) => return request_reload(state),
        _ => {}
    }

    // Rows only exist once the list has loaded.
    if state.employees.status != LoadStatus::Succeeded {
        return vec![];
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.view.selected = 0;
            vec![]
        }
        KeyCode::End => {
            state.select_last();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char('u') => match state.selected_employee().cloned() {
            Some(employee) => view::update(&mut state.view, ViewMsg::BeginUpdate(employee)),
            None => vec![],
        },
        KeyCode::Char('d') | KeyCode::Delete => match state.selected_employee().map(|e| e.id) {
            Some(id) => view::update(&mut state.view, ViewMsg::BeginDelete(id)),
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let msg = match key.code {
        KeyCode::Char('s') if ctrl => ViewMsg::Submit,
        KeyCode::Char('w') if ctrl => ViewMsg::Edit(TextEdit::DeleteWord),
        KeyCode::Char(_) if ctrl => return vec![],
        KeyCode::Char(c) => ViewMsg::Edit(TextEdit::Insert(c)),
        KeyCode::Esc => ViewMsg::CloseUpdate,
        KeyCode::Enter => ViewMsg::Submit,
        KeyCode::Tab | KeyCode::Down => ViewMsg::FocusNext,
        KeyCode::BackTab | KeyCode::Up => ViewMsg::FocusPrev,
        KeyCode::Backspace => ViewMsg::Edit(TextEdit::Backspace),
        KeyCode::Delete => ViewMsg::Edit(TextEdit::Delete),
        KeyCode::Left => ViewMsg::Edit(TextEdit::Left),
        KeyCode::Right => ViewMsg::Edit(TextEdit::Right),
        KeyCode::Home => ViewMsg::Edit(TextEdit::Home),
        KeyCode::End => ViewMsg::Edit(TextEdit::End),
        _ => return vec![],
    };
    view::update(&mut state.view, msg)
}

fn handle_delete_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let msg = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ViewMsg::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ViewMsg::CancelDelete,
        _ => return vec![],
    };
    view::update(&mut state.view, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::{FormField, UPDATE_SUCCESS};
    use crate::config::AppConfig;
    use crate::store::model::Employee;

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        mount(&mut state);
        handle_event(
            &mut state,
            AppEvent::EmployeesLoaded(vec![
                Employee::new(1, "Ada"),
                Employee::new(7, "Grace").with_parent(1),
                Employee::new(9, "Alan").with_description("Codebreaker"),
            ]),
        );
        state
    }

    #[test]
    fn test_mount_requests_exactly_one_load() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(mount(&mut state), vec![Action::LoadEmployees]);
        assert_eq!(state.employees.status, LoadStatus::Loading);
        // Reload while a load is in flight does not stack requests.
        assert!(handle_event(&mut state, press(KeyCode::Char('r'))).is_empty());
    }

    #[test]
    fn test_load_failure_then_reload() {
        let mut state = AppState::new(AppConfig::default());
        mount(&mut state);
        handle_event(&mut state, AppEvent::LoadFailed { error: "refused".into() });
        assert_eq!(state.employees.status, LoadStatus::Failed);
        assert!(handle_event(&mut state, press(KeyCode::Char('u'))).is_empty());
        assert_eq!(state.view.mode, ViewMode::Idle);
        assert_eq!(handle_event(&mut state, press(KeyCode::F(5))), vec![Action::LoadEmployees]);
    }

    #[test]
    fn test_update_flow_through_keys() {
        let mut state = loaded_state();
        handle_event(&mut state, press(KeyCode::Down));
        handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(state.view.form().unwrap().original.id, 7);

        handle_event(&mut state, press(KeyCode::Char('!')));
        handle_event(&mut state, press(KeyCode::Tab));
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.view.form().unwrap().focus, FormField::ParentId);
        handle_event(&mut state, press(KeyCode::Backspace));
        handle_event(&mut state, press(KeyCode::Char('9')));

        let actions = handle_event(&mut state, ctrl('s'));
        let sent = Employee {
            id: 7,
            name: "Grace!".into(),
            description: Some(String::new()),
            parent_id: Some(9),
        };
        assert_eq!(actions, vec![Action::UpdateEmployee(sent.clone())]);

        // Locked while in flight.
        assert!(handle_event(&mut state, press(KeyCode::Esc)).is_empty());
        assert!(state.view.is_submitting());

        handle_event(&mut state, AppEvent::EmployeeUpdated { id: 7, result: Ok(sent.clone()) });
        assert_eq!(state.view.mode, ViewMode::Idle);
        assert_eq!(state.employees.items[1], sent);
        assert_eq!(state.view.flash.as_ref().unwrap().text, UPDATE_SUCCESS);
    }

    #[test]
    fn test_escape_closes_form_without_request() {
        let mut state = loaded_state();
        handle_event(&mut state, press(KeyCode::Char('u')));
        assert!(handle_event(&mut state, press(KeyCode::Esc)).is_empty());
        assert_eq!(state.view.mode, ViewMode::Idle);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_delete_confirm_and_completion() {
        let mut state = loaded_state();
        handle_event(&mut state, press(KeyCode::End));
        handle_event(&mut state, press(KeyCode::Char('d')));
        assert_eq!(state.view.mode, ViewMode::ShowingDelete { id: 9 });
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('y'))),
            vec![Action::DeleteEmployee { id: 9 }]
        );
        assert_eq!(state.view.mode, ViewMode::Idle);

        handle_event(&mut state, AppEvent::EmployeeDeleted { id: 9, result: Ok(()) });
        assert_eq!(state.employees.len(), 2);
        assert_eq!(state.view.selected, 1);
    }

    #[test]
    fn test_delete_cancel_issues_nothing() {
        let mut state = loaded_state();
        handle_event(&mut state, press(KeyCode::Delete));
        assert!(handle_event(&mut state, press(KeyCode::Char('n'))).is_empty());
        assert_eq!(state.view.mode, ViewMode::Idle);
        assert_eq!(state.employees.len(), 3);
    }

    #[test]
    fn test_delete_failure_keeps_row() {
        let mut state = loaded_state();
        handle_event(&mut state, AppEvent::EmployeeDeleted { id: 1, result: Err("gone".into()) });
        assert_eq!(state.employees.len(), 3);
        assert!(state.view.flash.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded_state();
        assert_eq!(handle_event(&mut state, press(KeyCode::Char('q'))), vec![Action::Quit]);
        handle_event(&mut state, press(KeyCode::Char('u')));
        assert_eq!(handle_event(&mut state, ctrl('c')), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = loaded_state();
        let mut release = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release)));
        assert_eq!(state.view.mode, ViewMode::Idle);
    }
}
