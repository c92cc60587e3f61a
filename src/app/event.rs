use crate::store::model::{Employee, EmployeeId};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Employee service results
    EmployeesLoaded(Vec<Employee>),
    LoadFailed {
        error: String,
    },
    EmployeeUpdated {
        id: EmployeeId,
        result: Result<Employee, String>,
    },
    EmployeeDeleted {
        id: EmployeeId,
        result: Result<(), String>,
    },

    /// Tick for UI refresh and flash expiry
    Tick,
}
