use crate::store::model::{Employee, EmployeeId};

/// Requests produced by event handling, executed by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadEmployees,
    UpdateEmployee(Employee),
    DeleteEmployee { id: EmployeeId },
    Quit,
}
