use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

/// An employee record as stored by the employee service.
///
/// The service assigns `id`; this client never changes it. `parent_id`
/// should name another employee but that is the service's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EmployeeId>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            parent_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent_id: EmployeeId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case() {
        let emp = Employee::new(3, "Grace").with_parent(1);
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Grace", "parentId": 1 }));
    }

    #[test]
    fn test_missing_optionals_deserialize_as_none() {
        let emp: Employee = serde_json::from_str(r#"{"id":5,"name":"Linus"}"#).unwrap();
        assert_eq!(emp, Employee::new(5, "Linus"));
    }
}
