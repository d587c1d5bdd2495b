use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 75;

/// Read-only employee record as returned by the downstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(rename = "employee_title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "employee_email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, salary: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
            age: None,
            title: None,
            email: None,
        }
    }
}

/// Client-owned input for creating an employee downstream.
///
/// Deserialized inputs bypass [`EmployeeCreateRequest::new`], so callers must
/// run [`Validate::validate`] before submitting one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreateRequest {
    pub name: String,
    pub salary: i64,
    pub age: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl EmployeeCreateRequest {
    pub fn new(
        name: impl Into<String>,
        salary: i64,
        age: i32,
        title: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self> {
        let request = Self {
            name: name.into(),
            salary,
            age,
            title: title.into(),
            email,
        };
        request.validate()?;
        Ok(request)
    }
}

impl Validate for EmployeeCreateRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name, "Name must not be blank")?;
        validate_positive("salary", self.salary, "Salary must be greater than zero")?;
        validate_range("age", self.age, MIN_AGE, MAX_AGE, "Age must be between 16 and 75")?;
        validate_non_empty_string("title", &self.title, "Title must not be blank")?;
        Ok(())
    }
}

/// Downstream wrapper around a list of employees.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub data: Option<Vec<Employee>>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Downstream wrapper around a single employee.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeResponse {
    #[serde(default)]
    pub data: Option<Employee>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FacadeError;

    fn rejected_field(result: Result<EmployeeCreateRequest>) -> String {
        match result {
            Err(FacadeError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_create_request() {
        let request = EmployeeCreateRequest::new(
            "Alice",
            50000,
            35,
            "Technical Lead",
            Some("alice.hayes@gmail.com".to_string()),
        );
        assert!(request.is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_salary() {
        assert_eq!(rejected_field(EmployeeCreateRequest::new("Alice", 0, 35, "Lead", None)), "salary");
        assert_eq!(rejected_field(EmployeeCreateRequest::new("Alice", -10, 35, "Lead", None)), "salary");
    }

    #[test]
    fn test_create_request_age_bounds() {
        assert_eq!(rejected_field(EmployeeCreateRequest::new("Alice", 1, 15, "Lead", None)), "age");
        assert_eq!(rejected_field(EmployeeCreateRequest::new("Alice", 1, 76, "Lead", None)), "age");
        assert!(EmployeeCreateRequest::new("Alice", 1, 16, "Lead", None).is_ok());
        assert!(EmployeeCreateRequest::new("Alice", 1, 75, "Lead", None).is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_text() {
        assert_eq!(rejected_field(EmployeeCreateRequest::new("  ", 1, 30, "Lead", None)), "name");
        assert_eq!(rejected_field(EmployeeCreateRequest::new("Alice", 1, 30, "", None)), "title");
    }

    #[test]
    fn test_employee_wire_names() {
        let json = serde_json::json!({
            "id": "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507",
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800,
            "employee_age": 61,
            "employee_title": "Vice Chair Executive Principal of Chief Operations Implementation Specialist",
            "employee_email": "tnixon@company.com"
        });

        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, 320800);
        assert_eq!(employee.age, Some(61));

        let back = serde_json::to_value(&employee).unwrap();
        assert_eq!(back["employee_email"], "tnixon@company.com");
    }

    #[test]
    fn test_list_envelope_without_data() {
        let envelope: EmployeeListResponse =
            serde_json::from_str(r#"{"status": "Successfully processed request."}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}
