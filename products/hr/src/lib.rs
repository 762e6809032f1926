//! HR vertical slice: employee records and the rules around them.

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
mod service;

use entity::employees;
use platform_db::DbError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use service::EmployeeService;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Overwrite the editable fields, keeping `id`.
    pub fn apply(&mut self, changes: NewEmployee) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.email = changes.email;
    }
}

impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}

/// Payload for creating (or rewriting) an employee.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Trim every field and check the result. The trimmed values are what
    /// gets stored and compared.
    pub fn validated(self) -> HrResult<Self> {
        let trimmed = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        if trimmed.first_name.is_empty() {
            return Err(HrError::Invalid("firstName must not be blank".into()));
        }
        if trimmed.last_name.is_empty() {
            return Err(HrError::Invalid("lastName must not be blank".into()));
        }
        if trimmed.email.is_empty() {
            return Err(HrError::Invalid("email must not be blank".into()));
        }
        if !trimmed.email.contains('@') {
            return Err(HrError::Invalid(format!(
                "email {:?} is not valid",
                trimmed.email
            )));
        }
        Ok(trimmed)
    }
}

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee already exist with given email: {email}")]
    DuplicateResource { email: String },
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Store(#[from] DbError),
}

pub type HrResult<T> = Result<T, HrError>;
