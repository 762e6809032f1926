use std::sync::Arc;

use platform_db::{EmployeeRecord, EmployeeStore};
use tracing::{debug, info, instrument, warn};

use crate::{Employee, HrError, HrResult, NewEmployee};

/// Business rules for employee records on top of an [`EmployeeStore`].
///
/// The only invariant enforced here is email uniqueness on creation. The
/// check and the insert are not wrapped in a transaction, so two concurrent
/// creations with the same email can both pass the check; the table's unique
/// constraint is the last line and surfaces as a store error.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, employee), fields(email = %employee.email))]
    pub async fn create(&self, employee: NewEmployee) -> HrResult<Employee> {
        let employee = employee.validated()?;
        if self.store.find_by_email(&employee.email).await?.is_some() {
            warn!("rejecting employee with duplicate email");
            return Err(HrError::DuplicateResource {
                email: employee.email,
            });
        }
        let saved = self
            .store
            .save(EmployeeRecord {
                id: None,
                first_name: employee.first_name,
                last_name: employee.last_name,
                email: employee.email,
            })
            .await?;
        info!(employee_id = saved.id, "employee created");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> HrResult<Vec<Employee>> {
        let rows = self.store.find_all().await?;
        debug!(count = rows.len(), "employees listed");
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> HrResult<Option<Employee>> {
        let found = self.store.find_by_id(id).await?;
        debug!(found = found.is_some(), "employee lookup");
        Ok(found.map(Employee::from))
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> HrResult<Option<Employee>> {
        let found = self.store.find_by_name(first_name, last_name).await?;
        Ok(found.map(Employee::from))
    }

    /// Persist `employee` under its id. Callers check existence first; an
    /// unknown id is written as a new row with a store-assigned id.
    #[instrument(skip(self, employee), fields(employee_id = employee.id))]
    pub async fn update(&self, employee: Employee) -> HrResult<Employee> {
        let saved = self
            .store
            .save(EmployeeRecord {
                id: Some(employee.id),
                first_name: employee.first_name,
                last_name: employee.last_name,
                email: employee.email,
            })
            .await?;
        info!("employee updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> HrResult<()> {
        self.store.delete_by_id(id).await?;
        info!("employee deleted");
        Ok(())
    }
}
