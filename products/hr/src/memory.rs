//! In-memory [`EmployeeStore`] used as a test double.

use std::{
    collections::BTreeMap,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use entity::employees;
use platform_db::{DbResult, EmployeeRecord, EmployeeStore};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, employees::Model>,
}

#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    rows: Mutex<Rows>,
    saves: AtomicUsize,
}

impl InMemoryEmployeeStore {
    /// Number of `save` calls seen so far.
    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>> {
        Ok(self.rows().by_id.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<employees::Model>> {
        Ok(self
            .rows()
            .by_id
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<employees::Model>> {
        Ok(self
            .rows()
            .by_id
            .values()
            .find(|row| row.first_name == first_name && row.last_name == last_name)
            .cloned())
    }

    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        Ok(self.rows().by_id.values().cloned().collect())
    }

    async fn save(&self, record: EmployeeRecord) -> DbResult<employees::Model> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows();
        let known = record.id.filter(|id| rows.by_id.contains_key(id));
        let id = match known {
            Some(id) => id,
            None => {
                rows.next_id += 1;
                while rows.by_id.contains_key(&rows.next_id) {
                    rows.next_id += 1;
                }
                rows.next_id
            }
        };
        let model = employees::Model {
            id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
        };
        rows.by_id.insert(id, model.clone());
        Ok(model)
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        self.rows().by_id.remove(&id);
        Ok(())
    }
}
