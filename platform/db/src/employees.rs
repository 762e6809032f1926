use async_trait::async_trait;
use entity::employees;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::{DbPool, DbResult};

/// Row values handed to [`EmployeeStore::save`]. `id == None` asks the store
/// to assign one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<employees::Model> for EmployeeRecord {
    fn from(model: employees::Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}

/// Storage access for employee rows.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>>;

    async fn find_by_email(&self, email: &str) -> DbResult<Option<employees::Model>>;

    /// First match by id for the given first/last name pair.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<employees::Model>>;

    /// All rows ordered by id.
    async fn find_all(&self) -> DbResult<Vec<employees::Model>>;

    /// Updates the row with `record.id` when it exists. Otherwise inserts
    /// under a store-assigned id, ignoring any id the caller supplied.
    async fn save(&self, record: EmployeeRecord) -> DbResult<employees::Model>;

    /// Removing a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> DbResult<()>;
}

/// [`EmployeeStore`] backed by a sea-orm connection.
#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeStore {
    pool: DbPool,
}

impl SeaOrmEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>> {
        let found = employees::Entity::find_by_id(id).one(&self.pool).await?;
        Ok(found)
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<employees::Model>> {
        let found = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<employees::Model>> {
        let found = employees::Entity::find()
            .filter(employees::Column::FirstName.eq(first_name))
            .filter(employees::Column::LastName.eq(last_name))
            .order_by_asc(employees::Column::Id)
            .one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn save(&self, record: EmployeeRecord) -> DbResult<employees::Model> {
        let existing = match record.id {
            Some(id) => employees::Entity::find_by_id(id).one(&self.pool).await?,
            None => None,
        };
        // Unknown ids are not reused; the sequence assigns a fresh one.
        let active = employees::ActiveModel {
            id: existing.as_ref().map(|row| Set(row.id)).unwrap_or(NotSet),
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            email: Set(record.email),
        };
        let model = if existing.is_some() {
            active.update(&self.pool).await?
        } else {
            active.insert(&self.pool).await?
        };
        debug!(employee_id = model.id, updated = existing.is_some(), "employee row saved");
        Ok(model)
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        let result = employees::Entity::delete_by_id(id).exec(&self.pool).await?;
        debug!(employee_id = id, rows = result.rows_affected, "employee row deleted");
        Ok(())
    }
}
