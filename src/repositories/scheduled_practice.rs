//! ScheduledPracticeRepository - Repository per la gestione delle pratiche pianificate

use super::{Create, Delete, List, Read, Update};
use crate::core::db::DbSchema;
use crate::dtos::{CreateScheduledPracticeDTO, UpdateScheduledPracticeDTO};
use crate::entities::{ScheduledPractice, TIMESTAMP_COLUMNS, Timestamps};
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

pub const TABLE: &str = "scheduled_practices";

const COLUMNS: &str = "practice_id, name, tradition_id, scheduled_at, duration_minutes, notes, \
                       created_at, modified_at";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    practice_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    tradition_id INTEGER REFERENCES traditions(tradition_id) ON DELETE SET NULL,
    scheduled_at TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL,
    notes TEXT,
    {TIMESTAMP_COLUMNS}
)"#
    )
}

// SCHEDULED PRACTICE REPOSITORY
pub struct ScheduledPracticeRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl ScheduledPracticeRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }
}

impl Create<ScheduledPractice, CreateScheduledPracticeDTO> for ScheduledPracticeRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateScheduledPracticeDTO) -> Result<ScheduledPractice, Error> {
        debug!("Creating scheduled practice");
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (name, tradition_id, scheduled_at, duration_minutes, notes, created_at, modified_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.name.as_str())
            .bind(data.tradition_id)
            .bind(data.scheduled_at)
            .bind(data.duration_minutes)
            .bind(data.notes.as_deref())
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("Scheduled practice created with id {}", new_id);

        Ok(ScheduledPractice {
            practice_id: new_id,
            name: data.name.clone(),
            tradition_id: data.tradition_id,
            scheduled_at: data.scheduled_at,
            duration_minutes: data.duration_minutes,
            notes: data.notes.clone(),
            timestamps,
        })
    }
}

impl Read<ScheduledPractice, i64> for ScheduledPracticeRepository {
    #[instrument(skip(self), fields(practice_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<ScheduledPractice>, Error> {
        debug!("Reading scheduled practice by id");
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE practice_id = ?", self.table);
        sqlx::query_as::<_, ScheduledPractice>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl List<ScheduledPractice> for ScheduledPracticeRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ScheduledPractice>, Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY practice_id LIMIT ? OFFSET ?",
            self.table
        );
        sqlx::query_as::<_, ScheduledPractice>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Update<ScheduledPractice, UpdateScheduledPracticeDTO, i64> for ScheduledPracticeRepository {
    #[instrument(skip(self, data), fields(practice_id = %id))]
    async fn update(
        &self,
        id: &i64,
        data: &UpdateScheduledPracticeDTO,
    ) -> Result<ScheduledPractice, Error> {
        debug!("Updating scheduled practice");
        // First, get the current practice to ensure it exists
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        // If no fields to update, return current practice
        if data.is_empty() {
            debug!("No fields to update, returning current practice");
            return Ok(current);
        }

        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET ", self.table));

        let mut separated = query_builder.separated(", ");
        if let Some(ref name) = data.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name.clone());
        }
        if let Some(tradition_id) = data.tradition_id {
            separated.push("tradition_id = ");
            separated.push_bind_unseparated(tradition_id);
        }
        if let Some(scheduled_at) = data.scheduled_at {
            separated.push("scheduled_at = ");
            separated.push_bind_unseparated(scheduled_at);
        }
        if let Some(duration_minutes) = data.duration_minutes {
            separated.push("duration_minutes = ");
            separated.push_bind_unseparated(duration_minutes);
        }
        if let Some(ref notes) = data.notes {
            separated.push("notes = ");
            separated.push_bind_unseparated(notes.clone());
        }
        // created_at non viene mai toccato
        let modified_at = current.timestamps.touched().modified_at;
        separated.push("modified_at = ");
        separated.push_bind_unseparated(modified_at);

        query_builder.push(" WHERE practice_id = ");
        query_builder.push_bind(*id);

        query_builder.build().execute(&self.connection_pool).await?;

        info!("Scheduled practice updated successfully");

        // Fetch and return the updated practice
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for ScheduledPracticeRepository {
    #[instrument(skip(self), fields(practice_id = %id))]
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        debug!("Deleting scheduled practice");
        let sql = format!("DELETE FROM {} WHERE practice_id = ?", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Scheduled practice deleted successfully");
        }
        Ok(deleted)
    }
}
