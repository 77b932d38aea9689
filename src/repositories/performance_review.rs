//! PerformanceReviewRepository - Repository per le revisioni delle prestazioni

use super::{Create, List, Read};
use crate::core::db::DbSchema;
use crate::dtos::CreatePerformanceReviewDTO;
use crate::entities::{PerformanceReview, TIMESTAMP_COLUMNS, Timestamps};
use sqlx::{Error, SqlitePool};
use tracing::{info, instrument};

pub const TABLE: &str = "performance_reviews";

const COLUMNS: &str =
    "review_id, key_success, improvement_area, journal_prompt, created_at, modified_at";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    review_id INTEGER PRIMARY KEY,
    key_success TEXT NOT NULL,
    improvement_area TEXT NOT NULL,
    journal_prompt TEXT NOT NULL,
    {TIMESTAMP_COLUMNS}
)"#
    )
}

pub struct PerformanceReviewRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl PerformanceReviewRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }
}

impl Create<PerformanceReview, CreatePerformanceReviewDTO> for PerformanceReviewRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreatePerformanceReviewDTO) -> Result<PerformanceReview, Error> {
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (key_success, improvement_area, journal_prompt, created_at, modified_at) \
             VALUES (?, ?, ?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.key_success.as_str())
            .bind(data.improvement_area.as_str())
            .bind(data.journal_prompt.as_str())
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("Performance review stored with id {}", new_id);

        Ok(PerformanceReview {
            review_id: new_id,
            key_success: data.key_success.clone(),
            improvement_area: data.improvement_area.clone(),
            journal_prompt: data.journal_prompt.clone(),
            timestamps,
        })
    }
}

impl Read<PerformanceReview, i64> for PerformanceReviewRepository {
    #[instrument(skip(self), fields(review_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<PerformanceReview>, Error> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE review_id = ?", self.table);
        sqlx::query_as::<_, PerformanceReview>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl List<PerformanceReview> for PerformanceReviewRepository {
    /// Newest first
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<PerformanceReview>, Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY review_id DESC LIMIT ? OFFSET ?",
            self.table
        );
        sqlx::query_as::<_, PerformanceReview>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await
    }
}
