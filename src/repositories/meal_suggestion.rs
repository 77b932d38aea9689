//! MealSuggestionRepository - Repository per i suggerimenti dei pasti

use super::{Create, List};
use crate::core::db::DbSchema;
use crate::dtos::CreateMealSuggestionDTO;
use crate::entities::{MealSuggestion, TIMESTAMP_COLUMNS, Timestamps};
use sqlx::{Error, SqlitePool};
use tracing::{info, instrument};

pub const TABLE: &str = "meal_suggestions";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    suggestion_id INTEGER PRIMARY KEY,
    suggestion TEXT NOT NULL,
    {TIMESTAMP_COLUMNS}
)"#
    )
}

pub struct MealSuggestionRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl MealSuggestionRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }
}

impl Create<MealSuggestion, CreateMealSuggestionDTO> for MealSuggestionRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateMealSuggestionDTO) -> Result<MealSuggestion, Error> {
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (suggestion, created_at, modified_at) VALUES (?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.suggestion.as_str())
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("Meal suggestion stored with id {}", new_id);

        Ok(MealSuggestion {
            suggestion_id: new_id,
            suggestion: data.suggestion.clone(),
            timestamps,
        })
    }
}

impl List<MealSuggestion> for MealSuggestionRepository {
    /// Newest first
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MealSuggestion>, Error> {
        let sql = format!(
            "SELECT suggestion_id, suggestion, created_at, modified_at FROM {} \
             ORDER BY suggestion_id DESC LIMIT ? OFFSET ?",
            self.table
        );
        sqlx::query_as::<_, MealSuggestion>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await
    }
}
