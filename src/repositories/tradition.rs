//! TraditionRepository - Repository per la gestione delle tradizioni

use super::{Create, List, Read};
use crate::core::db::DbSchema;
use crate::dtos::CreateTraditionDTO;
use crate::entities::{TIMESTAMP_COLUMNS, Timestamps, Tradition};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub const TABLE: &str = "traditions";

const COLUMNS: &str = "tradition_id, name, description, created_at, modified_at";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    tradition_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    {TIMESTAMP_COLUMNS}
)"#
    )
}

// TRADITION REPOSITORY
pub struct TraditionRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl TraditionRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }
}

impl Create<Tradition, CreateTraditionDTO> for TraditionRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateTraditionDTO) -> Result<Tradition, Error> {
        debug!("Creating tradition");
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (name, description, created_at, modified_at) VALUES (?, ?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.name.as_str())
            .bind(data.description.as_deref())
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("Tradition created with id {}", new_id);

        Ok(Tradition {
            tradition_id: new_id,
            name: data.name.clone(),
            description: data.description.clone(),
            timestamps,
        })
    }
}

impl Read<Tradition, i64> for TraditionRepository {
    #[instrument(skip(self), fields(tradition_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Tradition>, Error> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE tradition_id = ?", self.table);
        sqlx::query_as::<_, Tradition>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl List<Tradition> for TraditionRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Tradition>, Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY tradition_id LIMIT ? OFFSET ?",
            self.table
        );
        sqlx::query_as::<_, Tradition>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await
    }
}
