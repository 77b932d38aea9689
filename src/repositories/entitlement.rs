//! EntitlementRepository - Repository per la gestione degli entitlement

use super::{Create, Read};
use crate::core::db::DbSchema;
use crate::dtos::EntitlementItem;
use crate::entities::{Entitlement, EntitlementStatus, TIMESTAMP_COLUMNS, Timestamps};
use sqlx::{Error, Executor, Sqlite, SqlitePool};
use tracing::{debug, info, instrument};

pub const TABLE: &str = "entitlements";

const COLUMNS: &str =
    "entitlement_id, email, program_template_id, code, status, created_at, modified_at";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    entitlement_id INTEGER PRIMARY KEY,
    email TEXT NOT NULL,
    program_template_id TEXT NOT NULL,
    code TEXT UNIQUE,
    status TEXT NOT NULL CHECK (status IN ('issued', 'redeemed', 'revoked')),
    {TIMESTAMP_COLUMNS}
)"#
    )
}

// ENTITLEMENT REPOSITORY
pub struct EntitlementRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl EntitlementRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }

    async fn insert<'e, E>(&self, executor: E, data: &EntitlementItem) -> Result<Entitlement, Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (email, program_template_id, code, status, created_at, modified_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.email.as_str())
            .bind(data.program_template_id.as_str())
            .bind(data.code.as_deref())
            .bind(data.status)
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(executor)
            .await?;

        Ok(Entitlement {
            entitlement_id: result.last_insert_rowid(),
            email: data.email.clone(),
            program_template_id: data.program_template_id.clone(),
            code: data.code.clone(),
            status: data.status,
            timestamps,
        })
    }

    /// Inserts every item inside one transaction, preserving input order.
    /// If any insert fails nothing is persisted.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn create_many(&self, items: &[EntitlementItem]) -> Result<Vec<Entitlement>, Error> {
        debug!("Creating entitlements in batch");
        let mut tx = self.connection_pool.begin().await?;
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            created.push(self.insert(&mut *tx, item).await?);
        }
        tx.commit().await?;

        info!("Created {} entitlements", created.len());
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Entitlement>, Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE email = ? ORDER BY entitlement_id",
            self.table
        );
        let entitlements = sqlx::query_as::<_, Entitlement>(&sql)
            .bind(email)
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} entitlements", entitlements.len());
        Ok(entitlements)
    }

    #[instrument(skip(self))]
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Entitlement>, Error> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE code = ?", self.table);
        sqlx::query_as::<_, Entitlement>(&sql)
            .bind(code)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// Moves an entitlement from `from` to `to`, optionally reassigning its
    /// email. The status check happens in the UPDATE itself, so two
    /// concurrent transitions cannot both succeed.
    ///
    /// Returns `Ok(None)` when the row is missing or no longer in `from`.
    #[instrument(skip(self))]
    pub async fn transition_status(
        &self,
        id: i64,
        from: EntitlementStatus,
        to: EntitlementStatus,
        email: Option<&str>,
    ) -> Result<Option<Entitlement>, Error> {
        let sql = format!(
            "UPDATE {} SET status = ?, email = COALESCE(?, email), modified_at = ? \
             WHERE entitlement_id = ? AND status = ?",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(to)
            .bind(email)
            .bind(chrono::Utc::now())
            .bind(id)
            .bind(from)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("No entitlement in state {} to transition", from);
            return Ok(None);
        }

        info!("Entitlement {} moved from {} to {}", id, from, to);
        self.read(&id).await
    }
}

impl Create<Entitlement, EntitlementItem> for EntitlementRepository {
    #[instrument(skip(self, data), fields(status = %data.status))]
    async fn create(&self, data: &EntitlementItem) -> Result<Entitlement, Error> {
        let entitlement = self.insert(&self.connection_pool, data).await?;
        info!("Entitlement created with id {}", entitlement.entitlement_id);
        Ok(entitlement)
    }
}

impl Read<Entitlement, i64> for EntitlementRepository {
    #[instrument(skip(self), fields(entitlement_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Entitlement>, Error> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE entitlement_id = ?", self.table);
        sqlx::query_as::<_, Entitlement>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
