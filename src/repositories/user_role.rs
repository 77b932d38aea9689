//! UserRoleRepository - Repository per la gestione dei ruoli

use super::{Create, Delete, List};
use crate::core::db::DbSchema;
use crate::dtos::CreateUserRoleDTO;
use crate::entities::{TIMESTAMP_COLUMNS, Timestamps, UserRole};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub const TABLE: &str = "user_roles";

const COLUMNS: &str = "role_id, role, domain, created_at, modified_at";

pub fn ddl(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    role_id INTEGER PRIMARY KEY,
    role TEXT NOT NULL,
    domain TEXT NOT NULL,
    {TIMESTAMP_COLUMNS}
)"#
    )
}

// USER ROLE REPOSITORY
pub struct UserRoleRepository {
    connection_pool: SqlitePool,
    table: String,
}

impl UserRoleRepository {
    pub fn new(connection_pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            connection_pool,
            table: schema.qualify(TABLE),
        }
    }
}

impl Create<UserRole, CreateUserRoleDTO> for UserRoleRepository {
    #[instrument(skip(self, data), fields(role = %data.role, domain = %data.domain))]
    async fn create(&self, data: &CreateUserRoleDTO) -> Result<UserRole, Error> {
        debug!("Creating user role");
        let timestamps = Timestamps::now();
        let sql = format!(
            "INSERT INTO {} (role, domain, created_at, modified_at) VALUES (?, ?, ?, ?)",
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(data.role.as_str())
            .bind(data.domain.as_str())
            .bind(timestamps.created_at)
            .bind(timestamps.modified_at)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("User role created with id {}", new_id);

        Ok(UserRole {
            role_id: new_id,
            role: data.role.clone(),
            domain: data.domain.clone(),
            timestamps,
        })
    }
}

impl List<UserRole> for UserRoleRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UserRole>, Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY role_id LIMIT ? OFFSET ?",
            self.table
        );
        sqlx::query_as::<_, UserRole>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Delete<i64> for UserRoleRepository {
    #[instrument(skip(self), fields(role_id = %id))]
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let sql = format!("DELETE FROM {} WHERE role_id = ?", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("User role deleted");
        }
        Ok(deleted)
    }
}
