//! Database - pool SQLite, schema per servizio e migrazioni
//!
//! Each service keeps its tables inside its own schema. SQLite has no
//! `CREATE SCHEMA`, so a schema other than `main` is a database attached on
//! every connection the pool opens.

use crate::core::config::{ConfigError, DatabaseSettings, Service};
use crate::repositories::{
    entitlement, meal_suggestion, performance_review, scheduled_practice, tradition, user_role,
};
use lazy_static::lazy_static;
use regex::Regex;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, SqlitePool};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

lazy_static! {
    static ref SCHEMA_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").unwrap();
}

/// Validated schema name, safe to interpolate into SQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSchema(String);

impl DbSchema {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        if !SCHEMA_NAME.is_match(name) {
            return Err(ConfigError::Invalid {
                var: "DB_SCHEMA",
                reason: format!("'{name}' is not a valid schema identifier"),
            });
        }
        // `temp` is reserved by SQLite and cannot be the target of ATTACH
        if name.eq_ignore_ascii_case("temp") {
            return Err(ConfigError::Invalid {
                var: "DB_SCHEMA",
                reason: format!("'{name}' is reserved by SQLite"),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_main(&self) -> bool {
        self.0.eq_ignore_ascii_case("main")
    }

    /// Schema-qualified table name, e.g. `practices.traditions`
    pub fn qualify(&self, table: &str) -> String {
        format!("{}.{}", self.0, table)
    }
}

impl fmt::Display for DbSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Where the schema database lives: in memory for in-memory URLs, otherwise
/// `<schema>.db` next to the main database file.
pub fn attach_target(database_url: &str, schema: &DbSchema) -> String {
    if is_memory_url(database_url) {
        return ":memory:".to_string();
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    let file_name = format!("{}.db", schema.as_str());
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(file_name).to_string_lossy().into_owned()
        }
        _ => file_name,
    }
}

/// Crea il pool di connessioni e collega lo schema del servizio
#[instrument(skip(settings), fields(schema = %settings.schema))]
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(&settings.url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new();

    // ogni connessione in memoria è un database diverso: una sola connessione, mai riciclata
    if is_memory_url(&settings.url) {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        pool_options = pool_options.max_connections(settings.max_connections);
    }

    if !settings.schema.is_main() {
        let target = attach_target(&settings.url, &settings.schema);
        let statement = format!("ATTACH DATABASE ? AS {}", settings.schema.as_str());
        debug!("Attaching schema database at {}", target);
        pool_options = pool_options.after_connect(move |conn, _meta| {
            let statement = statement.clone();
            let target = target.clone();
            Box::pin(async move {
                sqlx::query(&statement).bind(target).execute(&mut *conn).await?;
                Ok(())
            })
        });
    }

    let pool = pool_options.connect_with(options).await?;
    info!("Database pool ready");
    Ok(pool)
}

/// DDL of the tables owned by a service
pub fn service_tables(service: Service, schema: &DbSchema) -> Vec<String> {
    match service {
        Service::Users => vec![
            entitlement::ddl(&schema.qualify(entitlement::TABLE)),
            user_role::ddl(&schema.qualify(user_role::TABLE)),
        ],
        Service::Practices => vec![
            tradition::ddl(&schema.qualify(tradition::TABLE)),
            scheduled_practice::ddl(&schema.qualify(scheduled_practice::TABLE)),
        ],
        Service::Journal => vec![
            meal_suggestion::ddl(&schema.qualify(meal_suggestion::TABLE)),
            performance_review::ddl(&schema.qualify(performance_review::TABLE)),
        ],
    }
}

/// Idempotent: every statement is `CREATE ... IF NOT EXISTS`
#[instrument(skip(pool, schema), fields(service = service.name(), schema = %schema))]
pub async fn migrate(pool: &SqlitePool, schema: &DbSchema, service: Service) -> Result<(), Error> {
    info!("DB migrate start");
    for ddl in service_tables(service, schema) {
        sqlx::query(&ddl).execute(pool).await?;
    }
    info!("DB migrate done");
    Ok(())
}

/// Pool in memoria già migrato, usato dai test
pub async fn memory_pool(schema: &str, service: Service) -> Result<SqlitePool, Error> {
    let schema = DbSchema::parse(schema).map_err(|e| Error::Configuration(e.to_string().into()))?;
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        schema: schema.clone(),
        max_connections: 1,
    };
    let pool = connect(&settings).await?;
    migrate(&pool, &schema, service).await?;
    Ok(pool)
}
