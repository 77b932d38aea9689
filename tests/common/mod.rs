#![allow(dead_code)]

use axum_test::TestServer;
use practice_hub::core::DbSchema;
use practice_hub::core::db::memory_pool;
use practice_hub::{JournalState, PracticesState, Service, UsersState};
use std::sync::Arc;

/// Schema usato nei test: lo stesso nome del servizio, come in produzione
fn schema(service: Service) -> DbSchema {
    DbSchema::parse(service.name()).expect("valid schema name")
}

/// Crea un TestServer per il servizio users su un database in memoria già migrato
pub async fn users_server() -> TestServer {
    let pool = memory_pool(Service::Users.name(), Service::Users)
        .await
        .expect("Failed to create test database");
    let state = Arc::new(UsersState::new(pool, &schema(Service::Users)));
    TestServer::new(practice_hub::create_users_router(state)).expect("Failed to create test server")
}

/// Crea un TestServer per il servizio practices
pub async fn practices_server() -> TestServer {
    let pool = memory_pool(Service::Practices.name(), Service::Practices)
        .await
        .expect("Failed to create test database");
    let state = Arc::new(PracticesState::new(pool, &schema(Service::Practices)));
    TestServer::new(practice_hub::create_practices_router(state))
        .expect("Failed to create test server")
}

/// Crea un TestServer per il servizio journal
pub async fn journal_server() -> TestServer {
    let pool = memory_pool(Service::Journal.name(), Service::Journal)
        .await
        .expect("Failed to create test database");
    let state = Arc::new(JournalState::new(pool, &schema(Service::Journal)));
    TestServer::new(practice_hub::create_journal_router(state))
        .expect("Failed to create test server")
}
