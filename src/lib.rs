//! practice-hub library - espone i moduli principali per i binari e per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod graphql;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, JournalState, PracticesState, Service, UsersState, config};
pub use services::root;

use crate::core::DbSchema;
use axum::{
    Extension, Router,
    http::Method,
    routing::{delete, get, post},
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Router del servizio users: entitlement e ruoli
pub fn create_users_router(state: Arc<UsersState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .nest("/entitlements", configure_entitlement_routes())
        .nest("/roles", configure_role_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Configura le routes per gli entitlement
fn configure_entitlement_routes() -> Router<Arc<UsersState>> {
    use services::*;
    Router::new()
        .route("/", get(list_entitlements))
        .route("/auto-enroll", post(auto_enroll))
        .route("/redeem", post(redeem_entitlement))
}

/// Configura le routes per i ruoli
fn configure_role_routes() -> Router<Arc<UsersState>> {
    use services::*;
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/{role_id}", delete(delete_role))
}

/// Router del servizio practices: tradizioni e pratiche pianificate
pub fn create_practices_router(state: Arc<PracticesState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .route("/traditions", get(list_traditions).post(create_tradition))
        .route("/traditions/{tradition_id}", get(get_tradition))
        .nest("/scheduled-practices", configure_practice_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Configura le routes per le pratiche pianificate
fn configure_practice_routes() -> Router<Arc<PracticesState>> {
    use services::*;
    Router::new()
        .route("/", get(list_practices).post(create_practice))
        .route(
            "/{practice_id}",
            get(get_practice)
                .patch(update_practice)
                .delete(delete_practice),
        )
}

/// Router del servizio journal: solo GraphQL
pub fn create_journal_router(state: Arc<JournalState>) -> Router {
    let schema = graphql::create_schema(state);

    Router::new()
        .route("/", get(root))
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

/// Costruisce il router del servizio richiesto sopra il pool già migrato
pub fn router_for(service: Service, pool: SqlitePool, schema: &DbSchema) -> Router {
    match service {
        Service::Users => create_users_router(Arc::new(UsersState::new(pool, schema))),
        Service::Practices => create_practices_router(Arc::new(PracticesState::new(pool, schema))),
        Service::Journal => create_journal_router(Arc::new(JournalState::new(pool, schema))),
    }
}
