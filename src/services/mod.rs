//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod scheduled_practices;
pub mod traditions;
pub mod users;

// Re-exports per facilitare l'import
pub use scheduled_practices::{
    create_practice, delete_practice, get_practice, list_practices, update_practice,
};
pub use traditions::{TraditionService, create_tradition, get_tradition, list_traditions};
pub use users::{
    auto_enroll, create_role, delete_role, list_entitlements, list_roles, redeem_entitlement,
};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
