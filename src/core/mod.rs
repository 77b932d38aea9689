//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Database e migrazioni
//! - Gestione errori
//! - Stato dei servizi
//! - Logging e tracing
//! - Avvio del server

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-exports per facilitare l'import
pub use config::{Config, ConfigError, Service};
pub use db::DbSchema;
pub use error::AppError;
pub use server::start;
pub use state::{JournalState, PracticesState, UsersState};
pub use telemetry::{TraceOptions, init_tracing, trace_call};
