//! Service State - Stato condiviso di ciascun servizio
//!
//! Ogni servizio ha il proprio stato con i soli repository che gli servono,
//! tutti costruiti sullo stesso pool e sullo stesso schema.

use crate::core::db::DbSchema;
use crate::repositories::{
    EntitlementRepository, MealSuggestionRepository, PerformanceReviewRepository,
    ScheduledPracticeRepository, TraditionRepository, UserRoleRepository,
};
use crate::services::TraditionService;
use sqlx::SqlitePool;

/// Stato del servizio users (entitlement e ruoli)
pub struct UsersState {
    /// Repository per la gestione degli entitlement
    pub entitlement: EntitlementRepository,

    /// Repository per la gestione dei ruoli
    pub role: UserRoleRepository,
}

impl UsersState {
    pub fn new(pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            entitlement: EntitlementRepository::new(pool.clone(), schema),
            role: UserRoleRepository::new(pool, schema),
        }
    }
}

/// Stato del servizio practices
pub struct PracticesState {
    pub traditions: TraditionService,

    /// Repository per la gestione delle pratiche pianificate
    pub practice: ScheduledPracticeRepository,
}

impl PracticesState {
    pub fn new(pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            traditions: TraditionService::new(TraditionRepository::new(pool.clone(), schema)),
            practice: ScheduledPracticeRepository::new(pool, schema),
        }
    }
}

/// Stato del servizio journal, accessibile dai resolver GraphQL
pub struct JournalState {
    pub meal: MealSuggestionRepository,
    pub review: PerformanceReviewRepository,
}

impl JournalState {
    pub fn new(pool: SqlitePool, schema: &DbSchema) -> Self {
        Self {
            meal: MealSuggestionRepository::new(pool.clone(), schema),
            review: PerformanceReviewRepository::new(pool, schema),
        }
    }
}
