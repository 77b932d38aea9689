//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Queries are built at runtime because table names carry the schema chosen
//! in configuration; every module exposes its `TABLE` name and `ddl`.

pub mod entitlement;
pub mod meal_suggestion;
pub mod performance_review;
pub mod scheduled_practice;
pub mod tradition;
pub mod traits;
pub mod user_role;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, List, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use entitlement::EntitlementRepository;
pub use meal_suggestion::MealSuggestionRepository;
pub use performance_review::PerformanceReviewRepository;
pub use scheduled_practice::ScheduledPracticeRepository;
pub use tradition::TraditionRepository;
pub use user_role::UserRoleRepository;
