//! Entities module - Entità persistite
//!
//! Ogni entity corrisponde a una tabella nello schema del servizio che la possiede.
//! All of them flatten [`Timestamps`] in, both as columns and as JSON fields.

pub mod entitlement;
pub mod enums;
pub mod journal;
pub mod scheduled_practice;
pub mod timestamps;
pub mod tradition;
pub mod user_role;

// Re-exports per facilitare l'import
pub use entitlement::Entitlement;
pub use enums::EntitlementStatus;
pub use journal::{MealSuggestion, PerformanceReview};
pub use scheduled_practice::ScheduledPractice;
pub use timestamps::{TIMESTAMP_COLUMNS, Timestamps};
pub use tradition::Tradition;
pub use user_role::UserRole;
