//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod entitlement;
pub mod journal;
pub mod query;
pub mod scheduled_practice;
pub mod tradition;
pub mod user_role;

// Re-exports per facilitare l'import
pub use entitlement::{AutoEnrollRequest, EntitlementDTO, EntitlementItem, RedeemRequest};
pub use journal::{CreateMealSuggestionDTO, CreatePerformanceReviewDTO};
pub use query::{EntitlementQuery, ListQuery};
pub use scheduled_practice::{
    CreateScheduledPracticeDTO, ScheduledPracticeDTO, UpdateScheduledPracticeDTO,
};
pub use tradition::{CreateTraditionDTO, TraditionDTO};
pub use user_role::{CreateUserRoleDTO, UserRoleDTO};
