//! GraphQL module - facciata del servizio journal

pub mod schema;
pub mod types;

pub use schema::{JournalSchema, Mutation, Query, create_schema, graphiql, graphql_handler};
pub use types::{MealSuggestion, PerformanceReview};
