//! Timestamps - colonne created_at / modified_at comuni a tutte le entità

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column definitions shared by every table, spliced into each `CREATE TABLE`
pub const TIMESTAMP_COLUMNS: &str = "created_at TEXT NOT NULL,\n    modified_at TEXT NOT NULL";

/// Creation / last modification instants of a row.
///
/// `created_at` is written once on insert. Repositories refresh `modified_at`
/// on every update.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
        }
    }

    /// Returns a copy with `modified_at` moved to the current instant
    pub fn touched(self) -> Self {
        Self {
            created_at: self.created_at,
            modified_at: Utc::now().max(self.modified_at),
        }
    }
}
