//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

/// DTO per query parameters di ricerca entitlement: /entitlements?email=...
#[derive(Serialize, Deserialize, Debug)]
pub struct EntitlementQuery {
    pub email: String,
}

/// DTO per query parameters di paginazione
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ListQuery {
    /// `(limit, offset)` clamped to sane bounds
    pub fn bounds(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_defaults_and_clamping() {
        assert_eq!(ListQuery::default().bounds(), (DEFAULT_LIMIT, 0));
        let q = ListQuery { limit: Some(10_000), offset: Some(-3) };
        assert_eq!(q.bounds(), (MAX_LIMIT, 0));
        let q = ListQuery { limit: Some(0), offset: Some(7) };
        assert_eq!(q.bounds(), (1, 7));
    }
}
