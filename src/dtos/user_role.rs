//! UserRole DTOs

use crate::entities::{Timestamps, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserRoleDTO {
    #[validate(length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"))]
    pub role: String,

    #[validate(length(min = 1, max = 255, message = "Domain must be between 1 and 255 characters"))]
    pub domain: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRoleDTO {
    pub role_id: i64,
    pub role: String,
    pub domain: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<UserRole> for UserRoleDTO {
    fn from(value: UserRole) -> Self {
        Self {
            role_id: value.role_id,
            role: value.role,
            domain: value.domain,
            timestamps: value.timestamps,
        }
    }
}
