use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const SUPER_ADMIN_ROLE: &str = "superAdmin";

/// User record, owned by the identity service and only read here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

/// What a role means for meeting visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Member,
}

impl User {
    pub fn role(&self) -> Role {
        if self.role == SUPER_ADMIN_ROLE {
            Role::SuperAdmin
        } else {
            Role::Member
        }
    }
}
