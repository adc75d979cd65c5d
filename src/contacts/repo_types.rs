use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Address-book contact that a meeting can list as an attendee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
