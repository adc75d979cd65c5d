use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored meeting row. `deleted` is the soft-delete flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub id: Uuid,
    pub agenda: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    #[sqlx(rename = "created_at")]
    pub timestamp: OffsetDateTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub attendees: Vec<Uuid>,
    pub deleted: bool,
}

/// Fields for a row about to be inserted; id and timestamp are already assigned.
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub id: Uuid,
    pub agenda: Option<String>,
    pub date_time: Option<OffsetDateTime>,
    pub timestamp: OffsetDateTime,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub attendees: Vec<Uuid>,
}

/// Row filter for meeting reads. Every `Some` field is an equality match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    pub created_by: Option<Uuid>,
    pub agenda: Option<String>,
    pub location: Option<String>,
    pub deleted: bool,
}

/// Outcome of a bulk soft delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}
