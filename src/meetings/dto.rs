use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Body of `POST /add`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    pub agenda: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_time: Option<OffsetDateTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<Uuid>, // defaults to the caller
    #[serde(default)]
    pub attendees: Vec<Uuid>,
}

/// Query string filter of `GET /`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingQuery {
    pub created_by: Option<Uuid>,
    pub agenda: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    pub id: Uuid,
    pub agenda: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub date_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub creator_display_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub id: Uuid,
    pub agenda: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub date_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub creator_display_name: String,
    pub location: Option<String>,
    pub attendee_display_names: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse<T> {
    pub message: &'static str,
    pub result: T,
}
