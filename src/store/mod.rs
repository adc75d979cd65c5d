//! Record store seam: meetings are read and written here, users and
//! contacts are only read.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use axum::async_trait;
use uuid::Uuid;

use crate::{
    auth::User,
    contacts::Contact,
    meetings::repo_types::{MeetingFilter, MeetingRecord, NewMeeting, UpdateSummary},
};

pub use postgres::PgMeetingStore;

#[async_trait]
pub trait MeetingStore: Send + Sync {
    async fn insert_meeting(&self, meeting: NewMeeting) -> anyhow::Result<MeetingRecord>;

    /// Direct lookup by id; soft-deleted meetings are treated as absent.
    async fn find_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>>;

    /// Meetings matching `filter`, oldest first.
    async fn list_meetings(&self, filter: &MeetingFilter) -> anyhow::Result<Vec<MeetingRecord>>;

    /// Flags one meeting as deleted and returns its state before the update,
    /// or `None` when no row has that id.
    async fn soft_delete_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>>;

    async fn soft_delete_meetings(&self, ids: &[Uuid]) -> anyhow::Result<UpdateSummary>;

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn find_users(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>>;
    async fn find_contacts(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Contact>>;
}
