use std::collections::HashMap;

use axum::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::MeetingStore;
use crate::{
    auth::User,
    contacts::Contact,
    meetings::repo_types::{MeetingFilter, MeetingRecord, NewMeeting, UpdateSummary},
};

#[derive(Default)]
struct Tables {
    meetings: Vec<MeetingRecord>,
    users: HashMap<Uuid, User>,
    contacts: HashMap<Uuid, Contact>,
}

/// In-memory store for router tests. Meetings keep insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    broken: bool,
    vanishing: bool,
}

impl MemoryStore {
    /// A store whose every operation fails, for exercising error paths.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    /// A store where a meeting is soft-deleted right after its first
    /// successful lookup, as if a concurrent delete landed in between.
    pub fn vanishing() -> Self {
        Self {
            vanishing: true,
            ..Self::default()
        }
    }

    pub async fn add_user(&self, user: User) {
        self.tables.write().await.users.insert(user.id, user);
    }

    pub async fn add_contact(&self, contact: Contact) {
        self.tables.write().await.contacts.insert(contact.id, contact);
    }

    /// Raw row access, including soft-deleted meetings.
    pub async fn raw_meeting(&self, id: Uuid) -> Option<MeetingRecord> {
        self.tables
            .read()
            .await
            .meetings
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}

fn matches(filter: &MeetingFilter, m: &MeetingRecord) -> bool {
    m.deleted == filter.deleted
        && filter.created_by.map_or(true, |id| m.created_by == id)
        && filter
            .agenda
            .as_ref()
            .map_or(true, |a| m.agenda.as_ref() == Some(a))
        && filter
            .location
            .as_ref()
            .map_or(true, |l| m.location.as_ref() == Some(l))
}

#[async_trait]
impl MeetingStore for MemoryStore {
    async fn insert_meeting(&self, m: NewMeeting) -> anyhow::Result<MeetingRecord> {
        self.check()?;
        let record = MeetingRecord {
            id: m.id,
            agenda: m.agenda,
            date_time: m.date_time,
            timestamp: m.timestamp,
            location: m.location,
            notes: m.notes,
            created_by: m.created_by,
            attendees: m.attendees,
            deleted: false,
        };
        self.tables.write().await.meetings.push(record.clone());
        Ok(record)
    }

    async fn find_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let Some(m) = tables.meetings.iter_mut().find(|m| m.id == id && !m.deleted) else {
            return Ok(None);
        };
        let found = m.clone();
        if self.vanishing {
            m.deleted = true;
        }
        Ok(Some(found))
    }

    async fn list_meetings(&self, filter: &MeetingFilter) -> anyhow::Result<Vec<MeetingRecord>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .meetings
            .iter()
            .filter(|m| matches(filter, m))
            .cloned()
            .collect())
    }

    async fn soft_delete_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>> {
        self.check()?;
        let mut tables = self.tables.write().await;
        Ok(tables.meetings.iter_mut().find(|m| m.id == id).map(|m| {
            let prior = m.clone();
            m.deleted = true;
            prior
        }))
    }

    async fn soft_delete_meetings(&self, ids: &[Uuid]) -> anyhow::Result<UpdateSummary> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let mut summary = UpdateSummary::default();
        for m in tables.meetings.iter_mut().filter(|m| ids.contains(&m.id)) {
            summary.matched_count += 1;
            if !m.deleted {
                m.deleted = true;
                summary.modified_count += 1;
            }
        }
        Ok(summary)
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        self.check()?;
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_users(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.users.get(id).cloned()).collect())
    }

    async fn find_contacts(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Contact>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.contacts.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn new_meeting(created_by: Uuid) -> NewMeeting {
        NewMeeting {
            id: Uuid::new_v4(),
            agenda: Some("Sync".into()),
            date_time: None,
            timestamp: OffsetDateTime::now_utc(),
            location: None,
            notes: None,
            created_by,
            attendees: Vec::new(),
        }
    }

    #[tokio::test]
    async fn bulk_soft_delete_counts_matched_and_modified() {
        let store = MemoryStore::default();
        let owner = Uuid::new_v4();
        let a = store.insert_meeting(new_meeting(owner)).await.unwrap();
        let b = store.insert_meeting(new_meeting(owner)).await.unwrap();
        store.soft_delete_meeting(b.id).await.unwrap();

        let summary = store
            .soft_delete_meetings(&[a.id, b.id, Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(
            summary,
            UpdateSummary {
                matched_count: 2,
                modified_count: 1
            }
        );
    }

    #[tokio::test]
    async fn soft_deleted_meetings_are_hidden_from_reads() {
        let store = MemoryStore::default();
        let owner = Uuid::new_v4();
        let m = store.insert_meeting(new_meeting(owner)).await.unwrap();

        let prior = store.soft_delete_meeting(m.id).await.unwrap().unwrap();
        assert!(!prior.deleted);
        assert!(store.find_meeting(m.id).await.unwrap().is_none());
        assert!(store
            .list_meetings(&MeetingFilter::default())
            .await
            .unwrap()
            .is_empty());
        assert!(store.raw_meeting(m.id).await.unwrap().deleted);
    }
}
