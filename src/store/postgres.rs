use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::MeetingStore;
use crate::{
    auth::User,
    contacts::Contact,
    meetings::repo_types::{MeetingFilter, MeetingRecord, NewMeeting, UpdateSummary},
};

#[derive(Clone)]
pub struct PgMeetingStore {
    db: PgPool,
}

impl PgMeetingStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MeetingStore for PgMeetingStore {
    async fn insert_meeting(&self, m: NewMeeting) -> anyhow::Result<MeetingRecord> {
        let row = sqlx::query_as::<_, MeetingRecord>(
            r#"
            INSERT INTO meetings (id, agenda, date_time, created_at, location, notes, created_by, attendees)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, agenda, date_time, created_at, location, notes, created_by, attendees, deleted
            "#,
        )
        .bind(m.id)
        .bind(m.agenda)
        .bind(m.date_time)
        .bind(m.timestamp)
        .bind(m.location)
        .bind(m.notes)
        .bind(m.created_by)
        .bind(m.attendees)
        .fetch_one(&self.db)
        .await
        .context("insert meeting")?;
        Ok(row)
    }

    async fn find_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>> {
        let row = sqlx::query_as::<_, MeetingRecord>(
            r#"
            SELECT id, agenda, date_time, created_at, location, notes, created_by, attendees, deleted
              FROM meetings
             WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find meeting by id")?;
        Ok(row)
    }

    async fn list_meetings(&self, filter: &MeetingFilter) -> anyhow::Result<Vec<MeetingRecord>> {
        let rows = sqlx::query_as::<_, MeetingRecord>(
            r#"
            SELECT id, agenda, date_time, created_at, location, notes, created_by, attendees, deleted
              FROM meetings
             WHERE deleted = $1
               AND ($2::uuid IS NULL OR created_by = $2)
               AND ($3::text IS NULL OR agenda = $3)
               AND ($4::text IS NULL OR location = $4)
             ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(filter.deleted)
        .bind(filter.created_by)
        .bind(filter.agenda.as_deref())
        .bind(filter.location.as_deref())
        .fetch_all(&self.db)
        .await
        .context("list meetings")?;
        Ok(rows)
    }

    async fn soft_delete_meeting(&self, id: Uuid) -> anyhow::Result<Option<MeetingRecord>> {
        let prior = sqlx::query_as::<_, MeetingRecord>(
            r#"
            WITH prior AS (
                SELECT id, agenda, date_time, created_at, location, notes, created_by, attendees, deleted
                  FROM meetings
                 WHERE id = $1
                   FOR UPDATE
            )
            UPDATE meetings m
               SET deleted = TRUE
              FROM prior
             WHERE m.id = prior.id
            RETURNING prior.id, prior.agenda, prior.date_time, prior.created_at, prior.location,
                      prior.notes, prior.created_by, prior.attendees, prior.deleted
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("soft delete meeting")?;
        Ok(prior)
    }

    async fn soft_delete_meetings(&self, ids: &[Uuid]) -> anyhow::Result<UpdateSummary> {
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            WITH matched AS (
                SELECT id FROM meetings WHERE id = ANY($1)
            ), modified AS (
                UPDATE meetings
                   SET deleted = TRUE
                 WHERE id = ANY($1) AND deleted = FALSE
                RETURNING id
            )
            SELECT (SELECT COUNT(*) FROM matched), (SELECT COUNT(*) FROM modified)
            "#,
        )
        .bind(ids)
        .fetch_one(&self.db)
        .await
        .context("soft delete meetings")?;

        Ok(UpdateSummary {
            matched_count: u64::try_from(matched).context("negative matched count")?,
            modified_count: u64::try_from(modified).context("negative modified count")?,
        })
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, first_name, last_name, role FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find user by id")?;
        Ok(user)
    }

    async fn find_users(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, first_name, last_name, role FROM users WHERE id = ANY($1)"#,
        )
        .bind(ids)
        .fetch_all(&self.db)
        .await
        .context("find users by ids")?;
        Ok(users)
    }

    async fn find_contacts(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Contact>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let contacts = sqlx::query_as::<_, Contact>(
            r#"SELECT id, first_name, last_name FROM contacts WHERE id = ANY($1)"#,
        )
        .bind(ids)
        .fetch_all(&self.db)
        .await
        .context("find contacts by ids")?;
        Ok(contacts)
    }
}
