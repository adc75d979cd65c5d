use std::collections::{BTreeSet, HashMap, HashSet};

use time::OffsetDateTime;
use uuid::Uuid;

use super::{
    dto::{CreateMeetingRequest, MeetingDetails, MeetingSummary},
    repo_types::{MeetingFilter, MeetingRecord, NewMeeting},
};
use crate::store::MeetingStore;

/// "First Last"; absent parts are left out.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn create_meeting(
    store: &dyn MeetingStore,
    actor_id: Uuid,
    req: CreateMeetingRequest,
) -> anyhow::Result<MeetingRecord> {
    let meeting = NewMeeting {
        id: Uuid::new_v4(),
        agenda: req.agenda,
        date_time: req.date_time,
        timestamp: OffsetDateTime::now_utc(),
        location: req.location,
        notes: req.notes,
        created_by: req.created_by.unwrap_or(actor_id),
        attendees: req.attendees,
    };
    store.insert_meeting(meeting).await
}

/// Filtered meetings joined with their creators, projected to summaries.
pub async fn list_summaries(
    store: &dyn MeetingStore,
    filter: &MeetingFilter,
) -> anyhow::Result<Vec<MeetingSummary>> {
    let meetings = store.list_meetings(filter).await?;

    let creator_ids: Vec<Uuid> = meetings
        .iter()
        .map(|m| m.created_by)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let creators: HashMap<Uuid, String> = store
        .find_users(&creator_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, display_name(u.first_name.as_deref(), u.last_name.as_deref())))
        .collect();

    Ok(meetings
        .into_iter()
        .map(|m| MeetingSummary {
            creator_display_name: creators.get(&m.created_by).cloned().unwrap_or_default(),
            id: m.id,
            agenda: m.agenda,
            date_time: m.date_time,
            timestamp: m.timestamp,
        })
        .collect())
}

/// One meeting joined with its creator and attendees. `None` when the
/// meeting is gone or soft-deleted.
pub async fn meeting_details(
    store: &dyn MeetingStore,
    id: Uuid,
) -> anyhow::Result<Option<MeetingDetails>> {
    let Some(meeting) = store.find_meeting(id).await? else {
        return Ok(None);
    };

    let creator_display_name = store
        .find_user(meeting.created_by)
        .await?
        .map(|u| display_name(u.first_name.as_deref(), u.last_name.as_deref()))
        .unwrap_or_default();

    let contacts: HashMap<Uuid, String> = store
        .find_contacts(&meeting.attendees)
        .await?
        .into_iter()
        .map(|c| (c.id, display_name(c.first_name.as_deref(), c.last_name.as_deref())))
        .collect();

    // attendee order, first occurrence wins; dangling references drop out
    let mut seen = HashSet::new();
    let attendee_display_names = meeting
        .attendees
        .iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| contacts.get(id).cloned())
        .collect();

    Ok(Some(MeetingDetails {
        id: meeting.id,
        agenda: meeting.agenda,
        date_time: meeting.date_time,
        timestamp: meeting.timestamp,
        creator_display_name,
        location: meeting.location,
        attendee_display_names,
        notes: meeting.notes,
    }))
}
