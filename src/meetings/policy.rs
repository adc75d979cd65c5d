use crate::auth::{Role, User};

use super::{dto::MeetingQuery, repo_types::MeetingFilter};

/// Row filter for a list request. Members only ever see meetings they
/// created, whatever `createdBy` they asked for; super admins see every
/// creator unless they narrow it themselves. Deleted rows are never visible.
pub fn scope_filter(actor: &User, query: MeetingQuery) -> MeetingFilter {
    let created_by = match actor.role() {
        Role::SuperAdmin => query.created_by,
        Role::Member => Some(actor.id),
    };

    MeetingFilter {
        created_by,
        agenda: query.agenda,
        location: query.location,
        deleted: false,
    }
}
