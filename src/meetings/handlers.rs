use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{CreateMeetingRequest, DeleteResponse, MeetingDetails, MeetingQuery, MeetingSummary},
    errors::MeetingError,
    policy::scope_filter,
    repo_types::{MeetingRecord, UpdateSummary},
    services,
};
use crate::{
    auth::{AuthUser, User},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meeting", get(list_meetings))
        .route("/meeting/", get(list_meetings))
        .route("/meeting/add", post(add_meeting))
        .route("/meeting/view/:id", get(view_meeting))
        .route("/meeting/delete/:id", delete(delete_meeting))
        .route("/meeting/deleteMany", post(delete_many_meetings))
}

/// Re-reads the caller's user row; the token only carries the id.
async fn load_actor(state: &AppState, user_id: Uuid) -> Result<User, MeetingError> {
    match state.store.find_user(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            warn!(%user_id, "authenticated user not found");
            Err(MeetingError::ActorNotFound)
        }
        Err(e) => {
            error!(error = %e, %user_id, "load actor failed");
            Err(MeetingError::List)
        }
    }
}

/// GET /: meetings visible to the caller.
#[instrument(skip(state, query))]
pub async fn list_meetings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<MeetingQuery>, QueryRejection>,
) -> Result<Json<Vec<MeetingSummary>>, MeetingError> {
    let Query(query) = query.map_err(|e| {
        warn!(error = %e, "invalid meeting query");
        MeetingError::BadRequest("Invalid query parameters".into())
    })?;

    let actor = load_actor(&state, user_id).await?;
    let filter = scope_filter(&actor, query);

    let items = services::list_summaries(state.store.as_ref(), &filter)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "list meetings failed");
            MeetingError::List
        })?;
    Ok(Json(items))
}

/// POST /add
#[instrument(skip(state, body))]
pub async fn add_meeting(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<CreateMeetingRequest>, JsonRejection>,
) -> Result<Json<MeetingRecord>, MeetingError> {
    let Json(body) = body.map_err(|e| {
        error!(error = %e, %user_id, "invalid meeting body");
        MeetingError::Create
    })?;

    let meeting = services::create_meeting(state.store.as_ref(), user_id, body)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "create meeting failed");
            MeetingError::Create
        })?;

    info!(meeting_id = %meeting.id, created_by = %meeting.created_by, "meeting created");
    Ok(Json(meeting))
}

/// GET /view/:id: one meeting with creator and attendee names.
#[instrument(skip(state, id))]
pub async fn view_meeting(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MeetingDetails>, MeetingError> {
    let Path(id) = id.map_err(|e| {
        error!(error = %e, %user_id, "invalid meeting id");
        MeetingError::View(e.body_text())
    })?;

    let exists = state.store.find_meeting(id).await.map_err(|e| {
        error!(error = %e, %id, "view meeting lookup failed");
        MeetingError::View(format!("{e:#}"))
    })?;
    if exists.is_none() {
        warn!(%id, "meeting not found");
        return Err(MeetingError::NotFound);
    }

    let details = services::meeting_details(state.store.as_ref(), id)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "view meeting enrichment failed");
            MeetingError::View(format!("{e:#}"))
        })?;

    match details {
        Some(details) => Ok(Json(details)),
        None => {
            warn!(%id, "meeting vanished before enrichment");
            Err(MeetingError::NoData)
        }
    }
}

/// DELETE /delete/:id: soft delete. A missing id is not an error;
/// `result` is then null.
#[instrument(skip(state, id))]
pub async fn delete_meeting(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeleteResponse<Option<MeetingRecord>>>, MeetingError> {
    let Path(id) = id.map_err(|e| {
        error!(error = %e, %user_id, "invalid meeting id");
        MeetingError::Delete
    })?;

    let prior = state.store.soft_delete_meeting(id).await.map_err(|e| {
        error!(error = %e, %id, "delete meeting failed");
        MeetingError::Delete
    })?;

    info!(%id, %user_id, found = prior.is_some(), "meeting soft-deleted");
    Ok(Json(DeleteResponse {
        message: "Meeting deleted successfully",
        result: prior,
    }))
}

/// POST /deleteMany: body is a JSON array of meeting ids.
#[instrument(skip(state, body))]
pub async fn delete_many_meetings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<Vec<Uuid>>, JsonRejection>,
) -> Result<Json<DeleteResponse<UpdateSummary>>, MeetingError> {
    let Json(ids) = body.map_err(|e| {
        error!(error = %e, %user_id, "invalid id list");
        MeetingError::DeleteMany
    })?;

    let summary = state.store.soft_delete_meetings(&ids).await.map_err(|e| {
        error!(error = %e, count = ids.len(), "delete meetings failed");
        MeetingError::DeleteMany
    })?;

    info!(
        %user_id,
        requested = ids.len(),
        matched = summary.matched_count,
        modified = summary.modified_count,
        "meetings soft-deleted"
    );
    Ok(Json(DeleteResponse {
        message: "Meetings deleted successfully",
        result: summary,
    }))
}
