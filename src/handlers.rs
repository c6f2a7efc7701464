use crate::dates::{self, Month};
use crate::errors::{AppError, ProfileError};
use crate::models::{
    AttendanceRequest, HolidaysRequest, MonthView, Profile, ProfileListEntry, ProfileSettings,
    ProfilesResponse, ShareQuery, ShareResponse,
};
use crate::profiles::ProfileStore;
use crate::share;
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::build_month_view;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShareQuery>,
) -> Result<Response, AppError> {
    if let Some(param) = query.share {
        let profile = share::decode(&param).inspect_err(|err| warn!("rejected share link: {err}"))?;
        let id = state
            .edit(|profiles| Ok(profiles.import(profile)?.id.clone()))
            .await
            .inspect_err(|err| warn!("rejected share link: {}", err.message))?;
        info!(profile = %id, "imported shared profile");
        return Ok(Redirect::to("/").into_response());
    }

    Ok(Html(render_index(&Month::containing(today()).key())).into_response())
}

pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<ProfilesResponse>, AppError> {
    {
        let profiles = state.profiles.lock().await;
        if profiles.active_id().is_some() {
            return Ok(Json(to_list(&profiles)));
        }
    }
    let listing = state
        .edit(|profiles| {
            profiles.ensure_active(today());
            Ok(to_list(profiles))
        })
        .await?;
    Ok(Json(listing))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileSettings>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let created = state
        .edit(|profiles| Ok(profiles.create(payload)?.clone()))
        .await?;
    info!(profile = %created.id, "created profile");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProfileSettings>,
) -> Result<Json<Profile>, AppError> {
    let updated = state
        .edit(|profiles| Ok(profiles.update(&id, payload)?.clone()))
        .await?;
    Ok(Json(updated))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfilesResponse>, AppError> {
    let listing = state
        .edit(|profiles| {
            profiles.delete(&id)?;
            Ok(to_list(profiles))
        })
        .await?;
    info!(profile = %id, "deleted profile");
    Ok(Json(listing))
}

pub async fn select_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfilesResponse>, AppError> {
    let listing = state
        .edit(|profiles| {
            profiles.select(&id)?;
            Ok(to_list(profiles))
        })
        .await?;
    Ok(Json(listing))
}

pub async fn export_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let profiles = state.profiles.lock().await;
    Ok(Json(profiles.get(&id)?.clone()))
}

/// Takes the raw body so malformed JSON surfaces as an import rejection
/// rather than an extractor error.
pub async fn import_profile(State(state): State<AppState>, body: String) -> Result<Json<Profile>, AppError> {
    let imported = state
        .edit(|profiles| Ok(profiles.import_json(&body)?.clone()))
        .await
        .inspect_err(|err| warn!("rejected import: {}", err.message))?;
    info!(profile = %imported.id, "imported profile");
    Ok(Json(imported))
}

pub async fn share_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareResponse>, AppError> {
    let profiles = state.profiles.lock().await;
    let profile = profiles.get(&id)?;
    Ok(Json(ShareResponse {
        param: share::encode(profile).map_err(AppError::internal)?,
        path: share::share_path(profile).map_err(AppError::internal)?,
    }))
}

pub async fn get_month(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
) -> Result<Json<MonthView>, AppError> {
    let month = parse_month(&month)?;
    let profiles = state.profiles.lock().await;
    Ok(Json(build_month_view(profiles.get(&id)?, month)))
}

pub async fn set_holidays(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
    Json(payload): Json<HolidaysRequest>,
) -> Result<Json<MonthView>, AppError> {
    let month = parse_month(&month)?;
    let view = state
        .edit(|profiles| {
            profiles.set_holidays(&id, month, &payload.text)?;
            Ok(build_month_view(profiles.get(&id)?, month))
        })
        .await?;
    Ok(Json(view))
}

pub async fn toggle_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AttendanceRequest>,
) -> Result<Json<MonthView>, AppError> {
    let date = dates::parse_date(&payload.date).ok_or_else(|| ProfileError::InvalidDate(payload.date.clone()))?;
    let view = state
        .edit(|profiles| {
            profiles.toggle_attendance(&id, date)?;
            Ok(build_month_view(profiles.get(&id)?, Month::containing(date)))
        })
        .await?;
    Ok(Json(view))
}

fn parse_month(key: &str) -> Result<Month, ProfileError> {
    Month::parse(key).ok_or_else(|| ProfileError::InvalidMonth(key.to_string()))
}

fn to_list(profiles: &ProfileStore) -> ProfilesResponse {
    ProfilesResponse {
        active: profiles.active_id().map(str::to_string),
        profiles: profiles.profiles().values().map(ProfileListEntry::from).collect(),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
