use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        notification::{NotificationDto, SettingsDto},
    },
    server::{error::Error, model::app::AppState, service::notification::NotificationService},
};

pub static NOTIFICATION_TAG: &str = "notification";

/// Get every notification that currently applies
///
/// Unlike the scheduled scan this does not remember what was already shown, every call returns
/// the full list.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Success when retrieving due notifications", body = Vec<NotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let now = Utc::now().naive_utc();

    let notifications = NotificationService::new(&state.db, &state.settings)
        .get_due_notifications(now)
        .await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// Get the notification settings in effect
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Effective notification settings", body = SettingsDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    let settings = SettingsDto {
        notify_before_hours: state.settings.notify_before_hours,
        low_inventory_threshold: state.settings.low_inventory_threshold,
    };

    (StatusCode::OK, Json(settings))
}
