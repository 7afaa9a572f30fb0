use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use panda_common::{Alert, AlertFilter, ItemResponse, ListResponse};

use super::error::ApiError;
use super::router::AppState;
use crate::validation;

type ItemResult = Result<Json<ItemResponse<Alert>>, ApiError>;
type AlertId = Result<Path<String>, PathRejection>;

pub async fn list_alerts(
    State(state): State<AppState>,
    query: Result<Query<AlertFilter>, QueryRejection>,
) -> Result<Json<ListResponse<Alert>>, ApiError> {
    let Query(filter) = query?;
    let alerts = if filter.is_empty() {
        state.alerts.list()
    } else {
        state.alerts.filter(&filter)
    };
    Ok(Json(ListResponse::new(alerts)))
}

pub async fn get_alert(State(state): State<AppState>, id: AlertId) -> ItemResult {
    let Path(id) = id?;
    state
        .alerts
        .get(&id)
        .map(|a| Json(ItemResponse::new(a)))
        .ok_or(ApiError::NotFound)
}

pub async fn create_alert(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse<Alert>>), ApiError> {
    let Json(body) = body?;
    let new = validation::validate_create(&body).map_err(ApiError::Validation)?;

    let alert = state.alerts.create(new);
    tracing::info!(alert_id = %alert.id, country = %alert.country, "alert created");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse::with_message("Alert created successfully", alert)),
    ))
}

pub async fn update_alert(
    State(state): State<AppState>,
    id: AlertId,
    body: Result<Json<Value>, JsonRejection>,
) -> ItemResult {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch = validation::validate_update(&body).map_err(ApiError::Validation)?;

    let alert = state.alerts.update(&id, patch).ok_or(ApiError::NotFound)?;
    tracing::info!(alert_id = %alert.id, status = %alert.status, "alert updated");

    Ok(Json(ItemResponse::with_message("Alert updated successfully", alert)))
}

pub async fn delete_alert(State(state): State<AppState>, id: AlertId) -> ItemResult {
    let Path(id) = id?;
    let alert = state.alerts.delete(&id).ok_or(ApiError::NotFound)?;
    tracing::info!(alert_id = %alert.id, "alert deleted");

    Ok(Json(ItemResponse::with_message("Alert deleted successfully", alert)))
}
