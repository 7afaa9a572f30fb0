use axum::http::{StatusCode, Uri};
use axum::Json;

use panda_common::ErrorResponse;

/// Handles both unknown paths and known paths hit with an unsupported method.
pub async fn route_not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found").with_path(path)),
    )
}
