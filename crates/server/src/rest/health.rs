use axum::Json;

use panda_common::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        message: "Flying Panda API is running".into(),
    })
}
