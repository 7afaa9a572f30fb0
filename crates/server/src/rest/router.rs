use std::any::Any;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use super::{alerts, error, fallback, health};
use crate::config::ServerConfig;
use crate::middleware::request_log;
use crate::store::AlertStore;

#[derive(Clone)]
pub struct AppState {
    pub alerts: AlertStore,
    /// Echo panic messages in 500 responses. Off unless `APP_ENV=development`.
    pub expose_error_detail: bool,
}

impl AppState {
    pub fn new(alerts: AlertStore) -> Self {
        Self {
            alerts,
            expose_error_detail: false,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let alerts = if config.seed_sample_data {
            AlertStore::with_sample_data()
        } else {
            AlertStore::new()
        };
        Self {
            alerts,
            expose_error_detail: config.expose_error_detail,
        }
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/alerts",
            get(alerts::list_alerts).post(alerts::create_alert),
        )
        .route(
            "/alerts/{id}",
            get(alerts::get_alert)
                .put(alerts::update_alert)
                .delete(alerts::delete_alert),
        )
}

/// Wraps `routes` with the not-found fallbacks, panic recovery, request
/// logging and CORS. Layers only cover routes registered before this call.
pub fn with_middleware(routes: Router<AppState>, expose_error_detail: bool) -> Router<AppState> {
    routes
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::route_not_found)
        .layer(CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
            error::panic_response(err, expose_error_detail)
        }))
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(CorsLayer::permissive())
}

pub fn router(state: AppState) -> Router {
    let expose = state.expose_error_detail;
    with_middleware(api_routes(), expose).with_state(state)
}
