//! Route definitions for the AirSense dashboard API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::session_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Stateless routes
        .nest("/aqi", aqi_routes(state.clone()))
        .route("/forecast", get(handlers::get_forecast))
        .nest("/areas", area_routes())
        .route("/sources", get(handlers::list_sources))
        .route("/policies", get(handlers::list_policies))
        .route("/trend", get(handlers::get_trend))
        // Session-backed routes - each call ticks the live walk
        .nest("/dashboard", dashboard_routes(state))
}

/// AQI classification routes, plus the session-backed live tick
fn aqi_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/classify", get(handlers::classify_aqi))
        .route("/bands", get(handlers::list_bands))
        .route(
            "/live/tick",
            post(handlers::live_tick)
                .route_layer(middleware::from_fn_with_state(state, session_middleware)),
        )
}

/// Reference area routes
fn area_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_areas))
        .route("/safe", get(handlers::list_safe_zones))
}

/// Dashboard routes (session)
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/citizen", get(handlers::citizen_dashboard))
        .route("/government", get(handlers::government_dashboard))
        .route_layer(middleware::from_fn_with_state(state, session_middleware))
}

/// HTML page routes (session)
pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route_layer(middleware::from_fn_with_state(state, session_middleware))
}
