use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/games", get(handlers::games::list_games))
        .route("/api/games/:id", get(handlers::games::get_game))
        .route("/api/games/:id/slots", get(handlers::games::get_slots))
        .route(
            "/api/games/:id/bookings",
            post(handlers::games::create_booking),
        )
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::admin::update_status),
        )
        .route(
            "/api/admin/bookings/:id",
            delete(handlers::admin::delete_booking),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
