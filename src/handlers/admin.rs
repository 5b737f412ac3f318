use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, StatusFilter};
use crate::services::admin::{AdminSession, BookingStats, StatusCounts};
use crate::services::format::{format_currency, format_date};
use crate::state::AppState;
use crate::store::BookingStore;

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    #[serde(flatten)]
    booking: Booking,
    status_label: &'static str,
    price_display: String,
    date_display: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            booking: b.clone(),
            status_label: b.status.label(),
            price_display: format_currency(u64::from(b.price.unwrap_or(0))),
            date_display: format_date(b.date),
        }
    }
}

#[derive(Serialize)]
pub struct BookingsResponse {
    filter: String,
    counts: StatusCounts,
    bookings: Vec<BookingRow>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, AppError> {
    let raw_filter = query.status.unwrap_or_else(|| "all".to_string());
    let filter = StatusFilter::parse(&raw_filter)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status filter: {raw_filter}")))?;

    let (counts, bookings) = {
        let db = state.db()?;
        let mut session = AdminSession::load(BookingStore::new(&db, &state.config.storage_key));
        session.set_filter(filter);
        let rows: Vec<BookingRow> = session.filtered().into_iter().map(BookingRow::from).collect();
        (session.counts(), rows)
    };

    Ok(Json(BookingsResponse {
        filter: raw_filter,
        counts,
        bookings,
    }))
}

// GET /api/admin/stats
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    stats: BookingStats,
    revenue_display: String,
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, AppError> {
    let stats = {
        let db = state.db()?;
        let session = AdminSession::load(BookingStore::new(&db, &state.config.storage_key));
        session.stats()
    };

    Ok(Json(StatsResponse {
        revenue_display: format_currency(stats.revenue),
        stats,
    }))
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let status = BookingStatus::parse(&body.status)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", body.status)))?;

    let updated = {
        let db = state.db()?;
        let mut session = AdminSession::load(BookingStore::new(&db, &state.config.storage_key));
        session.transition_status(&id, status, state.clock.now())?
    };

    if !updated {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    Ok(Json(serde_json::json!({
        "ok": true,
        "message": format!("Booking {}", status.label()),
    })))
}

// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = {
        let db = state.db()?;
        let mut session = AdminSession::load(BookingStore::new(&db, &state.config.storage_key));
        session.delete_booking(&id)?
    };

    if !deleted {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    Ok(Json(serde_json::json!({
        "ok": true,
        "message": "Booking deleted successfully",
    })))
}
