use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::errors::AppError;
use crate::models::{Booking, BookingDraft, Game, TimeSlot};
use crate::services::booking::{self, BookingSummary};
use crate::state::AppState;

fn find_game(id: &str) -> Result<&'static Game, AppError> {
    catalog::find_game(id).ok_or_else(|| AppError::NotFound(format!("game {id}")))
}

// GET /api/games
pub async fn list_games() -> Json<&'static [Game]> {
    Json(catalog::games())
}

// GET /api/games/:id
pub async fn get_game(Path(id): Path<String>) -> Result<Json<&'static Game>, AppError> {
    find_game(&id).map(Json)
}

// GET /api/games/:id/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    game_id: &'static str,
    date: String,
    slots: Vec<TimeSlot>,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let game = find_game(&id)?;

    let slots = {
        let db = state.db()?;
        booking::available_slots(
            &db,
            &state.config.storage_key,
            state.clock.today(),
            &query.date,
        )?
    };

    Ok(Json(SlotsResponse {
        game_id: game.id,
        date: query.date,
        slots,
    }))
}

// POST /api/games/:id/bookings
#[derive(Serialize)]
pub struct CreateBookingResponse {
    booking: Booking,
    summary: BookingSummary,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let game = find_game(&id)?;

    let booking = {
        let db = state.db()?;
        booking::place_booking(
            &db,
            &state.config.storage_key,
            state.clock.as_ref(),
            game,
            &draft,
        )
        .inspect_err(|e| tracing::debug!(error = %e, game = game.name, "booking rejected"))?
    };

    let summary = booking::summarize(&booking);
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse { booking, summary }),
    ))
}
