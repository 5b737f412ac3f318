use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use crate::clock::Clock;
use crate::models::{Booking, BookingDraft, BookingStatus, Game, TimeSlot};
use crate::services::format::{format_currency, format_date};
use crate::services::slots;
use crate::services::validation::{self, ValidationError};
use crate::store::{self, BookingStore};

/// Slots for the date a customer picked. Past or malformed dates are
/// rejected before any slot is offered.
pub fn available_slots(
    conn: &Connection,
    storage_key: &str,
    today: NaiveDate,
    raw_date: &str,
) -> Result<Vec<TimeSlot>, ValidationError> {
    if raw_date.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    let date = validation::parse_booking_date(raw_date, today)?;
    let stored = BookingStore::new(conn, storage_key).load();
    Ok(slots::generate_time_slots(&stored, date))
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceBookingError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Validates `draft` against a fresh read of the store and, if it passes,
/// records a confirmed booking for `game`.
pub fn place_booking(
    conn: &Connection,
    storage_key: &str,
    clock: &dyn Clock,
    game: &Game,
    draft: &BookingDraft,
) -> Result<Booking, PlaceBookingError> {
    let store = BookingStore::new(conn, storage_key);
    let stored = store.load();

    validation::validate(draft, &stored, clock.today())?;

    // validate() has already checked both of these
    let date = validation::parse_booking_date(&draft.date, clock.today())?;
    let time_slot = draft
        .time_slot
        .clone()
        .ok_or(ValidationError::NoSlotSelected)?;

    let now = clock.now();
    let booking = Booking {
        id: store::generate_id(now),
        game_id: game.id.to_string(),
        game_name: game.name.to_string(),
        customer_name: draft.customer_name.trim().to_string(),
        customer_email: draft.customer_email.trim().to_string(),
        date,
        time_slot,
        status: BookingStatus::Confirmed,
        created_at: now,
        price: Some(game.price),
        updated_at: None,
    };

    let mut bookings = stored.bookings;
    bookings.push(booking.clone());
    store.save_all(&bookings)?;

    tracing::info!(
        booking_id = %booking.id,
        game = game.name,
        date = %booking.date,
        slot = %booking.time_slot,
        "booking confirmed"
    );

    Ok(booking)
}

/// Human-readable confirmation shown after a booking is placed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub game: String,
    pub date: String,
    pub time: String,
    pub customer: String,
    pub email: String,
    pub total_amount: String,
}

pub fn summarize(booking: &Booking) -> BookingSummary {
    BookingSummary {
        game: booking.game_name.clone(),
        date: format_date(booking.date),
        time: booking.time_slot.clone(),
        customer: booking.customer_name.clone(),
        email: booking.customer_email.clone(),
        total_amount: format_currency(u64::from(booking.price.unwrap_or(0))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clock::FixedClock;
    use crate::db;
    use crate::db::queries;
    use crate::store::DEFAULT_STORAGE_KEY;
    use chrono::{TimeZone, Utc};

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap())
    }

    fn draft(date: &str, slot: &str) -> BookingDraft {
        BookingDraft {
            date: date.to_string(),
            customer_name: "  Asha Rao ".to_string(),
            customer_email: " asha@example.in ".to_string(),
            time_slot: Some(slot.to_string()),
        }
    }

    #[test]
    fn test_place_booking_records_confirmed() {
        let conn = setup_db();
        let game = catalog::find_game("1").unwrap();
        let booking =
            place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), game, &draft("2099-06-01", "10:00"))
                .unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.price, Some(2500));
        assert_eq!(booking.game_name, "Cricket");
        assert_eq!(booking.customer_name, "Asha Rao");
        assert_eq!(booking.customer_email, "asha@example.in");
        assert_eq!(booking.created_at, clock().now);
        assert_eq!(booking.updated_at, None);

        let stored = BookingStore::new(&conn, DEFAULT_STORAGE_KEY).load_all();
        assert_eq!(stored, vec![booking]);
    }

    #[test]
    fn test_double_booking_rejected() {
        let conn = setup_db();
        let game = catalog::find_game("2").unwrap();
        place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), game, &draft("2099-06-01", "10:00"))
            .unwrap();

        // A different game still competes for the same slot.
        let other = catalog::find_game("3").unwrap();
        let err =
            place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), other, &draft("2099-06-01", "10:00"))
                .unwrap_err();
        assert!(matches!(
            err,
            PlaceBookingError::Invalid(ValidationError::SlotUnavailable)
        ));
        assert_eq!(BookingStore::new(&conn, DEFAULT_STORAGE_KEY).load_all().len(), 1);
    }

    #[test]
    fn test_unrecognized_record_does_not_unlock_store() {
        let conn = setup_db();
        let seeded = r#"[{"id":"a","gameId":"1","gameName":"Cricket","customerName":"Ravi","customerEmail":"ravi@example.in","date":"2099-06-01","timeSlot":"10:00","status":"confirmed","createdAt":"2026-10-16T09:30:00.000Z","price":2500},{"id":"b","gameId":"2","gameName":"Badminton","customerName":"Asha","customerEmail":"asha@example.in","date":"2099-06-01","timeSlot":"11:00","status":"archived","createdAt":"2026-10-16T09:31:00.000Z","price":800}]"#;
        queries::set_item(&conn, DEFAULT_STORAGE_KEY, seeded).unwrap();

        let futsal = catalog::find_game("3").unwrap();
        let err =
            place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), futsal, &draft("2099-06-01", "10:00"))
                .unwrap_err();
        assert!(matches!(
            err,
            PlaceBookingError::Invalid(ValidationError::SlotUnavailable)
        ));

        // The archived record still holds 11:00.
        let err =
            place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), futsal, &draft("2099-06-01", "11:00"))
                .unwrap_err();
        assert!(matches!(
            err,
            PlaceBookingError::Invalid(ValidationError::SlotUnavailable)
        ));
        assert_eq!(
            queries::get_item(&conn, DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some(seeded)
        );

        // A booking that does go through keeps both existing records.
        place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), futsal, &draft("2099-06-01", "12:00"))
            .unwrap();
        let stored = BookingStore::new(&conn, DEFAULT_STORAGE_KEY).load();
        let ids: Vec<&str> = stored.bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids[0], "a");
        assert_eq!(ids.len(), 2);
        assert_eq!(stored.unrecognized.len(), 1);
        assert_eq!(stored.unrecognized[0]["id"], "b");
    }

    #[test]
    fn test_rejected_draft_is_not_saved() {
        let conn = setup_db();
        let game = catalog::find_game("2").unwrap();
        let mut bad = draft("2099-06-01", "10:00");
        bad.customer_email = "asha".to_string();
        assert!(place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), game, &bad).is_err());
        assert!(BookingStore::new(&conn, DEFAULT_STORAGE_KEY).load_all().is_empty());
    }

    #[test]
    fn test_available_slots_reflects_bookings() {
        let conn = setup_db();
        let game = catalog::find_game("6").unwrap();
        place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), game, &draft("2099-06-01", "10:00"))
            .unwrap();

        let slots =
            available_slots(&conn, DEFAULT_STORAGE_KEY, clock().today(), "2099-06-01").unwrap();
        let taken: Vec<&str> = slots
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.time.as_str())
            .collect();
        assert_eq!(taken, vec!["10:00"]);
    }

    #[test]
    fn test_available_slots_rejects_past_and_empty_dates() {
        let conn = setup_db();
        assert_eq!(
            available_slots(&conn, DEFAULT_STORAGE_KEY, clock().today(), "2026-10-15"),
            Err(ValidationError::PastDate)
        );
        assert_eq!(
            available_slots(&conn, DEFAULT_STORAGE_KEY, clock().today(), ""),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            available_slots(&conn, DEFAULT_STORAGE_KEY, clock().today(), "tomorrow"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_summarize() {
        let conn = setup_db();
        let game = catalog::find_game("1").unwrap();
        let booking =
            place_booking(&conn, DEFAULT_STORAGE_KEY, &clock(), game, &draft("2099-06-01", "10:00"))
                .unwrap();
        let summary = summarize(&booking);
        assert_eq!(summary.date, "1 June 2099");
        assert_eq!(summary.total_amount, "₹2,500");
        assert_eq!(summary.customer, "Asha Rao");
    }
}
