use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::db::queries;
use crate::models::Booking;
use crate::services::slots;

pub const DEFAULT_STORAGE_KEY: &str = "bookings";

const ID_SUFFIX_LEN: usize = 9;

/// Everything the storage slot holds, split into records that fit
/// [`Booking`] and records that don't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredBookings {
    pub bookings: Vec<Booking>,
    /// Valid JSON that doesn't fit `Booking` (an unknown status, say).
    /// Never shown, never dropped on save, and still counted as holding
    /// its slot unless it is cancelled.
    pub unrecognized: Vec<Value>,
}

impl StoredBookings {
    /// Slot labels held on `date` by any non-cancelled record.
    pub fn booked_slots(&self, date: NaiveDate) -> Vec<&str> {
        let day = date.format("%Y-%m-%d").to_string();
        let mut held = slots::booked_slots(&self.bookings, date);
        held.extend(self.unrecognized.iter().filter_map(|raw| raw_slot_hold(raw, &day)));
        held
    }
}

impl From<Vec<Booking>> for StoredBookings {
    fn from(bookings: Vec<Booking>) -> Self {
        Self {
            bookings,
            unrecognized: Vec::new(),
        }
    }
}

fn raw_slot_hold<'v>(raw: &'v Value, day: &str) -> Option<&'v str> {
    let date = raw.get("date")?.as_str()?;
    let time_slot = raw.get("timeSlot")?.as_str()?;
    let cancelled = raw.get("status").and_then(Value::as_str) == Some("cancelled");
    (date == day && !cancelled).then_some(time_slot)
}

fn parse_record(raw: &Value) -> Result<Booking, serde_json::Error> {
    Booking::deserialize(raw)
}

/// The persisted booking collection. Every read returns the whole
/// collection and every write replaces it.
pub struct BookingStore<'a> {
    conn: &'a Connection,
    key: &'a str,
}

impl<'a> BookingStore<'a> {
    pub fn new(conn: &'a Connection, key: &'a str) -> Self {
        Self { conn, key }
    }

    /// Raw records, or none when the slot is missing, unreadable or not a
    /// JSON array.
    fn read_records(&self) -> Vec<Value> {
        let raw = match queries::get_item(self.conn, self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = self.key, "booking storage unavailable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, key = self.key, "stored bookings unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Reads the slot record by record; one odd record never hides the
    /// others.
    pub fn load(&self) -> StoredBookings {
        let mut stored = StoredBookings::default();
        for raw in self.read_records() {
            match parse_record(&raw) {
                Ok(booking) => stored.bookings.push(booking),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        id = raw.get("id").and_then(serde_json::Value::as_str).unwrap_or("-"),
                        "unrecognized booking record, keeping it as stored"
                    );
                    stored.unrecognized.push(raw);
                }
            }
        }
        stored
    }

    /// Returns the stored bookings that fit [`Booking`]; empty when the
    /// slot is missing, unreadable or not an array.
    pub fn load_all(&self) -> Vec<Booking> {
        self.load().bookings
    }

    /// Replaces the collection with `bookings`. Unrecognized records
    /// already in the slot are written back after them unchanged.
    pub fn save_all(&self, bookings: &[Booking]) -> anyhow::Result<()> {
        let kept: Vec<Value> = self
            .read_records()
            .into_iter()
            .filter(|raw| parse_record(raw).is_err())
            .collect();

        let mut records = bookings
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .context("failed to serialize bookings")?;
        let kept_count = kept.len();
        records.extend(kept);

        let json = serde_json::to_string(&records).context("failed to serialize bookings")?;
        queries::set_item(self.conn, self.key, &json)
            .with_context(|| format!("failed to write storage slot: {}", self.key))?;
        tracing::debug!(count = bookings.len(), kept = kept_count, "saved bookings");
        Ok(())
    }
}

/// Millisecond timestamp followed by a short random suffix.
pub fn generate_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}{}", now.timestamp_millis(), &random[..ID_SUFFIX_LEN])
}
