use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::timestamp;

/// A stored reservation. Field order follows the stored JSON layout so a
/// save after a load reproduces the same bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub game_id: String,
    pub game_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: BookingStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Frozen at booking time. Older records may not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Capitalized form shown on badges and in status-change messages.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// Admin list filter: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StatusFilter::All),
            other => BookingStatus::parse(other).map(StatusFilter::Only),
        }
    }

    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Raw booking form input, exactly as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub date: String,
    pub customer_name: String,
    pub customer_email: String,
    pub time_slot: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("Confirmed"), None);
        assert_eq!(BookingStatus::parse("archived"), None);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::parse("pending"),
            Some(StatusFilter::Only(BookingStatus::Pending))
        );
        assert_eq!(StatusFilter::parse("everything"), None);
    }

    #[test]
    fn test_deserialize_legacy_record_without_price() {
        let json = r#"{"id":"1760000000000abc123def","gameId":"2","gameName":"Badminton","customerName":"Asha","customerEmail":"asha@example.in","date":"2026-10-20","timeSlot":"07:00","status":"confirmed","createdAt":"2026-10-16T09:30:00.000Z"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.price, None);
        assert_eq!(booking.updated_at, None);
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(serde_json::to_string(&booking).unwrap(), json);
    }

    #[test]
    fn test_updated_booking_serializes_updated_at_last() {
        let json = r#"{"id":"x","gameId":"1","gameName":"Cricket","customerName":"Ravi","customerEmail":"ravi@example.in","date":"2026-11-01","timeSlot":"18:00","status":"cancelled","createdAt":"2026-10-16T09:30:00.000Z","price":2500,"updatedAt":"2026-10-17T11:00:00.000Z"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(serde_json::to_string(&booking).unwrap(), json);
    }

    #[test]
    fn test_draft_missing_fields_default() {
        let draft: BookingDraft = serde_json::from_str(r#"{"date":"2099-01-01"}"#).unwrap();
        assert_eq!(draft.customer_name, "");
        assert_eq!(draft.time_slot, None);
    }
}
