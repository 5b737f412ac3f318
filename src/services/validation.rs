use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::BookingDraft;
use crate::services::slots;
use crate::store::StoredBookings;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField,

    #[error("Please select a time slot")]
    NoSlotSelected,

    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    #[error("Please enter a valid date")]
    InvalidDate,

    #[error("Please select a future date")]
    PastDate,

    #[error("Selected time slot is no longer available. Please choose another slot.")]
    SlotUnavailable,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parses an ISO `YYYY-MM-DD` date and rejects days before `today`.
pub fn parse_booking_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)?;
    if date < today {
        return Err(ValidationError::PastDate);
    }
    Ok(date)
}

/// Checks a draft against `stored`, which must be a fresh read of the
/// store. The first failing check wins.
pub fn validate(
    draft: &BookingDraft,
    stored: &StoredBookings,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    let name = draft.customer_name.trim();
    let email = draft.customer_email.trim();

    if draft.date.trim().is_empty() || name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let time_slot = match draft.time_slot.as_deref() {
        Some(slot) if slots::is_slot_label(slot) => slot,
        _ => return Err(ValidationError::NoSlotSelected),
    };

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    let date = parse_booking_date(&draft.date, today)?;

    if !slots::is_slot_free(stored, date, time_slot) {
        return Err(ValidationError::SlotUnavailable);
    }

    Ok(())
}
