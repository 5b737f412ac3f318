use chrono::NaiveDate;

use crate::models::{Booking, BookingStatus, TimeSlot};
use crate::store::StoredBookings;

/// First and last bookable hour, inclusive.
pub const OPENING_HOUR: u32 = 6;
pub const CLOSING_HOUR: u32 = 23;

pub fn slot_labels() -> impl Iterator<Item = String> {
    (OPENING_HOUR..=CLOSING_HOUR).map(|hour| format!("{hour:02}:00"))
}

pub fn is_slot_label(time: &str) -> bool {
    slot_labels().any(|label| label == time)
}

/// Labels held by non-cancelled bookings on `date`.
pub fn booked_slots(bookings: &[Booking], date: NaiveDate) -> Vec<&str> {
    bookings
        .iter()
        .filter(|b| b.date == date && b.status != BookingStatus::Cancelled)
        .map(|b| b.time_slot.as_str())
        .collect()
}

pub fn is_slot_free(stored: &StoredBookings, date: NaiveDate, time: &str) -> bool {
    !stored.booked_slots(date).contains(&time)
}

/// The fixed hourly slots for `date` in ascending order, each marked
/// unavailable when a live booking holds it.
pub fn generate_time_slots(stored: &StoredBookings, date: NaiveDate) -> Vec<TimeSlot> {
    let booked = stored.booked_slots(date);
    let day = date.format("%Y-%m-%d").to_string();

    slot_labels()
        .map(|time| TimeSlot {
            id: format!("{day}-{time}"),
            available: !booked.contains(&time.as_str()),
            time,
        })
        .collect()
}
