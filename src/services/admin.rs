use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Booking, BookingStatus, StatusFilter};
use crate::store::BookingStore;

/// Revenue assumed for a confirmed booking stored without a price.
pub const DEFAULT_BOOKING_PRICE: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub revenue: u64,
}

/// Keeps input order.
pub fn filter_by_status(bookings: &[Booking], filter: StatusFilter) -> Vec<&Booking> {
    bookings.iter().filter(|b| filter.matches(b.status)).collect()
}

fn count(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

pub fn counts_by_status(bookings: &[Booking]) -> StatusCounts {
    StatusCounts {
        all: bookings.len(),
        pending: count(bookings, BookingStatus::Pending),
        confirmed: count(bookings, BookingStatus::Confirmed),
        cancelled: count(bookings, BookingStatus::Cancelled),
    }
}

pub fn aggregate_stats(bookings: &[Booking]) -> BookingStats {
    let revenue = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| u64::from(b.price.unwrap_or(DEFAULT_BOOKING_PRICE)))
        .sum();

    BookingStats {
        total: bookings.len(),
        confirmed: count(bookings, BookingStatus::Confirmed),
        pending: count(bookings, BookingStatus::Pending),
        revenue,
    }
}

/// One admin view of the store: the bookings as loaded plus the filter
/// currently applied. Mutations write the whole list back.
pub struct AdminSession<'a> {
    store: BookingStore<'a>,
    bookings: Vec<Booking>,
    filter: StatusFilter,
}

impl<'a> AdminSession<'a> {
    pub fn load(store: BookingStore<'a>) -> Self {
        let bookings = store.load_all();
        Self {
            store,
            bookings,
            filter: StatusFilter::All,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filtered(&self) -> Vec<&Booking> {
        filter_by_status(&self.bookings, self.filter)
    }

    pub fn counts(&self) -> StatusCounts {
        counts_by_status(&self.bookings)
    }

    pub fn stats(&self) -> BookingStats {
        aggregate_stats(&self.bookings)
    }

    /// Sets `status` on the booking with `id`. Any status may replace any
    /// other. Returns `Ok(false)` without writing when the id is unknown.
    pub fn transition_status(
        &mut self,
        id: &str,
        status: BookingStatus,
        now: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };

        let previous = booking.status;
        booking.status = status;
        booking.updated_at = Some(now);

        self.store.save_all(&self.bookings)?;
        tracing::info!(
            booking_id = id,
            from = previous.as_str(),
            to = status.as_str(),
            "booking status changed"
        );
        Ok(true)
    }

    /// Returns `Ok(false)` without writing when the id is unknown.
    pub fn delete_booking(&mut self, id: &str) -> anyhow::Result<bool> {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        if self.bookings.len() == before {
            return Ok(false);
        }

        self.store.save_all(&self.bookings)?;
        tracing::info!(booking_id = id, "booking deleted");
        Ok(true)
    }
}
