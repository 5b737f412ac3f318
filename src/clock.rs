use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current time. Booking validation compares against
/// `today()`, so tests swap in a [`FixedClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of `now()` on the host's local clock.
    fn today(&self) -> NaiveDate {
        local_date(self.now())
    }
}

pub fn local_date(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_today_is_local_date() {
        // 23:30 UTC falls on a different calendar day in most zones east of UTC.
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.today(), now.with_timezone(&Local).date_naive());
    }

    #[test]
    fn test_system_clock_today_matches_now() {
        let clock = SystemClock;
        let before = local_date(Utc::now());
        let today = clock.today();
        let after = local_date(Utc::now());
        assert!(today == before || today == after);
    }
}
