//! Sources of "now" for date calculations.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the current instant, in local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// The current calendar day. Time of day is ignored.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Fix the clock at midnight of `date`.
    pub fn on_date(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today_drops_time() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 23).unwrap();
        let clock = FixedClock::at(date.and_hms_opt(23, 59, 59).unwrap());
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_fixed_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::on_date(date);
        assert_eq!(clock.now(), date.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
