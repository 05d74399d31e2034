// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use documan::application::ports::time::Clock;

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 9, 30, 0).unwrap()
}

#[derive(Clone, Copy, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
