//! Browser clock backed by `js_sys::Date`.
use chrono::{DateTime, Utc};
use cinemogul_game::Clock;

/// Clock reading the JS date, usable from wasm without `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}
