//! Expiry classification for inventory items.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The single calendar-date format items are entered and stored in,
/// e.g. `"Jan 05, 2025"`.
pub const EXPIRY_DATE_FORMAT: &str = "%b %d, %Y";

/// Items whose expiry is this many whole days away (or fewer) are urgent.
pub const SOON_THRESHOLD_DAYS: i64 = 1;

/// Classify an expiry-date string as urgent or not, relative to `now`.
///
/// The expiry instant is midnight UTC of the parsed date, and `days_left` is
/// the whole-day difference to `now` (truncating division, so already-expired
/// items land at zero or below). Returns `true` for "expires today",
/// "expires tomorrow", and "already expired".
///
/// Unparseable input classifies as *not expiring*. This fail-safe default is
/// deliberate and load-bearing: a malformed date must never be surfaced as an
/// error or flagged as urgent.
pub fn is_expiring_soon(expiry_text: &str, now: DateTime<Utc>) -> bool {
    let Ok(date) = NaiveDate::parse_from_str(expiry_text.trim(), EXPIRY_DATE_FORMAT) else {
        return false;
    };

    let expiry = date.and_time(NaiveTime::MIN).and_utc();

    let days_left = (expiry - now).num_days();
    days_left <= SOON_THRESHOLD_DAYS
}
