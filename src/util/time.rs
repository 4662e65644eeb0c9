use chrono::{DateTime, Utc};

/// Convert a ClickUp millisecond-epoch string (e.g. `"1567780450202"`) into a
/// UTC timestamp.
pub fn from_millis(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let millis: i64 = raw?.trim().parse().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}
