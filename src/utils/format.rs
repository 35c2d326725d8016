use chrono::{DateTime, Utc};

/// Placeholder shown when a timestamp is missing or cannot be represented.
pub const UNKNOWN: &str = "Unknown";

// Epoch values at or above this are milliseconds (year 5138 in seconds).
const MILLIS_THRESHOLD: f64 = 1e11;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert an epoch value in seconds or milliseconds into a UTC datetime.
///
/// Zero is treated as unset, matching exports that write `0` for missing dates.
pub fn epoch_to_datetime(epoch: f64) -> Option<DateTime<Utc>> {
    if !epoch.is_finite() || epoch == 0.0 {
        return None;
    }

    let millis = if epoch.abs() >= MILLIS_THRESHOLD {
        epoch
    } else {
        epoch * 1000.0
    };

    DateTime::from_timestamp_millis(millis.round() as i64)
}

/// Format an epoch value, returning `None` when it cannot be represented
pub fn format_epoch(epoch: f64) -> Option<String> {
    epoch_to_datetime(epoch).map(|dt| dt.format(DATE_FORMAT).to_string())
}

/// Format an optional epoch value, falling back to [`UNKNOWN`]
pub fn format_timestamp(epoch: Option<f64>) -> String {
    epoch
        .and_then(format_epoch)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn format_token_count(count: u64) -> String {
    count.to_string()
}

/// Format a statistic that should be a whole number but arrived as JSON float
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_seconds(value: f64) -> String {
    format!("{:.2}s", value)
}

pub fn format_rate(value: f64) -> String {
    format!("{:.2}", value)
}
