use jiff::Timestamp;

/// Formats a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2025-01-01T00:30:00.000Z`.
pub fn iso8601(ts: Timestamp) -> String {
    format!("{:.3}", ts)
}
