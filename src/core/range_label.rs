use chrono::{DateTime, Utc};

/// Formats the range label shown when hourly controls are suppressed.
///
/// Plain UTC text; locale-aware formatting is a host concern.
#[must_use]
pub fn format_range_label(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        return format!(
            "{} {}–{} UTC",
            start.format("%-d %b %Y"),
            start.format("%H:%M"),
            end.format("%H:%M")
        );
    }
    format!(
        "{} – {} UTC",
        start.format("%-d %b %Y %H:%M"),
        end.format("%-d %b %Y %H:%M")
    )
}
