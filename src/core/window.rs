use chrono::{DateTime, Utc};

/// Point-in-time copy of the host's reactive window state.
///
/// The engine reads a fresh snapshot per request and never writes back;
/// the host owns the actual state transition after the navigation sink
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeWindowSnapshot {
    /// Start of the displayed window, when known.
    pub start_datetime: Option<DateTime<Utc>>,
    /// End of the displayed window, when known.
    pub end_datetime: Option<DateTime<Utc>>,
    /// End instant selected in the host route. Absent means the latest
    /// live window is shown.
    pub url_datetime: Option<DateTime<Utc>>,
    /// Whether the displayed granularity is hourly.
    pub is_hourly: bool,
}

impl TimeWindowSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_datetime(mut self, start: DateTime<Utc>) -> Self {
        self.start_datetime = Some(start);
        self
    }

    #[must_use]
    pub fn with_end_datetime(mut self, end: DateTime<Utc>) -> Self {
        self.end_datetime = Some(end);
        self
    }

    #[must_use]
    pub fn with_url_datetime(mut self, url: DateTime<Utc>) -> Self {
        self.url_datetime = Some(url);
        self
    }

    #[must_use]
    pub fn with_hourly(mut self, is_hourly: bool) -> Self {
        self.is_hourly = is_hourly;
        self
    }

    /// True when no explicit window is selected in the route.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.url_datetime.is_none()
    }
}
