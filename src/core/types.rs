use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Navigation step and forward snap tolerance: one 24-hour window.
pub const STEP_HOURS: i64 = 24;

/// The 24-hour step as a `TimeDelta`.
#[must_use]
pub fn step_size() -> TimeDelta {
    TimeDelta::hours(STEP_HOURS)
}

/// Outcome of a navigation request, handed to the navigation sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Explicit end-of-window instant, UTC.
    At(DateTime<Utc>),
    /// The live/most-recent window. Encodes as an empty query value.
    Latest,
}

impl NavigationTarget {
    /// Wire form consumed by host routing: ISO-8601 UTC for explicit
    /// targets, empty string for the latest sentinel.
    #[must_use]
    pub fn as_query_value(&self) -> String {
        match self {
            Self::At(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Latest => String::new(),
        }
    }

    #[must_use]
    pub fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

/// Direction tag carried on analytics events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Backward,
    Forward,
    Latest,
}
