use serde::{Deserialize, Serialize};

use super::TimeWindowSnapshot;

/// Display mode of the navigation header, resolved from one snapshot.
///
/// The navigation invariants hang off these four states instead of ad
/// hoc boolean guards, so control enablement stays centrally testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// No explicit window selected; the live window is shown.
    Latest,
    /// Historical window selected and the backward probe already sits
    /// below the lookback floor.
    HistoricalAtLimit,
    /// Historical window selected with room to move both ways.
    HistoricalMidRange,
    /// Non-hourly granularity with known bounds: controls are
    /// suppressed and only the formatted range label is shown.
    RangeLabelOnly,
}

impl DisplayState {
    /// Resolves the display state for a snapshot.
    ///
    /// `within_limit` is the backward-guard verdict for the same
    /// snapshot; it is passed in so resolution stays clock-free.
    #[must_use]
    pub fn resolve(snapshot: &TimeWindowSnapshot, within_limit: bool) -> Self {
        if !snapshot.is_hourly
            && snapshot.start_datetime.is_some()
            && snapshot.end_datetime.is_some()
        {
            return Self::RangeLabelOnly;
        }
        match snapshot.url_datetime {
            None => Self::Latest,
            Some(_) if within_limit => Self::HistoricalMidRange,
            Some(_) => Self::HistoricalAtLimit,
        }
    }

    /// Control enablement implied by this state.
    #[must_use]
    pub fn controls(self) -> ControlAvailability {
        match self {
            Self::Latest => ControlAvailability {
                backward_enabled: true,
                forward_enabled: false,
                latest_enabled: false,
            },
            Self::HistoricalAtLimit => ControlAvailability {
                backward_enabled: false,
                forward_enabled: true,
                latest_enabled: true,
            },
            Self::HistoricalMidRange => ControlAvailability {
                backward_enabled: true,
                forward_enabled: true,
                latest_enabled: true,
            },
            Self::RangeLabelOnly => ControlAvailability {
                backward_enabled: false,
                forward_enabled: false,
                latest_enabled: false,
            },
        }
    }
}

/// Enablement of the three navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAvailability {
    pub backward_enabled: bool,
    pub forward_enabled: bool,
    pub latest_enabled: bool,
}
