use chrono::{DateTime, TimeDelta, Utc};

use crate::core::{NavigationTarget, step_size};

/// Backward guard: the probe sits one step BEFORE the candidate target,
/// so the reachable floor carries one extra day of slack past the
/// configured lookback. That headroom is intentional and load-bearing.
pub(super) fn is_within_lookback_limit(
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
    lookback_days: u32,
) -> bool {
    let probe = reference - step_size();
    let floor = now - TimeDelta::days(i64::from(lookback_days));
    probe >= floor
}

pub(super) fn resolve_backward_target(end: DateTime<Utc>) -> DateTime<Utc> {
    end - step_size()
}

/// Forward targets landing at or past `now - 24h` snap to the latest
/// sentinel rather than overshooting into a not-yet-complete window.
pub(super) fn resolve_forward_target(end: DateTime<Utc>, now: DateTime<Utc>) -> NavigationTarget {
    let candidate = end + step_size();
    let recent_boundary = now - step_size();
    if candidate >= recent_boundary {
        return NavigationTarget::Latest;
    }
    NavigationTarget::At(candidate)
}
