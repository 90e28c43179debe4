use chrono::{DateTime, Utc};

/// Substitutable wall-clock source.
///
/// Navigation boundaries are all computed relative to "now", so the
/// clock is injected rather than read ambiently.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System UTC clock used by production hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for deterministic tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
