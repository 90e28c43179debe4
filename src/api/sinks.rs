use serde::{Deserialize, Serialize};

use crate::core::{NavigationDirection, NavigationTarget};

/// Host event name under which navigation analytics are reported.
pub const HISTORICAL_NAVIGATION_EVENT: &str = "historical_navigation";

/// Payload attached to [`HISTORICAL_NAVIGATION_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub direction: NavigationDirection,
}

impl NavigationEvent {
    #[must_use]
    pub fn new(direction: NavigationDirection) -> Self {
        Self { direction }
    }
}

/// Sole mutation channel back into host routing state.
pub trait NavigationSink {
    fn navigate(&mut self, target: NavigationTarget);
}

/// Fire-and-forget analytics emitter. Implementations must not block
/// navigation; transport failures are not observable to the engine.
pub trait AnalyticsSink {
    fn track(&mut self, event: NavigationEvent);
}

/// No-op navigation sink used by tests and headless engine usage.
///
/// It still records the last emission so tests can assert on the exact
/// target (or its absence) without a real router behind it.
#[derive(Debug, Default)]
pub struct NullNavigationSink {
    pub last_target: Option<NavigationTarget>,
    pub navigate_count: usize,
}

impl NavigationSink for NullNavigationSink {
    fn navigate(&mut self, target: NavigationTarget) {
        self.last_target = Some(target);
        self.navigate_count += 1;
    }
}

/// No-op analytics sink that keeps the emitted events for inspection.
#[derive(Debug, Default)]
pub struct NullAnalyticsSink {
    pub events: Vec<NavigationEvent>,
}

impl AnalyticsSink for NullAnalyticsSink {
    fn track(&mut self, event: NavigationEvent) {
        self.events.push(event);
    }
}
