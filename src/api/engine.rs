use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Clock, DisplayState, NavigationDirection, NavigationTarget, TimeWindowSnapshot,
};
use crate::error::NavResult;

use super::navigation_target_resolver::{
    is_within_lookback_limit, resolve_backward_target, resolve_forward_target,
};
use super::{AnalyticsSink, NavEngineConfig, NavigationEvent, NavigationSink};

/// User input mapped onto the three navigation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    StepBackward,
    StepForward,
    JumpToLatest,
}

/// Historical time-window navigation engine.
///
/// Stateless between calls: every operation takes a fresh
/// [`TimeWindowSnapshot`] and only emits a requested target through the
/// navigation sink. Missing preconditions degrade to silent no-ops, so
/// controls disable themselves rather than fail.
pub struct NavEngine<C: Clock, N: NavigationSink, A: AnalyticsSink> {
    clock: C,
    navigation: N,
    analytics: A,
    config: NavEngineConfig,
}

impl<C: Clock, N: NavigationSink, A: AnalyticsSink> NavEngine<C, N, A> {
    pub fn new(clock: C, navigation: N, analytics: A, config: NavEngineConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            navigation,
            analytics,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> NavEngineConfig {
        self.config
    }

    #[must_use]
    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    #[must_use]
    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    /// Whether one more backward step stays inside the lookback limit.
    ///
    /// With no explicit selection the guard passes unconditionally: the
    /// limit only applies once the host has navigated somewhere.
    #[must_use]
    pub fn can_step_backward(&self, snapshot: &TimeWindowSnapshot) -> bool {
        match snapshot.url_datetime {
            None => true,
            Some(reference) => is_within_lookback_limit(
                reference,
                self.clock.now_utc(),
                self.config.max_historical_lookback_days,
            ),
        }
    }

    /// Requests the window one step back, unless the end is unknown or
    /// the lookback guard rejects the move.
    pub fn step_backward(&mut self, snapshot: &TimeWindowSnapshot) {
        let Some(end) = snapshot.end_datetime else {
            return;
        };
        if !self.can_step_backward(snapshot) {
            debug!(
                lookback_days = self.config.max_historical_lookback_days,
                "backward step rejected at lookback limit"
            );
            return;
        }
        self.analytics
            .track(NavigationEvent::new(NavigationDirection::Backward));
        let target = resolve_backward_target(end);
        self.navigation.navigate(NavigationTarget::At(target));
    }

    /// Requests the window one step forward, snapping to the latest
    /// sentinel once the target reaches `now - 24h`. No-op while the
    /// latest window is already shown.
    pub fn step_forward(&mut self, snapshot: &TimeWindowSnapshot) {
        let (Some(end), Some(_)) = (snapshot.end_datetime, snapshot.url_datetime) else {
            return;
        };
        self.analytics
            .track(NavigationEvent::new(NavigationDirection::Forward));
        let target = resolve_forward_target(end, self.clock.now_utc());
        self.navigation.navigate(target);
    }

    /// Requests the latest live window. Always callable; idempotent.
    pub fn jump_to_latest(&mut self) {
        self.analytics
            .track(NavigationEvent::new(NavigationDirection::Latest));
        self.navigation.navigate(NavigationTarget::Latest);
    }

    pub fn handle_action(&mut self, action: NavAction, snapshot: &TimeWindowSnapshot) {
        match action {
            NavAction::StepBackward => self.step_backward(snapshot),
            NavAction::StepForward => self.step_forward(snapshot),
            NavAction::JumpToLatest => self.jump_to_latest(),
        }
    }

    /// Display state of the header for a snapshot.
    #[must_use]
    pub fn display_state(&self, snapshot: &TimeWindowSnapshot) -> DisplayState {
        DisplayState::resolve(snapshot, self.can_step_backward(snapshot))
    }
}
