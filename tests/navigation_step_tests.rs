use chrono::{DateTime, TimeDelta, Utc};
use timenav_rs::api::{
    NavAction, NavEngine, NavEngineConfig, NavigationEvent, NullAnalyticsSink, NullNavigationSink,
};
use timenav_rs::core::{FixedClock, NavigationDirection, NavigationTarget, TimeWindowSnapshot};

fn at(value: &str) -> DateTime<Utc> {
    value.parse().expect("timestamp")
}

fn build_engine(
    now: DateTime<Utc>,
    lookback_days: u32,
) -> NavEngine<FixedClock, NullNavigationSink, NullAnalyticsSink> {
    NavEngine::new(
        FixedClock(now),
        NullNavigationSink::default(),
        NullAnalyticsSink::default(),
        NavEngineConfig::new(lookback_days),
    )
    .expect("engine init")
}

fn historical_snapshot(end: DateTime<Utc>) -> TimeWindowSnapshot {
    TimeWindowSnapshot::new()
        .with_hourly(true)
        .with_start_datetime(end - TimeDelta::hours(24))
        .with_end_datetime(end)
        .with_url_datetime(end)
}

#[test]
fn backward_emits_target_one_day_earlier() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = now - TimeDelta::days(2);

    engine.step_backward(&historical_snapshot(end));

    assert_eq!(
        engine.navigation().last_target,
        Some(NavigationTarget::At(end - TimeDelta::hours(24)))
    );
    assert_eq!(
        engine.analytics().events,
        vec![NavigationEvent::new(NavigationDirection::Backward)]
    );
}

#[test]
fn backward_at_limit_emits_nothing() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = now - TimeDelta::days(30) + TimeDelta::hours(1);

    engine.step_backward(&historical_snapshot(end));

    assert_eq!(engine.navigation().navigate_count, 0);
    assert!(engine.analytics().events.is_empty());
}

#[test]
fn backward_without_end_datetime_emits_nothing() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let snapshot = TimeWindowSnapshot::new().with_hourly(true).with_url_datetime(now);

    engine.step_backward(&snapshot);

    assert_eq!(engine.navigation().navigate_count, 0);
    assert!(engine.analytics().events.is_empty());
}

#[test]
fn forward_snaps_to_latest_at_recent_boundary() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = now - TimeDelta::hours(24);

    engine.step_forward(&historical_snapshot(end));

    assert_eq!(
        engine.navigation().last_target,
        Some(NavigationTarget::Latest)
    );
    assert_eq!(
        engine.analytics().events,
        vec![NavigationEvent::new(NavigationDirection::Forward)]
    );
}

#[test]
fn forward_below_boundary_emits_explicit_target() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = now - TimeDelta::hours(48);

    engine.step_forward(&historical_snapshot(end));

    assert_eq!(
        engine.navigation().last_target,
        Some(NavigationTarget::At(now - TimeDelta::hours(24)))
    );
}

#[test]
fn forward_while_latest_emits_nothing() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    // Latest window shown: end is known but no url selection exists.
    let snapshot = TimeWindowSnapshot::new()
        .with_hourly(true)
        .with_end_datetime(now);

    engine.step_forward(&snapshot);

    assert_eq!(engine.navigation().navigate_count, 0);
    assert!(engine.analytics().events.is_empty());
}

#[test]
fn emitted_explicit_target_encodes_as_iso8601() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = at("2024-08-30T02:00:00Z");

    engine.step_backward(&historical_snapshot(end));

    let target = engine.navigation().last_target.expect("emission");
    assert_eq!(target.as_query_value(), "2024-08-29T02:00:00.000Z");
}

#[test]
fn actions_dispatch_to_the_matching_operation() {
    let now = at("2024-09-02T02:00:00Z");
    let mut engine = build_engine(now, 30);
    let end = now - TimeDelta::days(5);
    let snapshot = historical_snapshot(end);

    engine.handle_action(NavAction::StepBackward, &snapshot);
    engine.handle_action(NavAction::StepForward, &snapshot);
    engine.handle_action(NavAction::JumpToLatest, &snapshot);

    assert_eq!(engine.navigation().navigate_count, 3);
    assert_eq!(
        engine.analytics().events,
        vec![
            NavigationEvent::new(NavigationDirection::Backward),
            NavigationEvent::new(NavigationDirection::Forward),
            NavigationEvent::new(NavigationDirection::Latest),
        ]
    );
}
