use chrono::{DateTime, Utc};
use timenav_rs::api::{
    NavEngine, NavEngineConfig, NavigationEvent, NullAnalyticsSink, NullNavigationSink,
};
use timenav_rs::core::{FixedClock, NavigationDirection, NavigationTarget};

fn build_engine() -> NavEngine<FixedClock, NullNavigationSink, NullAnalyticsSink> {
    let now: DateTime<Utc> = "2024-09-02T02:00:00Z".parse().expect("timestamp");
    NavEngine::new(
        FixedClock(now),
        NullNavigationSink::default(),
        NullAnalyticsSink::default(),
        NavEngineConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn jump_to_latest_emits_the_sentinel() {
    let mut engine = build_engine();

    engine.jump_to_latest();

    assert_eq!(
        engine.navigation().last_target,
        Some(NavigationTarget::Latest)
    );
    assert_eq!(
        engine.analytics().events,
        vec![NavigationEvent::new(NavigationDirection::Latest)]
    );
}

#[test]
fn repeated_jumps_keep_emitting_the_same_sentinel() {
    let mut engine = build_engine();

    for _ in 0..5 {
        engine.jump_to_latest();
    }

    assert_eq!(engine.navigation().navigate_count, 5);
    assert_eq!(
        engine.navigation().last_target,
        Some(NavigationTarget::Latest)
    );
    assert!(
        engine
            .analytics()
            .events
            .iter()
            .all(|event| event.direction == NavigationDirection::Latest)
    );
}

#[test]
fn sentinel_wire_form_is_the_empty_string() {
    let mut engine = build_engine();

    engine.jump_to_latest();

    let target = engine.navigation().last_target.expect("emission");
    assert_eq!(target.as_query_value(), "");
}
