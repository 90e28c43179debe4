mod engine;
mod engine_config;
mod navigation_target_resolver;
mod sinks;

pub use engine::{NavAction, NavEngine};
pub use engine_config::{
    CONFIG_JSON_SCHEMA_V1, DEFAULT_MAX_HISTORICAL_LOOKBACK_DAYS, NavEngineConfig,
    NavEngineConfigJsonContractV1,
};
pub use sinks::{
    AnalyticsSink, HISTORICAL_NAVIGATION_EVENT, NavigationEvent, NavigationSink,
    NullAnalyticsSink, NullNavigationSink,
};
