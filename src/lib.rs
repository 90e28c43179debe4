//! timenav-rs: historical time-window navigation engine.
//!
//! This crate computes backward/forward/latest navigation targets for a
//! 24-hour chart window against a configured lookback limit. It emits
//! requested targets to host-supplied sinks and never owns window state
//! itself.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{NavEngine, NavEngineConfig};
pub use error::{NavError, NavResult};
