use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Default lookback ceiling, in whole days before the current instant.
pub const DEFAULT_MAX_HISTORICAL_LOOKBACK_DAYS: u32 = 30;

pub const CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Engine bootstrap configuration.
///
/// Serializable so hosts can inject the lookback ceiling at build or
/// config time without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
// Unknown fields must fail the bare parse so versioned envelopes fall
// through to the contract path in `from_json_compat_str`.
#[serde(deny_unknown_fields)]
pub struct NavEngineConfig {
    #[serde(default = "default_max_historical_lookback_days")]
    pub max_historical_lookback_days: u32,
}

/// Versioned JSON envelope for [`NavEngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: NavEngineConfig,
}

impl NavEngineConfig {
    #[must_use]
    pub fn new(max_historical_lookback_days: u32) -> Self {
        Self {
            max_historical_lookback_days,
        }
    }

    pub fn validate(&self) -> NavResult<()> {
        if self.max_historical_lookback_days == 0 {
            return Err(NavError::InvalidConfig(
                "max_historical_lookback_days must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> NavResult<String> {
        let payload = NavEngineConfigJsonContractV1 {
            schema_version: CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| NavError::InvalidPayload(format!("failed to serialize config: {e}")))
    }

    /// Accepts either a bare config object or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> NavResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return Ok(config);
        }
        let payload: NavEngineConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| NavError::InvalidPayload(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != CONFIG_JSON_SCHEMA_V1 {
            return Err(NavError::InvalidPayload(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl Default for NavEngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORICAL_LOOKBACK_DAYS)
    }
}

fn default_max_historical_lookback_days() -> u32 {
    DEFAULT_MAX_HISTORICAL_LOOKBACK_DAYS
}
