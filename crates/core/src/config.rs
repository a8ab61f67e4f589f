//! Simulated backend configuration.
//!
//! Each operation has its own latency and failure probability. Defaults
//! reproduce the reference console; JSON and environment overrides exist so
//! demos and tests can tune or disable the simulation.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::{Error, Result};
use crate::service::Operation;

/// Latency and failure probability of one simulated operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationProfile {
    pub latency_ms: u64,
    /// Probability in [0, 1] that an invocation fails
    pub failure_rate: f64,
}

impl OperationProfile {
    pub fn new(latency_ms: u64, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Configuration of the simulated lead service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    pub load: OperationProfile,
    pub retry: OperationProfile,
    pub update: OperationProfile,
    pub convert: OperationProfile,
    /// Seed for the failure RNG; `None` seeds from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            load: OperationProfile::new(DEFAULT_LOAD_LATENCY_MS, DEFAULT_LOAD_FAILURE_RATE),
            retry: OperationProfile::new(DEFAULT_RETRY_LATENCY_MS, DEFAULT_LOAD_FAILURE_RATE),
            update: OperationProfile::new(DEFAULT_UPDATE_LATENCY_MS, DEFAULT_UPDATE_FAILURE_RATE),
            convert: OperationProfile::new(
                DEFAULT_CONVERT_LATENCY_MS,
                DEFAULT_CONVERT_FAILURE_RATE,
            ),
            seed: None,
        }
    }
}

impl ServiceConfig {
    pub fn profile(&self, operation: Operation) -> &OperationProfile {
        match operation {
            Operation::Load => &self.load,
            Operation::Retry => &self.retry,
            Operation::Update => &self.update,
            Operation::Convert => &self.convert,
        }
    }

    fn profile_mut(&mut self, operation: Operation) -> &mut OperationProfile {
        match operation {
            Operation::Load => &mut self.load,
            Operation::Retry => &mut self.retry,
            Operation::Update => &mut self.update,
            Operation::Convert => &mut self.convert,
        }
    }

    /// Same timings as the default, but no operation ever fails.
    pub fn reliable() -> Self {
        let mut config = Self::default();
        for operation in Operation::ALL {
            config.profile_mut(operation).failure_rate = 0.0;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        for operation in Operation::ALL {
            let rate = self.profile(operation).failure_rate;
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::Config(format!(
                    "{} failure rate {} is outside [0, 1]",
                    operation, rate
                )));
            }
        }
        Ok(())
    }

    /// Parses a JSON document; missing operations keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `SELLER_CONSOLE_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps variable names to values.
    ///
    /// Recognized keys are `SELLER_CONSOLE_{OP}_LATENCY_MS`,
    /// `SELLER_CONSOLE_{OP}_FAILURE_RATE` (OP is LOAD, RETRY, UPDATE or
    /// CONVERT) and `SELLER_CONSOLE_SEED`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        for operation in Operation::ALL {
            let op = operation.as_str().to_uppercase();
            let latency_key = format!("{}{}_LATENCY_MS", ENV_PREFIX, op);
            let rate_key = format!("{}{}_FAILURE_RATE", ENV_PREFIX, op);

            if let Some(latency_ms) = parse_var::<u64, _>(&lookup, &latency_key)? {
                config.profile_mut(operation).latency_ms = latency_ms;
            }
            if let Some(rate) = parse_var::<f64, _>(&lookup, &rate_key)? {
                config.profile_mut(operation).failure_rate = rate;
            }
        }

        config.seed = parse_var::<u64, _>(&lookup, &format!("{}SEED", ENV_PREFIX))?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{}='{}' could not be parsed", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_reference_console() {
        let config = ServiceConfig::default();
        assert_eq!(config.load.latency(), Duration::from_millis(800));
        assert_eq!(config.update.latency_ms, 300);
        assert_eq!(config.convert.latency_ms, 500);
        assert_eq!(config.load.failure_rate, 0.10);
        assert_eq!(config.update.failure_rate, 0.05);
        assert_eq!(config.convert.failure_rate, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reliable_never_fails() {
        let config = ServiceConfig::reliable();
        assert!(Operation::ALL
            .iter()
            .all(|op| config.profile(*op).failure_rate == 0.0));
        assert_eq!(config.load.latency_ms, 800);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ServiceConfig::from_json_str(
            r#"{"update":{"latencyMs":10,"failureRate":0.5},"seed":7}"#,
        )
        .unwrap();
        assert_eq!(config.update, OperationProfile::new(10, 0.5));
        assert_eq!(config.load, ServiceConfig::default().load);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_json_rejects_out_of_range_rate() {
        let err = ServiceConfig::from_json_str(r#"{"load":{"latencyMs":1,"failureRate":1.5}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(ServiceConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SELLER_CONSOLE_LOAD_LATENCY_MS", "0"),
            ("SELLER_CONSOLE_CONVERT_FAILURE_RATE", "1"),
            ("SELLER_CONSOLE_SEED", "42"),
        ]);
        let config =
            ServiceConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.load.latency_ms, 0);
        assert_eq!(config.convert.failure_rate, 1.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.update, ServiceConfig::default().update);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = ServiceConfig::from_lookup(|key| {
            (key == "SELLER_CONSOLE_UPDATE_LATENCY_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value: SELLER_CONSOLE_UPDATE_LATENCY_MS='soon' could not be parsed"
        );
    }
}
