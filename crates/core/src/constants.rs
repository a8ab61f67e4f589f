/// Lowest possible lead score
pub const MIN_SCORE: u8 = 0;

/// Highest possible lead score
pub const MAX_SCORE: u8 = 100;

/// Sentinel used by status and source filters to disable filtering
pub const FILTER_ALL: &str = "all";

/// Prefix for generated opportunity IDs
pub const OPPORTUNITY_ID_PREFIX: &str = "opp";

/// Default load latency in milliseconds
pub const DEFAULT_LOAD_LATENCY_MS: u64 = 800;

/// Default retry latency in milliseconds (100ms scheduling + 500ms fetch)
pub const DEFAULT_RETRY_LATENCY_MS: u64 = 600;

/// Default update latency in milliseconds
pub const DEFAULT_UPDATE_LATENCY_MS: u64 = 300;

/// Default conversion latency in milliseconds
pub const DEFAULT_CONVERT_LATENCY_MS: u64 = 500;

/// Default probability that a load fails
pub const DEFAULT_LOAD_FAILURE_RATE: f64 = 0.10;

/// Default probability that an update fails
pub const DEFAULT_UPDATE_FAILURE_RATE: f64 = 0.05;

/// Default probability that a conversion fails
pub const DEFAULT_CONVERT_FAILURE_RATE: f64 = 0.05;

/// Default toast display time in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Prefix for environment variables read by `ServiceConfig::from_env`
pub const ENV_PREFIX: &str = "SELLER_CONSOLE_";

pub const LOAD_FAILURE_MESSAGE: &str = "Network error: Failed to fetch leads";
pub const UPDATE_FAILURE_MESSAGE: &str = "Failed to update lead";
pub const CONVERT_FAILURE_MESSAGE: &str = "Failed to convert lead to opportunity";
