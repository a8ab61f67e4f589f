//! Failure injection for the simulated backend.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::service_model::Operation;
use crate::config::ServiceConfig;

/// Decides whether a single invocation of an operation fails.
///
/// Called exactly once per invocation, after its simulated delay.
pub trait FailureInjector: Send + Sync {
    fn should_fail(&self, operation: Operation) -> bool;
}

/// Fails each operation with the probability configured for it.
pub struct RandomFailures {
    config: ServiceConfig,
    rng: Mutex<StdRng>,
}

impl RandomFailures {
    /// Uses `config.seed` when set, entropy otherwise.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config: config.clone(),
            rng: Mutex::new(rng),
        }
    }
}

impl FailureInjector for RandomFailures {
    fn should_fail(&self, operation: Operation) -> bool {
        let rate = self.config.profile(operation).failure_rate;
        if rate.is_nan() || rate <= 0.0 {
            return false;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_bool(rate.min(1.0))
    }
}

/// Never fails.
#[derive(Clone, Copy, Default)]
pub struct NeverFail;

impl FailureInjector for NeverFail {
    fn should_fail(&self, _operation: Operation) -> bool {
        false
    }
}

/// Always fails.
#[derive(Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailureInjector for AlwaysFail {
    fn should_fail(&self, _operation: Operation) -> bool {
        true
    }
}

/// Replays a fixed sequence of outcomes, then succeeds.
#[derive(Default)]
pub struct ScriptedFailures {
    script: Mutex<VecDeque<bool>>,
}

impl ScriptedFailures {
    /// `true` entries fail the matching invocation, in call order.
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    pub fn push(&self, fail: bool) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(fail);
    }

    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl FailureInjector for ScriptedFailures {
    fn should_fail(&self, _operation: Operation) -> bool {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false)
    }
}
