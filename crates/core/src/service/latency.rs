//! Simulated network latency.

use std::time::Duration;

use async_trait::async_trait;

use super::service_model::Operation;

/// Suspends an operation for its simulated latency.
///
/// This is the only suspension point of the service layer.
#[async_trait]
pub trait LatencyScheduler: Send + Sync {
    async fn wait(&self, operation: Operation, duration: Duration);
}

/// Sleeps on the tokio timer. Under a paused test clock this auto-advances.
#[derive(Clone, Copy, Default)]
pub struct TokioLatency;

#[async_trait]
impl LatencyScheduler for TokioLatency {
    async fn wait(&self, _operation: Operation, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Resolves immediately.
#[derive(Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencyScheduler for NoLatency {
    async fn wait(&self, _operation: Operation, _duration: Duration) {}
}
