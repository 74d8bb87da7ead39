use async_trait::async_trait;
use std::time::Duration;

/// Suspension source for simulated processing time
///
/// The engine yields control for a fixed duration per task; nothing in the
/// contract depends on real elapsed time, so the suspension is swappable.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn suspend(&self, duration: Duration);
}

/// Sleeps on the tokio timer for the full duration
pub struct SimulatedLatency;

#[async_trait]
impl Latency for SimulatedLatency {
    async fn suspend(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes immediately; keeps test suites fast
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn suspend(&self, _duration: Duration) {}
}
