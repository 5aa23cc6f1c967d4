//! Synthetic gateway latency, applied by the HTTP handler before the
//! authorization runs.

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::debug;

/// Picks a delay uniformly from `range_ms`. A single-value range is exact.
pub fn pick_delay<R: Rng + ?Sized>(range_ms: &RangeInclusive<u64>, rng: &mut R) -> Duration {
    let (min, max) = (*range_ms.start(), *range_ms.end());
    if min >= max {
        return Duration::from_millis(min);
    }
    Duration::from_millis(rng.gen_range(min..=max))
}

/// Sleeps for a random delay within `range_ms` without blocking the runtime.
pub async fn simulate(range_ms: &RangeInclusive<u64>) {
    let delay = pick_delay(range_ms, &mut rand::thread_rng());
    if delay.is_zero() {
        return;
    }
    debug!(?delay, "simulating gateway latency");
    tokio::time::sleep(delay).await;
}
