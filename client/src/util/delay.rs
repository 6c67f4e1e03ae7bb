//! Simulated latency for mock async operations.
//!
//! In the browser this awaits a `gloo-timers` timeout; elsewhere it resolves
//! immediately so server renders and unit tests never block. Callers on a
//! page run it through `util::task::spawn_scoped`, which aborts the wait
//! when the page is torn down.

use std::time::Duration;

/// Latency applied to mock login, upload, and submit calls in the app.
pub const MOCK_LATENCY: Duration = Duration::from_millis(800);

/// Wait for `duration` before resolving.
pub async fn simulated_latency(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        if !duration.is_zero() {
            gloo_timers::future::sleep(duration).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
