//! Wall-clock source for session expiry.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock {
    /// Current time as Unix epoch seconds.
    fn now_epoch_secs(&self) -> i64;
}

/// Real time: `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_epoch_secs(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            (js_sys::Date::now() / 1000.0).floor() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs().try_into().unwrap_or(i64::MAX))
        }
    }
}

/// Settable clock for tests. Clones share the same instant.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    #[must_use]
    pub fn at(now_epoch_secs: i64) -> Self {
        Self { now: Arc::new(AtomicI64::new(now_epoch_secs)) }
    }

    pub fn set(&self, now_epoch_secs: i64) {
        self.now.store(now_epoch_secs, Ordering::Relaxed);
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_epoch_secs(&self) -> i64 {
        self.now.load(Ordering::Relaxed)
    }
}
