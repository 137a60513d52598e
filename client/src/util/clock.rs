//! Timer and wall-clock access.
//!
//! Browser builds use `gloo-timers` and `Date.now()`. Elsewhere `sleep_ms`
//! resolves immediately so simulated latency never blocks SSR or tests.

#![allow(clippy::unused_async)]

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        if ms > 0 {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = unix_millis(OffsetDateTime::now_utc()) as f64;
        ms
    }
}

/// Whole milliseconds since the Unix epoch for `at`.
pub fn unix_millis(at: OffsetDateTime) -> u64 {
    u64::try_from(at.unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}

/// ISO-8601 / RFC 3339 timestamp, matching `Date.prototype.toISOString` closely
/// enough for display and storage.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}
