//! Wall-clock timing shared by the experiment engine and views.

/// Epoch timestamp in milliseconds (fractional).
pub type EpochMs = f64;

/// Current wall-clock time as fractional epoch milliseconds.
///
/// Engine methods take timestamps as parameters instead of reading the clock
/// themselves, so session timing stays unit-testable; views pass this in.
pub fn now_ms() -> EpochMs {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    nanos as f64 / 1_000_000.0
}

/// Cooperative sleep usable from coroutines on every target.
pub async fn sleep_ms(duration_ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(duration_ms as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(duration_ms)).await;
    }
}
