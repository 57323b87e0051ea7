use std::sync::atomic::{AtomicI64, Ordering};

/// A store clock that advances by `step` milliseconds on every reading.
pub fn ticking_clock(start: i64, step: i64) -> impl Fn() -> i64 + Send + Sync + 'static {
    let now = AtomicI64::new(start);
    move || now.fetch_add(step, Ordering::SeqCst)
}
