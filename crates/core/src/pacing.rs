//! Paced dispatch for presentation work. Holds no game state.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Calls `callback` on every item, item `i` at `i * interval` after the call
/// (the first one right away). Resolves once the last item has been handed out.
pub async fn stagger<T, F>(items: impl IntoIterator<Item = T>, interval: Duration, mut callback: F)
where
    F: FnMut(usize, T),
{
    let start = Instant::now();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            let steps = u32::try_from(index).unwrap_or(u32::MAX);
            sleep_until(start + interval.saturating_mul(steps)).await;
        }
        callback(index, item);
    }
}
