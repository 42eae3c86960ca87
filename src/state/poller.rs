//! Snapshot Poller
//!
//! Fires a snapshot fetch once per second, forever. A failed tick is logged
//! and skipped; the next tick is the retry. There is no backoff and no
//! per-request timeout.

use gloo_timers::callback::Interval;
use leptos::spawn_local;

use crate::api;

use super::global::DashboardState;

/// Poll cadence for the snapshot endpoint
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Handle for the running poll loop. Dropping it or calling
/// [`cancel`](PollHandle::cancel) stops the interval; nothing else ends the
/// loop.
pub struct PollHandle {
    interval: Interval,
}

impl PollHandle {
    /// Stop polling immediately
    pub fn cancel(self) {
        self.interval.cancel();
    }
}

/// Start the 1 Hz poll loop, publishing each decoded snapshot into `state`.
///
/// Each tick spawns the fetch and returns, so a slow response never blocks
/// the browser's event loop; overlapping responses simply apply in arrival
/// order, and the next snapshot overwrites whatever landed before it.
pub fn start_polling(state: DashboardState) -> PollHandle {
    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        let state = state.clone();
        spawn_local(async move {
            match api::fetch_snapshot().await {
                Ok(snapshot) => state.apply_snapshot(snapshot),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Snapshot fetch failed: {}", e).into(),
                    );
                    state.mark_offline();
                }
            }
        });
    });

    PollHandle { interval }
}
