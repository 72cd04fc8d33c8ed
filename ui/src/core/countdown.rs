//! Repeating one-second countdown towards a fixed deadline.
//!
//! The countdown is a cooperative task: it ticks once immediately, then once
//! per second, and finishes on the first tick that observes `total_ms <= 0`.
//! [`start_countdown`] returns a [`CountdownHandle`] that the owner keeps to
//! stop the task early (components cancel it when they unmount).

use std::future::Future;

use dioxus::logger::tracing::{debug, info};
use futures::future::{abortable, AbortHandle};
use time::OffsetDateTime;

use super::format::pad2;
use super::platform;
use super::timing::{self, TimeInterval};

pub const TICK_MS: u64 = 1_000;

/// Minutes and seconds as displayed in the `.minutes` / `.seconds` spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub minutes: String,
    pub seconds: String,
    pub finished: bool,
}

impl ClockFace {
    /// Zero-padded face for `interval`. An expired interval shows `00:00`
    /// instead of the negative remainders of the final tick.
    pub fn from_interval(interval: &TimeInterval) -> Self {
        if interval.is_done() {
            return Self {
                minutes: pad2(0),
                seconds: pad2(0),
                finished: true,
            };
        }
        Self {
            minutes: pad2(interval.minutes),
            seconds: pad2(interval.seconds),
            finished: false,
        }
    }

    pub fn label(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

/// Cancels the countdown task it was returned with.
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    abort: AbortHandle,
}

impl CountdownHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Tick until the deadline passes. `now` is injected so tests can drive time.
pub async fn run_countdown<N, F>(deadline: OffsetDateTime, now: N, mut on_tick: F)
where
    N: Fn() -> OffsetDateTime,
    F: FnMut(ClockFace),
{
    loop {
        let left = timing::compute_interval(now(), deadline);
        let face = ClockFace::from_interval(&left);
        let finished = face.finished;
        on_tick(face);
        if finished {
            break;
        }
        timing::sleep_ms(TICK_MS).await;
    }
}

/// Build the countdown future together with its cancel handle, without
/// spawning it.
pub fn countdown_task<N, F>(
    deadline: OffsetDateTime,
    now: N,
    on_tick: F,
) -> (impl Future<Output = ()>, CountdownHandle)
where
    N: Fn() -> OffsetDateTime,
    F: FnMut(ClockFace),
{
    let (task, abort) = abortable(run_countdown(deadline, now, on_tick));
    let run = async move {
        match task.await {
            Ok(()) => info!("countdown reached its deadline"),
            Err(_) => debug!("countdown cancelled"),
        }
    };
    (run, CountdownHandle { abort })
}

/// Spawn a countdown against the wall clock.
pub fn start_countdown<F>(deadline: OffsetDateTime, on_tick: F) -> CountdownHandle
where
    F: FnMut(ClockFace) + 'static,
{
    info!(%deadline, "countdown started");
    let (run, handle) = countdown_task(deadline, timing::now, on_tick);
    platform::spawn_future(run);
    handle
}
