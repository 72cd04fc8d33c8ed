use dioxus::prelude::*;
use time::{Duration, OffsetDateTime};

use crate::core::timing;

mod home;
pub use home::Home;

mod round;
pub use round::Round;

mod prediction;
pub use prediction::Prediction;

mod monitor;
pub use monitor::Monitor;

/// Decision window of a timed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundWindow {
    pub started_at: OffsetDateTime,
    pub deadline: OffsetDateTime,
}

/// Start instant captured on first render of the page and kept for its whole
/// lifetime; re-renders (language switches included) reuse it.
pub fn use_round_window(interval: Duration) -> RoundWindow {
    let started_at = use_hook(timing::now);
    RoundWindow {
        started_at,
        deadline: started_at + interval,
    }
}
