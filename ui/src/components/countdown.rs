use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::countdown::{start_countdown, ClockFace};
use crate::core::timing;
use crate::{i18n::use_locale, t};

/// `#countdown` with `.minutes` / `.seconds` children, ticking towards
/// `deadline`. The underlying task stops when the component unmounts.
#[component]
pub fn Countdown(deadline: OffsetDateTime) -> Element {
    use_locale();
    let mut face = use_signal(|| ClockFace::from_interval(&timing::remaining(deadline)));
    let handle = use_hook(move || start_countdown(deadline, move |next| face.set(next)));
    use_drop(move || handle.cancel());

    let current = face();
    let class = if current.finished {
        "countdown countdown--finished"
    } else {
        "countdown"
    };

    rsx! {
        div { id: "countdown", class: class, aria_live: "polite",
            span { class: "countdown__label", {t!("countdown-label")} }
            span { class: "minutes", "{current.minutes}" }
            span { class: "countdown__sep", ":" }
            span { class: "seconds", "{current.seconds}" }
        }
    }
}
