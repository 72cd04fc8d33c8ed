use dioxus::prelude::*;

use super::use_round_window;
use crate::components::Countdown;
use crate::core::config::AppConfig;
use crate::forms::RoundActionForm;
use crate::{i18n::use_locale, t};

/// Decision page of one round: countdown plus one button per valid action.
#[component]
pub fn Round() -> Element {
    use_locale();
    let config = use_context::<AppConfig>();
    let window = use_round_window(config.round_interval());

    rsx! {
        section { class: "page page-round",
            h1 { {t!("round-title")} }
            Countdown { deadline: window.deadline }
            p { class: "page-round__intro", {t!("round-intro")} }
            RoundActionForm { started_at: window.started_at, actions: config.valid_actions.clone() }
        }
    }
}
