use dioxus::prelude::*;

use super::use_round_window;
use crate::components::Countdown;
use crate::core::config::AppConfig;
use crate::forms::PredictionForm;
use crate::{i18n::use_locale, t};

#[component]
pub fn Prediction() -> Element {
    use_locale();
    let config = use_context::<AppConfig>();
    let window = use_round_window(config.round_interval());

    rsx! {
        section { class: "page page-prediction",
            h1 { {t!("prediction-title")} }
            Countdown { deadline: window.deadline }
            PredictionForm { started_at: window.started_at }
        }
    }
}
