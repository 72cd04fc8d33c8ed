use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::{i18n::use_locale, t};

#[component]
pub fn Home() -> Element {
    let lang = use_locale();
    debug!(%lang, "home render");

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-round")} }
                li { {t!("home-feature-prediction")} }
                li { {t!("home-feature-monitor")} }
            }
        }
    }
}
