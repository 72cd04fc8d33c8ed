use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{Home, Monitor, Prediction, Round};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/game")]
    Round {},
    #[route("/prediction")]
    Prediction {},
    #[route("/monitor/graph")]
    Monitor {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_round(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Round {},
        "{label}"
    })
}
fn nav_prediction(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Prediction {},
        "{label}"
    })
}
fn nav_monitor(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Monitor {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The page template may embed a JSON `data-config` on the mount element.
    use_context_provider(AppConfig::load);

    // AppNavbar updates this on language selection; views subscribe via `use_locale`.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        round: nav_round,
        prediction: nav_prediction,
        monitor: nav_monitor,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
