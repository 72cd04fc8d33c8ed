#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{Home, Monitor, Prediction, Round};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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
)); // Embedded shared theme (ui/assets/theme/main.css).

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Beelbe – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_round(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Round {}, "{label}" })
}
fn nav_prediction(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Prediction {}, "{label}" })
}
fn nav_monitor(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Monitor {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Reads config.json from the per-user config directory, if present.
    use_context_provider(AppConfig::load);

    // AppNavbar (shared) updates this via context on language selection;
    // views subscribe via `use_locale` and re-render in place.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        round: nav_round,
        prediction: nav_prediction,
        monitor: nav_monitor,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
