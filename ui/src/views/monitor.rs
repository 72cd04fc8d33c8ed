use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::core::config::AppConfig;
use crate::game::{action_points, fetch_game_data, DataTable, ScatterPlot};
use crate::{i18n::use_locale, t};

const PLOT_ID: &str = "id_plot_session";
const TABLE_ID: &str = "id_sess_data_table";

/// Session monitor: fetches the game data once, then draws the round/action
/// scatter plot above the sortable table.
#[component]
pub fn Monitor() -> Element {
    use_locale();
    let config = use_context::<AppConfig>();
    let data_url = config.resolve(&config.data_url);
    let shown_url = data_url.clone().unwrap_or_else(|_| config.data_url.clone());

    let game_data = use_resource(move || {
        let url = data_url.clone();
        async move {
            let rows = match url {
                Ok(url) => fetch_game_data(&url).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &rows {
                error!(%err, "monitor could not load session data");
            }
            rows
        }
    });

    let (plot, table) = match &*game_data.read_unchecked() {
        None => (
            rsx! { p { class: "monitor__placeholder", {t!("monitor-loading")} } },
            rsx! {},
        ),
        Some(Err(err)) => (
            rsx! {
                p { class: "monitor__placeholder monitor__placeholder--error",
                    {t!("monitor-load-failed", error = err.to_string())}
                }
            },
            rsx! {},
        ),
        Some(Ok(rows)) => (
            rsx! {
                ScatterPlot { points: action_points(rows) }
                if rows.is_empty() {
                    p { class: "monitor__placeholder", {t!("monitor-empty")} }
                }
            },
            rsx! { DataTable { rows: rows.clone() } },
        ),
    };

    rsx! {
        section { class: "page page-monitor",
            h1 { {t!("monitor-title")} }
            p { {t!("monitor-intro")} }

            div { id: PLOT_ID, class: "monitor__plot", "data-url": "{shown_url}", {plot} }
            div { id: TABLE_ID, class: "monitor__table table-responsive", {table} }
        }
    }
}
