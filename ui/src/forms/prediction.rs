use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use time::OffsetDateTime;

use super::round::render_status;
use super::{
    FormField, RoundStamp, SubmitStatus, CSRF_FIELD, FORM_ID, PREDICTION, ROUND_ENDS, ROUND_STARTS,
    TIME_ELAPSED,
};
use crate::core::{config::AppConfig, platform, validate::is_valid_integer};
use crate::{i18n::use_locale, t};

const INT_ERROR_ID: &str = "intErrorMessage";
const GAME_END_ID: &str = "game_end";

/// What a submit attempt on the prediction form should do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PredictionOutcome {
    /// Not an integer: keep the page, show the inline error.
    Invalid,
    /// Post `fields`; alert `notice` first when the game-end notice is present.
    Submit {
        fields: Vec<FormField>,
        notice: Option<String>,
    },
}

pub(crate) fn prepare_prediction(
    value: &str,
    stamp: &RoundStamp,
    csrf_token: Option<&str>,
    game_end_notice: Option<&str>,
) -> PredictionOutcome {
    if !is_valid_integer(value) {
        return PredictionOutcome::Invalid;
    }
    let mut fields = stamp.fields(csrf_token);
    fields.push(FormField::hidden(PREDICTION, value));
    PredictionOutcome::Submit {
        fields,
        notice: game_end_notice.map(str::to_string),
    }
}

#[component]
pub fn PredictionForm(started_at: OffsetDateTime) -> Element {
    use_locale();
    let config = use_context::<AppConfig>();
    let mut prediction = use_signal(String::new);
    let mut show_error = use_signal(|| false);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let action_url = config.resolve(&config.prediction_action_url);
    let form_action = action_url.clone().unwrap_or_default();
    let csrf_token = config.csrf_token.clone();
    let csrf_value = csrf_token.clone();
    let game_end_notice = config.game_end_notice.clone();
    let notice_text = game_end_notice.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Sending {
            return;
        }

        let value = prediction();
        let stamp = RoundStamp::capture(started_at);
        let outcome = prepare_prediction(
            &value,
            &stamp,
            csrf_token.as_deref(),
            game_end_notice.as_deref(),
        );

        let (fields, notice) = match outcome {
            PredictionOutcome::Invalid => {
                warn!(input = %value, "prediction rejected: not an integer");
                show_error.set(true);
                return;
            }
            PredictionOutcome::Submit { fields, notice } => (fields, notice),
        };
        show_error.set(false);

        let url = match action_url.clone() {
            Ok(url) => url,
            Err(err) => {
                warn!(%err, "prediction form has no usable action url");
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }
        };

        info!(prediction = %value, elapsed = %stamp.elapsed_label(), "prediction submitted");
        status.set(SubmitStatus::Sending);
        platform::spawn_future(async move {
            if let Some(notice) = notice {
                if let Err(err) = platform::alert(&notice).await {
                    warn!(%err, "game-end notice could not be shown");
                }
            }
            match platform::submit_form(FORM_ID, &url, &fields).await {
                Ok(()) => status.set(SubmitStatus::Sent),
                Err(err) => {
                    warn!(%err, "prediction submission failed");
                    status.set(SubmitStatus::Failed(err.to_string()));
                }
            }
        });
    };

    let error_class = if show_error() {
        "form-error form-error--visible"
    } else {
        "form-error"
    };

    rsx! {
        form {
            id: FORM_ID,
            class: "prediction-form",
            method: "post",
            action: "{form_action}",
            onsubmit: onsubmit,

            if let Some(token) = csrf_value {
                input { r#type: "hidden", name: CSRF_FIELD, value: "{token}" }
            }
            input { r#type: "hidden", id: ROUND_STARTS.0, name: ROUND_STARTS.1 }
            input { r#type: "hidden", id: ROUND_ENDS.0, name: ROUND_ENDS.1 }
            input { r#type: "hidden", id: TIME_ELAPSED.0, name: TIME_ELAPSED.1 }

            label { class: "prediction-form__label", r#for: PREDICTION.0,
                {t!("prediction-question")}
            }
            input {
                id: PREDICTION.0,
                name: PREDICTION.1,
                class: "prediction-form__input",
                r#type: "text",
                inputmode: "numeric",
                autocomplete: "off",
                value: "{prediction}",
                oninput: move |evt| prediction.set(evt.value()),
            }
            div { id: INT_ERROR_ID, class: error_class, role: "alert",
                {t!("prediction-invalid")}
            }

            if let Some(notice) = notice_text {
                div { id: GAME_END_ID, class: "game-end-notice", "{notice}" }
            }

            button {
                r#type: "submit",
                class: "button button--primary",
                disabled: status() == SubmitStatus::Sending,
                {t!("prediction-submit")}
            }

            {render_status(&status())}
        }
    }
}
