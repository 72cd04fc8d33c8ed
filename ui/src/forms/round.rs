use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use time::OffsetDateTime;

use super::{
    FormField, RoundStamp, SubmitStatus, ACTION, CSRF_FIELD, FORM_ID, ROUND_ENDS, ROUND_STARTS,
    TIME_ELAPSED,
};
use crate::core::{config::AppConfig, platform};
use crate::{i18n::use_locale, t};

/// One submit button per valid action. The last button clicked is the action
/// posted; the choice lives in a local signal read back at submit time.
#[component]
pub fn RoundActionForm(started_at: OffsetDateTime, actions: Vec<i64>) -> Element {
    use_locale();
    let config = use_context::<AppConfig>();
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let action_url = config.resolve(&config.round_action_url);
    let form_action = action_url.clone().unwrap_or_default();
    let csrf_token = config.csrf_token.clone();
    let csrf_value = csrf_token.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Sending {
            return;
        }

        let url = match action_url.clone() {
            Ok(url) => url,
            Err(err) => {
                warn!(%err, "round form has no usable action url");
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }
        };

        let stamp = RoundStamp::capture(started_at);
        let action = selected().map(|a| a.to_string()).unwrap_or_default();
        let mut fields = stamp.fields(csrf_token.as_deref());
        fields.push(FormField::hidden(ACTION, action.clone()));

        info!(action = %action, elapsed = %stamp.elapsed_label(), "round action submitted");
        status.set(SubmitStatus::Sending);
        platform::spawn_future(async move {
            match platform::submit_form(FORM_ID, &url, &fields).await {
                Ok(()) => status.set(SubmitStatus::Sent),
                Err(err) => {
                    warn!(%err, "round submission failed");
                    status.set(SubmitStatus::Failed(err.to_string()));
                }
            }
        });
    };

    let busy = status() == SubmitStatus::Sending;
    let active = selected();

    rsx! {
        form {
            id: FORM_ID,
            class: "round-form",
            method: "post",
            action: "{form_action}",
            onsubmit: onsubmit,

            if let Some(token) = csrf_value {
                input { r#type: "hidden", name: CSRF_FIELD, value: "{token}" }
            }
            input { r#type: "hidden", id: ROUND_STARTS.0, name: ROUND_STARTS.1 }
            input { r#type: "hidden", id: ROUND_ENDS.0, name: ROUND_ENDS.1 }
            input { r#type: "hidden", id: TIME_ELAPSED.0, name: TIME_ELAPSED.1 }
            input { r#type: "hidden", id: ACTION.0, name: ACTION.1 }

            div { class: "round-form__actions",
                for action in actions.into_iter() {
                    button {
                        key: "{action}",
                        r#type: "submit",
                        class: format!(
                            "button button--primary round-form__action {}",
                            if active == Some(action) { "round-form__action--selected" } else { "" }
                        ),
                        value: "{action}",
                        disabled: busy,
                        onclick: move |_| selected.set(Some(action)),
                        {t!("action-emus", amount = action)}
                    }
                }
            }

            {render_status(&status())}
        }
    }
}

pub(super) fn render_status(status: &SubmitStatus) -> Element {
    match status {
        SubmitStatus::Idle => rsx! {},
        SubmitStatus::Sending => rsx! {
            p { class: "form-status", {t!("submit-sending")} }
        },
        SubmitStatus::Sent => rsx! {
            p { class: "form-status form-status--success", {t!("submit-sent")} }
        },
        SubmitStatus::Failed(err) => rsx! {
            p { class: "form-status form-status--error", {t!("submit-failed", error = err.clone())} }
        },
    }
}
