//! Platform glue. Everything that touches the browser page or the desktop
//! host lives here so the rest of the crate stays target-independent.

use std::future::Future;

use dioxus::logger::tracing::info;

use super::error::UiError;
use crate::forms::FormField;

/// Id of the element the web build mounts into; carries `data-config`.
pub const MOUNT_ELEMENT_ID: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Run a future on the UI executor without blocking the caller.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}

/// Address of the page currently shown, used to resolve relative URLs.
pub fn page_href() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Raw JSON configuration, if the platform provides one.
///
/// Web: the `data-config` attribute of the mount element.
/// Desktop: `config.json` in the per-user configuration directory.
pub fn read_config_source() -> Result<Option<String>, UiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::Dom("document unavailable".into()))?;
        Ok(document
            .get_element_by_id(MOUNT_ELEMENT_ID)
            .and_then(|el| el.get_attribute("data-config")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let dirs = directories::ProjectDirs::from("org", "Beelbe", "Beelbe")
            .ok_or_else(|| UiError::Config("unable to determine config directory".into()))?;
        let path = dirs.config_dir().join("config.json");
        if !path.exists() {
            dioxus::logger::tracing::debug!(path = %path.display(), "no desktop config file");
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|err| UiError::Config(format!("{}: {err}", path.display())))
    }
}

/// Hand a stamped form over to the server.
///
/// Web: copies every field that has an element id into that hidden input and
/// triggers the form's native submission (navigation follows).
/// Desktop: posts all fields form-encoded to `action_url`.
pub async fn submit_form(
    form_id: &str,
    action_url: &str,
    fields: &[FormField],
) -> Result<(), UiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{HtmlFormElement, HtmlInputElement};

        let _ = action_url;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::Dom("document unavailable".into()))?;

        for field in fields {
            let Some(id) = field.id else {
                continue;
            };
            let input: HtmlInputElement = document
                .get_element_by_id(id)
                .ok_or_else(|| UiError::missing(id))?
                .dyn_into()
                .map_err(|_| UiError::Dom(format!("#{id} is not an input")))?;
            input.set_value(&field.value);
        }

        let form: HtmlFormElement = document
            .get_element_by_id(form_id)
            .ok_or_else(|| UiError::missing(form_id))?
            .dyn_into()
            .map_err(|_| UiError::Dom(format!("#{form_id} is not a form")))?;
        form.submit()
            .map_err(|_| UiError::Dom("the browser refused the submission".into()))?;
        info!(form = form_id, "form handed to the browser");
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|field| (field.name, field.value.as_str()))
            .collect();
        let response = reqwest::Client::new()
            .post(action_url)
            .form(&pairs)
            .send()
            .await
            .map_err(|err| UiError::http(action_url, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(UiError::Status {
                url: action_url.to_string(),
                status: status.as_u16(),
            });
        }
        info!(form = form_id, %status, "form posted");
        Ok(())
    }
}

/// Modal notice dialog. Resolves once the user has dismissed it.
pub async fn alert(message: &str) -> Result<(), UiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| UiError::Dom("window unavailable".into()))?;
        window
            .alert_with_message(message)
            .map_err(|_| UiError::Dom("the browser refused the alert".into()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::document::eval(&alert_script(message))
            .await
            .map(|_| ())
            .map_err(|err| UiError::Dom(format!("alert failed: {err}")))
    }
}

/// Script for the webview: the value is only returned after the dialog
/// closes, so awaiting the eval waits for the user.
#[cfg(not(target_arch = "wasm32"))]
fn alert_script(message: &str) -> String {
    format!(
        "window.alert({}); return true;",
        serde_json::Value::from(message)
    )
}
