//! Internationalization (i18n) support for `beelbe-ui`.
//!
//! `i18n-embed` selects the language, `fluent` formats messages, `rust-embed`
//! embeds the `.ftl` files and `i18n-embed-fl` checks keys at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/beelbe-ui.ftl   (fallback/reference)
//!   es-ES/beelbe-ui.ftl
//! ```
//!
//! Call [`init`] once at app start, then look strings up with `t!("nav-home")`.
//! Components that render translated text call [`use_locale`] so a language
//! switch re-renders them in place.
//! New locales copy `en-US/beelbe-ui.ftl`, keep every ID and placeholder, and
//! are picked up by `tests/i18n_missing_keys.rs` once registered there.
//!
//! Desktop requests the OS locale list; web requests `navigator.languages`.
//! Assets are always embedded on wasm (`debug-embed`).
use std::sync::Once;

use dioxus::logger::tracing::warn;
use dioxus::prelude::{try_use_context, Readable, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro routed through the shared loader.
///
/// ```text
/// t!("nav-home")
/// t!("action-emus", amount = 4)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "beelbe-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Current language code from the platform's context signal (`en-US` when
/// none is provided). Subscribes the calling component, so its `t!` lookups
/// re-run after a switch without remounting it.
pub fn use_locale() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code.cloned())
        .unwrap_or_else(|| "en-US".to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
