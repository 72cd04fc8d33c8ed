#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop launcher embeds `ui/assets/theme/main.css` with `include_str!`, so
a renamed or dropped selector only shows up as broken styling at runtime. These
tests assert that the selectors the shared components emit are still defined.

When a component's class names change, update REQUIRED_SELECTORS with it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    // Countdown
    ".countdown {",
    ".countdown__label",
    ".countdown--finished",
    // Forms
    ".round-form__actions",
    ".round-form__action--selected",
    ".prediction-form {",
    ".form-error {",
    ".form-error--visible",
    ".game-end-notice",
    ".form-status--error",
    // Monitor
    ".monitor__plot",
    ".monitor__placeholder",
    ".session-plot",
    ".tooltip {",
    ".session-table {",
    ".session-table__header",
    ".session-table__row:hover",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn hidden_by_default_blocks_are_hidden() {
    // The inline error and the game-end notice start hidden; only the
    // `--visible` modifier reveals the error.
    for selector in [".form-error {", ".game-end-notice {"] {
        let start = THEME_CSS
            .find(selector)
            .unwrap_or_else(|| panic!("{selector} missing"));
        let block = &THEME_CSS[start..];
        let end = block.find('}').unwrap_or(block.len());
        assert!(
            block[..end].contains("display: none"),
            "{selector} should start hidden"
        );
    }
}

#[test]
fn tooltip_is_placed_against_the_page() {
    // The scatter tooltip takes `left`/`top` from pointer page coordinates,
    // so neither it nor the plot container may introduce a positioned box.
    let block = |selector: &str| -> &str {
        let start = THEME_CSS
            .find(selector)
            .unwrap_or_else(|| panic!("{selector} missing"));
        let rest = &THEME_CSS[start..];
        &rest[..rest.find('}').unwrap_or(rest.len())]
    };

    assert!(block(".tooltip {").contains("position: absolute"));
    assert!(
        !block(".monitor__plot {").contains("position"),
        ".monitor__plot must not be a positioned ancestor of the tooltip"
    );
    assert!(!block(".page {").contains("position"));
}
