#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  shopping-session grid, product cards and the confirm dialog) remain present in
  the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for survey fields, session screens, dialogs
  and notices).
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
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".card {",
    ".card__header",
    ".card__body",
    // Survey form
    ".survey__form",
    ".survey__field",
    ".survey__input",
    ".survey__radio-row",
    ".survey__choices",
    ".choice--selected",
    // Landing buttons
    ".landing__buttons",
    ".landing__button",
    ".landing__button-label",
    ".landing__button-detail",
    // Shopping session
    ".session__header",
    ".session__progress",
    ".session__grid",
    ".session__empty",
    // Product cards & pricing emphasis
    ".product-card",
    ".product-card__badge--deal",
    ".product-card__badge--best",
    ".product-card__percent",
    ".product-card__save",
    ".product-card__original",
    ".product-card__final--lead",
    // Confirm dialog
    ".dialog-overlay",
    ".dialog__close",
    ".dialog__actions",
    // Notices
    ".notice--info",
    ".notice--error",
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
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn pricing_emphasis_block_consistency() {
    // Both pricing layouts must stay styled: the discount layout leads with the
    // percent figure, the price layout leads with the final price.
    let has_percent = THEME_CSS.contains(".product-card__percent");
    let has_lead_price = THEME_CSS.contains(".product-card__final--lead");
    assert!(
        has_percent && has_lead_price,
        "Pricing emphasis sub‑selectors missing (percent: {has_percent}, lead price: {has_lead_price})"
    );
}
