//! WASM-compatible wrapper for Markdown slide planning.
//!
//! This crate exposes the planning pipeline to JavaScript
//! for use in Cloudflare Workers.

use serde::Serialize;
use slidedeck_core::{convert, OutlineFormatter, PlannerConfig, SlideSpec};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of planning a document.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    /// Number of sections after merging.
    pub section_count: usize,
    /// Number of planned slides.
    pub slide_count: usize,
    /// The planned slides, in order.
    pub slides: Vec<SlideSpec>,
}

/// Plan slides from Markdown text with the default configuration.
///
/// # Returns
/// A JavaScript object with the plan result.
#[wasm_bindgen]
pub fn plan_markdown(text: &str) -> Result<JsValue, JsValue> {
    let result = plan_markdown_impl(text, None).map_err(|e| JsValue::from_str(&e))?;
    to_js(&result)
}

/// Plan slides from Markdown text with a JSON planner configuration.
///
/// # Arguments
/// * `text` - The Markdown document
/// * `config_json` - A (possibly partial) `PlannerConfig` as JSON
#[wasm_bindgen]
pub fn plan_markdown_with_config(text: &str, config_json: &str) -> Result<JsValue, JsValue> {
    let result = plan_markdown_impl(text, Some(config_json)).map_err(|e| JsValue::from_str(&e))?;
    to_js(&result)
}

/// Plan slides and return them as a plain-text outline.
#[wasm_bindgen]
pub fn format_outline(text: &str) -> String {
    let deck = convert(text, &PlannerConfig::default());
    OutlineFormatter::new().format_with_newline(&deck.slides)
}

fn to_js(result: &PlanResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn plan_markdown_impl(text: &str, config_json: Option<&str>) -> Result<PlanResult, String> {
    let config = match config_json {
        Some(json) => PlannerConfig::from_json(json).map_err(|e| e.to_string())?,
        None => PlannerConfig::default(),
    };

    let deck = convert(text, &config);

    Ok(PlanResult {
        section_count: deck.section_count,
        slide_count: deck.slide_count(),
        slides: deck.slides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_markdown_default() {
        let result = plan_markdown_impl("## Plan\n- one\n- two\n", None).unwrap();

        assert_eq!(result.section_count, 1);
        assert_eq!(result.slide_count, 2);
        assert_eq!(result.slides[1].slide_title(), "Plan");
    }

    #[test]
    fn test_plan_markdown_with_config() {
        let result =
            plan_markdown_impl("## Plan\n- one\n", Some(r#"{ "deck_title": "Roadmap" }"#)).unwrap();

        assert_eq!(result.slides[0].slide_title(), "Roadmap");
    }

    #[test]
    fn test_plan_markdown_bad_config() {
        let err = plan_markdown_impl("## Plan\n", Some("{ nope")).unwrap_err();
        assert!(err.contains("configuration"));
    }

    #[test]
    fn test_format_outline() {
        let text = format_outline("## Plan\n- one\n");
        assert!(text.starts_with("[1] title: Presentation\n"));
        assert!(text.ends_with("- one\n"));
    }
}
