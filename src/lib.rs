/// Search Tags - live tag preview for the transient name search box
/// Built with Rust + WASM + Yew

pub mod binding;
pub mod config;
pub mod search_query;
pub mod tags;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use binding::SearchTags;
pub use config::TagsConfig;
pub use search_query::SearchQuery;
pub use tags::NameQuery;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Tags shown for a search box value, as a JS array of strings
#[wasm_bindgen]
pub fn parse_tags(input: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&tags::parse_tags(input))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize tags: {:?}", e)))
}

/// `{kind, names}` describing how the server will treat the submitted names
#[wasm_bindgen]
pub fn classify_names(input: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&tags::classify_names(input))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize query: {:?}", e)))
}

#[wasm_bindgen]
pub fn strip_designation(name: &str) -> String {
    tags::strip_designation(name).to_string()
}

#[wasm_bindgen]
pub fn search_url(base: &str, input: &str, limit: u32, offset: u32) -> Result<String, JsValue> {
    SearchQuery::from_input(input, limit, offset)
        .to_url(base)
        .map(String::from)
        .map_err(|e| JsValue::from_str(&e))
}

/// Keeps the keyup listener alive; call `detach()` to unbind
#[wasm_bindgen]
pub struct SearchTagsHandle {
    _binding: SearchTags,
}

#[wasm_bindgen]
impl SearchTagsHandle {
    pub fn detach(self) {}
}

// Bind to existing server-rendered elements (defaults: #iauname -> #search_tags)
#[wasm_bindgen]
pub fn bind_search_tags(config: JsValue) -> Result<SearchTagsHandle, JsValue> {
    let config = TagsConfig::from_js(config).map_err(|e| JsValue::from_str(&e))?;
    let binding = SearchTags::attach(config).map_err(|e| {
        log::warn!("{}", e);
        JsValue::from_str(&e)
    })?;
    Ok(SearchTagsHandle { _binding: binding })
}

// Start the Yew app for the search box
#[wasm_bindgen]
pub fn start_search_box() {
    yew::Renderer::<ui::search_box::SearchBox>::new().render();
}
