/// Bind the tag preview to server-rendered search page elements

use crate::config::TagsConfig;
use crate::tags::parse_tags_with;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

/// Spacer appended after every tag
pub const NBSP: &str = "\u{00A0}";

/// Every key except Enter re-derives the tags
pub fn should_refresh(key: &str) -> bool {
    key != "Enter"
}

/// Replace the contents of `display` with one `<tag_element>` per tag, each followed by a NBSP
pub fn render_tags(
    document: &Document,
    display: &Element,
    tags: &[String],
    tag_element: &str,
) -> Result<(), String> {
    display.set_inner_html("");

    for tag in tags {
        let element = document
            .create_element(tag_element)
            .map_err(|e| format!("Failed to create <{}>: {:?}", tag_element, e))?;
        element.set_text_content(Some(tag));

        display
            .append_child(&element)
            .map_err(|e| format!("Failed to append tag: {:?}", e))?;
        display
            .append_child(&document.create_text_node(NBSP))
            .map_err(|e| format!("Failed to append spacer: {:?}", e))?;
    }

    Ok(())
}

/// Everything the keyup listener needs to redraw the display
struct TagRenderer {
    document: Document,
    display: Element,
    separator: char,
    tag_element: String,
}

impl TagRenderer {
    fn refresh(&self, value: &str) -> Result<(), String> {
        let tags = parse_tags_with(value, self.separator);
        log::debug!("Rendering {} search tags", tags.len());
        render_tags(&self.document, &self.display, &tags, &self.tag_element)
    }
}

/// A live keyup binding. Dropping it removes the listener.
pub struct SearchTags {
    input: HtmlInputElement,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
}

impl SearchTags {
    pub fn attach(config: TagsConfig) -> Result<SearchTags, String> {
        config.validate()?;

        let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "No document available".to_string())?;

        let input = document
            .get_element_by_id(&config.input_id)
            .ok_or_else(|| format!("Input element #{} not found", config.input_id))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| format!("Element #{} is not an <input>", config.input_id))?;

        let display = document
            .get_element_by_id(&config.display_id)
            .ok_or_else(|| format!("Display element #{} not found", config.display_id))?;

        let renderer = TagRenderer {
            document,
            display,
            separator: config.separator,
            tag_element: config.tag_element,
        };

        // Pre-filled inputs (e.g. after back navigation) show their tags straight away
        renderer.refresh(&input.value())?;

        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if !should_refresh(&event.key()) {
                return;
            }

            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            if let Err(e) = renderer.refresh(&input.value()) {
                log::error!("{}", e);
            }
        });

        input
            .add_event_listener_with_callback("keyup", listener.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to add keyup listener: {:?}", e))?;

        log::info!("Search tags bound to #{} -> #{}", config.input_id, config.display_id);

        Ok(SearchTags { input, listener })
    }
}

impl Drop for SearchTags {
    fn drop(&mut self) {
        if let Err(e) = self
            .input
            .remove_event_listener_with_callback("keyup", self.listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove keyup listener: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_refresh() {
        assert!(should_refresh("a"));
        assert!(should_refresh(","));
        assert!(should_refresh("Backspace"));
        assert!(should_refresh(" "));
        assert!(!should_refresh("Enter"));
    }

    #[test]
    fn test_nbsp() {
        assert_eq!(NBSP.chars().collect::<Vec<_>>(), vec!['\u{a0}']);
    }
}
