/// Configuration for the search tag widget
use crate::tags::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Which elements to bind and how to render tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub input_id: String,
    pub display_id: String,
    pub separator: char,
    pub tag_element: String,
}

impl TagsConfig {
    pub fn new() -> Self {
        TagsConfig {
            input_id: "iauname".to_string(),
            display_id: "search_tags".to_string(),
            separator: DEFAULT_SEPARATOR,
            tag_element: "kbd".to_string(),
        }
    }

    /// Read a config object passed from JavaScript. `undefined`/`null` give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::new());
        }

        let config: TagsConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| format!("Failed to parse config: {:?}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: TagsConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_id.is_empty() {
            return Err("input_id must not be empty".to_string());
        }
        if self.display_id.is_empty() {
            return Err("display_id must not be empty".to_string());
        }
        if self.tag_element.is_empty()
            || !self.tag_element.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(format!("Invalid tag element name: {:?}", self.tag_element));
        }
        Ok(())
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TagsConfig::default();
        assert_eq!(config.input_id, "iauname");
        assert_eq!(config.display_id, "search_tags");
        assert_eq!(config.separator, ',');
        assert_eq!(config.tag_element, "kbd");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = TagsConfig::from_json(r#"{"input_id": "names", "separator": ";"}"#).unwrap();
        assert_eq!(config.input_id, "names");
        assert_eq!(config.separator, ';');
        assert_eq!(config.display_id, "search_tags");
        assert_eq!(config.tag_element, "kbd");
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(TagsConfig::from_json("{}").unwrap(), TagsConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_tag_element() {
        let err = TagsConfig::from_json(r#"{"tag_element": "<script>"}"#).unwrap_err();
        assert!(err.contains("Invalid tag element"));
        assert!(TagsConfig::from_json(r#"{"tag_element": ""}"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_empty_ids() {
        assert!(TagsConfig::from_json(r#"{"input_id": ""}"#).is_err());
        assert!(TagsConfig::from_json(r#"{"display_id": ""}"#).is_err());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = TagsConfig::from_json("not json").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }
}
