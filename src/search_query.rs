/// Query parameters for the transient search page
use crate::tags::parse_tags;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub name: String,
    #[serde(default)]
    pub subtype: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl SearchQuery {
    pub fn new(name: String) -> SearchQuery {
        SearchQuery {
            name,
            subtype: String::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Build a query from the raw search box value, submitting exactly the previewed tags
    pub fn from_input(input: &str, limit: u32, offset: u32) -> SearchQuery {
        SearchQuery {
            name: parse_tags(input).join(","),
            subtype: String::new(),
            limit,
            offset,
        }
    }

    /// `<base>/search?name=..&limit=..&offset=..`; subtype only when set
    pub fn to_url(&self, base: &str) -> Result<Url, String> {
        let mut url = Url::parse(base).map_err(|e| format!("Invalid base URL {:?}: {}", base, e))?;
        if url.cannot_be_a_base() {
            return Err(format!("Invalid base URL {:?}: cannot be a base", base));
        }

        let path = format!("{}/search", url.path().trim_end_matches('/'));
        url.set_path(&path);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.append_pair("name", &self.name);
            if !self.subtype.is_empty() {
                pairs.append_pair("subtype", &self.subtype);
            }
            pairs.append_pair("limit", &self.limit.to_string());
            pairs.append_pair("offset", &self.offset.to_string());
        }

        Ok(url)
    }
}
