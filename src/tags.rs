/// Tag derivation for the transient name search box
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Default separator between names in the search box
pub const DEFAULT_SEPARATOR: char = ',';

static DESIGNATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:SN|AT)\s*(\d{4}.*)$").expect("valid designation regex")
});

/// Split the raw input into display tags
///
/// Algorithm:
/// 1. Split on ','
/// 2. Trim whitespace around every piece
/// 3. Drop pieces that are empty after trimming
///
/// Input order is preserved and duplicates are kept.
///
/// Examples:
/// - "SN2020abc, 2021xyz" → ["SN2020abc", "2021xyz"]
/// - " , ,a,," → ["a"]
pub fn parse_tags(input: &str) -> Vec<String> {
    parse_tags_with(input, DEFAULT_SEPARATOR)
}

/// Same as [`parse_tags`] with a custom separator
pub fn parse_tags_with(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(|tag| tag.trim_matches(is_js_whitespace))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whitespace as browsers trim it: Rust's set minus U+0085, plus U+FEFF
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Whitespace as the search endpoint splits on it: Rust's set plus U+001C..=U+001F
fn is_server_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// How the server will interpret a submitted name string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "names", rename_all = "lowercase")]
pub enum NameQuery {
    /// Nothing typed: the server lists all transients
    Empty,
    /// One name: single transient lookup
    Single(String),
    /// Several names: batch lookup
    Multiple(Vec<String>),
}

impl NameQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            NameQuery::Empty => "empty",
            NameQuery::Single(_) => "single",
            NameQuery::Multiple(_) => "multiple",
        }
    }
}

/// Classify a name string the way the search endpoint does.
///
/// All whitespace is removed before splitting, and empty pieces are kept,
/// so "a,,b" is three names. Only the literal empty string is `Empty`.
pub fn classify_names(input: &str) -> NameQuery {
    if input.is_empty() {
        return NameQuery::Empty;
    }

    let stripped: String = input.chars().filter(|&c| !is_server_whitespace(c)).collect();
    let mut names: Vec<String> = stripped.split(DEFAULT_SEPARATOR).map(str::to_string).collect();

    if names.len() == 1 {
        NameQuery::Single(names.remove(0))
    } else {
        NameQuery::Multiple(names)
    }
}

/// Strip a leading SN/AT designation from a transient name
///
/// Only strips when the prefix is followed by a four digit year:
/// - "SN2020XXY" → "2020XXY"
/// - "at 2021abc" → "2021abc"
/// - "SNOW" → "SNOW"
pub fn strip_designation(name: &str) -> &str {
    DESIGNATION
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map_or(name, |m| m.as_str())
}
