/// Reusable UI components

use crate::binding::NBSP;
use crate::tags::{NameQuery, strip_designation};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<String>,
}

/// One `<kbd>` per tag, each followed by a non-breaking space
#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <>
            {for props.tags.iter().map(|tag| html! {
                <>
                    <kbd>{tag}</kbd>
                    {NBSP}
                </>
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryHintProps {
    pub query: NameQuery,
}

#[function_component(QueryHint)]
pub fn query_hint(props: &QueryHintProps) -> Html {
    html! {
        <p class={classes!("search-hint", props.query.kind())}>{hint_text(&props.query)}</p>
    }
}

pub fn hint_text(query: &NameQuery) -> String {
    match query {
        NameQuery::Empty => "Lists all transients".to_string(),
        NameQuery::Single(name) => format!("Looks up {}", strip_designation(name)),
        NameQuery::Multiple(names) => format!("Looks up {} transients", names.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::classify_names;

    #[test]
    fn test_hint_text() {
        assert_eq!(hint_text(&classify_names("")), "Lists all transients");
        assert_eq!(hint_text(&classify_names(" 2020abc ")), "Looks up 2020abc");
        assert_eq!(hint_text(&classify_names("a, b, c")), "Looks up 3 transients");
    }

    #[test]
    fn test_hint_text_strips_designation() {
        assert_eq!(hint_text(&classify_names("SN2020XXY")), "Looks up 2020XXY");
        assert_eq!(hint_text(&classify_names("at 2021abc")), "Looks up 2021abc");
        assert_eq!(hint_text(&classify_names("SNOW")), "Looks up SNOW");
    }
}
