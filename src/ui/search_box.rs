/// Search box with a live tag preview

use crate::binding::should_refresh;
use crate::tags::{NameQuery, classify_names, parse_tags};
use crate::ui::components::{QueryHint, TagList};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(SearchBox)]
pub fn search_box() -> Html {
    let tags = use_state(Vec::<String>::new);
    let query = use_state(|| NameQuery::Empty);

    let on_keyup = {
        let tags = tags.clone();
        let query = query.clone();

        Callback::from(move |e: KeyboardEvent| {
            if !should_refresh(&e.key()) {
                return;
            }

            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                tags.set(parse_tags(&value));
                query.set(classify_names(&value));
            }
        })
    };

    html! {
        <form class="search-form" action="search" method="get">
            <input
                id="iauname"
                name="name"
                type="text"
                placeholder="2020abc, 2021xyz"
                autocomplete="off"
                onkeyup={on_keyup}
            />
            <div id="search_tags">
                <TagList tags={(*tags).clone()} />
            </div>
            <QueryHint query={(*query).clone()} />
        </form>
    }
}
