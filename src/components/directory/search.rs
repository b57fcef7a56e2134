//! Search input.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::DirectoryContext;
use crate::components::icons as ic;
use crate::config::text;

stylance::import_crate_style!(css, "src/components/directory/search.module.css");

/// Search field; every keystroke refilters the directory.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    let handle_input = move |ev: ev::Event| {
        ctx.set_search_term(event_target_value(&ev));
    };

    view! {
        <div class=css::bar>
            <label class=css::field>
                <span class=css::icon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    type="text"
                    class=css::input
                    placeholder=text::SEARCH_PLACEHOLDER
                    aria-label="Search users"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || ctx.search_term.get()
                    on:input=handle_input
                />
            </label>
        </div>
    }
}
