//! User grid and cards.

use leptos::prelude::*;

use crate::app::DirectoryContext;
use crate::config::text;
use crate::models::DirectoryEntry;

stylance::import_crate_style!(css, "src/components/directory/grid.module.css");

/// Grid of the entries matching the current search term.
///
/// Keyed by user id, so cards that stay visible across keystrokes are kept
/// and only newly shown cards play the reveal animation.
#[component]
pub fn UserGrid() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    view! {
        <div class=css::grid role="list" aria-label="GitHub users">
            <For
                each=move || ctx.visible.get()
                key=|user| user.id
                children=move |user| view! { <UserCard user=user /> }
            />
        </div>
    }
}

/// A single user card. Clicking it opens the detail overlay.
#[component]
pub fn UserCard(user: DirectoryEntry) -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    let id = user.id;
    let handle_click = move |_: leptos::ev::MouseEvent| ctx.select(id);
    let alt = user.avatar_alt().to_string();

    view! {
        <div
            class=css::card
            data-reveal="fade-up"
            role="listitem"
            tabindex="0"
            on:click=handle_click
        >
            <img src=user.avatar_url alt=alt class=css::avatar loading="lazy" />
            <p class=css::login>{user.login}</p>
            <p class=css::id>{format!("id no: {}", id)}</p>
            <a
                href=user.html_url
                class=css::link
                target="_blank"
                rel="noopener noreferrer"
            >
                {text::PROFILE_LINK}
            </a>
        </div>
    }
}
