//! Directory page shell.
//!
//! Switches on the load status: a loading line, the failure message, or the
//! header/search/grid/footer layout with the detail overlay on top.

use leptos::prelude::*;

use super::{DetailOverlay, SearchBar, UserGrid};
use crate::app::DirectoryContext;
use crate::config::{APP_TITLE, FOOTER_TEXT, text};
use crate::models::LoadStatus;

stylance::import_crate_style!(css, "src/components/directory/page.module.css");

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    view! {
        {move || match ctx.status.get() {
            LoadStatus::Loading => view! {
                <div class=css::centered aria-busy="true">{text::LOADING}</div>
            }
            .into_any(),
            LoadStatus::Failed(message) => view! {
                <div class=format!("{} {}", css::centered, css::error) role="alert">
                    {message}
                </div>
            }
            .into_any(),
            LoadStatus::Ready => view! { <DirectoryLayout /> }.into_any(),
        }}
    }
}

#[component]
fn DirectoryLayout() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    let has_results = Signal::derive(move || ctx.visible.with(|v| !v.is_empty()));
    let has_selection = Signal::derive(move || ctx.selection.with(Option::is_some));

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::title>{APP_TITLE}</h1>
            </header>

            <section class=css::content>
                <SearchBar />
                <Show
                    when=move || has_results.get()
                    fallback=|| view! { <p class=css::empty>{text::NO_RESULTS}</p> }
                >
                    <UserGrid />
                </Show>
            </section>

            <footer class=css::footer>
                <p>{FOOTER_TEXT}</p>
            </footer>

            <Show when=move || has_selection.get()>
                <DetailOverlay />
            </Show>
        </div>
    }
}
