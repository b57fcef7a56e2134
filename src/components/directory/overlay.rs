//! Detail overlay for the selected user.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DirectoryContext;
use crate::components::icons as ic;
use crate::config::text;

stylance::import_crate_style!(css, "src/components/directory/overlay.module.css");

/// Modal showing the selected entry. Renders nothing without a selection.
#[component]
pub fn DetailOverlay() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext must be provided at root");

    let on_close = move |_: leptos::ev::MouseEvent| ctx.clear_selection();

    view! {
        {move || ctx.selection.get().map(|user| {
            let label = format!("Details for {}", user.login);
            let alt = user.avatar_alt().to_string();
            view! {
                <div class=css::backdrop role="dialog" aria-modal="true" aria-label=label>
                    <div class=css::panel>
                        <button
                            class=css::closeButton
                            on:click=on_close
                            title="Close"
                            aria-label="Close details"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                        <div class=css::body>
                            <img src=user.avatar_url alt=alt class=css::avatar />
                            <p class=css::login>{user.login}</p>
                            <p class=css::id>{format!("ID: {}", user.id)}</p>
                            <a
                                href=user.html_url
                                class=css::link
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {text::PROFILE_LINK}
                                <span class=css::linkIcon aria-hidden="true">
                                    <Icon icon=ic::EXTERNAL_LINK />
                                </span>
                            </a>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
