//! Status Pages
//!
//! Not-found and load-failure views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::labels;

/// Shown for unknown routes and menu pages that do not ship yet
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="status-page">
            <h2 class="status-title">{labels::NOT_FOUND_TITLE}</h2>
            <p class="status-body">{labels::NOT_FOUND_BODY}</p>
            <A href="/#menu">
                <span class="status-link">{labels::BACK_TO_MENU}</span>
            </A>
        </section>
    }
}

/// Shown instead of the whole site when the bundled catalog is invalid
#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    let recent = rolling_logger::recent().join("\n");
    view! {
        <section class="status-page error">
            <h2 class="status-title">{labels::LOAD_ERROR_TITLE}</h2>
            <pre class="status-body">{message}</pre>
            <pre class="status-log">{recent}</pre>
        </section>
    }
}
