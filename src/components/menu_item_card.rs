//! Menu Item Card Component
//!
//! Single dish/drink card. Clicking toggles its long description; a card
//! that just expanded is scrolled to the middle of the viewport.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{scroll_into_view_centered, stagger_delay, transition_style};

use crate::config::CARD_TIMING;
use crate::expansion::should_scroll;
use crate::labels;
use crate::models::MenuItem;

#[component]
pub fn MenuItemCard(
    index: usize,
    item: &'static MenuItem,
    expanded: Memo<bool>,
    revealed: ReadSignal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let details = item.details();
    let has_details = item.has_details();

    // Scroll only on the collapsed -> expanded edge, not on every re-render
    Effect::new(move |previous: Option<bool>| {
        let now = expanded.get();
        if should_scroll(previous, now, has_details) {
            if let Some(el) = card.get_untracked() {
                scroll_into_view_centered(&el);
            }
        }
        now
    });

    let price_class = if item.price.is_none() { "menu-card-price on-request" } else { "menu-card-price" };
    let style = transition_style(stagger_delay(index, CARD_TIMING.step), CARD_TIMING.duration);

    view! {
        <div
            node_ref=card
            class="menu-card reveal"
            class:revealed=move || revealed.get()
            class:expanded=move || expanded.get()
            style=style
            on:click=move |_| on_toggle.run(())
        >
            <div class="corner-accent top-left"></div>
            <div class="corner-accent bottom-right"></div>

            <div class="menu-card-body">
                <div class="menu-card-header">
                    <h3 class="menu-card-name">{item.name.as_str()}</h3>
                    <span class=price_class>
                        {item.price_label()}
                    </span>
                </div>
                <div class="menu-card-rule"></div>
                <p class="menu-card-description">{item.description.as_str()}</p>

                {details.map(|text| view! {
                    <Show when=move || expanded.get()>
                        <div class="menu-card-details">
                            <p>{text}</p>
                        </div>
                    </Show>
                    <div class="menu-card-toggle">
                        <span>{move || if expanded.get() { labels::LESS } else { labels::DETAILS }}</span>
                        <svg
                            class=move || if expanded.get() { "menu-card-chevron rotated" } else { "menu-card-chevron" }
                            xmlns="http://www.w3.org/2000/svg"
                            width="12"
                            height="12"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                    </div>
                })}
            </div>
        </div>
    }
}
