//! Menu Section Component
//!
//! A titled group of expandable cards. The section latches once it scrolls
//! into view, then its cards reveal staggered by index. At most one card is
//! expanded at a time.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{transition_style, use_reveal};

use crate::components::MenuItemCard;
use crate::config::{section_gate, SECTION_TIMING};
use crate::expansion::Expansion;
use crate::models::MenuSection;

#[component]
pub fn MenuSectionView(section: &'static MenuSection) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, section_gate());
    let (expansion, set_expansion) = signal(Expansion::default());

    let cards = section
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let expanded = Memo::new(move |_| expansion.get().is_expanded(index));
            let on_toggle = Callback::new(move |_: ()| {
                set_expansion.update(|state| {
                    state.toggle(index);
                    log::debug!("[MENU] {}: expanded {:?}", section.title, state.expanded());
                });
            });
            view! {
                <MenuItemCard
                    index=index
                    item=item
                    expanded=expanded
                    revealed=revealed
                    on_toggle=on_toggle
                />
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=container
            class="menu-section reveal"
            class:revealed=move || revealed.get()
            style=transition_style(SECTION_TIMING.step, SECTION_TIMING.duration)
        >
            <h3 class="menu-section-title">{section.title.as_str()}</h3>

            {(!section.offers.is_empty()).then(|| view! {
                <div class="menu-offers">
                    {section
                        .offers
                        .iter()
                        .map(|offer| view! { <span class="menu-offer">{offer.as_str()}</span> })
                        .collect_view()}
                </div>
            })}

            <div class="menu-card-grid">{cards}</div>
        </div>
    }
}
