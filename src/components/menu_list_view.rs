//! Menu List View Component
//!
//! A whole menu page: optional notice banner, then every section separated
//! by dividers. Each section owns its own reveal latch and expansion state.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{transition_style, use_reveal};
use leptos_router::components::A;

use crate::components::{ElegantDivider, MenuSectionView};
use crate::config::{notice_gate, SECTION_TIMING};
use crate::labels;
use crate::models::{MenuPage, Notice};

#[component]
pub fn MenuListView(page: &'static MenuPage) -> impl IntoView {
    log::debug!("[MENU] Rendering `{}` with {} sections", page.slug, page.sections.len());
    let last = page.sections.len().saturating_sub(1);

    view! {
        <section class="menu-page">
            <div class="texture-overlay"></div>
            <div class="menu-container">
                <header class="menu-page-header">
                    <A href="/#menu">
                        <span class="menu-back-link">{labels::BACK_TO_MENU}</span>
                    </A>
                    <h2 class="section-title">{page.title.as_str()}</h2>
                </header>

                {page.notice.as_ref().map(|notice| view! {
                    <NoticeBanner notice=notice />
                    <ElegantDivider />
                })}

                {page
                    .sections
                    .iter()
                    .enumerate()
                    .map(|(index, section)| view! {
                        <MenuSectionView section=section />
                        {(index < last).then(|| view! { <ElegantDivider /> })}
                    })
                    .collect_view()}
            </div>
            <ElegantDivider wide=true />
        </section>
    }
}

/// Page-level notice, e.g. classics available on request
#[component]
fn NoticeBanner(notice: &'static Notice) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, notice_gate());

    view! {
        <div
            node_ref=container
            class="menu-notice reveal"
            class:revealed=move || revealed.get()
            style=transition_style(SECTION_TIMING.step, SECTION_TIMING.duration)
        >
            <p class="panel-text">
                {notice.text.as_str()}
                {notice.aside.as_deref().map(|aside| view! { " " <span class="notice-aside">{aside}</span> })}
            </p>
        </div>
    }
}
