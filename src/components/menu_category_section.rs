//! Menu Category Section Component
//!
//! Gallery of menu categories on the landing page. Cards cascade in once the
//! gallery scrolls into view.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{stagger_delay, transition_style, use_reveal};
use leptos_router::components::A;

use crate::config::{gallery_gate, GALLERY_TIMING, SECTION_TIMING};
use crate::context::use_site;
use crate::components::ElegantDivider;
use crate::labels;
use crate::models::MenuCategory;

#[component]
pub fn MenuCategorySection() -> impl IntoView {
    let site = use_site();
    let gallery = &site.catalog.site.gallery;

    let container = NodeRef::<html::Div>::new();
    let revealed = use_reveal(container, gallery_gate());

    view! {
        <section id=gallery.anchor.as_str() class="menu-gallery">
            <div class="texture-overlay"></div>
            <ElegantDivider wide=true />

            <div node_ref=container>
                <div
                    class="section-heading reveal"
                    class:revealed=move || revealed.get()
                    style=transition_style(SECTION_TIMING.step, SECTION_TIMING.duration)
                >
                    <h2 class="section-title">{gallery.heading.as_str()}</h2>
                    <p class="section-subtitle">{gallery.subheading.as_str()}</p>
                </div>

                <div class="category-grid">
                    {gallery
                        .categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let available = site.catalog.page_for(category).is_some();
                            view! { <CategoryCard index=index category=category available=available revealed=revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>

            <ElegantDivider wide=true />
        </section>
    }
}

/// One gallery card linking to its menu page
#[component]
fn CategoryCard(
    index: usize,
    category: &'static MenuCategory,
    /// Whether the category's menu page ships with the site
    available: bool,
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let class = if available { "category-card reveal" } else { "category-card reveal unavailable" };
    let style = transition_style(
        stagger_delay(index, GALLERY_TIMING.step),
        GALLERY_TIMING.duration,
    );

    view! {
        <A href=category.link.as_str()>
            <div class=class class:revealed=move || revealed.get() style=style>
                <img src=category.image.as_str() alt=category.title.as_str() class="category-image" />
                <div class="category-shade"></div>
                <div class="corner-accent top-left"></div>
                <div class="corner-accent bottom-right"></div>

                <div class="category-content">
                    <div>
                        <span class="category-index">{format!("{:02}", index + 1)}</span>
                        <h3 class="category-title">{category.title.as_str()}</h3>
                        <div class="category-rule"></div>
                    </div>
                    <div>
                        <p class="category-description">{category.description.as_str()}</p>
                        <span class="category-explore">{labels::EXPLORE}</span>
                    </div>
                </div>
            </div>
        </A>
    }
}
