//! Elegant Divider Component

use leptos::prelude::*;

/// Ornamental divider: rule, star, rule
#[component]
pub fn ElegantDivider(#[prop(optional)] wide: bool) -> impl IntoView {
    let class = if wide { "elegant-divider wide" } else { "elegant-divider" };
    view! {
        <div class=class>
            <div class="divider-rule"></div>
            <div class="divider-star">"✦"</div>
            <div class="divider-rule"></div>
        </div>
    }
}
