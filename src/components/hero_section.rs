//! Hero Section Component
//!
//! Full-height landing banner. Its elements fade in one after another on
//! mount, and the call to action smooth-scrolls down to the menu gallery.

use leptos::prelude::*;
use leptos_reveal::{scroll_to_anchor, transition_style};
use web_sys::MouseEvent;

use crate::config::{HERO_DELAYS, HERO_DURATION, HERO_FRAME_DELAYS, HERO_FRAME_DURATION};
use crate::context::use_site;

#[component]
pub fn HeroSection() -> impl IntoView {
    let site = use_site();
    let content = &site.catalog.site;
    let hero = &content.hero;
    let anchor = content.gallery.anchor.as_str();

    // Flip on the first frame so the transitions start from the hidden state
    let (entered, set_entered) = signal(false);
    request_animation_frame(move || set_entered.set(true));

    let staged = |step: usize| transition_style(HERO_DELAYS[step], HERO_DURATION);
    let framed = |step: usize| transition_style(HERO_FRAME_DELAYS[step], HERO_FRAME_DURATION);

    let on_cta = move |ev: MouseEvent| {
        ev.prevent_default();
        if !scroll_to_anchor(anchor) {
            log::warn!("[HERO] No element with id `{}` to scroll to", anchor);
        }
    };

    let tagline = hero
        .tagline
        .iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {(i > 0).then(|| view! { <br class="tagline-break" /> })}
                {line.as_str()}
            }
        })
        .collect_view();

    view! {
        <div class="hero">
            <div class="hero-background reveal-zoom" class:revealed=move || entered.get()>
                <img src=hero.background.as_str() alt=hero.background_alt.as_str() class="hero-image" />
                <div class="hero-shade"></div>
            </div>

            // Decorative frames
            <div class="hero-frame outer reveal" class:revealed=move || entered.get() style=framed(0)></div>
            <div class="hero-frame inner reveal" class:revealed=move || entered.get() style=framed(1)></div>

            <div class="hero-content">
                <h1 class="hero-brand reveal" class:revealed=move || entered.get() style=staged(0)>
                    {content.brand.as_str()}
                </h1>

                <div class="hero-divider reveal" class:revealed=move || entered.get() style=staged(1)>
                    <div class="divider-rule"></div>
                    <div class="divider-star">"✦"</div>
                    <div class="divider-rule"></div>
                </div>

                <p class="hero-established reveal" class:revealed=move || entered.get() style=staged(2)>
                    {hero.established.as_str()}
                </p>

                <p class="hero-tagline reveal" class:revealed=move || entered.get() style=staged(3)>
                    {tagline}
                </p>

                <div class="hero-cta reveal" class:revealed=move || entered.get() style=staged(4)>
                    <a href=format!("#{}", anchor) class="hero-cta-link" on:click=on_cta>
                        {hero.cta_label.as_str()}
                    </a>
                </div>

                <div class="hero-scroll-indicator">
                    <p class="hero-scroll-label">{hero.scroll_label.as_str()}</p>
                    <div class="hero-scroll-line"></div>
                </div>
            </div>
        </div>
    }
}
