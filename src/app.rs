//! Tangerino Frontend App
//!
//! Router shell: landing page plus one menu page per bundled category.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::catalog::catalog;
use crate::components::{HeroSection, LoadError, MenuCategorySection, MenuListView, NotFound};
use crate::context::{use_site, SiteContext};

#[component]
pub fn App() -> impl IntoView {
    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("[APP] Menu catalog failed to load: {}", err);
            return view! { <LoadError message=err.to_string() /> }.into_any();
        }
    };
    log::info!("[APP] Loaded {} menu pages", catalog.pages().len());

    // Provide context to all children
    provide_context(SiteContext::new(catalog));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/es") view=HomePage />
                <Route path=path!("/es/menu/:category") view=MenuPageRoute />
            </Routes>
        </Router>
    }
    .into_any()
}

/// Landing page: hero banner, then the category gallery
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <MenuCategorySection />
    }
}

/// Menu page for the `:category` route segment
#[component]
fn MenuPageRoute() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();

    move || {
        let slug = params.read().get("category").unwrap_or_default();
        match site.catalog.page(&slug) {
            Ok(page) => view! { <MenuListView page=page /> }.into_any(),
            Err(err) => {
                log::warn!("[APP] {}", err);
                view! { <NotFound /> }.into_any()
            }
        }
    }
}
