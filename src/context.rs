//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;

/// Site-wide data provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Bundled site content and menu pages
    pub catalog: &'static Catalog,
}

impl SiteContext {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}

/// Get the site context provided by `App`
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
