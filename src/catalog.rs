//! Menu Catalog
//!
//! Site content and menu pages bundled into the binary as JSON.
//! Parsed and validated once, on first access.

use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::models::{MenuCategory, MenuPage, SiteContent};

const SITE_JSON: &str = include_str!("../data/site.json");

/// (slug, json) of every menu page that ships with the site
const BUNDLED_PAGES: &[(&str, &str)] = &[
    ("cocktails", include_str!("../data/es/cocktails.json")),
    ("tortillas", include_str!("../data/es/tortillas.json")),
];

static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("page registered as `{registered}` declares slug `{declared}`")]
    SlugMismatch { registered: String, declared: String },
    #[error("page `{0}` is registered twice")]
    DuplicateSlug(String),
    #[error("section `{section}` of page `{page}` has no items")]
    EmptySection { page: String, section: String },
    #[error("no menu page `{0}`")]
    UnknownPage(String),
}

#[derive(Debug)]
pub struct Catalog {
    pub site: SiteContent,
    pages: Vec<MenuPage>,
}

impl Catalog {
    /// Parse and validate site content plus (slug, json) page sources
    pub fn from_sources(site_json: &str, pages: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let site: SiteContent = serde_json::from_str(site_json).map_err(|source| CatalogError::Parse {
            what: "site content".to_string(),
            source,
        })?;

        let mut seen = HashSet::new();
        let mut parsed = Vec::with_capacity(pages.len());
        for (slug, json) in pages {
            if !seen.insert(*slug) {
                return Err(CatalogError::DuplicateSlug(slug.to_string()));
            }
            let page: MenuPage = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                what: format!("menu page `{}`", slug),
                source,
            })?;
            validate_page(slug, &page)?;
            parsed.push(page);
        }

        Ok(Self { site, pages: parsed })
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_sources(SITE_JSON, BUNDLED_PAGES)
    }

    pub fn pages(&self) -> &[MenuPage] {
        &self.pages
    }

    pub fn page(&self, slug: &str) -> Result<&MenuPage, CatalogError> {
        self.pages
            .iter()
            .find(|page| page.slug == slug)
            .ok_or_else(|| CatalogError::UnknownPage(slug.to_string()))
    }

    /// Menu page behind a gallery card, if it ships with the site
    pub fn page_for(&self, category: &MenuCategory) -> Option<&MenuPage> {
        self.page(category.slug()).ok()
    }
}

fn validate_page(registered: &str, page: &MenuPage) -> Result<(), CatalogError> {
    if page.slug != registered {
        return Err(CatalogError::SlugMismatch {
            registered: registered.to_string(),
            declared: page.slug.clone(),
        });
    }
    if let Some(section) = page.sections.iter().find(|s| s.items.is_empty()) {
        return Err(CatalogError::EmptySection {
            page: page.slug.clone(),
            section: section.title.clone(),
        });
    }
    Ok(())
}

/// The bundled catalog, loaded on first call
pub fn catalog() -> Result<&'static Catalog, &'static CatalogError> {
    CATALOG.get_or_init(Catalog::bundled).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "slug": "tapas",
        "title": "Tapas y Entrantes",
        "sections": [
            {"title": "TAPAS", "items": [
                {"name": "PAN CON TOMATE", "description": "Pan tostado", "price": 40}
            ]}
        ]
    }"#;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = catalog().expect("bundled catalog should load");
        assert_eq!(catalog.site.brand, "TANGERINO");
        assert_eq!(catalog.site.gallery.categories.len(), 10);
        assert_eq!(catalog.pages().len(), BUNDLED_PAGES.len());
    }

    #[test]
    fn test_cocktails_page() {
        let page = catalog().unwrap().page("cocktails").unwrap();
        let titles: Vec<_> = page.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["CÓCTELES SIGNATURE", "MOCKTAILS", "SHOTS", "AGUAS Y REFRESCOS"]);
        assert!(page.notice.is_some());

        let shots = &page.sections[2];
        assert_eq!(shots.offers, ["5 POR 180", "10 POR 300"]);
        let rmilat = shots.items.iter().find(|i| i.name == "RMILAT").unwrap();
        assert_eq!(rmilat.price, None);
        assert_eq!(rmilat.price_label(), crate::labels::PRICE_ON_REQUEST);
    }

    #[test]
    fn test_tortillas_page_order() {
        let page = catalog().unwrap().page("tortillas").unwrap();
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].items[0].name, "TORTILLA ESPAÑOLA CON CHORIZO");
        assert_eq!(page.sections[1].items.len(), 8);
        assert!(page.sections.iter().flat_map(|s| &s.items).all(|i| i.price.is_some()));
    }

    #[test]
    fn test_categories_resolve_to_bundled_pages() {
        let catalog = catalog().unwrap();
        let resolved: Vec<_> = catalog
            .site
            .gallery
            .categories
            .iter()
            .filter_map(|c| catalog.page_for(c).map(|p| p.slug.as_str()))
            .collect();
        assert_eq!(resolved, ["cocktails", "tortillas"]);
    }

    #[test]
    fn test_unknown_page() {
        let err = catalog().unwrap().page("champagne").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPage(ref s) if s == "champagne"));
    }

    #[test]
    fn test_from_sources_validation() {
        let ok = Catalog::from_sources(SITE_JSON, &[("tapas", PAGE)]).unwrap();
        assert_eq!(ok.page("tapas").unwrap().sections[0].items[0].price, Some(40));

        let err = Catalog::from_sources(SITE_JSON, &[("paellas", PAGE)]).unwrap_err();
        assert!(matches!(err, CatalogError::SlugMismatch { .. }));

        let err = Catalog::from_sources(SITE_JSON, &[("tapas", PAGE), ("tapas", PAGE)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));

        let empty = r#"{"slug": "tapas", "title": "T", "sections": [{"title": "VACÍA", "items": []}]}"#;
        let err = Catalog::from_sources(SITE_JSON, &[("tapas", empty)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySection { ref section, .. } if section == "VACÍA"));
    }

    #[test]
    fn test_parse_errors() {
        let err = Catalog::from_sources("{", &[]).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse site content"));

        let err = Catalog::from_sources(SITE_JSON, &[("tapas", "[]")]).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { ref what, .. } if what == "menu page `tapas`"));
    }
}
