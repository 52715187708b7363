//! Menu Models
//!
//! Static site content and menu data, deserialized from the bundled JSON.

use serde::{Deserialize, Serialize};

use crate::labels;

/// A single dish or drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// None means price on request
    pub price: Option<u32>,
    /// Long-form description shown when the card is expanded
    #[serde(default)]
    pub details: Option<String>,
}

impl MenuItem {
    /// Text for the price slot of the card
    pub fn price_label(&self) -> String {
        match self.price {
            Some(amount) => amount.to_string(),
            None => labels::PRICE_ON_REQUEST.to_string(),
        }
    }

    /// Long description, if there is anything to show
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    pub fn has_details(&self) -> bool {
        self.details().is_some()
    }
}

/// Titled group of items, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    /// Bundle offers shown above the cards, e.g. "5 POR 180"
    #[serde(default)]
    pub offers: Vec<String>,
    pub items: Vec<MenuItem>,
}

/// Banner shown at the top of a menu page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    #[serde(default)]
    pub aside: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub notice: Option<Notice>,
    pub sections: Vec<MenuSection>,
}

/// Card in the landing page gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Route of the category's menu page
    pub link: String,
}

impl MenuCategory {
    /// Last path segment of the link, e.g. "cocktails" for "/es/menu/cocktails"
    pub fn slug(&self) -> &str {
        self.link.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub background: String,
    pub background_alt: String,
    pub established: String,
    pub tagline: Vec<String>,
    pub cta_label: String,
    pub scroll_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    /// Element id the hero call-to-action scrolls to
    pub anchor: String,
    pub heading: String,
    pub subheading: String,
    pub categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub gallery: GalleryContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(price: Option<u32>, details: Option<&str>) -> MenuItem {
        MenuItem {
            name: "RMILAT".to_string(),
            description: "Puré de Lichi, Menta, Gin Bombay, Vermut Rosado".to_string(),
            price,
            details: details.map(str::to_string),
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(make_item(Some(95), None).price_label(), "95");
        assert_eq!(make_item(None, None).price_label(), labels::PRICE_ON_REQUEST);
    }

    #[test]
    fn test_details() {
        assert!(!make_item(None, None).has_details());
        assert!(!make_item(None, Some("   ")).has_details());
        let item = make_item(None, Some("Un clásico local"));
        assert_eq!(item.details(), Some("Un clásico local"));
    }

    #[test]
    fn test_null_price_and_missing_details_deserialize() {
        let item: MenuItem = serde_json::from_str(
            r#"{"name": "KASBAH", "description": "Whisky Grants", "price": null}"#,
        )
        .unwrap();
        assert_eq!(item.price, None);
        assert_eq!(item.details, None);
    }

    #[test]
    fn test_category_slug() {
        let category = MenuCategory {
            id: "mains".to_string(),
            title: "Pescados y Carnes".to_string(),
            description: String::new(),
            image: "/mains.jpg".to_string(),
            link: "/es/menu/poissons".to_string(),
        };
        assert_eq!(category.slug(), "poissons");
    }
}
