//! UI Components
//!
//! Leptos components for the landing page and the menu pages.

mod elegant_divider;
mod hero_section;
mod menu_category_section;
mod menu_item_card;
mod menu_list_view;
mod menu_section_view;
mod status_page;

pub use elegant_divider::ElegantDivider;
pub use hero_section::HeroSection;
pub use menu_category_section::MenuCategorySection;
pub use menu_item_card::MenuItemCard;
pub use menu_list_view::MenuListView;
pub use menu_section_view::MenuSectionView;
pub use status_page::{LoadError, NotFound};
