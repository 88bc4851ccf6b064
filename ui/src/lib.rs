//! Shared UI crate for Priceframe. Most cross-platform logic and views live here.

pub mod core;
pub mod experiment;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Product tile with the two pricing layouts (components/product_card.rs)
    pub mod product_card;
    pub use product_card::ProductCard;
}
