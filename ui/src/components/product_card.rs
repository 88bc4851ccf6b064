//! Product tile rendered inside the session grid.
//!
//! The two pricing layouts are the experimental manipulation, so their
//! structure is fixed: discount emphasis leads with a large red percentage
//! and keeps the final price subordinate; price emphasis leads with a
//! large red final price and tucks the percentage into a small chip. Both
//! show the same numbers, only the visual hierarchy differs.

use dioxus::prelude::*;

use crate::core::format;
use crate::experiment::catalog::Product;
use crate::experiment::config::DisplayMode;

#[component]
pub fn ProductCard(product: Product, mode: DisplayMode, on_select: EventHandler<Product>) -> Element {
    let original = format::format_won(product.original_price);
    let discounted = format::format_won(product.discounted_price);
    let percent = product.discount_percentage;
    let name = product.name.clone();

    let badge = if percent >= 50 {
        Some(("product-card__badge product-card__badge--deal", "HOT DEAL"))
    } else if product.rating >= 4.5 {
        Some(("product-card__badge product-card__badge--best", "BEST"))
    } else {
        None
    };

    let pricing = match mode {
        DisplayMode::DiscountEmphasis => rsx! {
            div { class: "product-card__pricing",
                div { class: "product-card__price-row",
                    span { class: "product-card__percent", "{percent}%" }
                    s { class: "product-card__original", "{original}" }
                }
                span { class: "product-card__final", "{discounted}" }
            }
        },
        DisplayMode::PriceEmphasis => rsx! {
            div { class: "product-card__pricing",
                div { class: "product-card__price-row",
                    span { class: "product-card__save", "Save {percent}%" }
                    s { class: "product-card__original", "{original}" }
                }
                span { class: "product-card__final product-card__final--lead", "{discounted}" }
            }
        },
    };

    rsx! {
        article { class: "product-card",
            if let Some((badge_class, badge_text)) = badge {
                span { class: "{badge_class}", "{badge_text}" }
            }
            button {
                r#type: "button",
                class: "product-card__select",
                onclick: move |_| on_select.call(product.clone()),
                h3 { class: "product-card__name", "{name}" }
                {pricing}
            }
        }
    }
}
