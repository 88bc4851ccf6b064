//! Participant-facing screens for each experiment phase.
//!
//! Participant copy is deliberately fixed Korean text: it is part of the
//! stimulus material and must read identically for every participant, so
//! it stays out of the localization layer. Screens reach the event loop
//! through the [`EventBridge`] context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::product_card::ProductCard;

use super::catalog::Product;
use super::config::{ButtonConfig, ProductRange};
use super::flow::{SessionSlot, SitePreference, SurveyRecord};
use super::observers::ScrollObserver;
use super::view::{EventBridge, ExperimentEvent};

const GIFT_BUDGET_OPTIONS: [&str; 5] = [
    "1만원 미만",
    "1만원~3만원",
    "3만원~5만원",
    "5만원~10만원",
    "10만원 이상",
];

const GENDER_OPTIONS: [&str; 3] = ["남성", "여성", "기타"];

#[component]
pub(super) fn SurveyScreen() -> Element {
    let bridge = use_context::<EventBridge>();
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut gift_budget = use_signal(String::new);

    let ready = !name().trim().is_empty()
        && !age().trim().is_empty()
        && !gender().is_empty()
        && !gift_budget().is_empty();

    rsx! {
        div { class: "card survey",
            header { class: "card__header",
                h1 { "설문조사" }
                p { "실험 시작 전 간단한 설문을 진행합니다" }
            }
            form {
                class: "card__body survey__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if ready {
                        bridge.send(ExperimentEvent::SurveySubmitted(SurveyRecord {
                            name: name().trim().to_string(),
                            age: age().trim().to_string(),
                            gender: gender(),
                            gift_budget: gift_budget(),
                        }));
                    }
                },

                div { class: "survey__field",
                    label { class: "survey__label",
                        "이름 "
                        span { class: "survey__required", "*" }
                    }
                    input {
                        r#type: "text",
                        class: "survey__input",
                        placeholder: "이름을 입력하세요",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "survey__field",
                    label { class: "survey__label",
                        "나이 "
                        span { class: "survey__required", "*" }
                    }
                    input {
                        r#type: "number",
                        class: "survey__input",
                        placeholder: "나이를 입력하세요",
                        min: "1",
                        max: "120",
                        value: "{age}",
                        oninput: move |evt| age.set(evt.value()),
                    }
                }

                div { class: "survey__field",
                    label { class: "survey__label",
                        "성별 "
                        span { class: "survey__required", "*" }
                    }
                    div { class: "survey__radio-row",
                        for option in GENDER_OPTIONS {
                            label { class: "survey__radio",
                                input {
                                    r#type: "radio",
                                    name: "gender",
                                    value: option,
                                    checked: gender() == option,
                                    onchange: move |_| gender.set(option.to_string()),
                                }
                                span { {option} }
                            }
                        }
                    }
                }

                div { class: "survey__field",
                    label { class: "survey__label",
                        "친구에게 선물할 때 주로 지출하는 금액대는 얼마인가요? "
                        span { class: "survey__required", "*" }
                    }
                    div { class: "survey__choices",
                        for option in GIFT_BUDGET_OPTIONS {
                            label {
                                class: if gift_budget() == option { "choice choice--selected" } else { "choice" },
                                input {
                                    r#type: "radio",
                                    name: "gift-budget",
                                    value: option,
                                    checked: gift_budget() == option,
                                    onchange: move |_| gift_budget.set(option.to_string()),
                                }
                                span { {option} }
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary survey__submit",
                    disabled: !ready,
                    "다음"
                }
            }
        }
    }
}

#[component]
pub(super) fn LandingScreen() -> Element {
    let bridge = use_context::<EventBridge>();

    rsx! {
        div { class: "card landing",
            header { class: "card__header",
                h1 { "Shopping Experiment" }
                p { "Select a session configuration to start" }
            }
            div { class: "card__body landing__buttons",
                for config in ButtonConfig::ALL {
                    button {
                        r#type: "button",
                        class: "landing__button",
                        onclick: {
                            let bridge = bridge.clone();
                            move |_| bridge.send(ExperimentEvent::ButtonSelected(config))
                        },
                        span { class: "landing__button-label", {config.label()} }
                        span { class: "landing__button-detail", {config.describe()} }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn SessionScreen(
    config: ButtonConfig,
    slot: SessionSlot,
    products: Vec<Product>,
) -> Element {
    let bridge = use_context::<EventBridge>();
    let mut confirming = use_signal(|| Option::<Product>::None);

    // Lives until this screen unmounts; the slot key on the component
    // forces a remount between sessions so no listener spans both.
    let _scroll_observer = use_hook(|| {
        let bridge = bridge.clone();
        Rc::new(ScrollObserver::install(move |depth_px| {
            bridge.send(ExperimentEvent::ScrollObserved { depth_px });
        }))
    });

    let click_bridge = bridge.clone();
    let end_bridge = bridge.clone();
    let confirm_bridge = bridge.clone();

    let title = shop_title(config.range);
    let progress = match slot {
        SessionSlot::First => "세션 1 / 2",
        SessionSlot::Second => "세션 2 / 2",
    };
    let count = products.len();

    let dialog = confirming().map(|product| {
        rsx! {
            ProductConfirmDialog {
                product,
                on_cancel: move |_| confirming.set(None),
                on_confirm: move |chosen: Product| {
                    confirming.set(None);
                    confirm_bridge.send(ExperimentEvent::ProductChosen(chosen));
                },
            }
        }
    });

    rsx! {
        div {
            class: "session",
            onclick: move |_| click_bridge.send(ExperimentEvent::ClickObserved),

            header { class: "session__header",
                div { class: "session__heading",
                    h1 { class: "session__title", {title} }
                    p { class: "session__progress", {progress} }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost session__end",
                    onclick: move |_| end_bridge.send(ExperimentEvent::EndRequested),
                    "실험 종료"
                }
            }

            if products.is_empty() {
                div { class: "session__empty", "상품을 찾을 수 없습니다. 다시 시도해주세요." }
            } else {
                div { class: "session__meta", "상품 {count}개" }
                div { class: "session__grid",
                    for product in products.iter() {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            mode: config.mode,
                            on_select: move |chosen: Product| confirming.set(Some(chosen)),
                        }
                    }
                }
            }

            {dialog}
        }
    }
}

#[component]
pub(super) fn PostSurveyScreen() -> Element {
    let bridge = use_context::<EventBridge>();
    let mut preference = use_signal(|| Option::<SitePreference>::None);
    let ready = preference().is_some();

    rsx! {
        div { class: "card post-survey",
            header { class: "card__header",
                h1 { "사후 설문조사" }
                p { "실험에 참여해주셔서 감사합니다" }
            }
            form {
                class: "card__body post-survey__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Some(choice) = preference() {
                        bridge.send(ExperimentEvent::PreferenceSubmitted(choice));
                    }
                },

                div { class: "survey__field",
                    label { class: "survey__label",
                        "선택하는데 어느 쪽의 웹사이트가 더 편리했나요? "
                        span { class: "survey__required", "*" }
                    }
                    div { class: "survey__choices",
                        for option in [SitePreference::Bread, SitePreference::Fruit] {
                            label {
                                class: if preference() == Some(option) { "choice choice--selected" } else { "choice" },
                                input {
                                    r#type: "radio",
                                    name: "preference",
                                    value: option.as_str(),
                                    checked: preference() == Some(option),
                                    onchange: move |_| preference.set(Some(option)),
                                }
                                span { class: "choice__strong", {option.as_str()} }
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary post-survey__submit",
                    disabled: !ready,
                    "완료"
                }
            }
        }
    }
}

#[component]
fn ProductConfirmDialog(
    product: Product,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<Product>,
) -> Element {
    let name = product.name.clone();
    let description = product.description.clone();

    rsx! {
        // Dialog clicks stay out of the session click counter.
        div { class: "dialog-overlay", onclick: move |evt| evt.stop_propagation(),
            div { class: "dialog",
                button {
                    r#type: "button",
                    class: "dialog__close",
                    aria_label: "닫기",
                    onclick: move |_| on_cancel.call(()),
                    "✕"
                }
                h3 { class: "dialog__title", "{name}" }
                p { class: "dialog__description", "{description}" }
                p { class: "dialog__question", "이 상품을 선택하시겠습니까?" }
                div { class: "dialog__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_cancel.call(()),
                        "아니요"
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| on_confirm.call(product.clone()),
                        "예"
                    }
                }
            }
        }
    }
}

fn shop_title(range: ProductRange) -> &'static str {
    match range {
        ProductRange::Range1To50 => "빵 쇼핑몰",
        ProductRange::Range51To100 => "과일 쇼핑몰",
    }
}
