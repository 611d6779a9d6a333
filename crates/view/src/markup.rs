//! Reference markup of the company site
//!
//! Builds the document the controllers are wired against: header with
//! navigation, language switcher and theme toggles, the five pages, the
//! catalog video modal and the footer. Translatable text starts out in
//! English and carries its `data-lang-key`.

use crate::cards::CARD_LIST_CLASS;
use crate::hero::{
    DETAILS_CLASS, HERO_SECTION_ID, IMAGE_CLASS, NAME_ID, PRODUCT_ATTR, SELECTOR_CONTAINER_CLASS,
};
use crate::i18n::TranslationTable;
use crate::language::{BUTTON_CLASS, INDICATOR_ID, LANG_OPTION_ATTR, SWITCHER_CLASS};
use crate::modal::{CLOSE_BUTTON_ID, MODAL_ID, OPEN_BUTTON_ID, VIDEO_ID};
use crate::navigation::{
    ACTIVE_CLASS, HEADER_CLASS, NAV_CONTAINER_CLASS, NAV_LINK_CLASS, PAGE_ATTR, PAGE_CLASS,
    SCROLL_ATTR,
};
use crate::tabs::{CONTENT_CLASS, TAB_ATTR, TABS_CLASS};
use crate::theme::TOGGLE_CLASS;
use mohajer_core::{Language, Page, ProductKey};
use mohajer_dom::{Document, El};

const PRODUCT_COUNT: usize = 8;
const DEPARTMENTS: [&str; 3] = ["steel", "petro", "food"];
const CONTACT_EMAIL: &str = "Mohajersteelco@gmail.com";

/// Element whose text is the English translation of `key`
fn t(tag: &str, key: &str) -> El {
    let text = TranslationTable::builtin()
        .lookup(Language::En, key)
        .unwrap_or(key);
    El::new(tag).i18n(key, text)
}

fn nav_link(page: Page, scroll: Option<&str>, key: &str) -> El {
    let link = t("a", key)
        .class(NAV_LINK_CLASS)
        .attr("href", "#")
        .attr(PAGE_ATTR, page.as_str());
    match scroll {
        Some(target) => link.attr(SCROLL_ATTR, target),
        None => link,
    }
}

fn page(page: Page) -> El {
    let display = if page.is_home() { "block" } else { "none" };
    El::new("div")
        .id(&page.container_id())
        .class(PAGE_CLASS)
        .style("display", display)
}

/// The whole site as a fresh document
pub fn site_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    doc.set_attr(root, "lang", Language::En.code());
    doc.set_attr(root, "dir", Language::En.direction().as_str());

    let body = doc.body();
    doc.append(body, header());
    doc.append(
        body,
        El::new("main")
            .child(home_page())
            .child(products_page())
            .child(departments_page())
            .child(about_page())
            .child(contact_page()),
    );
    doc.append(body, video_modal());
    doc.append(body, footer());
    doc
}

// ============================================================================
// Header
// ============================================================================

fn header() -> El {
    let links = [
        (Page::Home, "nav_home"),
        (Page::Products, "nav_products"),
        (Page::Departments, "nav_departments"),
        (Page::About, "nav_about"),
        (Page::Contact, "nav_contact"),
    ];
    let nav = El::new("ul").class(NAV_CONTAINER_CLASS).children(
        links.iter().enumerate().map(|(i, &(page, key))| {
            let link = nav_link(page, None, key);
            El::new("li").child(if i == 0 { link.class(ACTIVE_CLASS) } else { link })
        }),
    );

    El::new("header")
        .class(HEADER_CLASS)
        .child(
            El::new("a")
                .class("logo")
                .class(NAV_LINK_CLASS)
                .attr("href", "#")
                .attr(PAGE_ATTR, Page::Home.as_str())
                .text("Mohajer"),
        )
        .child(El::new("nav").child(nav))
        .child(language_switcher())
        .child(theme_toggle("desktop"))
        .child(
            El::new("div")
                .class("mobile-menu")
                .child(theme_toggle("mobile")),
        )
}

fn language_switcher() -> El {
    let options = Language::ALL.iter().map(|lang| {
        El::new("li").child(
            El::new("a")
                .attr("href", "#")
                .attr(LANG_OPTION_ATTR, lang.code())
                .text(&lang.indicator()),
        )
    });
    El::new("div")
        .class(SWITCHER_CLASS)
        .child(
            El::new("button")
                .class(BUTTON_CLASS)
                .attr("aria-expanded", "false")
                .child(
                    El::new("span")
                        .id(INDICATOR_ID)
                        .text(&Language::En.indicator()),
                ),
        )
        .child(El::new("ul").class("language-menu").children(options))
}

fn theme_toggle(place: &str) -> El {
    El::new("label").class("theme-switch").child(
        El::new("input")
            .id(&format!("theme-toggle-{}", place))
            .class(TOGGLE_CLASS)
            .attr("type", "checkbox"),
    )
}

// ============================================================================
// Pages
// ============================================================================

fn home_page() -> El {
    page(Page::Home)
        .child(hero())
        .child(
            El::new("section")
                .id("products-section")
                .child(t("h2", "products_title").class("section-title"))
                .child(product_cards()),
        )
        .child(
            El::new("section")
                .id("departments-section")
                .class("animate-on-scroll")
                .child(t("h2", "departments_title").class("section-title"))
                .children(DEPARTMENTS.iter().map(|dept| {
                    El::new("div")
                        .class("dept-card")
                        .child(t("h3", &format!("dept_{}_title", dept)))
                        .child(t("p", &format!("dept_{}_desc", dept)))
                        .child(nav_link(Page::Departments, None, "know_more").class("btn"))
                })),
        )
        .child(
            El::new("section")
                .class("why-us")
                .class("animate-on-scroll")
                .child(
                    El::new("h2")
                        .child(t("span", "reasons_prefix"))
                        .child(t("span", "reasons_suffix").class("highlight")),
                )
                .children((1..=3).map(|i| {
                    El::new("div")
                        .class("reason")
                        .child(t("h3", &format!("reason{}_title", i)))
                        .child(t("p", &format!("reason{}_desc", i)))
                })),
        )
        .child(
            El::new("div")
                .class("catalog-cta")
                .child(t("button", "nav_catalog").id(OPEN_BUTTON_ID)),
        )
}

fn hero() -> El {
    let selectors = ProductKey::ALL.iter().map(|key| {
        let heading = t("h2", key.selector_key()).attr(PRODUCT_ATTR, key.as_str());
        if *key == ProductKey::default() {
            heading.class(ACTIVE_CLASS)
        } else {
            heading
        }
    });
    let images = ProductKey::ALL.iter().map(|key| {
        let image = El::new("img")
            .id(&key.image_id())
            .class(IMAGE_CLASS)
            .attr("src", &format!("assets/images/{}.png", key))
            .attr("alt", key.as_str());
        if *key == ProductKey::default() {
            image.class(ACTIVE_CLASS)
        } else {
            image
        }
    });

    El::new("section")
        .id(HERO_SECTION_ID)
        .child(El::new("div").class(SELECTOR_CONTAINER_CLASS).children(selectors))
        .child(El::new("div").class("product-images").children(images))
        .child(
            El::new("div")
                .class(DETAILS_CLASS)
                .child(t("h1", ProductKey::default().name_key()).id(NAME_ID))
                .child(nav_link(Page::Products, None, "view_details").class("btn")),
        )
}

fn product_cards() -> El {
    El::new("ul")
        .class(CARD_LIST_CLASS)
        .children((1..=PRODUCT_COUNT).map(|i| {
            El::new("li")
                .class("product-item")
                .child(
                    El::new("div")
                        .class("card-front")
                        .child(t("h3", &format!("product{}_title", i)))
                        .child(t("p", &format!("product{}_desc", i))),
                )
                .child(
                    El::new("div")
                        .class("card-back")
                        .child(t("h4", "specifications"))
                        .child(nav_link(Page::Products, None, "view_details")),
                )
        }))
}

fn products_page() -> El {
    page(Page::Products)
        .child(t("h1", "products_page_title").class("page-title"))
        .children((1..=PRODUCT_COUNT).map(|i| {
            El::new("article")
                .class("product-row")
                .class("animate-on-scroll")
                .child(t("h2", &format!("product{}_title", i)))
                .child(t("p", &format!("product{}_full_desc", i)))
                .child(
                    El::new("dl")
                        .class("analysis")
                        .child(t("dt", "analysis_grade"))
                        .child(t("dt", "analysis_size"))
                        .child(t("dt", "analysis_length")),
                )
                .child(
                    t("a", "request_quote")
                        .class("btn")
                        .attr("href", &format!("mailto:{}", CONTACT_EMAIL)),
                )
        }))
}

fn departments_page() -> El {
    let tabs = El::new("ul")
        .class(TABS_CLASS)
        .children(DEPARTMENTS.iter().enumerate().map(|(i, dept)| {
            let tab = t("li", &format!("dept_{}_title", dept)).attr(TAB_ATTR, dept);
            if i == 0 { tab.class(ACTIVE_CLASS) } else { tab }
        }));
    let panels = El::new("div")
        .class("dept-contents")
        .children(DEPARTMENTS.iter().enumerate().map(|(i, dept)| {
            let panel = El::new("div")
                .id(dept)
                .class(CONTENT_CLASS)
                .child(t("h2", &format!("dept_{}_title", dept)))
                .child(t("p", &format!("dept_{}_full_desc", dept)));
            if i == 0 { panel.class(ACTIVE_CLASS) } else { panel }
        }));

    page(Page::Departments)
        .child(t("h1", "departments_title").class("page-title"))
        .child(El::new("div").class("dept-tab-group").child(tabs).child(panels))
}

fn about_page() -> El {
    page(Page::About)
        .child(t("h1", "about_page_title").class("page-title"))
        .child(t("p", "about_subtitle").class("subtitle"))
        .child(
            El::new("section")
                .class("animate-on-scroll")
                .child(t("h2", "intro_title"))
                .child(t("p", "intro_text")),
        )
        .children((1..=2).map(|i| {
            El::new("div")
                .class("manager")
                .class("animate-on-scroll")
                .child(t("h3", &format!("manager{}_name", i)))
                .child(t("h4", &format!("manager{}_title", i)))
                .child(t("p", &format!("manager{}_desc", i)))
        }))
}

fn contact_page() -> El {
    let consultant = |who: &str| {
        El::new("div")
            .class("consultant")
            .child(t("h3", &format!("consultant_name_{}", who)))
            .child(t("p", &format!("consultant_title_{}", who)))
    };

    page(Page::Contact)
        .child(t("h1", "contact_page_title").class("page-title"))
        .child(
            El::new("div")
                .class("contact-card")
                .child(t("h3", "our_address"))
                .child(t("p", "address_detail")),
        )
        .child(
            El::new("div")
                .class("contact-card")
                .child(t("h3", "call_us"))
                .children((1..=3).map(|i| t("p", &format!("phone_detail_{}", i)))),
        )
        .child(
            El::new("div")
                .class("contact-card")
                .child(t("h3", "email_us"))
                .child(
                    t("a", "email_detail").attr("href", &format!("mailto:{}", CONTACT_EMAIL)),
                ),
        )
        .child(
            El::new("section")
                .class("price-inquiry")
                .child(t("h2", "price_inquiry_title"))
                .child(consultant("ali"))
                .child(consultant("hashem"))
                .child(
                    t("a", "request_quote_consultant")
                        .class("btn")
                        .attr("href", &format!("mailto:{}", CONTACT_EMAIL)),
                ),
        )
}

// ============================================================================
// Modal and Footer
// ============================================================================

fn video_modal() -> El {
    El::new("div")
        .id(MODAL_ID)
        .class("modal")
        .style("display", "none")
        .child(
            El::new("div")
                .class("modal-content")
                .child(El::new("span").id(CLOSE_BUTTON_ID).class("close-btn").text("×"))
                .child(
                    El::new("video")
                        .id(VIDEO_ID)
                        .attr("src", "assets/video/catalog.mp4")
                        .attr("controls", "")
                        .media(),
                ),
        )
}

fn footer() -> El {
    El::new("footer")
        .class("site-footer")
        .child(
            El::new("ul")
                .class(NAV_CONTAINER_CLASS)
                .child(El::new("li").child(nav_link(
                    Page::Home,
                    Some("products-section"),
                    "products_title",
                )))
                .child(El::new("li").child(nav_link(
                    Page::Home,
                    Some("departments-section"),
                    "departments_title",
                ))),
        )
        .child(
            t("a", "email_detail")
                .class("footer-email")
                .attr("href", &format!("mailto:{}", CONTACT_EMAIL)),
        )
}
