use dioxus::prelude::*;

use content::render::TextSlot;

use crate::common;
use crate::state::use_site_state;

const FALLBACK_COPYRIGHT: &str = "© 2026 Marina Duarte";

#[component]
pub fn SiteFooter() -> Element {
    let state = use_site_state();
    let theme = state.theme;

    let copyright = state.text(TextSlot::FooterCopyright, FALLBACK_COPYRIGHT);

    rsx! {
        footer { class: "site-footer",
            div { class: "social-links",
                for link in common::SOCIAL_LINKS.iter() {
                    a {
                        class: "social-link",
                        href: link.href,
                        target: "_blank",
                        rel: "noopener",
                        img {
                            class: "social-icon",
                            src: common::social_icon_link(link, theme()),
                            alt: link.name,
                        }
                    }
                }
            }
            p { class: "footer-copyright", "{copyright}" }
        }
    }
}
