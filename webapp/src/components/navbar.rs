use dioxus::prelude::*;

use content::render::TextSlot;
use content::{Language, Section};

use crate::common::{self, window};
use crate::state::use_site_state;

// fallback nav labels, shown until the bundles arrive
const NAV_LABELS: [(Section, TextSlot, &str); 3] = [
    (Section::Home, TextSlot::NavHome, "Início"),
    (Section::About, TextSlot::NavAbout, "Sobre"),
    (Section::Projects, TextSlot::NavProjects, "Projetos"),
];

#[derive(Clone, PartialEq, Props)]
struct NavAnchorProps {
    section: Section,
    label: String,
}

#[component]
fn NavAnchor(props: NavAnchorProps) -> Element {
    let mut state = use_site_state();

    let section = props.section;
    let label = props.label;
    let active = (state.active_section)() == section;

    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: format!("#{}", section.anchor()),
            onclick: move |event| {
                event.prevent_default();
                window::scroll_to_section(section);
                state.activate_section(section);
            },
            "{label}"
        }
    }
}

#[component]
fn LanguageToggle() -> Element {
    let mut state = use_site_state();
    let language = state.language;

    rsx! {
        div { class: "language-toggle",
            button {
                class: if language() == Language::Pt { "lang-button active" } else { "lang-button" },
                onclick: move |_| state.set_language(Language::Pt),
                "PT"
            }
            button {
                class: if language() == Language::En { "lang-button active" } else { "lang-button" },
                onclick: move |_| state.set_language(Language::En),
                "EN"
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut state = use_site_state();
    let theme = state.theme;

    rsx! {
        button {
            class: "theme-toggle",
            onclick: move |_| state.toggle_theme(),
            img {
                class: "theme-icon",
                src: common::theme_icon_link(theme()),
                alt: common::theme_icon_label(theme()),
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let state = use_site_state();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                nav { class: "nav-links",
                    for (section , slot , fallback) in NAV_LABELS {
                        NavAnchor { section, label: state.text(slot, fallback) }
                    }
                }
                div { class: "nav-controls",
                    LanguageToggle {}
                    ThemeToggle {}
                }
            }
        }
    }
}
