use dioxus::prelude::*;

use content::Section;
use content::render::TextSlot;

use crate::common::window;
use crate::state::use_site_state;

const FALLBACK_TITLE: &str = "Marina Duarte";
const FALLBACK_SUBTITLE: &str = "Design, vídeo e mundos interativos";
const FALLBACK_CTA: &str = "Ver projetos";

#[component]
pub fn HeroSection() -> Element {
    let mut state = use_site_state();

    let title = state.text(TextSlot::HeroTitle, FALLBACK_TITLE);
    let subtitle = state.text(TextSlot::HeroSubtitle, FALLBACK_SUBTITLE);
    let cta = state.text(TextSlot::HeroCta, FALLBACK_CTA);

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "portfolio-text", "{title}" }
                p { class: "subtitle-text", "{subtitle}" }
                a {
                    class: "btn btn-primary view-projects-btn",
                    href: "#projects",
                    onclick: move |event| {
                        event.prevent_default();
                        window::scroll_to_section(Section::Projects);
                        state.activate_section(Section::Projects);
                    },
                    "{cta}"
                }
            }
        }
    }
}
