use dioxus::prelude::*;

use content::markup::{Segment, bold_segments, label_segments};
use content::render::{RichSlot, SkillArea, TextSlot};

use crate::components::text::Segmented;
use crate::state::{SiteState, use_site_state};

const FALLBACK_TITLE: &str = "Sobre mim";
const FALLBACK_SKILLSET_TITLE: &str = "Ferramentas e habilidades";

const FALLBACK_BIO: [&str; 2] = [
    "Olá! Eu sou a **Marina Duarte**, designer multidisciplinar apaixonada por transformar ideias em experiências visuais.",
    "Quando não estou desenhando, estou explorando **modelagem 3D**, editando vídeo ou prototipando pequenos jogos.",
];

const FALLBACK_SKILLS: [(SkillArea, &str); 5] = [
    (SkillArea::Design, "Design: Photoshop, Illustrator e Figma"),
    (SkillArea::Video, "Vídeo: Premiere e After Effects"),
    (SkillArea::ThreeD, "3D: Blender e Substance Painter"),
    (SkillArea::Games, "Jogos: Unity e Godot"),
    (SkillArea::Development, "Desenvolvimento: HTML, CSS e JavaScript"),
];

// Resolve one rich slot, running the fallback through the same markup
// rules the bundles get
fn rich_line(
    state: &SiteState,
    slot: RichSlot,
    fallback: &str,
    markup: fn(&str) -> Vec<Segment>,
) -> Vec<Segment> {
    state
        .plan
        .read()
        .as_ref()
        .and_then(|plan| plan.rich(slot))
        .map(<[Segment]>::to_vec)
        .unwrap_or_else(|| markup(fallback))
}

#[component]
pub fn AboutSection() -> Element {
    let state = use_site_state();

    let title = state.text(TextSlot::AboutTitle, FALLBACK_TITLE);
    let skillset_title = state.text(TextSlot::SkillsetTitle, FALLBACK_SKILLSET_TITLE);

    // paragraph count follows the loaded bundle, defaulting to the
    // built-in bio when nothing (or an empty list) has arrived
    let bio_len = state
        .plan
        .read()
        .as_ref()
        .map(|plan| plan.bio_len())
        .filter(|len| *len > 0)
        .unwrap_or(FALLBACK_BIO.len());

    rsx! {
        section { id: "about", class: "about",
            h2 { class: "about-title", "{title}" }
            div { class: "about-text",
                for idx in 0..bio_len {
                    p {
                        Segmented {
                            segments: rich_line(
                                &state,
                                RichSlot::Bio(idx),
                                FALLBACK_BIO.get(idx).copied().unwrap_or_default(),
                                bold_segments,
                            ),
                        }
                    }
                }
            }
            h3 { class: "skillset-title", "{skillset_title}" }
            ul { class: "skill-list",
                for (area , fallback) in FALLBACK_SKILLS {
                    li { class: "skill-category",
                        Segmented {
                            segments: rich_line(&state, RichSlot::Skill(area), fallback, label_segments),
                        }
                    }
                }
            }
        }
    }
}
