use dioxus::prelude::*;

use crate::components::slideshow::ProjectSlideshow;
use crate::components::text::Bilingual;

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "projects-title",
                Bilingual { pt: "Projetos", en: "Projects" }
            }
            ProjectSlideshow {}
        }
    }
}
